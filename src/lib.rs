//! Conversation-block parsing and audio clip slicing for CLAN transcripts.

mod clan_file;
mod config;
mod error;
mod export;
mod model;
mod parse;
mod paths;
mod selection;
mod slice;
mod timecode;

pub use clan_file::ClanFile;
pub use config::SliceConfig;
pub use error::{Error, Result};
pub use export::{dump_blocks_json, write_manifest};
pub use model::{Block, Clip};
pub use parse::{build_block, filter_conversations, link_block, split_conversations};
pub use paths::{block_dir, clip_path};
pub use selection::{find_transcripts, sample_block_indices};
pub use slice::{ClipExtractor, ExtractorError, FfmpegExtractor};
pub use timecode::{format_duration, milliseconds_to_interval};

fn log_dir_path() -> std::path::PathBuf {
    dirs::data_dir()
        .map(|d| d.join("clanblocks").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from(".").join("logs"))
}

/// Route `log` output to stdout and a log file under the platform data dir.
pub fn init_logger() -> std::result::Result<std::path::PathBuf, fern::InitError> {
    let log_dir = log_dir_path();
    std::fs::create_dir_all(&log_dir).ok();
    let log_file = log_dir.join("clanblocks.log");

    let format = |out: fern::FormatCallback<'_>, message: &std::fmt::Arguments<'_>, record: &log::Record| {
        out.finish(format_args!(
            "[{}][{}][{}][{:?}] {}",
            chrono::Local::now().format("%Y-%m-%d"),
            chrono::Local::now().format("%H:%M:%S"),
            record.target(),
            record.level(),
            message
        ))
    };

    fern::Dispatch::new()
        .format(format)
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .chain(fern::log_file(&log_file)?)
        .apply()?;

    Ok(log_file)
}
