//! Command-line driver for block selection, slicing, and inspection.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use clanblocks::{
    dump_blocks_json, find_transcripts, sample_block_indices, write_manifest, ClanFile,
    FfmpegExtractor, SliceConfig,
};

/// Command-line arguments for clanblocks
#[derive(Parser, Debug)]
#[command(name = "clanblocks")]
#[command(about = "Slice CLAN conversation blocks out of a paired audio recording")]
#[command(version)]
struct Args {
    /// Root directory the sliced clips are written under
    #[arg(long)]
    clip_dir: Option<PathBuf>,

    /// JSON config file with clip layout and target tiers
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Randomly sample blocks, keep the target-tier ones, write a manifest
    /// and a subset transcript
    Choose {
        /// CLAN transcript (.cha)
        #[arg(long)]
        transcript: PathBuf,

        /// Paired audio recording
        #[arg(long)]
        audio: PathBuf,

        /// Candidate blocks drawn before filtering
        #[arg(long, default_value = "30")]
        limit: usize,

        /// Keep blocks with more clips than this
        #[arg(long, default_value = "10")]
        min_clips: usize,

        /// Manifest destination; defaults to the transcript with a .csv extension
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Subset transcript destination; defaults to <stem>_selected.cha
        #[arg(long)]
        export: Option<PathBuf>,

        /// Seed for reproducible selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Slice blocks into per-clip audio files via ffmpeg
    Slice {
        /// CLAN transcript (.cha)
        #[arg(long)]
        transcript: PathBuf,

        /// Paired audio recording
        #[arg(long)]
        audio: PathBuf,

        /// Comma-separated 1-based block indices; all blocks when omitted
        #[arg(long, value_delimiter = ',')]
        blocks: Vec<usize>,
    },

    /// List transcripts under a corpus root (directories holding one .cha file)
    List {
        /// Corpus root to walk
        #[arg(long)]
        root: PathBuf,
    },

    /// Parse a transcript and dump its blocks as JSON
    Dump {
        /// CLAN transcript (.cha)
        #[arg(long)]
        transcript: PathBuf,

        /// Paired audio recording
        #[arg(long)]
        audio: PathBuf,

        /// JSON destination
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let _log_path = clanblocks::init_logger().ok();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SliceConfig::load(path)?,
        None => SliceConfig::default(),
    };
    if let Some(dir) = &args.clip_dir {
        config.clip_dir = dir.clone();
    }

    match args.command {
        Command::Choose {
            transcript,
            audio,
            limit,
            min_clips,
            manifest,
            export,
            seed,
        } => {
            let clan = ClanFile::parse(&transcript, &audio, &config)
                .with_context(|| format!("parsing {}", transcript.display()))?;

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let candidates = sample_block_indices(clan.num_blocks(), limit, &mut rng);

            let mut selected = Vec::new();
            for index in candidates {
                let block = clan.get_block(index)?;
                if block.clip_count() > min_clips && block.contains_target_tier {
                    selected.push(index);
                }
            }
            info!(
                "{}: selected {} of {} blocks",
                clan.file_name,
                selected.len(),
                clan.num_blocks()
            );

            let manifest = manifest.unwrap_or_else(|| transcript.with_extension("csv"));
            write_manifest(&manifest, &selected)?;

            let export = export.unwrap_or_else(|| {
                let stem = transcript
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                transcript.with_file_name(format!("{}_selected.cha", stem))
            });
            clan.export_subset(&export, &selected)?;
        }

        Command::Slice {
            transcript,
            audio,
            blocks,
        } => {
            let clan = ClanFile::parse(&transcript, &audio, &config)
                .with_context(|| format!("parsing {}", transcript.display()))?;
            let extractor = FfmpegExtractor::new(config.extractor_path.clone());

            let indices: Vec<usize> = if blocks.is_empty() {
                (1..=clan.num_blocks()).collect()
            } else {
                blocks
            };

            // A failed block is reported and skipped; later blocks still run.
            for index in indices {
                let block = clan.get_block(index)?;
                match clan.slice_block(block, &extractor) {
                    Ok(()) => info!("sliced block {} ({} clips)", index, block.clip_count()),
                    Err(e) => error!("block {}: {}", index, e),
                }
            }
        }

        Command::List { root } => {
            for path in find_transcripts(&root) {
                println!("{}", path.display());
            }
        }

        Command::Dump {
            transcript,
            audio,
            out,
        } => {
            let clan = ClanFile::parse(&transcript, &audio, &config)
                .with_context(|| format!("parsing {}", transcript.display()))?;
            dump_blocks_json(&out, clan.blocks())?;
            info!("wrote {} blocks to {}", clan.num_blocks(), out.display());
        }
    }

    Ok(())
}
