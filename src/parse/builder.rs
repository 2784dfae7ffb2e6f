//! Build a block of clips from a filtered conversation group.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::SliceConfig;
use crate::error::{Error, Result};
use crate::model::{Block, Clip};
use crate::parse::lexer::CONTINUATION_MARK;
use crate::paths;
use crate::timecode;

lazy_static! {
    /// Inline interval marker: a millisecond pair fenced by `\x15` on both sides.
    static ref INTERVAL_RE: Regex = Regex::new("\u{15}\\d+_\\d+\u{15}").unwrap();
}

/// `<start>_<end>` to a millisecond pair. `None` when either side is absent
/// or does not parse.
fn parse_interval(raw: &str) -> Option<(i64, i64)> {
    let (start, end) = raw.split_once('_')?;
    Some((start.parse().ok()?, end.parse().ok()?))
}

/// Turn one filtered conversation group into a [`Block`] of [`Clip`]s.
///
/// A line without a usable interval marker fails the whole build with
/// [`Error::MissingInterval`] - a malformed transcript never yields a
/// partially timed block.
pub fn build_block(
    lines: &[String],
    source_file: &str,
    source_audio: &str,
    block_index: usize,
    config: &SliceConfig,
) -> Result<Block> {
    let mut clips = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        let ordinal = i + 1;
        // Chars 1..4 of the 4-char tier prefix; the leading `*` is skipped.
        let tier = line.get(1..4).unwrap_or("").to_string();
        let is_continuation = line.contains(CONTINUATION_MARK);

        let raw_interval = INTERVAL_RE
            .find(line)
            .map(|m| m.as_str().replace('\u{15}', ""))
            .unwrap_or_default();
        let (start_ms, end_ms) =
            parse_interval(&raw_interval).ok_or_else(|| Error::MissingInterval {
                file: source_file.to_string(),
                block: block_index,
                clip: ordinal,
            })?;
        let (start_offset, _, duration) = timecode::milliseconds_to_interval(start_ms, end_ms)?;

        clips.push(Clip {
            output_path: paths::clip_path(
                &config.clip_dir,
                source_file,
                block_index,
                ordinal,
                &config.clip_extension,
            ),
            source_audio_path: source_audio.to_string(),
            source_file: source_file.to_string(),
            block_index,
            ordinal,
            tier,
            is_continuation,
            continuation_parent_timestamp: None,
            start_offset,
            duration: timecode::format_duration(duration),
            raw_interval,
        });
    }

    let contains_target_tier = clips.iter().any(|c| config.is_target_tier(&c.tier));

    Ok(Block {
        index: block_index,
        source_file: source_file.to_string(),
        clips,
        contains_target_tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> SliceConfig {
        SliceConfig {
            clip_dir: PathBuf::from("clips"),
            ..SliceConfig::default()
        }
    }

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn extracts_tier_interval_and_paths() {
        let group = lines(&[
            "*CHI:\thello . \u{15}7000_9000\u{15}",
            "*FAN:\thi . \u{15}9000_12500\u{15}",
        ]);
        let block = build_block(&group, "012345.cha", "012345.wav", 3, &config()).unwrap();

        assert_eq!(block.index, 3);
        assert_eq!(block.clip_count(), 2);
        assert!(block.contains_target_tier);

        let clip = &block.clips[0];
        assert_eq!(clip.tier, "CHI");
        assert_eq!(clip.ordinal, 1);
        assert!(!clip.is_continuation);
        assert_eq!(clip.raw_interval, "7000_9000");
        assert_eq!(clip.start_offset, "00:00:07");
        assert_eq!(clip.duration, "0:00:02");
        assert_eq!(clip.output_path, PathBuf::from("clips/01234/3/1.wav"));

        assert_eq!(block.clips[1].start_offset, "00:00:09");
        assert_eq!(block.clips[1].duration, "0:00:03.500000");
    }

    #[test]
    fn continuation_lines_keep_the_inherited_tier() {
        let group = lines(&[
            "*CHI:\thello . \u{15}0_900\u{15}",
            "*CHI\tmore . \u{15}900_1500\u{15}   MULTILINE",
        ]);
        let block = build_block(&group, "012345.cha", "012345.wav", 1, &config()).unwrap();
        assert!(block.clips[1].is_continuation);
        assert_eq!(block.clips[1].tier, "CHI");
        assert!(!block.contains_target_tier);
    }

    #[test]
    fn missing_marker_fails_the_build() {
        let group = lines(&["*CHI:\tno timing here ."]);
        let err = build_block(&group, "012345.cha", "012345.wav", 2, &config()).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingInterval { block: 2, clip: 1, .. }
        ));
    }

    #[test]
    fn backwards_interval_fails_the_build() {
        let group = lines(&["*CHI:\tbad . \u{15}900_100\u{15}"]);
        assert!(matches!(
            build_block(&group, "012345.cha", "012345.wav", 1, &config()),
            Err(Error::InvalidInterval { .. })
        ));
    }
}
