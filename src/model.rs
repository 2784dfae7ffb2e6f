//! Block and clip value types parsed from a transcript.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One utterance line of a conversation block, paired with the audio slice
/// it maps to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clip {
    /// Destination path of the sliced audio segment.
    pub output_path: PathBuf,
    /// File name of the parent audio recording.
    pub source_audio_path: String,
    /// File name of the transcript this clip came from.
    pub source_file: String,
    pub block_index: usize,
    /// 1-based position within the parent block.
    pub ordinal: usize,
    /// 3-character tier code from the line prefix.
    pub tier: String,
    /// Line had no tier marker of its own and inherited one.
    pub is_continuation: bool,
    /// Raw interval of the nearest preceding non-continuation clip,
    /// set only on continuation clips that have such a predecessor.
    pub continuation_parent_timestamp: Option<String>,
    /// Start timestamp handed to the extractor.
    pub start_offset: String,
    /// Duration handed to the extractor.
    pub duration: String,
    /// Original `<start>_<end>` millisecond pair from the line.
    pub raw_interval: String,
}

/// One conversation unit from a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// 1-based position within the parent transcript.
    pub index: usize,
    /// File name of the originating transcript.
    pub source_file: String,
    /// Clips in tier-line order. Never reordered after construction.
    pub clips: Vec<Clip>,
    /// Any clip's tier matched one of the configured target tier codes.
    pub contains_target_tier: bool,
}

impl Block {
    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }
}
