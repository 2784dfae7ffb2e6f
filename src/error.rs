//! Error types for clanblocks.

use std::path::PathBuf;
use thiserror::Error;

use crate::slice::ExtractorError;

/// Result type for parsing and slicing operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Transcript file could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No conversation groups were found in the transcript.
    #[error("no conversation groups found in {}", .0.display())]
    MalformedTranscript(PathBuf),

    /// Interval end precedes its start, or a bound is negative.
    #[error("invalid interval: {start}_{end}")]
    InvalidInterval { start: i64, end: i64 },

    /// A tier line carried no embedded interval marker.
    #[error("no interval marker on clip {clip} of block {block} in {file}")]
    MissingInterval {
        file: String,
        block: usize,
        clip: usize,
    },

    /// 1-based block index out of range.
    #[error("block {index} not found ({count} blocks)")]
    BlockNotFound { index: usize, count: usize },

    /// Manifest, dump, or transcript export could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external clip extractor failed; remaining clips of the block
    /// were not attempted.
    #[error("extraction failed on clip {ordinal}: {source}")]
    ExtractionFailed {
        ordinal: usize,
        #[source]
        source: ExtractorError,
    },

    /// Config file was unreadable or not valid JSON.
    #[error("invalid config {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },
}
