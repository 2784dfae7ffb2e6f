//! Clip extractor trait and error type.

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractorError {
    /// The extractor binary could not be launched.
    #[error("failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The extractor exited nonzero.
    #[error("{binary} exited with {status}: {stderr}")]
    NonZeroExit {
        binary: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Cuts one audio segment out of a source recording.
///
/// Implementations overwrite any existing file at `dest` and block until the
/// work is done; there is no timeout or cancellation path.
pub trait ClipExtractor {
    /// Produce the slice `[start, start + duration)` of `source` at `dest`.
    fn extract(
        &self,
        source: &Path,
        start: &str,
        duration: &str,
        dest: &Path,
    ) -> Result<(), ExtractorError>;
}
