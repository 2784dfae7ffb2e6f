//! ffmpeg-backed clip extractor.

use std::path::Path;
use std::process::Command;

use super::extractor::{ClipExtractor, ExtractorError};

/// Invokes the `ffmpeg` binary once per clip.
pub struct FfmpegExtractor {
    /// Binary to run instead of `ffmpeg` from PATH.
    pub binary_path: Option<String>,
}

impl FfmpegExtractor {
    pub fn new(binary_path: Option<String>) -> Self {
        Self { binary_path }
    }

    fn binary(&self) -> &str {
        self.binary_path.as_deref().unwrap_or("ffmpeg")
    }
}

impl ClipExtractor for FfmpegExtractor {
    fn extract(
        &self,
        source: &Path,
        start: &str,
        duration: &str,
        dest: &Path,
    ) -> Result<(), ExtractorError> {
        let binary = self.binary();
        let src = source.to_string_lossy();
        let dst = dest.to_string_lossy();
        let args = ["-ss", start, "-t", duration, "-i", src.as_ref(), dst.as_ref(), "-y"];
        log::debug!("{} {}", binary, args.join(" "));

        let output = Command::new(binary)
            .args(args)
            .output()
            .map_err(|e| ExtractorError::Spawn {
                binary: binary.to_string(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(ExtractorError::NonZeroExit {
                binary: binary.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}
