//! Path derivation for sliced clips.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// First five chars of the transcript name key the per-recording directory.
fn transcript_key(transcript_name: &str) -> &str {
    match transcript_name.char_indices().nth(5) {
        Some((idx, _)) => &transcript_name[..idx],
        None => transcript_name,
    }
}

/// Directory that holds one block's clips:
/// `<clip_root>/<first 5 chars of transcript>/<block index>`.
pub fn block_dir(clip_root: &Path, transcript_name: &str, block_index: usize) -> PathBuf {
    clip_root
        .join(transcript_key(transcript_name))
        .join(block_index.to_string())
}

/// Destination of one sliced clip:
/// `<clip_root>/<first 5 chars of transcript>/<block index>/<ordinal>.<ext>`.
pub fn clip_path(
    clip_root: &Path,
    transcript_name: &str,
    block_index: usize,
    ordinal: usize,
    extension: &str,
) -> PathBuf {
    block_dir(clip_root, transcript_name, block_index).join(format!("{}.{}", ordinal, extension))
}

/// Create the block directory, including parents, if necessary.
pub fn ensure_block_dir(
    clip_root: &Path,
    transcript_name: &str,
    block_index: usize,
) -> Result<PathBuf> {
    let dir = block_dir(clip_root, transcript_name, block_index);
    std::fs::create_dir_all(&dir).map_err(|e| Error::WriteError {
        path: dir.clone(),
        source: e,
    })?;
    Ok(dir)
}
