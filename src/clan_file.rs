//! Per-transcript block repository.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::SliceConfig;
use crate::error::{Error, Result};
use crate::model::Block;
use crate::parse;
use crate::paths;
use crate::slice::ClipExtractor;

/// One parsed transcript: the ordered blocks, the paired audio recording, and
/// the raw conversation groups kept around for subset export.
///
/// Immutable after `parse`; exporting writes a new file without touching the
/// in-memory state.
pub struct ClanFile {
    /// Path the transcript was read from.
    pub path: PathBuf,
    /// Transcript file name.
    pub file_name: String,
    /// Paired audio recording, handed to the extractor unmodified.
    pub audio_path: PathBuf,
    config: SliceConfig,
    blocks: Vec<Block>,
    groups: Vec<Vec<String>>,
}

impl ClanFile {
    /// Read and parse a transcript. Fails without producing a partial block
    /// list: an unreadable file, a transcript with no conversation groups,
    /// or any untimed tier line aborts the whole parse.
    pub fn parse(path: &Path, audio_path: &Path, config: &SliceConfig) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::UnreadableFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let groups = parse::split_conversations(&text);
        if groups.is_empty() {
            return Err(Error::MalformedTranscript(path.to_path_buf()));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let audio_name = audio_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let filtered = parse::filter_conversations(&groups);
        let mut blocks = Vec::with_capacity(filtered.len());
        for (i, group) in filtered.iter().enumerate() {
            let mut block = parse::build_block(group, &file_name, &audio_name, i + 1, config)?;
            parse::link_block(&mut block);
            blocks.push(block);
        }
        log::info!("{}: {} blocks", file_name, blocks.len());

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            audio_path: audio_path.to_path_buf(),
            config: config.clone(),
            blocks,
            groups,
        })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Block at a 1-based index.
    pub fn get_block(&self, index: usize) -> Result<&Block> {
        if index == 0 || index > self.blocks.len() {
            return Err(Error::BlockNotFound {
                index,
                count: self.blocks.len(),
            });
        }
        Ok(&self.blocks[index - 1])
    }

    /// Blocks satisfying `predicate`, in original order.
    pub fn filter_blocks(&self, predicate: impl Fn(&Block) -> bool) -> Vec<&Block> {
        self.blocks.iter().filter(|b| predicate(b)).collect()
    }

    /// Write a new transcript containing only the conversation groups whose
    /// 1-based block index is in `indices`. Line content and the relative
    /// order of retained groups are preserved.
    pub fn export_subset(&self, output_path: &Path, indices: &[usize]) -> Result<()> {
        let write_err = |e| Error::WriteError {
            path: output_path.to_path_buf(),
            source: e,
        };
        let mut file = File::create(output_path).map_err(write_err)?;
        for (i, group) in self.groups.iter().enumerate() {
            if !indices.contains(&(i + 1)) {
                continue;
            }
            for line in group {
                writeln!(file, "{}", line).map_err(write_err)?;
            }
        }
        Ok(())
    }

    /// Slice every clip of `block` out of the paired audio file, strictly
    /// sequentially. The first extractor failure aborts the remaining clips
    /// of this block; clips already written stay on disk.
    pub fn slice_block(&self, block: &Block, extractor: &dyn ClipExtractor) -> Result<()> {
        paths::ensure_block_dir(&self.config.clip_dir, &self.file_name, block.index)?;
        for clip in &block.clips {
            extractor
                .extract(
                    &self.audio_path,
                    &clip.start_offset,
                    &clip.duration,
                    &clip.output_path,
                )
                .map_err(|e| Error::ExtractionFailed {
                    ordinal: clip.ordinal,
                    source: e,
                })?;
            log::debug!("sliced {}", clip.output_path.display());
        }
        Ok(())
    }
}
