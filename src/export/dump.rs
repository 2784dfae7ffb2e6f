//! JSON dump of parsed blocks.

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Block;

/// Serialize blocks to pretty JSON at `path`.
pub fn dump_blocks_json(path: &Path, blocks: &[Block]) -> Result<()> {
    let json = serde_json::to_string_pretty(blocks).map_err(|e| Error::WriteError {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })?;
    std::fs::write(path, json).map_err(|e| Error::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}
