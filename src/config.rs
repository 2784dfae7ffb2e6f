//! Slicing configuration load/save.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

fn default_extension() -> String {
    "wav".to_string()
}

fn default_target_tiers() -> Vec<String> {
    vec!["FAN".to_string(), "MAN".to_string()]
}

/// Settings that shape clip paths and tier classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceConfig {
    /// Root directory the sliced clips are written under.
    pub clip_dir: PathBuf,
    /// Extension of the sliced clip files.
    #[serde(default = "default_extension")]
    pub clip_extension: String,
    /// Tier codes that mark a block as containing a target speaker.
    #[serde(default = "default_target_tiers")]
    pub target_tiers: Vec<String>,
    /// Extractor binary to invoke instead of `ffmpeg` from PATH.
    #[serde(default)]
    pub extractor_path: Option<String>,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            clip_dir: PathBuf::from("clips"),
            clip_extension: default_extension(),
            target_tiers: default_target_tiers(),
            extractor_path: None,
        }
    }
}

impl SliceConfig {
    /// Load config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&json).map_err(|e| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn is_target_tier(&self, tier: &str) -> bool {
        self.target_tiers.iter().any(|t| t == tier)
    }
}
