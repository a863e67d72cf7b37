//! Download destination configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where exported edition archives land.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Target directory, created on first use.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("downloads")
}
