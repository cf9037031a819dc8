use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Number of set IDs shown in summaries when not configured.
pub const DEFAULT_PREVIEW_COUNT: usize = 20;

/// Contents of a `lazer-sets` config file.
///
/// ```toml
/// lazer_files_path = "/mnt/games/osu/files"
/// state_path = "/home/me/domd/db.json"
/// download_path = "/mnt/games/osu-downloads"
/// preview_count = 50
/// ```
///
/// Every field is optional; anything left out falls back to the platform default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The osu!lazer `files` directory to scan.
    pub lazer_files_path: Option<PathBuf>,

    /// Location of the state document.
    pub state_path: Option<PathBuf>,

    /// Directory the companion downloader saves beatmap sets into.
    pub download_path: Option<PathBuf>,

    /// How many set IDs to print in summaries.
    pub preview_count: Option<usize>,
}

impl Config {
    #[must_use]
    pub fn preview_count(&self) -> usize {
        self.preview_count.unwrap_or(DEFAULT_PREVIEW_COUNT)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
