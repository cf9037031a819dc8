//! Platform default locations and resolution of the paths a run works with.
//!
//! | Path          | Windows                          | macOS                                            | Linux                                  |
//! |---------------|----------------------------------|--------------------------------------------------|----------------------------------------|
//! | lazer files   | `%APPDATA%\osu\files`            | `~/Library/Application Support/osu/files`        | `~/.local/share/osu/files`             |
//! | state         | `%APPDATA%\domd\data\db.json`    | `~/Library/Application Support/domd/db.json`     | `~/.local/share/domd/db.json`          |
//! | downloads     | `%USERPROFILE%\Downloads\domd`   | `~/Downloads/domd`                               | `$XDG_DOWNLOAD_DIR/domd`               |
//!
//! Nothing here touches the filesystem; directories are created by the commands.

use std::path::PathBuf;

use directories::{BaseDirs, ProjectDirs, UserDirs};

use super::Config;
use crate::error::{LazerSetsError, Result};

/// Name shared with the companion downloader for its data and download folders.
pub const COMPANION_NAME: &str = "domd";

/// File name of the state document inside the companion data directory.
pub const STATE_FILE_NAME: &str = "db.json";

/// Platform defaults. A field is `None` when the platform offers no such location
/// (for example, no resolvable home directory).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultPaths {
    pub lazer_files: Option<PathBuf>,
    pub state: Option<PathBuf>,
    pub download: Option<PathBuf>,
}

impl DefaultPaths {
    /// Look up the defaults for the current platform and user.
    #[must_use]
    pub fn detect() -> Self {
        let data_dir = BaseDirs::new().map(|dirs| dirs.data_dir().to_path_buf());
        let companion_dir =
            ProjectDirs::from("", "", COMPANION_NAME).map(|dirs| dirs.data_dir().to_path_buf());
        let downloads_dir =
            UserDirs::new().and_then(|dirs| dirs.download_dir().map(std::path::Path::to_path_buf));

        Self::from_dirs(data_dir, companion_dir, downloads_dir)
    }

    /// Build the defaults from already known base directories.
    #[must_use]
    pub fn from_dirs(
        data_dir: Option<PathBuf>,
        companion_dir: Option<PathBuf>,
        downloads_dir: Option<PathBuf>,
    ) -> Self {
        let download = downloads_dir
            .map(|dir| dir.join(COMPANION_NAME))
            .or_else(|| companion_dir.as_ref().map(|dir| dir.join("downloads")));

        Self {
            lazer_files: data_dir.map(|dir| dir.join("osu").join("files")),
            state: companion_dir.map(|dir| dir.join(STATE_FILE_NAME)),
            download,
        }
    }
}

/// Paths given on the command line. They win over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathOverrides {
    pub lazer_files: Option<PathBuf>,
    pub state: Option<PathBuf>,
    pub download: Option<PathBuf>,
}

/// Final paths for a run: command line, then config file, then platform default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub lazer_files: PathBuf,
    pub state: PathBuf,
    pub download: PathBuf,
}

impl ResolvedPaths {
    /// Resolve every path.
    ///
    /// # Errors
    /// Returns a config error naming the first path that has no value anywhere.
    pub fn resolve(
        overrides: &PathOverrides,
        config: &Config,
        defaults: &DefaultPaths,
    ) -> Result<Self> {
        Ok(Self {
            lazer_files: pick(
                "lazer files directory",
                "--root",
                overrides.lazer_files.as_ref(),
                config.lazer_files_path.as_ref(),
                defaults.lazer_files.as_ref(),
            )?,
            state: pick(
                "state document",
                "--state",
                overrides.state.as_ref(),
                config.state_path.as_ref(),
                defaults.state.as_ref(),
            )?,
            download: pick(
                "download directory",
                "--download-dir",
                overrides.download.as_ref(),
                config.download_path.as_ref(),
                defaults.download.as_ref(),
            )?,
        })
    }
}

fn pick(
    what: &str,
    flag: &str,
    cli: Option<&PathBuf>,
    config: Option<&PathBuf>,
    default: Option<&PathBuf>,
) -> Result<PathBuf> {
    cli.or(config).or(default).cloned().ok_or_else(|| {
        LazerSetsError::Config(format!(
            "cannot determine the default {what} on this system; pass {flag} or set it in the config file"
        ))
    })
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
