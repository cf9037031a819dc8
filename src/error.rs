use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LazerSetsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed state document: {path}")]
    StateParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Scan root does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl LazerSetsError {
    /// Short category name used as the diagnostic heading.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileAccess { .. } | Self::Io(_) => "IO",
            Self::StateParse { .. } | Self::JsonSerialize(_) => "State",
            Self::RootNotFound(_) => "Scan",
        }
    }

    /// Underlying cause, if any, rendered for the diagnostic detail line.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileAccess { source, .. } => Some(source.to_string()),
            Self::StateParse { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::StateParse { .. } => Some(
                "fix or remove the document by hand; it was left untouched to protect its contents",
            ),
            Self::RootNotFound(_) => {
                Some("is osu!lazer installed? pass --root to point at its `files` directory")
            }
            Self::TomlParse(_) => Some("check the config file syntax and field names"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LazerSetsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
