use std::path::Path;

use crate::config::{
    Config, ConfigLoader, DefaultPaths, FileConfigLoader, LoadResult, PathOverrides,
    ResolvedPaths,
};
use crate::error::{LazerSetsError, Result};
use crate::output::ErrorOutput;
use crate::{EXIT_ERROR, EXIT_ROOT_MISSING};

/// Config and paths shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub config: Config,
    pub paths: ResolvedPaths,
}

impl RunContext {
    /// Load the config (unless disabled) and resolve all paths against it.
    ///
    /// # Errors
    /// Returns an error if the config cannot be loaded or a path cannot be resolved.
    pub fn build(
        config_path: Option<&Path>,
        no_config: bool,
        overrides: &PathOverrides,
    ) -> Result<Self> {
        let LoadResult { config, .. } = load_config(config_path, no_config)?;
        let paths = ResolvedPaths::resolve(overrides, &config, &DefaultPaths::detect())?;
        log::debug!("Resolved paths: {paths:?}");
        Ok(Self { config, paths })
    }
}

pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Print an error and map it to the process exit code.
pub(crate) fn report_error(error: &LazerSetsError) -> i32 {
    ErrorOutput::stderr().print_error(error);
    match error {
        LazerSetsError::RootNotFound(_) => EXIT_ROOT_MISSING,
        _ => EXIT_ERROR,
    }
}
