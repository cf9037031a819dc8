use crate::cli::{Cli, InitArgs};
use crate::config::{PathOverrides, ResolvedPaths};
use crate::error::Result;
use crate::output::{format_paths_banner, format_state_notice};
use crate::state::ensure_dir;
use crate::store::StateStore;
use crate::EXIT_SUCCESS;

use super::context::{RunContext, report_error};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args, cli) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Creates the download directory and the state document if they are missing.
///
/// Returns whether the state document was created.
///
/// # Errors
/// Returns an error if the config cannot be loaded or a path cannot be created.
pub fn run_init_impl(args: &InitArgs, cli: &Cli) -> Result<bool> {
    let overrides = PathOverrides {
        lazer_files: None,
        state: args.state.clone(),
        download: args.download_dir.clone(),
    };
    let ctx = RunContext::build(cli.config.as_deref(), cli.no_config, &overrides)?;
    let store = StateStore::new(&ctx.paths.state);

    if !cli.quiet {
        print!("{}", format_paths_banner(&ctx.paths));
    }

    let created = prepare_paths(&ctx.paths, &store)?;
    println!("{}", format_state_notice(created));
    Ok(created)
}

/// First-run setup shared by `init` and `scan`: create the download directory
/// and an empty state document. The lazer files directory is never created.
///
/// Returns whether the state document was created.
///
/// # Errors
/// Returns an error if a directory or the state document cannot be created.
pub fn prepare_paths(paths: &ResolvedPaths, store: &StateStore) -> Result<bool> {
    if ensure_dir(&paths.download)? {
        log::info!("Created download directory {}", paths.download.display());
    }
    store.ensure_exists()
}
