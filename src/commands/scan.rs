use crate::cli::{Cli, ScanArgs};
use crate::config::PathOverrides;
use crate::error::{LazerSetsError, Result};
use crate::output::{
    ScanProgress, ScanSummary, format_paths_banner, format_scan_summary, format_state_notice,
};
use crate::scanner::{DirectoryScanner, ScanResult, SetScanner};
use crate::store::StateStore;
use crate::EXIT_SUCCESS;

use super::context::{RunContext, report_error};
use super::init::prepare_paths;

#[must_use]
pub fn run_scan(args: &ScanArgs, cli: &Cli) -> i32 {
    match run_scan_impl(args, cli) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Scans the lazer files directory and merges the set IDs into the state document.
///
/// The state document is written once, after the walk has finished; an
/// interrupted run leaves it as it was.
///
/// # Errors
/// Returns [`LazerSetsError::RootNotFound`] if the lazer files directory does not
/// exist, [`LazerSetsError::StateParse`] if the state document is malformed, or an
/// I/O or config error.
pub fn run_scan_impl(args: &ScanArgs, cli: &Cli) -> Result<ScanResult> {
    let overrides = PathOverrides {
        lazer_files: args.root.clone(),
        state: args.state.clone(),
        download: None,
    };
    let ctx = RunContext::build(cli.config.as_deref(), cli.no_config, &overrides)?;
    let paths = &ctx.paths;
    let store = StateStore::new(&paths.state);

    if !cli.quiet {
        print!("{}", format_paths_banner(paths));
    }

    // Checked before anything is created so a missing install never touches disk.
    if !paths.lazer_files.exists() {
        return Err(LazerSetsError::RootNotFound(paths.lazer_files.clone()));
    }

    let mut state = if args.dry_run {
        store.load_existing()?.unwrap_or_default()
    } else {
        let created = prepare_paths(paths, &store)?;
        if !cli.quiet {
            println!("{}", format_state_notice(created));
        }
        store.load()?
    };

    let root =
        dunce::canonicalize(&paths.lazer_files).unwrap_or_else(|_| paths.lazer_files.clone());
    if !cli.quiet {
        println!("Scanning {} (this can take a while with many maps)...", root.display());
    }

    let progress = ScanProgress::new(cli.quiet);
    let result = DirectoryScanner::new().scan_with(&root, &mut |_| progress.inc());
    progress.finish();

    if !result.root_found() {
        return Err(LazerSetsError::RootNotFound(root));
    }

    let newly_added = state.merge(result.set_ids().iter().copied());
    let saved_to = if args.dry_run {
        None
    } else {
        store.save(&state)?;
        Some(store.path())
    };

    let summary = ScanSummary {
        result: &result,
        newly_added,
        total_known: state.len(),
        saved_to,
        preview_count: args.preview.unwrap_or_else(|| ctx.config.preview_count()),
    };
    println!();
    print!("{}", format_scan_summary(&summary));

    Ok(result)
}
