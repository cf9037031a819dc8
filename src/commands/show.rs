use crate::cli::{Cli, ShowArgs};
use crate::config::PathOverrides;
use crate::error::Result;
use crate::output::{ErrorOutput, format_preview};
use crate::store::{PersistedState, StateStore};
use crate::EXIT_SUCCESS;

use super::context::{RunContext, report_error};

#[must_use]
pub fn run_show(args: &ShowArgs, cli: &Cli) -> i32 {
    match run_show_impl(args, cli) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Prints the set IDs recorded in the state document without scanning.
///
/// A missing document is reported and left missing.
///
/// # Errors
/// Returns an error if the document exists but cannot be read or parsed.
pub fn run_show_impl(args: &ShowArgs, cli: &Cli) -> Result<Option<PersistedState>> {
    let overrides = PathOverrides {
        lazer_files: None,
        state: args.state.clone(),
        download: None,
    };
    let ctx = RunContext::build(cli.config.as_deref(), cli.no_config, &overrides)?;
    let store = StateStore::new(&ctx.paths.state);

    let Some(state) = store.load_existing()? else {
        ErrorOutput::stderr().print_warning(
            &format!("No state document at {}", store.path().display()),
            Some("run `lazer-sets scan` or `lazer-sets init` to create it"),
        );
        return Ok(None);
    };

    println!("State document: {}", store.path().display());
    println!("Known sets: {}", state.len());
    let count = args.preview.unwrap_or_else(|| ctx.config.preview_count());
    let preview = state.preview(count);
    if !preview.is_empty() {
        println!("{}", format_preview(&preview, state.len()));
    }
    Ok(Some(state))
}
