use clap::Parser;

use lazer_sets::cli::{Cli, Commands};
use lazer_sets::commands::{run_init, run_scan, run_show};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Scan(args) => run_scan(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Show(args) => run_show(args, &cli),
    };

    std::process::exit(exit_code);
}

/// `RUST_LOG` wins; otherwise the level follows `-v` / `--quiet`.
fn init_logging(verbose: u8, quiet: bool) {
    let level = default_log_level(verbose, quiet);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

const fn default_log_level(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
