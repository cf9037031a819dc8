use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lazer-sets")]
#[command(author, version, about = "Record the beatmap sets osu!lazer already has on disk")]
#[command(long_about = "Scans osu!lazer's local `files` directory for .osu beatmaps, \
    collects their BeatmapSetID values and merges them into a JSON state document \
    used by a downloader to skip sets you already have.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - The lazer files directory does not exist (nothing written)\n  \
    2 - Configuration, I/O or state document error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the lazer files directory and record the set IDs found
    Scan(ScanArgs),

    /// Create the download directory and an empty state document
    Init(InitArgs),

    /// Show the set IDs recorded in the state document
    Show(ShowArgs),
}

#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// osu!lazer `files` directory to scan (overrides config)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// State document to update (overrides config)
    #[arg(short, long)]
    pub state: Option<PathBuf>,

    /// Number of set IDs to list in the summary
    #[arg(short, long)]
    pub preview: Option<usize>,

    /// Scan and report without writing the state document
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// State document to create (overrides config)
    #[arg(short, long)]
    pub state: Option<PathBuf>,

    /// Download directory to create (overrides config)
    #[arg(short, long)]
    pub download_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// State document to read (overrides config)
    #[arg(short, long)]
    pub state: Option<PathBuf>,

    /// Number of set IDs to list
    #[arg(short, long)]
    pub preview: Option<usize>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
