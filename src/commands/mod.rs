mod context;
pub mod init;
pub mod scan;
pub mod show;

pub use context::RunContext;
pub use init::{prepare_paths, run_init, run_init_impl};
pub use scan::{run_scan, run_scan_impl};
pub use show::{run_show, run_show_impl};
