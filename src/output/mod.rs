mod error_output;
mod progress;
mod summary;

pub use error_output::ErrorOutput;
pub use progress::ScanProgress;
pub use summary::{
    ScanSummary, format_paths_banner, format_preview, format_scan_summary, format_state_notice,
};
