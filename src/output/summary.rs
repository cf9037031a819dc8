use std::fmt::Write;
use std::path::Path;

use crate::config::ResolvedPaths;
use crate::scanner::ScanResult;

/// Everything the scan summary reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary<'a> {
    pub result: &'a ScanResult,
    /// IDs not in the state document before this run.
    pub newly_added: usize,
    /// IDs in the state document after merging.
    pub total_known: usize,
    /// Where the document was written; `None` on a dry run.
    pub saved_to: Option<&'a Path>,
    pub preview_count: usize,
}

/// Lines printed before a scan or init, naming every path involved.
#[must_use]
pub fn format_paths_banner(paths: &ResolvedPaths) -> String {
    let mut out = String::new();
    writeln!(out, "Downloads folder:   {}", paths.download.display()).ok();
    writeln!(out, "Lazer files folder: {}", paths.lazer_files.display()).ok();
    writeln!(out, "State document:     {}", paths.state.display()).ok();
    out
}

/// Notice about the state document at the start of a run.
#[must_use]
pub fn format_state_notice(created: bool) -> &'static str {
    if created {
        "Created a new empty state document."
    } else {
        "State document already exists."
    }
}

/// Summary printed after a completed scan.
#[must_use]
pub fn format_scan_summary(summary: &ScanSummary<'_>) -> String {
    let result = summary.result;
    let mut out = String::new();

    writeln!(out, "--- Summary ---").ok();
    writeln!(out, "Files scanned:       {}", result.files_visited()).ok();
    writeln!(out, "Beatmap files found: {}", result.maps_found()).ok();
    writeln!(out, "Unique sets found:   {}", result.len()).ok();
    writeln!(out, "New sets recorded:   {}", summary.newly_added).ok();
    writeln!(out, "Total sets known:    {}", summary.total_known).ok();

    let preview: Vec<i64> = result
        .sorted_ids()
        .into_iter()
        .take(summary.preview_count)
        .collect();
    if !preview.is_empty() {
        writeln!(out, "{}", format_preview(&preview, result.len())).ok();
    }

    match summary.saved_to {
        Some(path) => {
            writeln!(out, "Done! Set IDs saved to {}", path.display()).ok();
        }
        None => {
            writeln!(out, "Dry run: state document not written.").ok();
        }
    }
    out
}

/// `First 3 of 10: [1, 2, 3]`, or `All 3: [1, 2, 3]` when nothing is cut off.
#[must_use]
pub fn format_preview(ids: &[i64], total: usize) -> String {
    if ids.len() < total {
        format!("First {} of {total}: {ids:?}", ids.len())
    } else {
        format!("All {total}: {ids:?}")
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
