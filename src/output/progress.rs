use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner counting files during a scan.
///
/// The total is unknown up front, so this is a spinner rather than a bar. It is
/// hidden in quiet mode or when stderr is not a TTY.
pub struct ScanProgress {
    progress_bar: ProgressBar,
}

impl ScanProgress {
    /// Creates a new spinner on stderr.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty)
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_spinner()
        };

        Self { progress_bar }
    }

    /// # Panics
    ///
    /// Panics if the template is invalid. It is a fixed string, so this never happens.
    fn create_visible_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} Scanning lazer files... {pos} files ({elapsed})")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template"),
        );
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    /// Counts one more visited file.
    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Files counted so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Finishes the spinner and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
