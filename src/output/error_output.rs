//! Diagnostics on stderr.
//!
//! Format: `✖ Kind: message` / `  × detail` / `  help: suggestion`

use std::io::{IsTerminal, Write};

use crate::LazerSetsError;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
}

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            use_colors: !Self::is_no_color_set() && std::io::stderr().is_terminal(),
        }
    }

    /// Creates an error output formatter with explicit color control.
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Prints a crate error with its detail and suggestion.
    pub fn print_error(&self, error: &LazerSetsError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error);
    }

    /// Prints a warning message.
    pub fn print_warning(&self, message: &str, suggestion: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, suggestion);
    }

    /// Writes a crate error to a writer.
    pub fn write_error<W: Write>(&self, w: &mut W, error: &LazerSetsError) {
        let heading = format!("✖ {}:", error.error_type());
        self.write_block(
            w,
            ansi::RED,
            &heading,
            &error.to_string(),
            error.detail().as_deref(),
            error.suggestion(),
        );
    }

    /// Writes a warning to a writer.
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, suggestion: Option<&str>) {
        self.write_block(w, ansi::YELLOW, "⚠ Warning:", message, None, suggestion);
    }

    // Write errors are discarded: there is nowhere left to report them.
    fn write_block<W: Write>(
        &self,
        w: &mut W,
        color: &str,
        heading: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(w, "{}{color}{heading}{} {message}", ansi::BOLD, ansi::RESET);
        } else {
            let _ = writeln!(w, "{heading} {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    /// Per <https://no-color.org>: presence of the variable (any value) disables color.
    fn is_no_color_set() -> bool {
        std::env::var_os("NO_COLOR").is_some()
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
