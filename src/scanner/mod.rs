mod directory;
mod inspector;
mod types;

pub use directory::DirectoryScanner;
pub use inspector::{MapInspector, OsuFileInspector};
pub use types::ScanResult;

use std::path::Path;

/// Trait for collecting beatmap set IDs from a directory tree.
pub trait SetScanner {
    /// Scan `root`, calling `on_file` once for every file visited.
    ///
    /// A missing root is not an error: the result reports `root_found() == false`.
    fn scan_with(&self, root: &Path, on_file: &mut dyn FnMut(&Path)) -> ScanResult;

    /// Scan `root` without a per-file callback.
    fn scan(&self, root: &Path) -> ScanResult {
        self.scan_with(root, &mut |_| {})
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
