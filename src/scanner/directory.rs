use std::path::Path;

use walkdir::WalkDir;

use super::{MapInspector, OsuFileInspector, ScanResult, SetScanner};

/// Walks a directory tree and collects the set IDs of every beatmap in it.
///
/// Symlinks are not followed into directories. Entries the walk cannot read are
/// skipped, so a single bad file never aborts the scan.
pub struct DirectoryScanner<I: MapInspector = OsuFileInspector> {
    inspector: I,
}

impl DirectoryScanner<OsuFileInspector> {
    /// Scanner for `.osu` beatmaps on disk.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inspector: OsuFileInspector,
        }
    }
}

impl Default for DirectoryScanner<OsuFileInspector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: MapInspector> DirectoryScanner<I> {
    #[must_use]
    pub const fn with_inspector(inspector: I) -> Self {
        Self { inspector }
    }

    #[must_use]
    pub const fn inspector(&self) -> &I {
        &self.inspector
    }

    fn inspect_file(&self, path: &Path, result: &mut ScanResult) {
        result.record_visit();

        if !self.inspector.is_map_file(path) {
            return;
        }
        result.record_map();

        match self.inspector.extract_set_id(path) {
            Some(set_id) => {
                if !result.insert(set_id) {
                    log::trace!("Set {set_id} already recorded ({})", path.display());
                }
            }
            None => log::debug!("No set ID in {}", path.display()),
        }
    }
}

impl<I: MapInspector> SetScanner for DirectoryScanner<I> {
    fn scan_with(&self, root: &Path, on_file: &mut dyn FnMut(&Path)) -> ScanResult {
        if !root.exists() {
            log::warn!("Scan root {} does not exist", root.display());
            return ScanResult::missing_root();
        }

        let mut result = ScanResult::default();
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("Skipping unreadable entry: {e}");
                    continue;
                }
            };

            // Dangling links count as files and fail to open later, same as a
            // file that vanished mid-walk.
            let path = entry.path();
            if entry.file_type().is_dir() || path.is_dir() {
                continue;
            }

            self.inspect_file(path, &mut result);
            on_file(path);
        }

        log::info!(
            "Scanned {} files, {} beatmaps, {} unique sets",
            result.files_visited(),
            result.maps_found(),
            result.len()
        );
        result
    }
}
