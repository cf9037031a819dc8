use std::path::Path;

use crate::beatmap;

/// Per-file inspection used by the directory scanner.
pub trait MapInspector {
    /// Whether the file is a beatmap at all.
    fn is_map_file(&self, path: &Path) -> bool;

    /// The set ID of a file that passed [`MapInspector::is_map_file`].
    fn extract_set_id(&self, path: &Path) -> Option<i64>;
}

/// Inspects files on disk as `.osu` beatmaps.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsuFileInspector;

impl MapInspector for OsuFileInspector {
    fn is_map_file(&self, path: &Path) -> bool {
        beatmap::is_map_file(path)
    }

    fn extract_set_id(&self, path: &Path) -> Option<i64> {
        beatmap::extract_set_id(path)
    }
}
