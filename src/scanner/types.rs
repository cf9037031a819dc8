use std::collections::HashSet;

use crate::beatmap::LOCAL_SET_ID;

/// Outcome of one scan pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    set_ids: HashSet<i64>,
    files_visited: usize,
    maps_found: usize,
    root_found: bool,
}

impl Default for ScanResult {
    fn default() -> Self {
        Self {
            set_ids: HashSet::new(),
            files_visited: 0,
            maps_found: 0,
            root_found: true,
        }
    }
}

impl ScanResult {
    /// Result for a root that does not exist. Nothing was scanned.
    #[must_use]
    pub fn missing_root() -> Self {
        Self {
            root_found: false,
            ..Self::default()
        }
    }

    pub(crate) const fn record_visit(&mut self) {
        self.files_visited += 1;
    }

    pub(crate) const fn record_map(&mut self) {
        self.maps_found += 1;
    }

    /// Insert a set ID, ignoring the local-map sentinel. Returns whether it was new.
    pub(crate) fn insert(&mut self, set_id: i64) -> bool {
        set_id != LOCAL_SET_ID && self.set_ids.insert(set_id)
    }

    /// Unique set IDs found, in no particular order.
    #[must_use]
    pub const fn set_ids(&self) -> &HashSet<i64> {
        &self.set_ids
    }

    /// Unique set IDs found, ascending.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.set_ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub const fn files_visited(&self) -> usize {
        self.files_visited
    }

    #[must_use]
    pub const fn maps_found(&self) -> usize {
        self.maps_found
    }

    /// False when the scan root did not exist.
    #[must_use]
    pub const fn root_found(&self) -> bool {
        self.root_found
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.set_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set_ids.is_empty()
    }
}
