use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::beatmap::LOCAL_SET_ID;

/// Key under which the set IDs are stored.
pub const STATE_KEY: &str = "downloaded_maps";

/// Contents of the state document.
///
/// IDs are kept ordered and unique, so the document is always written sorted and
/// free of duplicates. Keys other than `downloaded_maps` are kept as-is and written
/// back on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    downloaded_maps: BTreeSet<i64>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl PersistedState {
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        let mut state = Self::default();
        state.merge(ids);
        state
    }

    /// Union `ids` into the known set. The local-map sentinel is dropped, including
    /// one that was already present from a hand-edited document.
    ///
    /// Returns the number of IDs that were not known before.
    pub fn merge(&mut self, ids: impl IntoIterator<Item = i64>) -> usize {
        let added = ids
            .into_iter()
            .filter(|&id| id != LOCAL_SET_ID)
            .filter(|&id| self.downloaded_maps.insert(id))
            .count();
        self.downloaded_maps.remove(&LOCAL_SET_ID);
        added
    }

    #[must_use]
    pub const fn ids(&self) -> &BTreeSet<i64> {
        &self.downloaded_maps
    }

    #[must_use]
    pub fn contains(&self, set_id: i64) -> bool {
        self.downloaded_maps.contains(&set_id)
    }

    /// The first `count` IDs in ascending order.
    #[must_use]
    pub fn preview(&self, count: usize) -> Vec<i64> {
        self.downloaded_maps.iter().copied().take(count).collect()
    }

    /// Keys other than `downloaded_maps` found in the loaded document.
    #[must_use]
    pub const fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.downloaded_maps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.downloaded_maps.is_empty()
    }
}
