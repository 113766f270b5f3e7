use std::collections::HashMap;

use crate::entry::{EntryId, GalleryEntry};

/// Position lookup shared by every operation that resolves entries by id.
#[derive(Clone, Debug, Default)]
pub(crate) struct IdIndex {
    positions: HashMap<EntryId, usize>,
}

impl IdIndex {
    pub(crate) fn build(entries: &[GalleryEntry]) -> Self {
        let positions = entries
            .iter()
            .enumerate()
            .map(|(ix, entry)| (entry.id(), ix))
            .collect();
        Self { positions }
    }

    pub(crate) fn position(&self, id: EntryId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub(crate) fn contains(&self, id: EntryId) -> bool {
        self.positions.contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.positions.len()
    }
}
