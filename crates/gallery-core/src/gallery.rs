use std::collections::HashSet;
use std::sync::Arc;

use crate::entry::{EntryId, GalleryEntry};
use crate::error::GalleryError;
use crate::index::IdIndex;

/// A single-element move performed by [`Gallery::reorder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryMove {
    pub id: EntryId,
    /// Index of the entry before the move.
    pub from: usize,
    /// Index of the entry after the move.
    pub to: usize,
}

/// The ordered collection of gallery entries.
///
/// The sequence is held as an immutable snapshot. Every operation that changes
/// it builds a new sequence and swaps it in, so a snapshot obtained from
/// [`Gallery::snapshot`] never changes underneath its holder. Entry ids are
/// unique at all times.
#[derive(Clone, Debug, Default)]
pub struct Gallery {
    entries: Arc<[GalleryEntry]>,
    index: IdIndex,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a gallery by inserting each reference in order. Blank references
    /// are skipped.
    pub fn with_image_refs<I, S>(image_refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut gallery = Self::default();
        for image_ref in image_refs {
            if let Err(err) = gallery.insert(image_ref) {
                tracing::warn!("skipping seed image: {err}");
            }
        }
        gallery
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn snapshot(&self) -> Arc<[GalleryEntry]> {
        Arc::clone(&self.entries)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GalleryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.index.position(id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.index.contains(id)
    }

    pub fn get(&self, id: EntryId) -> Option<&GalleryEntry> {
        self.position(id).map(|ix| &self.entries[ix])
    }

    pub fn selected_ids(&self) -> Vec<EntryId> {
        self.entries
            .iter()
            .filter(|entry| entry.is_selected())
            .map(GalleryEntry::id)
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_selected()).count()
    }

    /// Flip the selection flag of `id`. Returns `false` when no entry matches.
    pub fn toggle_selection(&mut self, id: EntryId) -> bool {
        let Some(ix) = self.index.position(id) else {
            tracing::debug!(%id, "toggle ignored: unknown entry");
            return false;
        };

        let mut entries = self.entries.to_vec();
        entries[ix].toggle_selected();
        tracing::debug!(%id, selected = entries[ix].is_selected(), "toggled selection");
        // Positions are unchanged, the index stays valid.
        self.entries = entries.into();
        true
    }

    /// Append a new, unselected entry for `image_ref` and return its id.
    ///
    /// Blank references are rejected and leave the gallery untouched.
    pub fn insert(&mut self, image_ref: impl Into<String>) -> Result<EntryId, GalleryError> {
        let image_ref = image_ref.into();
        if image_ref.trim().is_empty() {
            tracing::debug!("insert ignored: empty image reference");
            return Err(GalleryError::EmptyImageRef);
        }

        let mut id = EntryId::new();
        while self.contains(id) {
            id = EntryId::new();
        }

        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend_from_slice(&self.entries);
        entries.push(GalleryEntry::new(id, image_ref));
        self.replace(entries);

        tracing::debug!(%id, len = self.len(), "inserted entry");
        Ok(id)
    }

    /// Remove every entry whose id is in `ids`, keeping survivors in order.
    ///
    /// Ids that are not in the gallery are ignored. Returns the number of
    /// entries removed.
    pub fn delete(&mut self, ids: impl IntoIterator<Item = EntryId>) -> usize {
        let doomed: HashSet<EntryId> = ids
            .into_iter()
            .filter(|id| self.index.contains(*id))
            .collect();
        if doomed.is_empty() {
            return 0;
        }

        let survivors: Vec<GalleryEntry> = self
            .entries
            .iter()
            .filter(|entry| !doomed.contains(&entry.id()))
            .cloned()
            .collect();
        let removed = self.entries.len() - survivors.len();
        self.replace(survivors);

        tracing::debug!(removed, len = self.len(), "deleted entries");
        removed
    }

    /// Remove every selected entry.
    pub fn delete_selected(&mut self) -> usize {
        let selected = self.selected_ids();
        self.delete(selected)
    }

    /// Move `active` to the position currently held by `over`.
    ///
    /// Both positions are looked up independently at call time. Entries in
    /// between shift by one toward the vacated slot. Returns `None` (and
    /// changes nothing) when either id is unknown or both resolve to the same
    /// position.
    pub fn reorder(&mut self, active: EntryId, over: EntryId) -> Option<EntryMove> {
        let from = self.index.position(active)?;
        let to = self.index.position(over)?;
        if from == to {
            return None;
        }

        let mut entries = self.entries.to_vec();
        let entry = entries.remove(from);
        entries.insert(to, entry);
        self.replace(entries);

        tracing::debug!(id = %active, from, to, "reordered entry");
        Some(EntryMove {
            id: active,
            from,
            to,
        })
    }

    fn replace(&mut self, entries: Vec<GalleryEntry>) {
        let index = IdIndex::build(&entries);
        debug_assert_eq!(index.len(), entries.len(), "gallery ids must be unique");
        self.entries = entries.into();
        self.index = index;
    }
}

impl<'a> IntoIterator for &'a Gallery {
    type Item = &'a GalleryEntry;
    type IntoIter = std::slice::Iter<'a, GalleryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
