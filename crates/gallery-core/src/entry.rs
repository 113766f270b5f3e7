use std::fmt;

use uuid::Uuid;

/// Stable key of a gallery entry.
///
/// Ids are random v4 UUIDs, so an id is never handed out twice, even after the
/// entry that carried it has been deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(Uuid);

impl EntryId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// One image in the gallery.
///
/// Entries are only ever created by [`crate::Gallery::insert`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryEntry {
    id: EntryId,
    image_ref: String,
    selected: bool,
}

impl GalleryEntry {
    pub(crate) fn new(id: EntryId, image_ref: String) -> Self {
        Self {
            id,
            image_ref,
            selected: false,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    /// URL of the image content, exactly as it was submitted.
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn toggle_selected(&mut self) {
        self.selected = !self.selected;
    }
}
