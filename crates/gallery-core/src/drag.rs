use crate::entry::{EntryId, GalleryEntry};
use crate::gallery::{EntryMove, Gallery};
use crate::keyboard::{GridStep, grid_step};

/// Which input started a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragInput {
    Pointer,
    Keyboard,
}

/// The drag currently in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    source: EntryId,
    preview: Option<GalleryEntry>,
    over: Option<EntryId>,
    input: DragInput,
}

impl DragSession {
    pub fn source(&self) -> EntryId {
        self.source
    }

    /// The dragged entry as it was when the drag began, or `None` when the
    /// source id did not resolve. Only used to render the floating preview.
    pub fn preview(&self) -> Option<&GalleryEntry> {
        self.preview.as_ref()
    }

    pub fn over(&self) -> Option<EntryId> {
        self.over
    }

    pub fn input(&self) -> DragInput {
        self.input
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// How a drag ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dropped on another entry; the dragged entry moved.
    Moved(EntryMove),
    /// Dropped over empty space.
    NoTarget,
    /// Dropped on itself, or one of the ids no longer resolves.
    Unchanged,
    /// Aborted before a drop.
    Cancelled,
    /// There was no drag to end.
    NotDragging,
}

/// Two-state tracker for the single active drag gesture.
///
/// `Idle -> Dragging` on drag start; any end of the gesture (drop on an entry,
/// drop on nothing, cancel) returns to `Idle`. A valid drop runs
/// [`Gallery::reorder`] as part of that transition.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    state: DragState,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    pub fn source(&self) -> Option<EntryId> {
        self.session().map(DragSession::source)
    }

    pub fn over(&self) -> Option<EntryId> {
        self.session().and_then(DragSession::over)
    }

    pub fn preview(&self) -> Option<&GalleryEntry> {
        self.session().and_then(DragSession::preview)
    }

    /// Start dragging `source`. A drag that is already active is replaced.
    pub fn begin(&mut self, gallery: &Gallery, source: EntryId, input: DragInput) {
        let preview = gallery.get(source).cloned();
        if preview.is_none() {
            tracing::debug!(%source, "drag started on unknown entry; no preview");
        }
        self.state = DragState::Dragging(DragSession {
            source,
            preview,
            over: None,
            input,
        });
    }

    /// Record the entry currently under the drag. Ignored while idle.
    pub fn hover(&mut self, over: Option<EntryId>) {
        if let DragState::Dragging(session) = &mut self.state {
            session.over = over;
        }
    }

    /// Move the hovered target one grid step, starting from the current target
    /// or, before any target, from the dragged entry. Returns the new target.
    pub fn step(&mut self, gallery: &Gallery, step: GridStep, columns: usize) -> Option<EntryId> {
        let DragState::Dragging(session) = &mut self.state else {
            return None;
        };
        let anchor = session
            .over
            .and_then(|id| gallery.position(id))
            .or_else(|| gallery.position(session.source))?;
        let next = grid_step(anchor, step, columns, gallery.len());
        let target = gallery.entries().get(next)?.id();
        session.over = Some(target);
        Some(target)
    }

    /// End the drag over `over` and return to `Idle`.
    pub fn end(&mut self, gallery: &mut Gallery, over: Option<EntryId>) -> DragOutcome {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return DragOutcome::NotDragging;
        };

        let Some(over) = over else {
            tracing::debug!(source = %session.source, "drag ended without a target");
            return DragOutcome::NoTarget;
        };
        if over == session.source {
            return DragOutcome::Unchanged;
        }

        match gallery.reorder(session.source, over) {
            Some(entry_move) => DragOutcome::Moved(entry_move),
            None => DragOutcome::Unchanged,
        }
    }

    /// End the drag over whatever target was last recorded with
    /// [`DragTracker::hover`] or [`DragTracker::step`].
    pub fn drop_on_hovered(&mut self, gallery: &mut Gallery) -> DragOutcome {
        let over = self.over();
        self.end(gallery, over)
    }

    /// Abort the drag without reordering.
    pub fn cancel(&mut self) -> DragOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Idle => DragOutcome::NotDragging,
            DragState::Dragging(session) => {
                tracing::debug!(source = %session.source, "drag cancelled");
                DragOutcome::Cancelled
            }
        }
    }
}
