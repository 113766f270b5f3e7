use std::rc::Rc;

use gpui::{
    AnyElement, App, AppContext as _, ClickEvent, Context, ElementId, Entity, EntityId,
    FocusHandle, InteractiveElement as _, IntoElement, KeyBinding, ParentElement as _, Pixels,
    Render, RenderOnce, SharedString, StatefulInteractiveElement as _, StyleRefinement, Styled,
    Window, actions, div, prelude::FluentBuilder as _, px,
};
use gpui_component::{ActiveTheme as _, Icon, IconName, StyledExt as _, h_flex, v_flex};
use gpui_gallery_core::{
    DragInput, DragOutcome, DragTracker, EntryId, EntryMove, Gallery, GalleryEntry, GalleryError,
    GridStep, grid_step,
};

use crate::card::render_image_card;
use crate::ghost::DragGhost;

pub(crate) const CONTEXT: &str = "DndGallery";

actions!(
    dnd_gallery,
    [
        MoveLeft,
        MoveRight,
        MoveUp,
        MoveDown,
        PickUpOrDrop,
        CancelDrag,
        ToggleSelection,
    ]
);

pub(crate) fn init(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("left", MoveLeft, Some(CONTEXT)),
        KeyBinding::new("right", MoveRight, Some(CONTEXT)),
        KeyBinding::new("up", MoveUp, Some(CONTEXT)),
        KeyBinding::new("down", MoveDown, Some(CONTEXT)),
        KeyBinding::new("space", PickUpOrDrop, Some(CONTEXT)),
        KeyBinding::new("escape", CancelDrag, Some(CONTEXT)),
        KeyBinding::new("enter", ToggleSelection, Some(CONTEXT)),
    ]);
}

/// Create a [`DndGallery`].
pub fn dnd_gallery(state: &Entity<DndGalleryState>) -> DndGallery {
    DndGallery::new(state)
}

type RenderCard =
    Rc<dyn Fn(usize, &GalleryEntry, DndGalleryCardState, &mut Window, &mut App) -> AnyElement>;

#[derive(Clone)]
struct DndGalleryDrag {
    gallery_id: EntityId,
    entry_id: EntryId,
}

/// Per-card render flags handed to the card renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct DndGalleryCardState {
    pub selected: bool,
    /// The card is the source of the active drag.
    pub dragging: bool,
    /// The card is the current keyboard drop target.
    pub drop_target: bool,
    pub focused: bool,
}

/// A change made to the gallery through [`DndGalleryState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GalleryChange {
    Toggled(EntryId),
    Inserted(EntryId),
    Deleted(usize),
    Moved(EntryMove),
    Replaced,
}

#[derive(Default)]
struct DndGalleryStateCallbacks {
    on_change: Option<Rc<dyn Fn(&GalleryChange, &Gallery)>>,
}

/// State for a draggable, selectable image grid.
///
/// Owns the [`Gallery`] and the [`DragTracker`]; every change goes through the
/// operations below.
pub struct DndGalleryState {
    focus_handle: FocusHandle,
    gallery: Gallery,
    drag: DragTracker,
    focused: Option<EntryId>,
    columns: usize,
    card_size: Pixels,
    show_add_card: bool,
    callbacks: DndGalleryStateCallbacks,
    render_card: RenderCard,
}

impl DndGalleryState {
    pub fn new(cx: &mut App) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            gallery: Gallery::new(),
            drag: DragTracker::new(),
            focused: None,
            columns: 5,
            card_size: px(160.),
            show_add_card: true,
            callbacks: DndGalleryStateCallbacks::default(),
            render_card: Rc::new(|ix, entry, card_state, window, cx| {
                render_image_card(ix, entry, card_state, window, cx).into_any_element()
            }),
        }
    }

    pub fn gallery(mut self, gallery: Gallery) -> Self {
        self.gallery = gallery;
        self
    }

    /// Number of cards per row, also used for up/down keyboard moves.
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn card_size(mut self, size: Pixels) -> Self {
        self.card_size = size;
        self
    }

    /// Show or hide the trailing "Add Image" card.
    pub fn show_add_card(mut self, show: bool) -> Self {
        self.show_add_card = show;
        self
    }

    /// Provide a callback invoked after every change to the gallery.
    pub fn on_change(mut self, on_change: impl Fn(&GalleryChange, &Gallery) + 'static) -> Self {
        self.callbacks.on_change = Some(Rc::new(on_change));
        self
    }

    pub fn gallery_ref(&self) -> &Gallery {
        &self.gallery
    }

    pub fn drag_ref(&self) -> &DragTracker {
        &self.drag
    }

    pub fn focused_entry(&self) -> Option<EntryId> {
        self.focused
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn focus_handle(&self) -> FocusHandle {
        self.focus_handle.clone()
    }

    pub fn set_gallery(&mut self, gallery: Gallery, cx: &mut Context<Self>) {
        self.gallery = gallery;
        self.drag.cancel();
        self.focused = None;
        self.emit(GalleryChange::Replaced);
        cx.notify();
    }

    pub fn toggle_selection(&mut self, id: EntryId, cx: &mut Context<Self>) -> bool {
        if !self.gallery.toggle_selection(id) {
            return false;
        }
        self.emit(GalleryChange::Toggled(id));
        cx.notify();
        true
    }

    /// Append an image. Blank references are rejected and change nothing.
    pub fn insert(
        &mut self,
        image_ref: impl Into<String>,
        cx: &mut Context<Self>,
    ) -> Result<EntryId, GalleryError> {
        let id = self.gallery.insert(image_ref)?;
        self.emit(GalleryChange::Inserted(id));
        cx.notify();
        Ok(id)
    }

    pub fn delete(
        &mut self,
        ids: impl IntoIterator<Item = EntryId>,
        cx: &mut Context<Self>,
    ) -> usize {
        let removed = self.gallery.delete(ids);
        self.after_delete(removed, cx);
        removed
    }

    pub fn delete_selected(&mut self, cx: &mut Context<Self>) -> usize {
        let removed = self.gallery.delete_selected();
        self.after_delete(removed, cx);
        removed
    }

    pub fn reorder(
        &mut self,
        active: EntryId,
        over: EntryId,
        cx: &mut Context<Self>,
    ) -> Option<EntryMove> {
        let entry_move = self.gallery.reorder(active, over)?;
        self.emit(GalleryChange::Moved(entry_move));
        cx.notify();
        Some(entry_move)
    }

    /// Open the entry-creation dialog.
    pub fn open_add_dialog(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        crate::add_image::open_add_image_dialog(cx.entity(), window, cx);
    }

    fn after_delete(&mut self, removed: usize, cx: &mut Context<Self>) {
        if removed == 0 {
            return;
        }
        if self.focused.is_some_and(|id| !self.gallery.contains(id)) {
            self.focused = None;
        }
        self.emit(GalleryChange::Deleted(removed));
        cx.notify();
    }

    fn emit(&self, change: GalleryChange) {
        if let Some(on_change) = self.callbacks.on_change.as_ref() {
            on_change(&change, &self.gallery);
        }
    }

    fn finish_drag(&mut self, outcome: DragOutcome, cx: &mut Context<Self>) {
        tracing::debug!(?outcome, "drag finished");
        if let DragOutcome::Moved(entry_move) = outcome {
            self.focused = Some(entry_move.id);
            self.emit(GalleryChange::Moved(entry_move));
        }
        cx.notify();
    }

    fn on_card_click(
        &mut self,
        id: EntryId,
        _event: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        window.focus(&self.focus_handle);
        self.focused = Some(id);
        self.toggle_selection(id, cx);
    }

    fn on_drag_start(
        &mut self,
        drag: &DndGalleryDrag,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.drag.begin(&self.gallery, drag.entry_id, DragInput::Pointer);
        self.focused = Some(drag.entry_id);
        cx.notify();
    }

    fn on_drop_on_card(
        &mut self,
        drag: &DndGalleryDrag,
        target: EntryId,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if drag.gallery_id != cx.entity_id() {
            return;
        }
        let outcome = self.drag.end(&mut self.gallery, Some(target));
        self.finish_drag(outcome, cx);
    }

    fn on_drop_on_grid(
        &mut self,
        drag: &DndGalleryDrag,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if drag.gallery_id != cx.entity_id() {
            return;
        }
        let outcome = self.drag.end(&mut self.gallery, None);
        self.finish_drag(outcome, cx);
    }

    fn step(&mut self, step: GridStep, cx: &mut Context<Self>) {
        if self.drag.is_dragging() {
            self.drag.step(&self.gallery, step, self.columns);
        } else {
            let next = match self.focused.and_then(|id| self.gallery.position(id)) {
                Some(ix) => grid_step(ix, step, self.columns, self.gallery.len()),
                None => 0,
            };
            self.focused = self.gallery.entries().get(next).map(GalleryEntry::id);
        }
        cx.notify();
    }

    fn on_move_left(&mut self, _: &MoveLeft, _window: &mut Window, cx: &mut Context<Self>) {
        self.step(GridStep::Left, cx);
    }

    fn on_move_right(&mut self, _: &MoveRight, _window: &mut Window, cx: &mut Context<Self>) {
        self.step(GridStep::Right, cx);
    }

    fn on_move_up(&mut self, _: &MoveUp, _window: &mut Window, cx: &mut Context<Self>) {
        self.step(GridStep::Up, cx);
    }

    fn on_move_down(&mut self, _: &MoveDown, _window: &mut Window, cx: &mut Context<Self>) {
        self.step(GridStep::Down, cx);
    }

    fn on_pick_up_or_drop(
        &mut self,
        _: &PickUpOrDrop,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.drag.is_dragging() {
            let outcome = self.drag.drop_on_hovered(&mut self.gallery);
            self.finish_drag(outcome, cx);
            return;
        }

        let Some(id) = self.focused.filter(|id| self.gallery.contains(*id)) else {
            return;
        };
        self.drag.begin(&self.gallery, id, DragInput::Keyboard);
        cx.notify();
    }

    fn on_cancel_drag(&mut self, _: &CancelDrag, _window: &mut Window, cx: &mut Context<Self>) {
        let outcome = self.drag.cancel();
        if outcome == DragOutcome::Cancelled {
            self.finish_drag(outcome, cx);
        } else {
            cx.propagate();
        }
    }

    fn on_toggle_selection(
        &mut self,
        _: &ToggleSelection,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let Some(id) = self.focused {
            self.toggle_selection(id, cx);
        }
    }

    fn card_state(&self, entry: &GalleryEntry, focus_visible: bool) -> DndGalleryCardState {
        let id = entry.id();
        DndGalleryCardState {
            selected: entry.is_selected(),
            dragging: self.drag.source() == Some(id),
            drop_target: self.drag.over() == Some(id),
            focused: focus_visible && self.focused == Some(id),
        }
    }
}

impl Render for DndGalleryState {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // A pointer drag released outside every drop target fires no event here.
        // gpui refreshes the window after clearing the active drag, and that
        // render is what cancels the session.
        let pointer_drag = self
            .drag
            .session()
            .is_some_and(|session| session.input() == DragInput::Pointer);
        if pointer_drag && !cx.has_active_drag() {
            self.drag.cancel();
        }

        let theme = cx.theme();
        let drop_target_bg = theme.drop_target;
        let drag_border = theme.drag_border;
        let muted = theme.muted_foreground;
        let border = theme.border;

        let render_card = Rc::clone(&self.render_card);
        let state_entity = cx.entity();
        let gallery_id = cx.entity_id();
        let card_size = self.card_size;
        let focus_visible = self.focus_handle.is_focused(window);

        let mut cells: Vec<AnyElement> = Vec::with_capacity(self.gallery.len() + 1);
        for (ix, entry) in self.gallery.iter().enumerate() {
            let entry_id = entry.id();
            let card_state = self.card_state(entry, focus_visible);
            let card = (render_card)(ix, entry, card_state, window, cx);
            let drag_value = DndGalleryDrag {
                gallery_id,
                entry_id,
            };
            let state_entity = state_entity.clone();

            let cell = div()
                .id(card_element_id(entry_id))
                .relative()
                .flex_none()
                .size(card_size)
                .rounded(px(8.))
                .child(card)
                .when(card_state.drop_target, |this| {
                    this.border_2().border_color(drag_border).bg(drop_target_bg)
                })
                .drag_over::<DndGalleryDrag>(move |style, drag, _window, _cx| {
                    if drag.gallery_id != gallery_id || drag.entry_id == entry_id {
                        return style;
                    }
                    style
                        .bg(drop_target_bg.alpha(drop_target_bg.a.max(0.2)))
                        .border_2()
                        .border_color(drag_border)
                })
                .on_drop::<DndGalleryDrag>(cx.listener(move |this, drag, window, cx| {
                    this.on_drop_on_card(drag, entry_id, window, cx);
                }))
                .on_click(cx.listener(move |this, event, window, cx| {
                    this.on_card_click(entry_id, event, window, cx);
                }))
                .on_drag(drag_value, move |drag, _offset, window, cx| {
                    let preview = state_entity.update(cx, |state, cx| {
                        state.on_drag_start(drag, window, cx);
                        state
                            .drag
                            .preview()
                            .map(|entry| SharedString::from(entry.image_ref().to_string()))
                    });
                    cx.new(|_| DragGhost::new(preview, card_size))
                });

            cells.push(cell.into_any_element());
        }

        if self.show_add_card {
            cells.push(
                div()
                    .id("dnd-gallery-add")
                    .flex_none()
                    .size(card_size)
                    .flex()
                    .flex_col()
                    .items_center()
                    .justify_center()
                    .gap_y_2()
                    .rounded(px(8.))
                    .border_1()
                    .border_color(border)
                    .cursor_pointer()
                    .text_color(muted)
                    .child(Icon::new(IconName::Plus))
                    .child(div().text_sm().font_semibold().child("Add Image"))
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.open_add_dialog(window, cx);
                    }))
                    .into_any_element(),
            );
        }

        let gap = px(16.);
        let mut cells = cells.into_iter();
        let rows: Vec<_> = row_lengths(cells.len(), self.columns)
            .into_iter()
            .map(|len| {
                h_flex()
                    .gap(gap)
                    .children(cells.by_ref().take(len).collect::<Vec<_>>())
            })
            .collect();

        div()
            .id("dnd-gallery-state")
            .key_context(CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_move_left))
            .on_action(cx.listener(Self::on_move_right))
            .on_action(cx.listener(Self::on_move_up))
            .on_action(cx.listener(Self::on_move_down))
            .on_action(cx.listener(Self::on_pick_up_or_drop))
            .on_action(cx.listener(Self::on_cancel_drag))
            .on_action(cx.listener(Self::on_toggle_selection))
            .size_full()
            .overflow_y_scroll()
            .p(px(24.))
            .child(v_flex().gap(gap).children(rows))
            .on_drop::<DndGalleryDrag>(cx.listener(Self::on_drop_on_grid))
    }
}

fn card_element_id(id: EntryId) -> ElementId {
    ElementId::Name(SharedString::from(format!("dnd-gallery-card-{id}")))
}

/// Lengths of the rows needed to lay out `count` cells, `columns` per row.
fn row_lengths(count: usize, columns: usize) -> Vec<usize> {
    let columns = columns.max(1);
    let full = count / columns;
    let rest = count % columns;
    let mut rows = vec![columns; full];
    if rest > 0 {
        rows.push(rest);
    }
    rows
}

/// A draggable image grid element.
#[derive(IntoElement)]
pub struct DndGallery {
    id: ElementId,
    state: Entity<DndGalleryState>,
    style: StyleRefinement,
    render_card: Option<RenderCard>,
}

impl DndGallery {
    pub fn new(state: &Entity<DndGalleryState>) -> Self {
        Self {
            id: ElementId::Name(format!("dnd-gallery-{}", state.entity_id()).into()),
            state: state.clone(),
            style: StyleRefinement::default(),
            render_card: None,
        }
    }

    /// Replace the default image card renderer.
    pub fn render_card<R, E>(mut self, render_card: R) -> Self
    where
        R: Fn(usize, &GalleryEntry, DndGalleryCardState, &mut Window, &mut App) -> E + 'static,
        E: IntoElement,
    {
        self.render_card = Some(Rc::new(move |ix, entry, card_state, window, cx| {
            render_card(ix, entry, card_state, window, cx).into_any_element()
        }));
        self
    }
}

impl Styled for DndGallery {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for DndGallery {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        if let Some(render_card) = self.render_card {
            self.state.update(cx, |state, _| state.render_card = render_card);
        }

        div()
            .id(self.id)
            .size_full()
            .child(self.state)
            .refine_style(&self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_fill_columns_then_remainder() {
        assert_eq!(row_lengths(12, 5), vec![5, 5, 2]);
        assert_eq!(row_lengths(10, 5), vec![5, 5]);
        assert_eq!(row_lengths(3, 5), vec![3]);
    }

    #[test]
    fn rows_of_nothing() {
        assert!(row_lengths(0, 5).is_empty());
    }

    #[test]
    fn zero_columns_means_one_per_row() {
        assert_eq!(row_lengths(3, 0), vec![1, 1, 1]);
    }
}
