use gpui::{
    App, CursorStyle, IntoElement, ObjectFit, ParentElement as _, SharedString, Styled as _,
    StyledImage as _, Window, div, img, prelude::FluentBuilder as _, px,
};
use gpui_component::{ActiveTheme as _, Icon, IconName, Sizable as _};
use gpui_gallery_core::GalleryEntry;

use crate::grid::DndGalleryCardState;

/// Default card: the image cropped to fill the cell, with a check badge on
/// selected entries.
pub fn render_image_card(
    _ix: usize,
    entry: &GalleryEntry,
    card_state: DndGalleryCardState,
    _window: &mut Window,
    cx: &mut App,
) -> impl IntoElement {
    let theme = cx.theme();
    let image_ref = SharedString::from(entry.image_ref().to_string());

    div()
        .relative()
        .size_full()
        .rounded(px(8.))
        .overflow_hidden()
        .border_1()
        .border_color(theme.border)
        .bg(theme.muted)
        .cursor(CursorStyle::OpenHand)
        .child(img(image_ref).size_full().object_fit(ObjectFit::Cover))
        .when(card_state.selected, |this| {
            this.child(div().absolute().inset_0().bg(theme.background.opacity(0.4)))
                .child(
                    div()
                        .absolute()
                        .top(px(8.))
                        .left(px(8.))
                        .size(px(20.))
                        .flex()
                        .items_center()
                        .justify_center()
                        .rounded(px(4.))
                        .bg(theme.primary)
                        .text_color(theme.primary_foreground)
                        .child(Icon::new(IconName::Check).xsmall()),
                )
        })
        .when(card_state.focused, |this| {
            this.border_2().border_color(theme.ring)
        })
        .when(card_state.dragging, |this| this.opacity(0.4))
}
