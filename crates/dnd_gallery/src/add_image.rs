use gpui::{
    App, AppContext as _, Entity, Focusable as _, ParentElement as _, Styled as _, Window, div,
    px,
};
use gpui_component::{
    ActiveTheme as _, StyledExt as _, WindowExt as _,
    dialog::DialogButtonProps,
    input::{Input, InputState},
    v_flex,
};

use crate::grid::DndGalleryState;

const URL_PLACEHOLDER: &str = "https://example.com/image.png";

/// Open the modal that collects a single image URL.
///
/// Confirming with a blank field keeps the dialog open; cancelling discards
/// whatever was typed.
pub(crate) fn open_add_image_dialog(
    state: Entity<DndGalleryState>,
    window: &mut Window,
    cx: &mut App,
) {
    let input = cx.new(|cx| InputState::new(window, cx).placeholder(URL_PLACEHOLDER));

    window.open_dialog(cx, {
        let input = input.clone();
        move |dialog, _window, cx| {
            let theme = cx.theme();
            let input_for_ok = input.clone();
            let state = state.clone();
            dialog
                .confirm()
                .title(div().text_lg().font_semibold().child("Add New Image URL"))
                .button_props(
                    DialogButtonProps::default()
                        .ok_text("Add Image")
                        .cancel_text("Cancel"),
                )
                .child(
                    v_flex()
                        .gap_y_2()
                        .p(px(12.))
                        .child(Input::new(&input))
                        .child(
                            div()
                                .text_xs()
                                .text_color(theme.muted_foreground)
                                .child("The image is appended to the end of the gallery."),
                        ),
                )
                .on_ok(move |_, _window, cx| {
                    let image_ref = input_for_ok.read(cx).value().to_string();
                    match state.update(cx, |state, cx| state.insert(image_ref, cx)) {
                        Ok(id) => {
                            tracing::info!(%id, "image added");
                            true
                        }
                        Err(err) => {
                            tracing::debug!("add image dialog stays open: {err}");
                            false
                        }
                    }
                })
        }
    });

    window.focus(&input.focus_handle(cx));
}
