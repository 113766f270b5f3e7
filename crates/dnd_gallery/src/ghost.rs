use gpui::{
    Context, IntoElement, ObjectFit, ParentElement as _, Pixels, Render, SharedString,
    Styled as _, StyledImage as _, Window, div, img, px,
};
use gpui_component::ActiveTheme as _;

/// Floating preview that follows the pointer during a drag.
///
/// Renders nothing when the dragged entry could not be resolved.
pub(crate) struct DragGhost {
    image_ref: Option<SharedString>,
    size: Pixels,
}

impl DragGhost {
    pub(crate) fn new(image_ref: Option<SharedString>, size: Pixels) -> Self {
        Self { image_ref, size }
    }
}

impl Render for DragGhost {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let Some(image_ref) = self.image_ref.clone() else {
            return div();
        };

        div()
            .size(self.size)
            .rounded(px(8.))
            .overflow_hidden()
            .bg(theme.popover)
            .border_1()
            .border_color(theme.border)
            .shadow_lg()
            .opacity(0.9)
            .child(img(image_ref).size_full().object_fit(ObjectFit::Cover))
    }
}
