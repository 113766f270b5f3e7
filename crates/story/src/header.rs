use gpui::{
    App, ClickEvent, IntoElement, ParentElement as _, SharedString, Styled as _, Window, div,
    prelude::FluentBuilder as _, px,
};
use gpui_component::button::{Button, ButtonVariants as _};
use gpui_component::{ActiveTheme as _, Icon, IconName, Sizable as _, StyledExt as _, h_flex};

/// Header title for the given number of selected images.
pub fn selection_label(selected: usize) -> SharedString {
    match selected {
        0 => "Gallery".into(),
        1 => "1 File Selected".into(),
        n => format!("{n} Files Selected").into(),
    }
}

/// Gallery header: a title, or the selection count with a bulk delete button.
pub fn render_header(
    selected: usize,
    on_delete: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    cx: &App,
) -> impl IntoElement {
    let theme = cx.theme();

    h_flex()
        .w_full()
        .h(px(64.))
        .px(px(32.))
        .justify_between()
        .items_center()
        .border_b_1()
        .border_color(theme.border)
        .child(
            h_flex()
                .gap_x_2()
                .items_center()
                .when(selected > 0, |this| {
                    this.child(
                        div()
                            .size(px(18.))
                            .flex()
                            .items_center()
                            .justify_center()
                            .rounded(px(4.))
                            .bg(theme.primary)
                            .text_color(theme.primary_foreground)
                            .child(Icon::new(IconName::Check).xsmall()),
                    )
                })
                .child(
                    div()
                        .text_lg()
                        .font_semibold()
                        .child(selection_label(selected)),
                ),
        )
        .when(selected > 0, |this| {
            this.child(
                Button::new("gallery-delete-selected")
                    .label(if selected == 1 {
                        "Delete file"
                    } else {
                        "Delete files"
                    })
                    .danger()
                    .small()
                    .on_click(on_delete),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_the_selection_count() {
        assert_eq!(selection_label(0), SharedString::from("Gallery"));
        assert_eq!(selection_label(1), SharedString::from("1 File Selected"));
        assert_eq!(selection_label(4), SharedString::from("4 Files Selected"));
    }
}
