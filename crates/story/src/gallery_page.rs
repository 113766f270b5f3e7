use gpui::*;
use gpui_component::menu::AppMenuBar;
use gpui_component::notification::Notification;
use gpui_component::{ActiveTheme as _, TitleBar, WindowExt as _, v_flex};
use gpui_dnd_gallery::{DndGalleryState, dnd_gallery};

use crate::app_menus::{About, AddImage, DeleteSelected, PAGE_CONTEXT};
use crate::config::GalleryConfig;
use crate::header::render_header;

/// The application window content: header plus the image grid.
pub struct GalleryPage {
    app_menu_bar: Entity<AppMenuBar>,
    gallery: Entity<DndGalleryState>,
    _subscriptions: Vec<Subscription>,
}

impl GalleryPage {
    pub fn view(
        config: &GalleryConfig,
        app_menu_bar: Entity<AppMenuBar>,
        window: &mut Window,
        cx: &mut App,
    ) -> Entity<Self> {
        cx.new(|cx| Self::new(config, app_menu_bar, window, cx))
    }

    fn new(
        config: &GalleryConfig,
        app_menu_bar: Entity<AppMenuBar>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let initial = config.initial_gallery();
        tracing::info!(
            images = initial.len(),
            columns = config.columns,
            "opening gallery"
        );

        let gallery = cx.new(|cx| {
            DndGalleryState::new(cx)
                .gallery(initial)
                .columns(config.columns)
                .on_change(|change, gallery| {
                    tracing::debug!(
                        ?change,
                        len = gallery.len(),
                        selected = gallery.selected_count(),
                        "gallery changed"
                    );
                })
        });

        // Re-render the header whenever the grid changes.
        let subscription = cx.observe(&gallery, |_, _, cx| cx.notify());

        let focus_handle = gallery.read(cx).focus_handle();
        window.focus(&focus_handle);

        Self {
            app_menu_bar,
            gallery,
            _subscriptions: vec![subscription],
        }
    }

    fn delete_selected(&mut self, cx: &mut Context<Self>) {
        let removed = self.gallery.update(cx, |state, cx| state.delete_selected(cx));
        tracing::info!(removed, "deleted selected images");
    }

    fn add_image(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.gallery.update(cx, |state, cx| state.open_add_dialog(window, cx));
    }
}

impl Render for GalleryPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let selected = self.gallery.read(cx).gallery_ref().selected_count();
        let page = cx.entity();
        let header = render_header(
            selected,
            move |_, _window, cx| {
                page.update(cx, |this, cx| this.delete_selected(cx));
            },
            cx,
        );
        let theme = cx.theme();

        v_flex()
            .size_full()
            .key_context(PAGE_CONTEXT)
            .bg(theme.muted)
            .on_action(cx.listener(|this, _: &AddImage, window, cx| {
                this.add_image(window, cx);
            }))
            .on_action(cx.listener(|this, _: &DeleteSelected, _window, cx| {
                this.delete_selected(cx);
            }))
            .on_action(cx.listener(|_, _: &About, window, cx| {
                window.push_notification(
                    Notification::new()
                        .message("Image Gallery: drag to reorder, click to select")
                        .autohide(true),
                    cx,
                );
            }))
            .child(
                TitleBar::new()
                    .child(div().flex().items_center().child(self.app_menu_bar.clone())),
            )
            .child(
                div()
                    .flex_1()
                    .min_h(px(0.))
                    .p(px(32.))
                    .flex()
                    .justify_center()
                    .child(
                        v_flex()
                            .w_full()
                            .max_w(px(1024.))
                            .h_full()
                            .rounded(px(8.))
                            .border_1()
                            .border_color(theme.border)
                            .bg(theme.background)
                            .shadow_sm()
                            .child(header)
                            .child(
                                div()
                                    .flex_1()
                                    .min_h(px(0.))
                                    .child(dnd_gallery(&self.gallery).size_full()),
                            ),
                    ),
            )
    }
}
