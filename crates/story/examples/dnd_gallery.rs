use std::sync::Arc;

use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::{ActiveTheme as _, Root, v_flex};
use gpui_dnd_gallery::model::{GalleryEntry, GallerySeed};
use gpui_dnd_gallery::{DndGalleryCardState, DndGalleryState, dnd_gallery};
use gpui_dnd_gallery_story::assets::GalleryAssetSource;
use gpui_dnd_gallery_story::http::UreqHttpClient;

/// The bare grid with numbered text cards instead of images, three per row.
struct NumberedGallery {
    gallery: Entity<DndGalleryState>,
}

impl NumberedGallery {
    fn view(window: &mut Window, cx: &mut App) -> Entity<Self> {
        let gallery = cx.new(|cx| {
            DndGalleryState::new(cx)
                .gallery(GallerySeed::demo().into_gallery())
                .columns(3)
                .card_size(px(120.))
        });
        window.focus(&gallery.read(cx).focus_handle());
        cx.new(|_| Self { gallery })
    }
}

impl Render for NumberedGallery {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        v_flex().size_full().child(
            dnd_gallery(&self.gallery).render_card(render_numbered_card),
        )
    }
}

fn render_numbered_card(
    ix: usize,
    entry: &GalleryEntry,
    card_state: DndGalleryCardState,
    _window: &mut Window,
    cx: &mut App,
) -> impl IntoElement + use<> {
    let theme = cx.theme();
    let name = entry
        .image_ref()
        .rsplit('/')
        .nth(2)
        .unwrap_or_default()
        .to_string();

    v_flex()
        .size_full()
        .items_center()
        .justify_center()
        .rounded(px(8.))
        .border_1()
        .border_color(theme.border)
        .bg(theme.background)
        .child(div().text_xl().child(format!("#{}", ix + 1)))
        .child(div().text_xs().text_color(theme.muted_foreground).child(name))
        .when(card_state.selected, |this| this.bg(theme.accent))
        .when(card_state.dragging, |this| this.opacity(0.4))
}

fn main() {
    let app = Application::new()
        .with_assets(GalleryAssetSource::new())
        .with_http_client(Arc::new(UreqHttpClient::new()));

    app.run(move |cx| {
        gpui_component::init(cx);
        gpui_dnd_gallery::init(cx);
        cx.activate(true);

        cx.spawn(async move |cx| {
            cx.open_window(
                WindowOptions {
                    titlebar: Some(TitlebarOptions {
                        title: Some("DnD Gallery".into()),
                        appears_transparent: false,
                        traffic_light_position: None,
                    }),
                    ..Default::default()
                },
                |window, cx| {
                    let view = NumberedGallery::view(window, cx);
                    cx.new(|cx| Root::new(view, window, cx))
                },
            )?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });
}
