use std::sync::Arc;

use gpui::*;
use gpui_component::{Root, TitleBar};

use gpui_dnd_gallery_story::assets::GalleryAssetSource;
use gpui_dnd_gallery_story::config::GalleryConfig;
use gpui_dnd_gallery_story::gallery_page::GalleryPage;
use gpui_dnd_gallery_story::http::UreqHttpClient;
use gpui_dnd_gallery_story::{app_menus, logging, themes};

const TITLE: &str = "Image Gallery";

fn main() {
    if let Err(err) = logging::init() {
        eprintln!("image-gallery: {err}");
    }

    let config = GalleryConfig::from_env();
    let app = Application::new()
        .with_assets(GalleryAssetSource::new())
        .with_http_client(Arc::new(UreqHttpClient::new()));

    app.run(move |cx| {
        gpui_component::init(cx);
        gpui_dnd_gallery::init(cx);
        themes::init(config.theme_dir.clone(), cx);
        cx.activate(true);

        cx.spawn(async move |cx| {
            cx.open_window(
                WindowOptions {
                    titlebar: Some(TitleBar::title_bar_options()),
                    ..Default::default()
                },
                |window, cx| {
                    window.set_window_title(TITLE);
                    let app_menu_bar = app_menus::init(TITLE, window, cx);
                    let view = GalleryPage::view(&config, app_menu_bar, window, cx);
                    cx.new(|cx| Root::new(view, window, cx))
                },
            )?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });
}
