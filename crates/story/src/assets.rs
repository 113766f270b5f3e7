use std::borrow::Cow;

use gpui::{AssetSource, Result, SharedString};

/// Embedded SVG icons for the gallery and the gpui-component widgets it uses.
pub struct GalleryAssetSource;

impl GalleryAssetSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GalleryAssetSource {
    fn default() -> Self {
        Self::new()
    }
}

const ASSETS: &[(&str, &[u8])] = &[
    ("icons/check.svg", include_bytes!("../assets/icons/check.svg")),
    (
        "icons/chevron-right.svg",
        include_bytes!("../assets/icons/chevron-right.svg"),
    ),
    (
        "icons/circle-check.svg",
        include_bytes!("../assets/icons/circle-check.svg"),
    ),
    (
        "icons/circle-x.svg",
        include_bytes!("../assets/icons/circle-x.svg"),
    ),
    ("icons/close.svg", include_bytes!("../assets/icons/close.svg")),
    ("icons/info.svg", include_bytes!("../assets/icons/info.svg")),
    ("icons/plus.svg", include_bytes!("../assets/icons/plus.svg")),
    (
        "icons/triangle-alert.svg",
        include_bytes!("../assets/icons/triangle-alert.svg"),
    ),
    (
        "icons/window-close.svg",
        include_bytes!("../assets/icons/window-close.svg"),
    ),
    (
        "icons/window-maximize.svg",
        include_bytes!("../assets/icons/window-maximize.svg"),
    ),
    (
        "icons/window-minimize.svg",
        include_bytes!("../assets/icons/window-minimize.svg"),
    ),
    (
        "icons/window-restore.svg",
        include_bytes!("../assets/icons/window-restore.svg"),
    ),
];

impl AssetSource for GalleryAssetSource {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        Ok(ASSETS
            .iter()
            .find(|(asset_path, _)| *asset_path == path)
            .map(|(_, bytes)| Cow::Borrowed(*bytes)))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let path = path.trim_matches('/');
        let prefix = if path.is_empty() {
            String::new()
        } else {
            format!("{path}/")
        };

        let mut children: Vec<SharedString> = Vec::new();
        for (asset_path, _) in ASSETS {
            let Some(rest) = asset_path.strip_prefix(prefix.as_str()) else {
                continue;
            };
            let child = rest.split_once('/').map_or(rest, |(first, _)| first);
            if !children.iter().any(|item| item.as_ref() == child) {
                children.push(SharedString::from(child.to_string()));
            }
        }

        Ok(children)
    }
}
