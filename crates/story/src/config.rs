use std::path::PathBuf;

use anyhow::Context as _;
use gpui_gallery_core::{Gallery, GallerySeed};

/// Number of cards per grid row.
pub const COLUMNS_ENV: &str = "IMAGE_GALLERY_COLUMNS";
/// Path of a JSON seed file: `{ "images": ["https://…"] }`.
pub const SEED_ENV: &str = "IMAGE_GALLERY_SEED";
/// Directory watched for theme JSON files.
pub const THEME_DIR_ENV: &str = "IMAGE_GALLERY_THEME_DIR";

const DEFAULT_COLUMNS: usize = 5;
const MAX_COLUMNS: usize = 12;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryConfig {
    pub columns: usize,
    pub seed_path: Option<PathBuf>,
    pub theme_dir: Option<PathBuf>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            seed_path: None,
            theme_dir: None,
        }
    }
}

impl GalleryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from a variable lookup. Unusable values are logged and
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(COLUMNS_ENV) {
            match parse_columns(&raw) {
                Some(columns) => config.columns = columns,
                None => tracing::warn!(
                    "{COLUMNS_ENV}={raw:?} is not a column count in 1..={MAX_COLUMNS}; using {DEFAULT_COLUMNS}"
                ),
            }
        }

        config.seed_path = non_empty(lookup(SEED_ENV)).map(PathBuf::from);
        config.theme_dir = non_empty(lookup(THEME_DIR_ENV)).map(PathBuf::from);
        config
    }

    /// The configured seed, or the built-in demo images when none is set.
    pub fn load_seed(&self) -> anyhow::Result<GallerySeed> {
        let Some(path) = self.seed_path.as_ref() else {
            return Ok(GallerySeed::demo());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        GallerySeed::from_json(&text)
            .with_context(|| format!("failed to parse seed file {}", path.display()))
    }

    pub fn initial_gallery(&self) -> Gallery {
        match self.load_seed() {
            Ok(seed) => seed.into_gallery(),
            Err(err) => {
                tracing::warn!("{err:#}; using the built-in images");
                GallerySeed::demo().into_gallery()
            }
        }
    }
}

fn parse_columns(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|columns| (1..=MAX_COLUMNS).contains(columns))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
