use serde::{Deserialize, Serialize};

use crate::error::GalleryError;
use crate::gallery::Gallery;

/// Initial gallery content, as read from a JSON document such as
/// `{ "images": ["https://example.com/a.png"] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GallerySeed {
    #[serde(default)]
    pub images: Vec<String>,
}

impl GallerySeed {
    pub fn from_json(text: &str) -> Result<Self, GalleryError> {
        serde_json::from_str(text).map_err(GalleryError::InvalidSeed)
    }

    /// The images shown when no seed file is configured.
    ///
    /// These are remote URLs, so they only render when the application has an
    /// HTTP client installed (`Application::with_http_client`).
    pub fn demo() -> Self {
        const PHOTO_IDS: [u32; 11] = [10, 11, 15, 16, 17, 20, 22, 24, 28, 29, 37];
        Self {
            images: PHOTO_IDS
                .iter()
                .map(|id| format!("https://picsum.photos/id/{id}/600/600"))
                .collect(),
        }
    }

    pub fn into_gallery(self) -> Gallery {
        Gallery::with_image_refs(self.images)
    }
}
