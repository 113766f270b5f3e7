/// Errors reported by gallery operations.
///
/// None of these are fatal: every failing operation leaves the gallery exactly
/// as it was.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// Insertion was given an empty or whitespace-only image reference.
    #[error("image reference is empty")]
    EmptyImageRef,
    /// A seed document could not be parsed.
    #[error("invalid gallery seed: {0}")]
    InvalidSeed(#[source] serde_json::Error),
}
