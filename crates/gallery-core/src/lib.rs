//! UI-free model of the image gallery: an ordered collection of image entries
//! with selection, insertion, bulk deletion, reordering, and the transient drag
//! session that drives reordering from pointer and keyboard gestures.

mod drag;
mod entry;
mod error;
mod gallery;
mod index;
mod keyboard;
mod seed;

pub use crate::drag::*;
pub use crate::entry::*;
pub use crate::error::*;
pub use crate::gallery::*;
pub use crate::keyboard::*;
pub use crate::seed::*;
