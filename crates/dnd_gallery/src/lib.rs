mod add_image;
mod card;
mod ghost;
mod grid;

pub use card::render_image_card;
pub use grid::{
    CancelDrag, DndGallery, DndGalleryCardState, DndGalleryState, GalleryChange, MoveDown,
    MoveLeft, MoveRight, MoveUp, PickUpOrDrop, ToggleSelection, dnd_gallery,
};
pub use gpui_gallery_core as model;

use gpui::App;

pub fn init(cx: &mut App) {
    grid::init(cx);
}
