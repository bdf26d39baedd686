mod retained;

pub use retained::{GalleryItem, RetainedDocument};
