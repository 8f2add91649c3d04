mod catalog;
mod icon;
mod image_entry;
mod labels;
mod modal_session;
mod selection;

pub use catalog::{CatalogError, GalleryConfig};
pub use icon::IconName;
pub use image_entry::ImageEntry;
pub use labels::{badge_label, photo_count_label, position_label};
pub use modal_session::{ModalSession, ModalSurface};
pub use selection::{GallerySelection, LightboxCommand};
