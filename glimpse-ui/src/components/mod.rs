//! Gallery UI components

pub mod gallery_card;
pub mod gallery_view;
pub mod icons;
pub mod lightbox;
pub mod page_chrome;

pub use gallery_card::GalleryCard;
pub use gallery_view::GalleryView;
pub use icons::{
    CameraIcon, ChevronLeftIcon, ChevronRightIcon, GridIcon, Icon, ImageIcon, XIcon,
};
pub use lightbox::Lightbox;
pub use page_chrome::{GalleryFooter, GalleryHeader, GalleryHero};
