//! Gallery grid view - pure rendering, selection lives with the caller

use crate::components::gallery_card::GalleryCard;
use crate::components::icons::ImageIcon;
use dioxus::prelude::*;
use glimpse_common::ImageEntry;

/// Grid of clickable thumbnails, or an empty state when there are none
///
/// `on_activate` receives the index of the clicked entry. With no images no
/// cells are rendered, so nothing can ever be activated.
#[component]
pub fn GalleryView(images: Vec<ImageEntry>, on_activate: EventHandler<usize>) -> Element {
    rsx! {
        section { class: "py-8 px-4 md:px-6 pb-24",
            div { class: "container mx-auto max-w-6xl",
                if images.is_empty() {
                    div {
                        class: "text-center py-20",
                        "data-testid": "gallery-empty",
                        div { class: "text-gray-600 mb-4",
                            ImageIcon { class: "w-16 h-16 mx-auto" }
                        }
                        p { class: "text-gray-400 text-lg", "The gallery is empty" }
                    }
                } else {
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for (index , image) in images.into_iter().enumerate() {
                            GalleryCard {
                                key: "{index}",
                                image,
                                index,
                                on_click: on_activate,
                            }
                        }
                    }
                }
            }
        }
    }
}
