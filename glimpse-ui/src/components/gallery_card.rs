//! Gallery card component - pure view with callbacks

use crate::components::icons::ImageIcon;
use dioxus::prelude::*;
use glimpse_common::{badge_label, ImageEntry};

/// One clickable thumbnail in the gallery grid
///
/// Shows a number badge, and title/alt text in an overlay on hover.
#[component]
pub fn GalleryCard(image: ImageEntry, index: usize, on_click: EventHandler<usize>) -> Element {
    let badge = badge_label(index);

    rsx! {
        div {
            class: "group relative aspect-square overflow-hidden rounded-2xl bg-slate-800 cursor-pointer transition-transform hover:scale-[1.02] active:scale-[0.98]",
            "data-testid": "gallery-card",
            onclick: move |_| on_click.call(index),
            img {
                src: "{image.url}",
                alt: "{image.alt}",
                "loading": "lazy",
                class: "w-full h-full object-cover transition-transform duration-500 group-hover:scale-110",
            }

            // Hover overlay
            div { class: "absolute inset-0 bg-gradient-to-t from-black/80 via-black/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex flex-col justify-end p-6",
                h3 { class: "text-white text-xl font-bold", {image.title.clone()} }
                p { class: "text-gray-300 text-sm mt-1", {image.alt.clone()} }
                div { class: "flex items-center gap-2 mt-3 text-blue-400 text-sm font-medium",
                    ImageIcon { class: "w-4 h-4" }
                    span { "Click to view" }
                }
            }

            div { class: "absolute top-4 left-4 bg-black/50 backdrop-blur-md px-3 py-1 rounded-full",
                span { class: "text-white text-sm font-semibold", "{badge}" }
            }
        }
    }
}
