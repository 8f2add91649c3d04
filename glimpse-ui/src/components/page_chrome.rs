//! Header, hero and footer around the gallery grid

use crate::components::icons::{CameraIcon, Icon};
use dioxus::prelude::*;
use glimpse_common::{photo_count_label, IconName};

/// Fixed top bar with the brand mark and the photo count
#[component]
pub fn GalleryHeader(brand: String, count: usize) -> Element {
    let count_label = photo_count_label(count);

    rsx! {
        header { class: "fixed top-0 w-full bg-slate-950/80 backdrop-blur-xl z-40 border-b border-white/10",
            nav { class: "container mx-auto px-4 md:px-6 py-4 flex items-center justify-between",
                div { class: "flex items-center space-x-3",
                    div { class: "bg-gradient-to-br from-blue-500 to-purple-600 p-2 rounded-lg text-white",
                        CameraIcon { class: "w-6 h-6" }
                    }
                    span { class: "text-xl md:text-2xl font-bold text-white tracking-tight",
                        {brand}
                    }
                }
                div {
                    class: "flex items-center gap-2 text-gray-400 text-sm md:text-base",
                    "data-testid": "photo-count",
                    Icon { name: IconName::Grid, class: "w-[18px] h-[18px]" }
                    span { "{count_label}" }
                }
            }
        }
    }
}

#[component]
pub fn GalleryHero(heading: String, tagline: String) -> Element {
    rsx! {
        section { class: "pt-28 pb-12 px-4 md:px-6",
            div { class: "container mx-auto max-w-6xl text-center",
                h1 { class: "text-4xl md:text-6xl lg:text-7xl font-black text-white mb-4 tracking-tight",
                    {heading}
                }
                if !tagline.is_empty() {
                    p { class: "text-lg md:text-xl text-gray-400 max-w-2xl mx-auto leading-relaxed",
                        {tagline}
                    }
                }
            }
        }
    }
}

#[component]
pub fn GalleryFooter(brand: String, note: String, count: usize) -> Element {
    let count_label = photo_count_label(count);

    rsx! {
        footer { class: "bg-slate-950 border-t border-white/10 py-8 px-4 md:px-6",
            div { class: "container mx-auto max-w-6xl flex flex-col md:flex-row justify-between items-center gap-4",
                div { class: "flex items-center space-x-2",
                    CameraIcon { class: "w-5 h-5 text-blue-500" }
                    span { class: "text-lg font-bold text-white", {brand} }
                }
                p { class: "text-gray-500 text-sm text-center", {note} }
                div { class: "text-gray-500 text-sm", "{count_label}" }
            }
        }
    }
}
