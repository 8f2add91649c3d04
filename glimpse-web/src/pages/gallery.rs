use crate::api;
use dioxus::prelude::*;
use glimpse_common::{GalleryConfig, GallerySelection, LightboxCommand};
use glimpse_ui::{GalleryFooter, GalleryHeader, GalleryHero, GalleryView, Lightbox};

/// Route entry: loads the catalog once, then hands it to the page
#[component]
pub fn Gallery(source: Option<String>) -> Element {
    let catalog = use_resource(move || api::load_catalog(source.clone()));
    let read = catalog.read();

    match &*read {
        Some(Ok(config)) => rsx! {
            GalleryPage { config: config.clone() }
        },
        Some(Err(e)) => rsx! {
            div { class: "flex items-center justify-center min-h-screen text-gray-400",
                "Failed to load gallery: {e}"
            }
        },
        None => rsx! {
            div { class: "flex items-center justify-center min-h-screen text-gray-400",
                "Loading..."
            }
        },
    }
}

/// Gallery page: owns the lightbox selection for the session
#[component]
fn GalleryPage(config: GalleryConfig) -> Element {
    let mut selection = use_signal(GallerySelection::default);

    let images = config.images;
    let len = images.len();

    rsx! {
        div { class: "min-h-screen bg-gradient-to-b from-slate-950 via-slate-900 to-slate-950",
            GalleryHeader { brand: config.brand.clone(), count: len }
            GalleryHero { heading: config.heading, tagline: config.tagline }
            GalleryView {
                images: images.clone(),
                on_activate: move |index: usize| {
                    selection.write().activate(index, len);
                },
            }
            if let GallerySelection::Open(index) = selection() {
                Lightbox {
                    images,
                    index,
                    on_command: move |command: LightboxCommand| {
                        selection.write().apply(command, len);
                    },
                }
            }
            GalleryFooter { brand: config.brand, note: config.footer_note, count: len }
        }
    }
}
