pub mod api;
pub mod pages;

use dioxus::prelude::*;
use pages::Gallery;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // `?source=<url>` loads a remote JSON catalog instead of the built-in one
    #[route("/?:source")]
    Gallery { source: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN.to_string() }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
