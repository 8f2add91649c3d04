//! glimpse - single-page photo gallery with a fullscreen lightbox

fn main() {
    dioxus::launch(glimpse_web::App);
}
