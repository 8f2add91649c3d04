//! Lightbox component
//!
//! Full-screen viewer for one gallery image with previous/next/close controls.
//! The parent mounts it only while the selection is open, and the component
//! holds a `ModalSession` for its whole mounted lifetime: body scroll is locked
//! and a single document keydown listener is registered on mount, and both are
//! released on unmount regardless of which transition closed it.

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use crate::wasm_utils::DocumentSurface;
use dioxus::dioxus_core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use glimpse_common::{
    position_label, GallerySelection, ImageEntry, LightboxCommand, ModalSession,
};

const NAV_BUTTON_CLASS: &str = "fixed top-1/2 -translate-y-1/2 z-10 p-3 bg-white/10 hover:bg-white/20 rounded-full text-white transition-all hover:scale-110 min-h-[44px] min-w-[44px] flex items-center justify-center";

/// Wrap `on_command` so it can be called from a raw wasm-bindgen closure.
///
/// Must be called inside a component: the current runtime is captured here and
/// restored around each call, since document listeners run outside it.
fn runtime_bound(
    on_command: EventHandler<LightboxCommand>,
) -> impl FnMut(LightboxCommand) + 'static {
    let runtime = Runtime::current();
    move |command| {
        let _guard = RuntimeGuard::new(runtime.clone());
        on_command.call(command);
    }
}

/// Fullscreen view of `images[index]`
///
/// Navigation is reported through `on_command`; the parent owns the selection
/// and applies the command with its own bounds checks.
#[component]
pub fn Lightbox(
    images: Vec<ImageEntry>,
    index: usize,
    on_command: EventHandler<LightboxCommand>,
) -> Element {
    let mut session: Signal<Option<ModalSession<DocumentSurface>>> = use_signal(|| None);

    // Acquire once after mount; later renders only change the index
    use_effect(move || {
        if session.peek().is_some() {
            return;
        }
        let Some(surface) = DocumentSurface::current() else {
            return;
        };
        session.set(Some(ModalSession::for_lightbox(
            surface,
            runtime_bound(on_command),
        )));
    });

    use_drop(move || {
        // Release outside the diff cycle: dropping JS refs during scope teardown
        // can panic the -x desktop bridge (U8BufferEmpty)
        if let Some(released) = session.write().take() {
            spawn(async move {
                drop(released);
            });
        }
    });

    let total = images.len();
    let Some(image) = images.get(index) else {
        return rsx! {};
    };
    let selection = GallerySelection::Open(index);
    let has_prev = selection.has_prev();
    let has_next = selection.has_next(total);
    let position = position_label(index, total);

    rsx! {
        div {
            class: "fixed inset-0 z-50 bg-black/95 backdrop-blur-xl flex items-center justify-center",
            "data-testid": "lightbox",
            onclick: move |_| on_command.call(LightboxCommand::Close),

            // Close button
            button {
                class: "absolute top-4 right-4 z-10 p-3 bg-white/10 hover:bg-white/20 rounded-full text-white transition-all hover:scale-110 min-h-[44px] min-w-[44px] flex items-center justify-center",
                aria_label: "Close",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_command.call(LightboxCommand::Close);
                },
                XIcon { class: "w-6 h-6" }
            }

            if has_prev {
                button {
                    class: "{NAV_BUTTON_CLASS} left-4",
                    aria_label: "Previous image",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_command.call(LightboxCommand::Previous);
                    },
                    ChevronLeftIcon { class: "w-7 h-7" }
                }
            }

            if has_next {
                button {
                    class: "{NAV_BUTTON_CLASS} right-4",
                    aria_label: "Next image",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_command.call(LightboxCommand::Next);
                    },
                    ChevronRightIcon { class: "w-7 h-7" }
                }
            }

            // Content clicks must not reach the backdrop handler
            div {
                class: "relative max-w-[95vw] max-h-[85vh] flex flex-col items-center",
                onclick: move |evt| evt.stop_propagation(),
                img {
                    src: "{image.url}",
                    alt: "{image.alt}",
                    class: "max-w-full max-h-[80vh] object-contain rounded-lg shadow-2xl",
                }
                div { class: "mt-4 text-center",
                    h3 { class: "text-white text-xl font-semibold", {image.title.clone()} }
                    p { class: "text-gray-400 text-sm mt-1", {image.alt.clone()} }
                    p { class: "text-gray-500 text-xs mt-2", "{position}" }
                }
            }
        }
    }
}
