//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript event listener backed by a `Closure` must keep the closure
//! alive for as long as the listener is attached. `closure.forget()` leaks it
//! and leaves the listener attached forever, so instead the closure lives in a
//! struct whose `Drop` removes the listener:
//!
//! ```ignore
//! // Listener is attached when DocumentEventListener is created
//! let listener = DocumentEventListener::new(document, "keydown", callback);
//!
//! // Listener is removed when `listener` goes out of scope or is dropped
//! drop(listener);
//! ```
//!
//! `DocumentSurface` builds on this to give `ModalSession` the body scroll lock
//! and the document keydown listener.

use glimpse_common::ModalSurface;
use wasm_bindgen_x::prelude::*;

/// Class applied to `<body>` while a modal holds the scroll lock
pub const SCROLL_LOCK_CLASS: &str = "modal-open";

/// A document event listener that removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys_x::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl DocumentEventListener {
    /// Attaches an event listener to the document.
    ///
    /// The listener is removed when this struct is dropped.
    pub fn new(
        document: web_sys_x::Document,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            document,
            event_name,
            callback,
        }
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// The live browser document as a `ModalSurface`
pub struct DocumentSurface {
    document: web_sys_x::Document,
}

impl DocumentSurface {
    /// The current window's document, if there is one
    pub fn current() -> Option<Self> {
        let document = web_sys_x::window()?.document()?;
        Some(Self { document })
    }
}

impl ModalSurface for DocumentSurface {
    type KeyListener = DocumentEventListener;

    fn lock_scroll(&self) {
        if let Some(body) = self.document.body() {
            let _ = body.class_list().add_1(SCROLL_LOCK_CLASS);
        }
    }

    fn unlock_scroll(&self) {
        if let Some(body) = self.document.body() {
            let _ = body.class_list().remove_1(SCROLL_LOCK_CLASS);
        }
    }

    fn listen_keys(&self, mut on_key: Box<dyn FnMut(String)>) -> DocumentEventListener {
        DocumentEventListener::new(self.document.clone(), "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<web_sys_x::KeyboardEvent>() {
                on_key(event.key());
            }
        })
    }
}
