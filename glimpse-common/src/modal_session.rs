//! Scoped ownership of the document resources an open lightbox holds
//!
//! While the lightbox is open it owns two document-level resources: the
//! scroll-lock marker on the page root and a keyboard listener. Both must be
//! released on every exit path, including a parent re-render that unmounts the
//! lightbox without going through its close control.
//!
//! `ModalSession` ties both to a single value: creating it acquires them,
//! dropping it releases them. The component stores the session for exactly its
//! mounted lifetime, so there is no code path that can forget the cleanup.

use tracing::debug;

use crate::LightboxCommand;

/// Document operations a lightbox session needs.
///
/// Implemented against the browser DOM in the UI crate and by counting fakes in
/// tests.
pub trait ModalSurface {
    /// Handle for a registered key listener. Dropping it must unregister the
    /// listener.
    type KeyListener;

    fn lock_scroll(&self);
    fn unlock_scroll(&self);
    /// Register `on_key`, called with the `KeyboardEvent.key` of every key press.
    fn listen_keys(&self, on_key: Box<dyn FnMut(String)>) -> Self::KeyListener;
}

/// Holds the scroll lock and the key listener until dropped
pub struct ModalSession<S: ModalSurface> {
    surface: S,
    key_listener: Option<S::KeyListener>,
}

impl<S: ModalSurface> ModalSession<S> {
    /// Lock scrolling and register `on_key` on `surface`.
    pub fn acquire(surface: S, on_key: impl FnMut(String) + 'static) -> Self {
        surface.lock_scroll();
        let key_listener = surface.listen_keys(Box::new(on_key));
        debug!("Modal session acquired");
        Self {
            surface,
            key_listener: Some(key_listener),
        }
    }

    /// Like `acquire`, but only forwards keys that map to a `LightboxCommand`.
    pub fn for_lightbox(
        surface: S,
        mut on_command: impl FnMut(LightboxCommand) + 'static,
    ) -> Self {
        Self::acquire(surface, move |key| {
            if let Some(command) = LightboxCommand::from_key(&key) {
                on_command(command);
            }
        })
    }
}

impl<S: ModalSurface> Drop for ModalSession<S> {
    fn drop(&mut self) {
        // Listener first, so no key event can land after the page is unlocked
        drop(self.key_listener.take());
        self.surface.unlock_scroll();
        debug!("Modal session released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct Counters {
        locks: Cell<usize>,
        unlocks: Cell<usize>,
        listens: Cell<usize>,
        unlistens: Cell<usize>,
        handler: RefCell<Option<Box<dyn FnMut(String)>>>,
    }

    #[derive(Clone, Default)]
    struct FakeSurface(Rc<Counters>);

    struct FakeListener(Rc<Counters>);

    impl Drop for FakeListener {
        fn drop(&mut self) {
            self.0.unlistens.set(self.0.unlistens.get() + 1);
            self.0.handler.borrow_mut().take();
        }
    }

    impl ModalSurface for FakeSurface {
        type KeyListener = FakeListener;

        fn lock_scroll(&self) {
            self.0.locks.set(self.0.locks.get() + 1);
        }

        fn unlock_scroll(&self) {
            self.0.unlocks.set(self.0.unlocks.get() + 1);
        }

        fn listen_keys(&self, on_key: Box<dyn FnMut(String)>) -> FakeListener {
            self.0.listens.set(self.0.listens.get() + 1);
            *self.0.handler.borrow_mut() = Some(on_key);
            FakeListener(self.0.clone())
        }
    }

    fn press(surface: &FakeSurface, key: &str) {
        if let Some(handler) = surface.0.handler.borrow_mut().as_mut() {
            handler(key.to_string());
        }
    }

    #[test]
    fn acquire_locks_and_listens_once() {
        let surface = FakeSurface::default();
        let _session = ModalSession::acquire(surface.clone(), |_| {});
        assert_eq!(surface.0.locks.get(), 1);
        assert_eq!(surface.0.listens.get(), 1);
        assert_eq!(surface.0.unlocks.get(), 0);
        assert_eq!(surface.0.unlistens.get(), 0);
    }

    #[test]
    fn drop_releases_both_once() {
        let surface = FakeSurface::default();
        let session = ModalSession::acquire(surface.clone(), |_| {});
        drop(session);
        assert_eq!(surface.0.unlocks.get(), 1);
        assert_eq!(surface.0.unlistens.get(), 1);
        assert!(surface.0.handler.borrow().is_none());
    }

    #[test]
    fn repeated_cycles_do_not_accumulate() {
        let surface = FakeSurface::default();
        for _ in 0..5 {
            let session = ModalSession::acquire(surface.clone(), |_| {});
            drop(session);
        }
        assert_eq!(surface.0.locks.get(), 5);
        assert_eq!(surface.0.unlocks.get(), 5);
        assert_eq!(surface.0.listens.get(), 5);
        assert_eq!(surface.0.unlistens.get(), 5);
    }

    #[test]
    fn lightbox_session_forwards_only_known_keys() {
        let surface = FakeSurface::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _session = ModalSession::for_lightbox(surface.clone(), move |command| {
            sink.borrow_mut().push(command);
        });

        for key in ["ArrowLeft", "a", "ArrowRight", "Tab", "Escape"] {
            press(&surface, key);
        }

        assert_eq!(
            *seen.borrow(),
            vec![
                LightboxCommand::Previous,
                LightboxCommand::Next,
                LightboxCommand::Close
            ]
        );
    }

    #[test]
    fn keys_after_release_are_not_delivered() {
        let surface = FakeSurface::default();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let session =
            ModalSession::acquire(surface.clone(), move |_| counter.set(counter.get() + 1));
        press(&surface, "Escape");
        drop(session);
        press(&surface, "Escape");
        assert_eq!(count.get(), 1);
    }
}
