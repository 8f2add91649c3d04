use tracing::{debug, warn};

use crate::ImageEntry;

/// Navigation request coming from a lightbox control or a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxCommand {
    Next,
    Previous,
    Close,
}

impl LightboxCommand {
    /// Map a DOM `KeyboardEvent.key` value to a command.
    ///
    /// Returns None for keys the lightbox does not handle.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            _ => None,
        }
    }
}

/// Which image, if any, the lightbox is showing.
///
/// `Closed` is the "no selection" sentinel. `Open(i)` always refers to a valid
/// index: every transition takes the sequence length and refuses to step past
/// either end, so the invariant holds even for events that never went through
/// a visible control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GallerySelection {
    #[default]
    Closed,
    Open(usize),
}

impl GallerySelection {
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Open(index) => Some(*index),
            Self::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Whether a previous image exists
    pub fn has_prev(&self) -> bool {
        matches!(self, Self::Open(index) if *index > 0)
    }

    /// Whether a next image exists in a sequence of `len` entries
    pub fn has_next(&self, len: usize) -> bool {
        matches!(self, Self::Open(index) if index + 1 < len)
    }

    /// Open the lightbox at `index`. Out-of-range indices leave the state untouched.
    pub fn activate(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            warn!("Ignoring activation of index {} (gallery has {} images)", index, len);
            return false;
        }
        debug!("Lightbox opened at {}", index);
        *self = Self::Open(index);
        true
    }

    /// Step forward. No-op when closed or already on the last image.
    pub fn next(&mut self, len: usize) -> bool {
        match *self {
            Self::Open(index) if index + 1 < len => {
                debug!("Lightbox next: {} -> {}", index, index + 1);
                *self = Self::Open(index + 1);
                true
            }
            _ => false,
        }
    }

    /// Step back. No-op when closed or already on the first image.
    pub fn previous(&mut self) -> bool {
        match *self {
            Self::Open(index) if index > 0 => {
                debug!("Lightbox previous: {} -> {}", index, index - 1);
                *self = Self::Open(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Return to the sentinel. Returns whether the lightbox was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        if was_open {
            debug!("Lightbox closed");
        }
        *self = Self::Closed;
        was_open
    }

    /// Apply a command against a sequence of `len` entries.
    ///
    /// Returns whether the selection changed.
    pub fn apply(&mut self, command: LightboxCommand, len: usize) -> bool {
        match command {
            LightboxCommand::Next => self.next(len),
            LightboxCommand::Previous => self.previous(),
            LightboxCommand::Close => self.close(),
        }
    }

    /// The entry currently shown, if any
    pub fn current<'a>(&self, images: &'a [ImageEntry]) -> Option<&'a ImageEntry> {
        self.index().and_then(|index| images.get(index))
    }
}
