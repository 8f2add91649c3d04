//! glimpse-ui - View components for the photo gallery
//!
//! Pure view components plus the browser glue the lightbox needs. State is
//! owned by the caller and passed in through props and callbacks.

pub mod components;
pub mod wasm_utils;

pub use components::*;
