//! Image decoding for Squish.
//!
//! This module turns the raw bytes of a user-selected file into an RGB
//! pixel buffer at the image's natural dimensions. Any format the `image`
//! crate recognizes from its magic bytes is accepted (PNG, JPEG, ...).
//!
//! # Architecture
//!
//! Decoding is designed to be driven from a Web Worker via WASM bindings.
//! All operations are synchronous and single-threaded within WASM; the
//! host schedules them off the UI thread.
//!
//! EXIF orientation is applied during decode so the pixel buffer matches
//! what the browser shows in the preview (`image-orientation: from-image`).

mod loader;
mod types;

pub use loader::{decode_image, decode_image_no_orientation, get_orientation};
pub use types::{DecodeError, DecodedImage, Orientation};
