//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Squish
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use squish_core::decode::DecodedImage;
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// This type wraps the core `DecodedImage` type and provides a
/// JavaScript-friendly interface for accessing image dimensions and pixel
/// data, e.g. for drawing the preview onto a canvas.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()` or
/// `rgba_pixels()`, a copy is made to JavaScript memory as a `Uint8Array`.
/// The `free()` method can be called to explicitly release WASM memory, but
/// this is optional as wasm-bindgen's finalizer will handle cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create a new JsDecodedImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns RGBA pixel data (alpha 255) as Uint8Array.
    ///
    /// `ImageData` wants RGBA, so this is the buffer to hand to
    /// `ctx.putImageData` when rendering the preview.
    pub fn rgba_pixels(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() / 3 * 4);
        for rgb in self.pixels.chunks_exact(3) {
            rgba.extend_from_slice(rgb);
            rgba.push(255);
        }
        rgba
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this if you want to immediately release memory
    /// for a large image.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsDecodedImage {
    /// Create a JsDecodedImage from a core DecodedImage.
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }
}
