//! Squish WASM - WebAssembly bindings for Squish
//!
//! This crate exposes the squish-core image compression functionality to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings (for the preview canvas)
//! - `compress` - Re-encode, size estimate, and filename bindings
//! - `picker` - The stateful `Compressor` widget controller
//!
//! # Usage
//!
//! ```typescript
//! import init, { Compressor } from '@squish/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const compressor = new Compressor();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! if (compressor.select_image(bytes, file.type, file.name)) {
//!   console.log(`Original: ${compressor.original_kb} KB`);
//!   console.log(`Compressed: ${compressor.estimate_kb} KB`);
//! }
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod decode;
mod picker;
mod types;

// Re-export public types
pub use compress::{compress_to_jpeg, download_filename, estimate_kilobytes};
pub use decode::decode_image;
pub use picker::Compressor;
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
