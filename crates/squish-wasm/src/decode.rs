//! Image decoding WASM bindings.
//!
//! This module exposes the squish-core decode function to JavaScript so the
//! host can render the preview without going through an `<img>` element.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@squish/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const data = new ImageData(
//!   new Uint8ClampedArray(image.rgba_pixels()),
//!   image.width,
//!   image.height,
//! );
//! ctx.putImageData(data, 0, 0);
//! ```

use crate::types::JsDecodedImage;
use squish_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an image from bytes.
///
/// Any format the core decoder recognizes from its magic bytes (PNG, JPEG)
/// is accepted. EXIF orientation is applied automatically so the pixels
/// match what the browser would display.
///
/// # Arguments
///
/// * `bytes` - The raw image file bytes as a `Uint8Array`
///
/// # Returns
///
/// A `JsDecodedImage` containing the decoded RGB pixel data at the image's
/// natural dimensions, or an error if decoding fails.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not a recognized image format
/// - The image data is corrupted or truncated
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for decode bindings.
///
/// Note: Functions returning `Result<T, JsValue>` only work on wasm32
/// targets. For comprehensive decode testing, see the tests in
/// `squish_core::decode` which test the underlying functionality.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_image_invalid() {
        let result = decode_image(&[0, 1, 2, 3]);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_decode_image_empty() {
        let result = decode_image(&[]);
        assert!(result.is_err());
    }
}
