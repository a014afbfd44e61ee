//! Compression WASM bindings.
//!
//! This module exposes the squish-core re-encode pipeline to JavaScript:
//! the measured size estimate, the downloadable JPEG bytes, and the
//! suggested download filename.
//!
//! # Functions
//!
//! - [`estimate_kilobytes`] - Measure the re-encoded size at a quality
//! - [`compress_to_jpeg`] - Re-encode image bytes as JPEG
//! - [`download_filename`] - Derive the suggested download filename
//!
//! # Example
//!
//! ```typescript
//! import { compress_to_jpeg, download_filename } from '@squish/wasm';
//!
//! const jpeg = compress_to_jpeg(bytes, 0.8);
//! const blob = new Blob([jpeg], { type: 'image/jpeg' });
//! const link = document.createElement('a');
//! link.href = URL.createObjectURL(blob);
//! link.download = download_filename(file.name, 0.8);
//! link.click();
//! URL.revokeObjectURL(link.href);
//! ```

use squish_core::{estimate, filename, Quality};
use wasm_bindgen::prelude::*;

/// Measure the size of `bytes` re-encoded as JPEG at `quality`.
///
/// This decodes the image, re-encodes it at the given quality, and returns
/// the resulting size in kilobytes rounded to one decimal place. The value
/// is the actual re-encoded byte count, not a heuristic.
///
/// # Arguments
///
/// * `bytes` - The raw image file bytes as a `Uint8Array`
/// * `quality` - Quality in [0.05, 1.0]; out-of-range values are clamped
///
/// # Errors
///
/// Returns an error if decoding or re-encoding fails.
#[wasm_bindgen]
pub fn estimate_kilobytes(bytes: &[u8], quality: f32) -> Result<f64, JsValue> {
    estimate::estimate_kilobytes(bytes, Quality::new(quality))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Re-encode image bytes as JPEG at the given quality.
///
/// These are exactly the bytes the size estimate measures, so the
/// downloaded file size always matches the displayed estimate.
///
/// # Arguments
///
/// * `bytes` - The raw image file bytes as a `Uint8Array`
/// * `quality` - Quality in [0.05, 1.0]; out-of-range values are clamped
///
/// # Returns
///
/// A `Uint8Array` containing the JPEG-encoded bytes.
///
/// # Errors
///
/// Returns an error if decoding or re-encoding fails.
#[wasm_bindgen]
pub fn compress_to_jpeg(bytes: &[u8], quality: f32) -> Result<Vec<u8>, JsValue> {
    estimate::reencode(bytes, Quality::new(quality)).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Derive the suggested download filename.
///
/// # Example
///
/// ```typescript
/// download_filename('photo.png', 0.8); // 'compressed_80pct_photo.jpg'
/// ```
#[wasm_bindgen]
pub fn download_filename(original_name: &str, quality: f32) -> String {
    filename::download_filename(original_name, Quality::new(quality))
}

/// Tests for compression bindings.
///
/// Note: Functions returning `Result<T, JsValue>` only work on wasm32
/// targets; `download_filename` returns a plain `String` and is testable
/// everywhere. For comprehensive pipeline testing, see the tests in
/// `squish_core::estimate`.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_filename_binding() {
        assert_eq!(download_filename("photo.png", 0.8), "compressed_80pct_photo.jpg");
    }

    #[test]
    fn test_download_filename_clamps_quality() {
        assert_eq!(download_filename("a.png", 9.0), "compressed_100pct_a.jpg");
    }
}
