//! The stateful widget controller exposed to JavaScript.
//!
//! [`Compressor`] wraps the core `PickerController` together with the
//! built-in codec. Decode/encode inside WASM is synchronous, so the
//! wrapper drives the request/commit cycle itself on every change; the
//! generation mechanism lives in the core for hosts that schedule the
//! work asynchronously (e.g. on a Web Worker).
//!
//! # Example
//!
//! ```typescript
//! import { Compressor } from '@squish/wasm';
//!
//! const compressor = new Compressor();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//!
//! if (compressor.select_image(bytes, file.type, file.name)) {
//!   render(compressor.state());
//! }
//!
//! slider.oninput = () => {
//!   compressor.set_quality(slider.valueAsNumber);
//!   render(compressor.state());
//! };
//! ```

use squish_core::estimate::{estimate_kilobytes_with, reencode_with, ImageCodec};
use squish_core::{download_filename, PickerController};
use wasm_bindgen::prelude::*;

/// The image compressor widget state: selected image, quality slider,
/// and the live compressed-size estimate.
#[wasm_bindgen]
#[derive(Default)]
pub struct Compressor {
    controller: PickerController,
    codec: ImageCodec,
}

#[wasm_bindgen]
impl Compressor {
    /// Create an empty compressor with the default quality (0.8).
    #[wasm_bindgen(constructor)]
    pub fn new() -> Compressor {
        Compressor::default()
    }

    /// Select a new image.
    ///
    /// Returns `false` (and changes nothing) when the MIME type does not
    /// start with `image/`. On accept the quality resets to the default
    /// and the estimate is recomputed.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The raw file bytes as a `Uint8Array`
    /// * `mime_type` - The MIME type reported by the file picker
    /// * `file_name` - The original filename (used for the download name)
    pub fn select_image(&mut self, bytes: Vec<u8>, mime_type: &str, file_name: &str) -> bool {
        match self.controller.select_image(bytes, mime_type, file_name) {
            Some(request) => {
                self.resolve(request);
                true
            }
            None => false,
        }
    }

    /// Remove the current image; both size readouts become absent.
    pub fn clear_image(&mut self) {
        self.controller.clear_image();
    }

    /// Update the quality slider (clamped to [0.05, 1.0]) and recompute
    /// the estimate if an image is loaded.
    pub fn set_quality(&mut self, quality: f32) {
        if let Some(request) = self.controller.set_quality(quality) {
            self.resolve(request);
        }
    }

    /// Whether an image is currently loaded.
    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.controller.has_image()
    }

    /// The current quality slider value in [0.05, 1.0].
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> f32 {
        self.controller.quality().value()
    }

    /// The current quality as an integer percentage (5-100).
    #[wasm_bindgen(getter)]
    pub fn quality_percent(&self) -> u32 {
        self.controller.quality().percent()
    }

    /// Original file size in KB (one decimal), or undefined when empty.
    #[wasm_bindgen(getter)]
    pub fn original_kb(&self) -> Option<f64> {
        self.controller.source().map(|s| s.size_kilobytes())
    }

    /// Compressed size estimate in KB (one decimal), or undefined when no
    /// estimate is available. On a decode/encode failure the previous
    /// valid estimate stays in place.
    #[wasm_bindgen(getter)]
    pub fn estimate_kb(&self) -> Option<f64> {
        self.controller.estimate_kb()
    }

    /// Snapshot of the displayable state as a plain JS object
    /// `{ original_kb, quality, estimate_kb }`.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.controller.state())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Re-encode the current image at the current quality for download.
    ///
    /// These are exactly the bytes the displayed estimate was measured
    /// from.
    ///
    /// # Errors
    ///
    /// Returns an error when no image is loaded or re-encoding fails.
    pub fn download_bytes(&self) -> Result<Vec<u8>, JsValue> {
        let source = self
            .controller
            .source()
            .ok_or_else(|| JsValue::from_str("No image selected"))?;
        reencode_with(&self.codec, &source.bytes, self.controller.quality())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Suggested filename for the download, e.g. `compressed_80pct_photo.jpg`.
    ///
    /// # Errors
    ///
    /// Returns an error when no image is loaded.
    pub fn download_filename(&self) -> Result<String, JsValue> {
        let source = self
            .controller
            .source()
            .ok_or_else(|| JsValue::from_str("No image selected"))?;
        Ok(download_filename(
            &source.file_name,
            self.controller.quality(),
        ))
    }
}

impl Compressor {
    /// Run the pending estimate request against the built-in codec.
    ///
    /// Failures are not committed, so the previous valid estimate stays
    /// displayed and the widget remains interactive.
    fn resolve(&mut self, request: squish_core::EstimateRequest) {
        let Some(source) = self.controller.source() else {
            return;
        };
        let quality = self.controller.quality();
        if let Ok(kb) = estimate_kilobytes_with(&self.codec, &source.bytes, quality) {
            self.controller.commit_estimate(request, kb);
        }
    }
}
