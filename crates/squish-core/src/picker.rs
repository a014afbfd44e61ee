//! Selection/preview controller.
//!
//! Owns the currently selected image, the quality slider value, and the
//! derived compressed-size estimate. State is replaced wholesale, never
//! mutated in place: selecting an image swaps in a new [`SourceImage`],
//! clearing drops it, and every change that affects the estimate issues a
//! new [`EstimateRequest`].
//!
//! # Supersession
//!
//! Decode/encode may complete asynchronously on the host, so each request
//! carries a generation number. A result is committed only if its
//! generation is still current; a superseded in-flight estimate is
//! discarded, not queued, and a stale value is never displayed.

use serde::{Deserialize, Serialize};

use crate::estimate::kilobytes;
use crate::Quality;

/// The user-selected image: raw encoded bytes plus the metadata needed
/// for the size readout and the download filename.
///
/// Replaced wholesale on a new selection, cleared on removal, never
/// mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceImage {
    /// Raw encoded file bytes as selected by the user.
    pub bytes: Vec<u8>,
    /// MIME type reported by the file picker (e.g. "image/png").
    pub mime_type: String,
    /// Original filename (e.g. "photo.png").
    pub file_name: String,
}

impl SourceImage {
    /// Byte length of the original file.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Original file size in kilobytes, one decimal place.
    pub fn size_kilobytes(&self) -> f64 {
        kilobytes(self.bytes.len())
    }
}

/// A pending recompute issued by the controller.
///
/// The host computes the estimate for `quality` against the current
/// image bytes and reports back via
/// [`PickerController::commit_estimate`] with the same `generation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateRequest {
    /// Supersession tag; only the latest generation may commit.
    pub generation: u64,
}

/// Read-only snapshot of the controller state for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerState {
    /// Original file size in KB, absent when no image is loaded.
    pub original_kb: Option<f64>,
    /// Current slider value.
    pub quality: Quality,
    /// Compressed size in KB, absent until the first estimate commits.
    pub estimate_kb: Option<f64>,
}

/// Controller for the image picker widget.
///
/// State machine: `Empty -> HasImage` on [`select_image`],
/// `HasImage -> Empty` on [`clear_image`], `HasImage -> HasImage` on
/// [`set_quality`]. Initial state is `Empty`; there is no terminal state.
///
/// [`select_image`]: PickerController::select_image
/// [`clear_image`]: PickerController::clear_image
/// [`set_quality`]: PickerController::set_quality
#[derive(Debug, Default)]
pub struct PickerController {
    source: Option<SourceImage>,
    quality: Quality,
    estimate_kb: Option<f64>,
    generation: u64,
}

impl PickerController {
    /// Create a controller in the `Empty` state with the default quality.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected image, if any.
    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    /// The current quality slider value.
    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// The last committed estimate in KB, if any.
    pub fn estimate_kb(&self) -> Option<f64> {
        self.estimate_kb
    }

    /// Whether an image is currently loaded.
    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    /// Snapshot of the displayable state.
    pub fn state(&self) -> PickerState {
        PickerState {
            original_kb: self.source.as_ref().map(SourceImage::size_kilobytes),
            quality: self.quality,
            estimate_kb: self.estimate_kb,
        }
    }

    /// Select a new image.
    ///
    /// Files whose MIME type does not start with `image/` are ignored:
    /// no state change, no request, `None` returned. (The original UI
    /// gives no feedback here either; known UX gap.)
    ///
    /// On accept the previous image is replaced, the quality resets to
    /// the default, the stale estimate is dropped, and a recompute
    /// request is issued. Re-selecting identical bytes goes through the
    /// same path: quality back to default, estimate recomputed from
    /// scratch.
    pub fn select_image(
        &mut self,
        bytes: Vec<u8>,
        mime_type: &str,
        file_name: &str,
    ) -> Option<EstimateRequest> {
        if !mime_type.starts_with("image/") {
            return None;
        }

        self.source = Some(SourceImage {
            bytes,
            mime_type: mime_type.to_string(),
            file_name: file_name.to_string(),
        });
        self.quality = Quality::default();
        self.estimate_kb = None;
        Some(self.next_request())
    }

    /// Remove the current image.
    ///
    /// Both size readouts become absent and any in-flight estimate is
    /// invalidated.
    pub fn clear_image(&mut self) {
        self.source = None;
        self.estimate_kb = None;
        // Invalidate in-flight requests without issuing a new one
        self.generation = self.generation.wrapping_add(1);
    }

    /// Update the quality slider.
    ///
    /// The value is clamped into [0.05, 1.0]. A recompute request is
    /// issued only when an image is loaded; with no image this just
    /// stores the slider position.
    pub fn set_quality(&mut self, quality: f32) -> Option<EstimateRequest> {
        self.quality = Quality::new(quality);
        if self.source.is_some() {
            Some(self.next_request())
        } else {
            None
        }
    }

    /// Commit a computed estimate.
    ///
    /// Returns `true` and updates the displayed estimate only when
    /// `generation` matches the latest issued request (last-write-wins).
    /// A late result for a superseded request is discarded and the
    /// previous value stays displayed. A single assignment per commit;
    /// failed computations are simply never committed, which also leaves
    /// the previous valid estimate in place.
    pub fn commit_estimate(&mut self, request: EstimateRequest, estimate_kb: f64) -> bool {
        if request.generation != self.generation || self.source.is_none() {
            return false;
        }
        self.estimate_kb = Some(estimate_kb);
        true
    }

    fn next_request(&mut self) -> EstimateRequest {
        self.generation = self.generation.wrapping_add(1);
        EstimateRequest {
            generation: self.generation,
        }
    }
}
