//! Squish Core - Image compression library
//!
//! This crate provides the core functionality for Squish: decoding a
//! user-selected image, re-encoding it as JPEG at an adjustable quality,
//! measuring the resulting size, and deriving the download filename.

pub mod decode;
pub mod encode;
pub mod estimate;
pub mod filename;
pub mod picker;

pub use estimate::{estimate_kilobytes, kilobytes, reencode, Codec, EstimateError, ImageCodec};
pub use filename::download_filename;
pub use picker::{EstimateRequest, PickerController, PickerState, SourceImage};

/// Lossy-encoder quality level.
///
/// A scalar in the closed range [0.05, 1.0] matching the UI slider
/// (5%-100% in 5% steps). Higher values trade larger output for fidelity.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Quality(f32);

impl Quality {
    /// Minimum quality selectable in the UI (5%).
    pub const MIN: f32 = 0.05;
    /// Maximum quality (100%).
    pub const MAX: f32 = 1.0;
    /// Slider step size (5%).
    pub const STEP: f32 = 0.05;
    /// Quality applied when a new image is selected (80%).
    pub const DEFAULT: f32 = 0.8;

    /// Create a quality level, clamping into [0.05, 1.0].
    ///
    /// Non-finite input falls back to the default.
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(Self::MIN, Self::MAX))
        } else {
            Self(Self::DEFAULT)
        }
    }

    /// The raw scalar value in [0.05, 1.0].
    pub fn value(self) -> f32 {
        self.0
    }

    /// Quality as an integer percentage, e.g. 0.8 -> 80.
    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }

    /// Quality mapped to the JPEG encoder's 1-100 scale.
    pub fn jpeg_quality(self) -> u8 {
        ((self.0 * 100.0).round() as u8).clamp(1, 100)
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<f32> for Quality {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}
