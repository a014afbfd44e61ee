//! JPEG re-encoding at a user-chosen quality.
//!
//! Uses the `image` crate's JPEG encoder. The [`Quality`] scalar from the
//! UI slider is mapped onto the encoder's 1-100 scale; output size grows
//! with quality in expectation, though not strictly for every input.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::DecodedImage;
use crate::Quality;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Re-encode a decoded image as JPEG at the given quality.
///
/// The full pixel buffer is encoded at the image's natural dimensions;
/// no resizing or scaling takes place.
///
/// # Arguments
///
/// * `image` - The decoded RGB image to encode
/// * `quality` - Quality level from the UI slider ([0.05, 1.0])
///
/// # Returns
///
/// JPEG-encoded bytes on success, or an error if encoding fails.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for a zero-dimension image,
/// `EncodeError::InvalidPixelData` if the pixel buffer length doesn't
/// match the dimensions, and `EncodeError::EncodingFailed` if the
/// encoder itself reports an error.
pub fn encode_jpeg(image: &DecodedImage, quality: Quality) -> Result<Vec<u8>, EncodeError> {
    let DecodedImage {
        width,
        height,
        ref pixels,
    } = *image;

    // Validate dimensions
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    // Validate pixel data length
    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality.jpeg_quality());

    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_image(width: u32, height: u32) -> DecodedImage {
        DecodedImage::new(width, height, vec![128u8; (width * height * 3) as usize])
    }

    #[test]
    fn test_encode_jpeg_basic() {
        let result = encode_jpeg(&gray_image(100, 100), Quality::default());
        assert!(result.is_ok());

        let jpeg_bytes = result.unwrap();

        // Check JPEG magic bytes (SOI marker)
        assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);

        // Check JPEG ends with EOI marker
        let len = jpeg_bytes.len();
        assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_quality_affects_size() {
        let img = gradient_image(100, 100);

        let low_q = encode_jpeg(&img, Quality::new(0.2)).unwrap();
        let high_q = encode_jpeg(&img, Quality::new(0.95)).unwrap();

        // Higher quality generally produces larger files
        // (may not always be true for very simple images, but usually is)
        assert!(high_q.len() > low_q.len() || (low_q.len() - high_q.len()) < 100);
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let img = gray_image(10, 10);

        // Out-of-range slider values clamp rather than fail
        assert!(encode_jpeg(&img, Quality::new(0.0)).is_ok());
        assert!(encode_jpeg(&img, Quality::new(3.0)).is_ok());
    }

    #[test]
    fn test_encode_jpeg_invalid_pixel_data_short() {
        let img = DecodedImage {
            width: 100,
            height: 100,
            pixels: vec![128u8; 99 * 100 * 3], // One row short
        };

        let result = encode_jpeg(&img, Quality::default());
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_jpeg_invalid_pixel_data_long() {
        let img = DecodedImage {
            width: 100,
            height: 100,
            pixels: vec![128u8; 101 * 100 * 3], // One row extra
        };

        let result = encode_jpeg(&img, Quality::default());
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_jpeg_zero_width() {
        let img = DecodedImage {
            width: 0,
            height: 100,
            pixels: vec![],
        };

        let result = encode_jpeg(&img, Quality::default());
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_jpeg_zero_height() {
        let img = DecodedImage {
            width: 100,
            height: 0,
            pixels: vec![],
        };

        let result = encode_jpeg(&img, Quality::default());
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_jpeg_small_image() {
        // 1x1 pixel image
        let img = DecodedImage::new(1, 1, vec![255, 0, 0]); // Red pixel

        let result = encode_jpeg(&img, Quality::default());
        assert!(result.is_ok());

        let jpeg_bytes = result.unwrap();
        assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_jpeg_non_square() {
        // Wide image
        let result = encode_jpeg(&gray_image(200, 50), Quality::default());
        assert!(result.is_ok());

        // Tall image
        let result = encode_jpeg(&gray_image(50, 200), Quality::default());
        assert!(result.is_ok());
    }

    fn gradient_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width) as u8);
                pixels.push((y * 255 / height) as u8);
                pixels.push(128u8);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_encode_jpeg_gradient() {
        let result = encode_jpeg(&gradient_image(100, 100), Quality::default());
        assert!(result.is_ok());

        let jpeg_bytes = result.unwrap();
        // Gradient images should produce reasonable file sizes
        assert!(jpeg_bytes.len() > 500); // Not too small
        assert!(jpeg_bytes.len() < 50000); // Not too large for 100x100
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
