//! Decoding user-selected image files with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, DecodedImage, Orientation};

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// The format is guessed from the magic bytes, so any format enabled in
/// the `image` crate (PNG, JPEG) is accepted regardless of the filename
/// the user picked. Alpha is flattened by the RGB conversion. The output
/// dimensions equal the source dimensions; no resizing takes place.
///
/// # Arguments
///
/// * `bytes` - Raw encoded file bytes
///
/// # Returns
///
/// A `DecodedImage` with RGB pixel data and correct orientation applied.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a recognized
/// image format.
/// Returns `DecodeError::CorruptedFile` if the image data is corrupted.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    // Extract EXIF orientation before decoding
    let orientation = extract_orientation(bytes);

    let img = decode_dynamic(bytes)?;

    // Apply orientation transformation
    let oriented_img = apply_orientation(img, orientation);

    let rgb_img = oriented_img.into_rgb8();
    Ok(DecodedImage::from_rgb_image(rgb_img))
}

/// Decode an image from bytes without applying EXIF orientation.
///
/// Use this when the caller handles orientation separately or the image
/// is known to be correctly oriented already.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let img = decode_dynamic(bytes)?;
    let rgb_img = img.into_rgb8();
    Ok(DecodedImage::from_rgb_image(rgb_img))
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

/// Extract EXIF orientation from encoded image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

/// Extract EXIF orientation value from encoded image bytes (for external use).
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}
