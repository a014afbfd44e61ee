//! Download filename derivation.

use crate::Quality;

/// Build the suggested filename for the downloaded JPEG.
///
/// The pattern is `compressed_<percent>pct_<stem>.jpg`, where `percent`
/// is the quality rounded to an integer percentage and `stem` is the
/// original filename up to the first `.`.
///
/// # Example
///
/// `photo.png` at quality 0.8 becomes `compressed_80pct_photo.jpg`.
pub fn download_filename(original_name: &str, quality: Quality) -> String {
    // First dot, not last: "photo.backup.png" -> "photo"
    let stem = original_name
        .split('.')
        .next()
        .unwrap_or(original_name);
    format!("compressed_{}pct_{}.jpg", quality.percent(), stem)
}
