//! Uniform image downscaling for oversized selections.

use std::io::Cursor;

use image::ImageFormat;
use image::imageops::FilterType;

use crate::error::FileError;

/// Scale both dimensions by `max_size / max(width, height)`, rounded.
/// Aspect ratio is preserved. The ratio is not clamped to 1.0; callers
/// decide what a ratio at or above 1.0 means.
pub fn scaled_dimensions(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    let ratio = f64::from(max_size) / f64::from(width.max(height));
    let scaled_width = (f64::from(width) * ratio).round() as u32;
    let scaled_height = (f64::from(height) * ratio).round() as u32;
    (scaled_width, scaled_height)
}

/// Decode an image payload, downscale it so the longer edge equals
/// `max_size`, and re-encode as JPEG. A scale ratio at or above 1.0 is a
/// no-op: the original bytes are returned untouched.
pub fn resize_image(bytes: &[u8], max_size: u32) -> Result<Option<Vec<u8>>, FileError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|source| FileError::Decode { source })?;

    let (width, height) = (decoded.width(), decoded.height());
    if width.max(height) <= max_size {
        return Ok(None);
    }

    let (scaled_width, scaled_height) = scaled_dimensions(width, height, max_size);
    let resized = decoded.resize_exact(scaled_width, scaled_height, FilterType::Triangle);

    let mut out = Cursor::new(Vec::new());
    resized
        .to_rgb8()
        .write_to(&mut out, ImageFormat::Jpeg)
        .map_err(|source| FileError::Encode { source })?;
    Ok(Some(out.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::new(width, height));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn dimensions_scale_uniformly() {
        assert_eq!(scaled_dimensions(200, 100, 50), (50, 25));
        assert_eq!(scaled_dimensions(100, 200, 50), (25, 50));
        assert_eq!(scaled_dimensions(30, 30, 60), (60, 60));
    }

    #[test]
    fn rounding_keeps_aspect_within_tolerance() {
        let (w, h) = scaled_dimensions(1333, 777, 100);
        assert_eq!(w, 100);
        let expected = 777.0 * 100.0 / 1333.0;
        assert!((f64::from(h) - expected).abs() <= 0.5);
    }

    #[test]
    fn oversized_image_is_downscaled() {
        let resized = resize_image(&png_bytes(64, 32), 16).unwrap().unwrap();
        let decoded = image::load_from_memory(&resized).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
    }

    #[test]
    fn small_image_passes_through() {
        assert!(resize_image(&png_bytes(8, 8), 16).unwrap().is_none());
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(matches!(
            resize_image(b"not an image", 16),
            Err(FileError::Decode { .. })
        ));
    }
}
