use std::io::Cursor;

use base64::Engine as _;
use egui::ColorImage;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{ImageEncoder, RgbaImage};

use crate::error::ExportError;

/// Convert a captured egui image into an `image` buffer
pub fn to_rgba_image(capture: &ColorImage) -> Result<RgbaImage, ExportError> {
    let [width, height] = capture.size;
    if width == 0 || height == 0 || capture.pixels.is_empty() {
        return Err(ExportError::EmptyCapture);
    }

    let raw: Vec<u8> = capture
        .pixels
        .iter()
        .flat_map(|pixel| pixel.to_srgba_unmultiplied())
        .collect();
    RgbaImage::from_raw(width as u32, height as u32, raw).ok_or(ExportError::InvalidDimensions {
        width: width as u32,
        height: height as u32,
    })
}

/// Resize to exactly `width` x `height`
pub fn scale_exact(rgba: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage, ExportError> {
    if width == 0 || height == 0 {
        return Err(ExportError::InvalidDimensions { width, height });
    }
    if rgba.dimensions() == (width, height) {
        return Ok(rgba.clone());
    }
    Ok(image::imageops::resize(rgba, width, height, FilterType::Triangle))
}

/// Resize to `height`, keeping the aspect ratio
pub fn scale_to_height(rgba: &RgbaImage, height: u32) -> Result<RgbaImage, ExportError> {
    let (w, h) = rgba.dimensions();
    if height == 0 || h == 0 {
        return Err(ExportError::InvalidDimensions { width: w, height });
    }
    let width = ((w as f64 * height as f64 / h as f64).round() as u32).max(1);
    scale_exact(rgba, width, height)
}

pub fn encode_png(rgba: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let (width, height) = rgba.dimensions();
    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(rgba, width, height, image::ExtendedColorType::Rgba8)
        .map_err(|e| ExportError::Encoding(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// JPEG has no alpha channel, so the image is flattened to RGB first
pub fn encode_jpeg(rgba: &RgbaImage, quality: u8) -> Result<Vec<u8>, ExportError> {
    let (width, height) = rgba.dimensions();
    let rgb = image::DynamicImage::ImageRgba8(rgba.clone()).to_rgb8();
    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(&rgb, width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| ExportError::Encoding(e.to_string()))?;
    Ok(buffer.into_inner())
}

pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}
