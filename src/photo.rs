use std::fmt;
use std::sync::Arc;

use egui::{Color32, ColorImage, Vec2};
use image::DynamicImage;
use image::imageops::FilterType;

use crate::error::PickError;

/// Largest side a decoded photo keeps. Fits the smallest common GPU texture
/// limit (WebGL and egui's headless default are both 2048).
pub const MAX_IMAGE_SIDE: usize = 2048;

/// Unique identifier for a picked image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(uuid::Uuid);

impl ImageId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to a picked image.
///
/// Cloning is cheap: the decoded pixels are shared.
#[derive(Clone)]
pub struct ImageHandle {
    id: ImageId,
    name: String,
    pixels: Arc<ColorImage>,
}

impl ImageHandle {
    pub fn new(name: impl Into<String>, pixels: ColorImage) -> Self {
        Self {
            id: ImageId::new(),
            name: name.into(),
            pixels: Arc::new(pixels),
        }
    }

    /// Decode encoded bytes (png, jpeg, ...) into a handle.
    ///
    /// Photos larger than [`MAX_IMAGE_SIDE`] are shrunk to fit, keeping their
    /// aspect ratio.
    pub fn decode(name: impl Into<String>, bytes: &[u8]) -> Result<Self, PickError> {
        let name = name.into();
        if bytes.is_empty() {
            return Err(PickError::EmptyFile { name });
        }

        let decoded = image::load_from_memory(bytes).map_err(|err| PickError::Decode {
            name: name.clone(),
            reason: err.to_string(),
        })?;
        log::debug!(
            "Decoded image '{}': {}x{}",
            name,
            decoded.width(),
            decoded.height()
        );

        Ok(Self::new(name, to_color_image(&fit_to_side(decoded, MAX_IMAGE_SIDE))))
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pixels(&self) -> &Arc<ColorImage> {
        &self.pixels
    }

    pub fn size(&self) -> [usize; 2] {
        self.pixels.size
    }

    /// Size of the image scaled to fit inside `bounds`, keeping its aspect ratio
    pub fn fit_within(&self, bounds: Vec2) -> Vec2 {
        let [w, h] = self.size();
        if w == 0 || h == 0 {
            return Vec2::ZERO;
        }
        let scale = (bounds.x / w as f32).min(bounds.y / h as f32);
        Vec2::new(w as f32 * scale, h as f32 * scale)
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("size", &self.size())
            .finish()
    }
}

/// Shrink `image` so neither side exceeds `max_side`. Smaller images are
/// returned as they are.
pub fn fit_to_side(image: DynamicImage, max_side: usize) -> DynamicImage {
    let max_side = max_side.max(1) as u32;
    if image.width() <= max_side && image.height() <= max_side {
        return image;
    }
    log::info!(
        "Downscaling {}x{} image to fit {}px",
        image.width(),
        image.height(),
        max_side
    );
    image.resize(max_side, max_side, FilterType::Triangle)
}

/// Same as [`fit_to_side`] for an image that is already in egui's format
pub fn fit_color_image(pixels: &ColorImage, max_side: usize) -> ColorImage {
    let [width, height] = pixels.size;
    let raw: Vec<u8> = pixels
        .pixels
        .iter()
        .flat_map(|pixel| pixel.to_srgba_unmultiplied())
        .collect();
    match image::RgbaImage::from_raw(width as u32, height as u32, raw) {
        Some(rgba) => to_color_image(&fit_to_side(DynamicImage::ImageRgba8(rgba), max_side)),
        None => pixels.clone(),
    }
}

fn to_color_image(image: &DynamicImage) -> ColorImage {
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

/// The built-in background shown until the user picks a photo.
pub fn placeholder_image(width: usize, height: usize) -> ColorImage {
    let top = Color32::from_rgb(255, 211, 105);
    let bottom = Color32::from_rgb(233, 84, 112);
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        let t = if height > 1 { y as f32 / (height - 1) as f32 } else { 0.0 };
        let row = lerp_color(top, bottom, t);
        pixels.extend(std::iter::repeat(row).take(width));
    }
    ColorImage {
        size: [width, height],
        pixels,
    }
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}
