//! Turning the composition surface into a file.
//!
//! Exactly two strategies exist: [`GalleryExport`] for native builds and
//! [`DownloadExport`] for the browser. Which one runs is decided once at
//! startup from the compile target (see [`crate::platform`]).

mod download;
pub mod encode;
mod gallery;

use std::path::PathBuf;
use std::sync::Arc;

use egui::{ColorImage, Pos2, Rect, vec2};

use crate::error::ExportError;

#[cfg(target_arch = "wasm32")]
pub use download::AnchorDownload;
pub use download::{DownloadExport, DownloadTrigger};
#[cfg(not(target_arch = "wasm32"))]
pub use gallery::FsMediaLibrary;
pub use gallery::{GalleryExport, MediaLibrary};

/// Pixels of exactly what the composition surface displayed.
#[derive(Clone, Debug)]
pub struct CapturedSurface {
    image: Arc<ColorImage>,
}

impl CapturedSurface {
    pub fn new(image: ColorImage) -> Self {
        Self {
            image: Arc::new(image),
        }
    }

    /// Crop a full-viewport screenshot down to the surface rectangle (in points).
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::SurfaceClipped`] unless the whole surface is inside
    /// the screenshot. A partial capture would come out stretched.
    pub fn from_screenshot(
        screenshot: &ColorImage,
        surface_rect: Rect,
        pixels_per_point: f32,
    ) -> Result<Self, ExportError> {
        let [width, height] = screenshot.size;
        let bounds = Rect::from_min_size(
            Pos2::ZERO,
            vec2(width as f32, height as f32) / pixels_per_point,
        );
        let visible = surface_rect.intersect(bounds);
        if visible != surface_rect {
            let visible = if visible.is_positive() {
                visible.size()
            } else {
                vec2(0.0, 0.0)
            };
            return Err(ExportError::SurfaceClipped {
                visible_width: visible.x.round() as u32,
                visible_height: visible.y.round() as u32,
                width: surface_rect.width().round() as u32,
                height: surface_rect.height().round() as u32,
            });
        }
        Ok(Self::new(screenshot.region(&surface_rect, Some(pixels_per_point))))
    }

    pub fn image(&self) -> &ColorImage {
        &self.image
    }

    pub fn size(&self) -> [usize; 2] {
        self.image.size
    }
}

/// Where an export ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportReceipt {
    Gallery { path: PathBuf },
    Download { file_name: String },
}

/// A platform-specific way of persisting a captured surface.
///
/// Implementations are blocking; the app runs them off the UI thread where it can.
pub trait ExportStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn export(&self, surface: &CapturedSurface) -> Result<ExportReceipt, ExportError>;
}
