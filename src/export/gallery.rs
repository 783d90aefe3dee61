use std::path::PathBuf;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

use super::encode;
use super::{CapturedSurface, ExportReceipt, ExportStrategy};
use crate::error::ExportError;
#[cfg(not(target_arch = "wasm32"))]
use crate::permission::{GalleryPermission, PermissionGate, PermissionStatus};

/// Persistent photo storage on the device.
pub trait MediaLibrary: Send + Sync {
    /// Store an encoded PNG and return where it ended up
    fn save_to_library(&self, png: &[u8]) -> Result<PathBuf, ExportError>;
}

/// Native export: scale to a fixed height, encode losslessly, save to the gallery.
pub struct GalleryExport<L> {
    library: L,
    height: u32,
}

impl<L: MediaLibrary> GalleryExport<L> {
    pub fn new(library: L, height: u32) -> Self {
        Self { library, height }
    }

    pub fn library(&self) -> &L {
        &self.library
    }
}

impl<L: MediaLibrary> ExportStrategy for GalleryExport<L> {
    fn name(&self) -> &'static str {
        "gallery"
    }

    fn export(&self, surface: &CapturedSurface) -> Result<ExportReceipt, ExportError> {
        let rgba = encode::to_rgba_image(surface.image())?;
        let scaled = encode::scale_to_height(&rgba, self.height)?;
        let png = encode::encode_png(&scaled)?;
        log::debug!(
            "Encoded {}x{} PNG ({} bytes)",
            scaled.width(),
            scaled.height(),
            png.len()
        );

        let path = self.library.save_to_library(&png)?;
        Ok(ExportReceipt::Gallery { path })
    }
}

/// The gallery folder on the local filesystem, guarded by [`GalleryPermission`].
#[cfg(not(target_arch = "wasm32"))]
pub struct FsMediaLibrary {
    permission: Arc<GalleryPermission>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FsMediaLibrary {
    pub fn new(permission: Arc<GalleryPermission>) -> Self {
        Self { permission }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl MediaLibrary for FsMediaLibrary {
    fn save_to_library(&self, png: &[u8]) -> Result<PathBuf, ExportError> {
        let status = self.permission.current_status();
        if status != PermissionStatus::Granted {
            return Err(ExportError::PermissionNotGranted(status.to_string()));
        }
        let folder = self
            .permission
            .folder()
            .ok_or_else(|| ExportError::PermissionNotGranted(status.to_string()))?;

        let path = unused_file_name(folder, crate::util::time::timestamp_secs());
        std::fs::write(&path, png).map_err(|err| ExportError::Write {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        log::info!("Saved {} bytes to {}", png.len(), path.display());
        Ok(path)
    }
}

/// `sticker-smash-<secs>.png`, suffixed when several saves land in the same second
#[cfg(not(target_arch = "wasm32"))]
fn unused_file_name(folder: &std::path::Path, secs: u64) -> PathBuf {
    let mut path = folder.join(format!("sticker-smash-{}.png", secs));
    let mut attempt = 1;
    while path.exists() {
        path = folder.join(format!("sticker-smash-{}-{}.png", secs, attempt));
        attempt += 1;
    }
    path
}
