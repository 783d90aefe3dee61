#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

#[cfg(not(target_arch = "wasm32"))]
use parking_lot::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use crate::error::PermissionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// Never asked
    Unknown,
}

impl std::fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            PermissionStatus::Granted => "granted",
            PermissionStatus::Denied => "denied",
            PermissionStatus::Unknown => "unknown",
        };
        f.write_str(text)
    }
}

/// Access control in front of persistent storage.
pub trait PermissionGate: Send + Sync {
    fn current_status(&self) -> PermissionStatus;
    fn request_grant(&self);
}

/// Asks the gate for a grant at most once while its status is unknown.
#[derive(Debug, Default)]
pub struct PermissionGuard {
    requested: bool,
}

impl PermissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called every frame. Issues the single request when needed and returns
    /// the status the gate reports afterwards.
    pub fn poll(&mut self, gate: &dyn PermissionGate) -> PermissionStatus {
        let status = gate.current_status();
        if status != PermissionStatus::Unknown || self.requested {
            return status;
        }

        self.requested = true;
        log::info!("Media library permission unknown, requesting grant");
        gate.request_grant();
        gate.current_status()
    }

    pub fn has_requested(&self) -> bool {
        self.requested
    }
}

/// Browser downloads need no grant.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserPermission;

impl PermissionGate for BrowserPermission {
    fn current_status(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    fn request_grant(&self) {}
}

/// Write access to the gallery folder on the local filesystem.
///
/// Granting means the folder exists (or could be created); the status stays
/// unknown until the first request.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct GalleryPermission {
    folder: Option<PathBuf>,
    status: Mutex<PermissionStatus>,
}

#[cfg(not(target_arch = "wasm32"))]
impl GalleryPermission {
    /// `<Pictures>/<folder_name>`, falling back to the home directory
    pub fn new(folder_name: &str) -> Self {
        let folder = dirs::picture_dir()
            .or_else(dirs::home_dir)
            .map(|base| base.join(folder_name));
        Self {
            folder,
            status: Mutex::new(PermissionStatus::Unknown),
        }
    }

    pub fn with_folder(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: Some(folder.into()),
            status: Mutex::new(PermissionStatus::Unknown),
        }
    }

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    fn ensure_folder(&self) -> Result<(), PermissionError> {
        let folder = self.folder.as_ref().ok_or(PermissionError::NoGalleryLocation)?;
        std::fs::create_dir_all(folder).map_err(|err| PermissionError::CreateFolder {
            path: folder.display().to_string(),
            reason: err.to_string(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PermissionGate for GalleryPermission {
    fn current_status(&self) -> PermissionStatus {
        *self.status.lock()
    }

    fn request_grant(&self) {
        let status = match self.ensure_folder() {
            Ok(()) => {
                log::info!("Gallery folder ready: {:?}", self.folder);
                PermissionStatus::Granted
            }
            Err(err) => {
                log::error!("Gallery permission denied: {}", err);
                PermissionStatus::Denied
            }
        };
        *self.status.lock() = status;
    }
}
