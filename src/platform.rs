use std::sync::Arc;

use crate::config::AppConfig;
use crate::export::ExportStrategy;
use crate::permission::PermissionGate;
use crate::picker::ImageSource;

/// Runtime identity of the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Native,
    Web,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Platform::Web
        } else {
            Platform::Native
        }
    }
}

/// The external collaborators of the app, chosen once at startup.
pub struct PlatformServices {
    pub platform: Platform,
    pub image_source: Box<dyn ImageSource>,
    pub permission: Arc<dyn PermissionGate>,
    pub exporter: Arc<dyn ExportStrategy>,
}

impl std::fmt::Debug for PlatformServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformServices")
            .field("platform", &self.platform)
            .field("exporter", &self.exporter.name())
            .field("permission", &self.permission.current_status())
            .finish()
    }
}

impl PlatformServices {
    /// Gallery export behind a filesystem permission
    #[cfg(not(target_arch = "wasm32"))]
    pub fn for_current(config: &AppConfig) -> Self {
        use crate::export::{FsMediaLibrary, GalleryExport};
        use crate::permission::GalleryPermission;
        use crate::picker::FileDialogSource;

        let permission = Arc::new(GalleryPermission::new(&config.export.gallery_folder));
        let exporter = GalleryExport::new(
            FsMediaLibrary::new(permission.clone()),
            config.export.gallery_height,
        );
        Self {
            platform: Platform::Native,
            image_source: Box::new(FileDialogSource),
            permission,
            exporter: Arc::new(exporter),
        }
    }

    /// Browser download, no permission needed
    #[cfg(target_arch = "wasm32")]
    pub fn for_current(config: &AppConfig) -> Self {
        use crate::export::{AnchorDownload, DownloadExport};
        use crate::permission::BrowserPermission;
        use crate::picker::FileDialogSource;

        Self {
            platform: Platform::Web,
            image_source: Box::new(FileDialogSource),
            permission: Arc::new(BrowserPermission),
            exporter: Arc::new(DownloadExport::new(AnchorDownload, &config.export)),
        }
    }
}
