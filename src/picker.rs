use crate::error::PickError;
use crate::photo::ImageHandle;

/// File extensions offered in the picker dialog
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Result of asking the user for an image.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    Picked(ImageHandle),
    Canceled,
    Failed(PickError),
}

impl PickOutcome {
    /// Turn the contents of a chosen file into an outcome
    pub fn from_file(name: impl Into<String>, bytes: &[u8]) -> Self {
        match ImageHandle::decode(name, bytes) {
            Ok(handle) => PickOutcome::Picked(handle),
            Err(err) => PickOutcome::Failed(err),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub type PickFuture = futures::future::BoxFuture<'static, PickOutcome>;

// Browser futures hold JS values and never leave the UI thread.
#[cfg(target_arch = "wasm32")]
pub type PickFuture = futures::future::LocalBoxFuture<'static, PickOutcome>;

/// Something that can ask the user for a photo.
pub trait ImageSource {
    fn pick_image(&self) -> PickFuture;
}

/// Native file dialog / browser `<input type="file">` via `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileDialogSource;

impl ImageSource for FileDialogSource {
    fn pick_image(&self) -> PickFuture {
        Box::pin(async {
            let file = rfd::AsyncFileDialog::new()
                .set_title("Choose a photo")
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
                .await;

            let Some(file) = file else {
                log::info!("Image pick canceled");
                return PickOutcome::Canceled;
            };

            let name = file.file_name();
            let bytes = file.read().await;
            log::info!("Read '{}' ({} bytes)", name, bytes.len());
            PickOutcome::from_file(name, &bytes)
        })
    }
}
