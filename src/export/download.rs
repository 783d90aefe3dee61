use super::encode;
use super::{CapturedSurface, ExportReceipt, ExportStrategy};
use crate::config::ExportConfig;
use crate::error::ExportError;

/// Hands a finished file to the browser as a download.
pub trait DownloadTrigger: Send + Sync {
    fn trigger(&self, file_name: &str, href: &str) -> Result<(), ExportError>;
}

/// Web export: fixed-size JPEG delivered as a data URL download.
pub struct DownloadExport<D> {
    trigger: D,
    file_name: String,
    width: u32,
    height: u32,
    quality: u8,
}

impl<D: DownloadTrigger> DownloadExport<D> {
    pub fn new(trigger: D, config: &ExportConfig) -> Self {
        Self {
            trigger,
            file_name: config.download_file_name.clone(),
            width: config.download_width,
            height: config.download_height,
            quality: config.download_quality,
        }
    }

    pub fn trigger(&self) -> &D {
        &self.trigger
    }
}

impl<D: DownloadTrigger> ExportStrategy for DownloadExport<D> {
    fn name(&self) -> &'static str {
        "download"
    }

    fn export(&self, surface: &CapturedSurface) -> Result<ExportReceipt, ExportError> {
        let rgba = encode::to_rgba_image(surface.image())?;
        let scaled = encode::scale_exact(&rgba, self.width, self.height)?;
        let jpeg = encode::encode_jpeg(&scaled, self.quality)?;
        let href = encode::data_url("image/jpeg", &jpeg);

        self.trigger.trigger(&self.file_name, &href)?;
        log::info!("Triggered download of {} ({} bytes)", self.file_name, jpeg.len());
        Ok(ExportReceipt::Download {
            file_name: self.file_name.clone(),
        })
    }
}

/// Clicks a temporary `<a download>` element.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct AnchorDownload;

#[cfg(target_arch = "wasm32")]
impl DownloadTrigger for AnchorDownload {
    fn trigger(&self, file_name: &str, href: &str) -> Result<(), ExportError> {
        use wasm_bindgen::JsCast as _;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ExportError::Download("no document".to_owned()))?;
        let link = document
            .create_element("a")
            .map_err(|err| ExportError::Download(format!("{:?}", err)))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| ExportError::Download("<a> is not an anchor element".to_owned()))?;

        link.set_download(file_name);
        link.set_href(href);
        link.click();
        Ok(())
    }
}
