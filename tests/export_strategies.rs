use std::path::PathBuf;
use std::sync::Arc;

use base64::Engine as _;
use egui::{Color32, ColorImage};
use parking_lot::Mutex;

use sticker_smash::config::ExportConfig;
use sticker_smash::error::ExportError;
use sticker_smash::export::{DownloadExport, DownloadTrigger, GalleryExport, MediaLibrary};
use sticker_smash::{CapturedSurface, ExportReceipt, ExportStrategy};

#[derive(Clone, Default)]
struct RecordingLibrary {
    saved: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MediaLibrary for RecordingLibrary {
    fn save_to_library(&self, png: &[u8]) -> Result<PathBuf, ExportError> {
        let mut saved = self.saved.lock();
        saved.push(png.to_vec());
        Ok(PathBuf::from(format!("/gallery/{}.png", saved.len())))
    }
}

#[derive(Clone, Default)]
struct RecordingTrigger {
    downloads: Arc<Mutex<Vec<(String, String)>>>,
}

impl DownloadTrigger for RecordingTrigger {
    fn trigger(&self, file_name: &str, href: &str) -> Result<(), ExportError> {
        self.downloads
            .lock()
            .push((file_name.to_owned(), href.to_owned()));
        Ok(())
    }
}

fn surface(width: usize, height: usize) -> CapturedSurface {
    CapturedSurface::new(ColorImage::new([width, height], Color32::from_rgb(30, 120, 220)))
}

#[test]
fn test_gallery_export_scales_to_height() {
    let library = RecordingLibrary::default();
    let strategy = GalleryExport::new(library.clone(), 440);

    let receipt = strategy.export(&surface(640, 880)).unwrap();

    assert_eq!(
        receipt,
        ExportReceipt::Gallery {
            path: PathBuf::from("/gallery/1.png")
        }
    );
    let saved = library.saved.lock();
    assert_eq!(saved.len(), 1);
    let png = image::load_from_memory_with_format(&saved[0], image::ImageFormat::Png).unwrap();
    assert_eq!((png.width(), png.height()), (320, 440));
}

#[test]
fn test_gallery_export_is_lossless() {
    let library = RecordingLibrary::default();
    let strategy = GalleryExport::new(library.clone(), 440);
    strategy.export(&surface(320, 440)).unwrap();

    let saved = library.saved.lock();
    let png = image::load_from_memory(&saved[0]).unwrap().to_rgba8();
    assert_eq!(png.get_pixel(10, 10).0, [30, 120, 220, 255]);
}

#[test]
fn test_download_export_produces_one_jpeg_download() {
    let trigger = RecordingTrigger::default();
    let strategy = DownloadExport::new(trigger.clone(), &ExportConfig::default());

    let receipt = strategy.export(&surface(400, 500)).unwrap();

    assert_eq!(
        receipt,
        ExportReceipt::Download {
            file_name: "sticker-smash.jpeg".to_owned()
        }
    );
    let downloads = trigger.downloads.lock();
    assert_eq!(downloads.len(), 1);

    let (file_name, href) = &downloads[0];
    assert_eq!(file_name, "sticker-smash.jpeg");
    let encoded = href
        .strip_prefix("data:image/jpeg;base64,")
        .expect("data URL prefix");
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .unwrap();
    let jpeg = image::load_from_memory_with_format(&bytes, image::ImageFormat::Jpeg).unwrap();
    assert_eq!((jpeg.width(), jpeg.height()), (320, 440));
}

#[test]
fn test_each_save_exports_again() {
    let trigger = RecordingTrigger::default();
    let strategy = DownloadExport::new(trigger.clone(), &ExportConfig::default());
    strategy.export(&surface(320, 440)).unwrap();
    strategy.export(&surface(320, 440)).unwrap();
    assert_eq!(trigger.downloads.lock().len(), 2);
}

#[test]
fn test_strategies_report_their_kind() {
    let gallery: Arc<dyn ExportStrategy> =
        Arc::new(GalleryExport::new(RecordingLibrary::default(), 440));
    let download: Arc<dyn ExportStrategy> = Arc::new(DownloadExport::new(
        RecordingTrigger::default(),
        &ExportConfig::default(),
    ));
    assert_eq!(gallery.name(), "gallery");
    assert_eq!(download.name(), "download");
}

#[test]
fn test_failures_are_errors_not_panics() {
    let library = RecordingLibrary::default();
    let strategy = GalleryExport::new(library.clone(), 440);
    assert_eq!(
        strategy.export(&surface(0, 0)),
        Err(ExportError::EmptyCapture)
    );
    assert!(library.saved.lock().is_empty());
}
