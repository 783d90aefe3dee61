use serde::{Deserialize, Serialize};

/// Fixed layout numbers for the editor screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewports narrower than this (in points) stack the footer buttons vertically.
    pub narrow_breakpoint: f32,
    pub surface_width: f32,
    pub surface_height: f32,
    pub surface_rounding: f32,
    pub sticker_size: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: 768.0,
            surface_width: 320.0,
            surface_height: 440.0,
            surface_rounding: 18.0,
            sticker_size: 40.0,
        }
    }
}

/// Output parameters for both export procedures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name used for the browser download.
    pub download_file_name: String,
    pub download_width: u32,
    pub download_height: u32,
    /// JPEG quality for the browser download, 1..=100.
    pub download_quality: u8,
    /// Height of the image written to the gallery; width keeps the aspect ratio.
    pub gallery_height: u32,
    /// Folder created under the user's pictures directory.
    pub gallery_folder: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            download_file_name: "sticker-smash.jpeg".to_owned(),
            download_width: 320,
            download_height: 440,
            download_quality: 95,
            gallery_height: 440,
            gallery_folder: "StickerSmash".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing sections fall back to the built-in values
pub struct AppConfig {
    pub layout: LayoutConfig,
    pub export: ExportConfig,
}

impl AppConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// The app itself always starts from [`AppConfig::default`]. This is the
    /// entry point for a host that embeds [`crate::StickerSmashApp`] through
    /// [`crate::StickerSmashApp::with_services`], and for tests.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
