#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod panels;
pub mod permission;
pub mod photo;
pub mod picker;
pub mod platform;
pub mod state;
pub mod stickers;
pub mod tasks;
pub mod texture_manager;
#[cfg(not(target_arch = "wasm32"))]
pub mod util;

pub use app::StickerSmashApp;
pub use config::AppConfig;
pub use event::{Effect, Message, Notice};
pub use export::{CapturedSurface, ExportReceipt, ExportStrategy};
pub use photo::ImageHandle;
pub use platform::{Platform, PlatformServices};
pub use state::{EditorMode, LayoutMode, Session, ViewportWatcher};
