mod session;
mod viewport;

pub use session::{BaseImage, EditorMode, Session};
pub use viewport::{LayoutMode, Subscription, ViewportWatcher};
