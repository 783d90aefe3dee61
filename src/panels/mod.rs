mod composition;
mod controls;
mod notices;
mod sticker_picker;

pub use composition::CompositionSurface;
pub use controls::{controls, controls_width};
pub use notices::NoticeQueue;
pub use sticker_picker::sticker_picker;
