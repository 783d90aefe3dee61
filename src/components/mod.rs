mod buttons;

pub use buttons::{CircleButton, FooterButton, IconButton};
