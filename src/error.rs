use std::fmt;

use thiserror::Error;

use crate::state::EditorMode;

/// Errors that can occur during session state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// The message is not accepted in the current editor mode
    InvalidTransition {
        message: &'static str,
        mode: EditorMode,
    },
    /// The message needs the sticker picker to be open
    PickerClosed { message: &'static str },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTransition { message, mode } => {
                write!(f, "Cannot handle {} while {:?}", message, mode)
            }
            Self::PickerClosed { message } => {
                write!(f, "Cannot handle {} while the sticker picker is closed", message)
            }
        }
    }
}

impl std::error::Error for TransitionError {}

/// Errors from the image source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PickError {
    #[error("Failed to decode image '{name}': {reason}")]
    Decode { name: String, reason: String },

    #[error("Picked file '{name}' is empty")]
    EmptyFile { name: String },
}

/// Errors from capturing or persisting the composition.
///
/// These never reach the user; the app logs them and carries on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    #[error("Captured surface is empty")]
    EmptyCapture,

    #[error(
        "Composition surface is not fully on screen ({visible_width}x{visible_height} of {width}x{height} points visible)"
    )]
    SurfaceClipped {
        visible_width: u32,
        visible_height: u32,
        width: u32,
        height: u32,
    },

    #[error("Invalid export dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image encoding failed: {0}")]
    Encoding(String),

    #[error("Media library permission is {0}")]
    PermissionNotGranted(String),

    #[error("Failed to write '{path}': {reason}")]
    Write { path: String, reason: String },

    #[error("Download could not be triggered: {0}")]
    Download(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PermissionError {
    #[error("No pictures or home directory available")]
    NoGalleryLocation,

    #[error("Cannot create gallery folder '{path}': {reason}")]
    CreateFolder { path: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_error_names_message_and_mode() {
        let err = TransitionError::InvalidTransition {
            message: "SaveRequested",
            mode: EditorMode::Idle,
        };
        assert_eq!(err.to_string(), "Cannot handle SaveRequested while Idle");
    }

    #[test]
    fn export_error_display() {
        let err = ExportError::InvalidDimensions { width: 0, height: 440 };
        assert_eq!(err.to_string(), "Invalid export dimensions 0x440");
    }
}
