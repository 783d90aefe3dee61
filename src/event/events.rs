use crate::error::ExportError;
use crate::export::ExportReceipt;
use crate::picker::PickOutcome;
use crate::stickers::StickerId;

/// Everything that can drive the session state machine.
///
/// UI interactions are pushed synchronously each frame; background tasks
/// (image pick, export) post their completion through the mailbox.
#[derive(Debug, Clone)]
pub enum Message {
    PickImageRequested,
    PickFinished(PickOutcome),
    /// "Use this photo": start editing whatever is shown right now
    ConfirmUsePhoto,
    ResetRequested,
    AddStickerRequested,
    StickerChosen(StickerId),
    PickerClosed,
    SaveRequested,
    ExportFinished(Result<ExportReceipt, ExportError>),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Message::PickImageRequested => "PickImageRequested",
            Message::PickFinished(_) => "PickFinished",
            Message::ConfirmUsePhoto => "ConfirmUsePhoto",
            Message::ResetRequested => "ResetRequested",
            Message::AddStickerRequested => "AddStickerRequested",
            Message::StickerChosen(_) => "StickerChosen",
            Message::PickerClosed => "PickerClosed",
            Message::SaveRequested => "SaveRequested",
            Message::ExportFinished(_) => "ExportFinished",
        }
    }
}

/// Side effects requested by the state machine, carried out by the app shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LaunchImagePicker,
    /// Rasterize the composition surface and hand it to the export strategy
    CaptureSurface,
    Notify(Notice),
}

/// Blocking, user-visible alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    PickCanceled,
    PickFailed,
    SavedToGallery,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::PickCanceled => "You did not select any image.",
            Notice::PickFailed => "That file could not be opened as an image.",
            Notice::SavedToGallery => "Saved Screenshot to Gallery",
        }
    }
}
