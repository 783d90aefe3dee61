//! The session state machine for image selection, sticker placement and export.
//!
//! ```text
//!                 pick ok / use this photo
//!   ┌──────────┐ ───────────────────────────► ┌───────────┐
//!   │   Idle   │                              │  Editing  │ ──► save: capture + export
//!   └──────────┘ ◄─────────────────────────── └───────────┘
//!                          reset
//!
//!   Picker: Closed ──add sticker (Editing)──► Open ──chosen / closed──► Closed
//! ```
//!
//! The picker flag is orthogonal to the editor mode. Nothing in the session is
//! ever cleared except by dropping it: reset only hides the editing controls.
//!
//! All transitions go through [`Session::update`], which either applies the
//! message and returns an optional [`Effect`] for the app shell, or rejects it
//! with a [`TransitionError`] and leaves the session untouched.
use crate::error::TransitionError;
use crate::event::{Effect, Message, Notice};
use crate::export::ExportReceipt;
use crate::photo::ImageHandle;
use crate::picker::PickOutcome;
use crate::stickers::StickerId;

/// Which control bar is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    /// "Choose a photo" / "Use this photo"
    #[default]
    Idle,
    /// Reset / add sticker / save
    Editing,
}

/// What the composition surface shows underneath the sticker.
#[derive(Debug, Clone, PartialEq)]
pub enum BaseImage<'a> {
    Placeholder,
    Selected(&'a ImageHandle),
}

#[derive(Debug, Default)]
pub struct Session {
    selected_image: Option<ImageHandle>,
    sticker: Option<StickerId>,
    mode: EditorMode,
    picker_open: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_image(&self) -> Option<&ImageHandle> {
        self.selected_image.as_ref()
    }

    pub fn sticker(&self) -> Option<StickerId> {
        self.sticker
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditorMode::Editing
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    /// Exactly one of placeholder or selected image is visible
    pub fn visible_base(&self) -> BaseImage<'_> {
        match &self.selected_image {
            Some(handle) => BaseImage::Selected(handle),
            None => BaseImage::Placeholder,
        }
    }

    /// Apply a message.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] when the message's precondition does not hold
    /// (for example saving while idle). The session is unchanged in that case.
    pub fn update(&mut self, message: Message) -> Result<Option<Effect>, TransitionError> {
        let name = message.name();
        let effect = match message {
            Message::PickImageRequested => Some(Effect::LaunchImagePicker),
            Message::PickFinished(outcome) => self.finish_pick(outcome),
            Message::ConfirmUsePhoto => {
                self.require_mode(EditorMode::Idle, name)?;
                self.mode = EditorMode::Editing;
                None
            }
            Message::ResetRequested => {
                self.mode = EditorMode::Idle;
                None
            }
            Message::AddStickerRequested => {
                self.require_mode(EditorMode::Editing, name)?;
                self.picker_open = true;
                None
            }
            Message::StickerChosen(id) => {
                if !self.picker_open {
                    return Err(TransitionError::PickerClosed { message: name });
                }
                self.sticker = Some(id);
                self.picker_open = false;
                None
            }
            Message::PickerClosed => {
                self.picker_open = false;
                None
            }
            Message::SaveRequested => {
                self.require_mode(EditorMode::Editing, name)?;
                Some(Effect::CaptureSurface)
            }
            Message::ExportFinished(result) => match result {
                Ok(ExportReceipt::Gallery { .. }) => Some(Effect::Notify(Notice::SavedToGallery)),
                Ok(ExportReceipt::Download { .. }) | Err(_) => None,
            },
        };

        log::debug!(
            "{} -> mode={:?} picker_open={} sticker={:?}",
            name,
            self.mode,
            self.picker_open,
            self.sticker
        );
        Ok(effect)
    }

    fn finish_pick(&mut self, outcome: PickOutcome) -> Option<Effect> {
        match outcome {
            PickOutcome::Picked(handle) => {
                log::info!("Picked image '{}' ({})", handle.name(), handle.id());
                self.selected_image = Some(handle);
                self.mode = EditorMode::Editing;
                None
            }
            PickOutcome::Canceled => Some(Effect::Notify(Notice::PickCanceled)),
            PickOutcome::Failed(err) => {
                log::warn!("Image pick failed: {}", err);
                Some(Effect::Notify(Notice::PickFailed))
            }
        }
    }

    fn require_mode(&self, mode: EditorMode, message: &'static str) -> Result<(), TransitionError> {
        if self.mode == mode {
            Ok(())
        } else {
            Err(TransitionError::InvalidTransition {
                message,
                mode: self.mode,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::placeholder_image;
    use crate::stickers::catalog;

    fn handle() -> ImageHandle {
        ImageHandle::new("photo.png", placeholder_image(4, 4))
    }

    #[test]
    fn starts_empty() {
        let session = Session::new();
        assert_eq!(session.mode(), EditorMode::Idle);
        assert!(!session.is_picker_open());
        assert!(session.sticker().is_none());
        assert_eq!(session.visible_base(), BaseImage::Placeholder);
    }

    #[test]
    fn pick_request_launches_picker_from_any_mode() {
        let mut session = Session::new();
        assert_eq!(
            session.update(Message::PickImageRequested),
            Ok(Some(Effect::LaunchImagePicker))
        );
        session.update(Message::ConfirmUsePhoto).unwrap();
        assert_eq!(
            session.update(Message::PickImageRequested),
            Ok(Some(Effect::LaunchImagePicker))
        );
    }

    #[test]
    fn failed_pick_notifies_without_state_change() {
        let mut session = Session::new();
        let outcome = PickOutcome::Failed(crate::error::PickError::EmptyFile {
            name: "x.png".into(),
        });
        assert_eq!(
            session.update(Message::PickFinished(outcome)),
            Ok(Some(Effect::Notify(Notice::PickFailed)))
        );
        assert_eq!(session.mode(), EditorMode::Idle);
        assert!(session.selected_image().is_none());
    }

    #[test]
    fn confirm_use_photo_rejected_while_editing() {
        let mut session = Session::new();
        session.update(Message::PickFinished(PickOutcome::Picked(handle()))).unwrap();
        let err = session.update(Message::ConfirmUsePhoto).unwrap_err();
        assert_eq!(
            err,
            TransitionError::InvalidTransition {
                message: "ConfirmUsePhoto",
                mode: EditorMode::Editing,
            }
        );
    }

    #[test]
    fn confirm_after_reset_keeps_picked_image() {
        let mut session = Session::new();
        let picked = handle();
        session.update(Message::PickFinished(PickOutcome::Picked(picked.clone()))).unwrap();
        session.update(Message::ResetRequested).unwrap();
        session.update(Message::ConfirmUsePhoto).unwrap();
        assert!(session.is_editing());
        assert_eq!(session.visible_base(), BaseImage::Selected(&picked));
    }

    #[test]
    fn add_sticker_and_save_need_editing() {
        let mut session = Session::new();
        assert!(session.update(Message::AddStickerRequested).is_err());
        assert!(session.update(Message::SaveRequested).is_err());
        assert!(!session.is_picker_open());
    }

    #[test]
    fn sticker_choice_needs_open_picker() {
        let mut session = Session::new();
        let id = catalog()[0].id;
        assert_eq!(
            session.update(Message::StickerChosen(id)),
            Err(TransitionError::PickerClosed { message: "StickerChosen" })
        );
        assert!(session.sticker().is_none());
    }

    #[test]
    fn picker_stays_open_across_reset() {
        let mut session = Session::new();
        session.update(Message::ConfirmUsePhoto).unwrap();
        session.update(Message::AddStickerRequested).unwrap();
        session.update(Message::ResetRequested).unwrap();
        assert!(session.is_picker_open());
        assert_eq!(session.mode(), EditorMode::Idle);
    }

    #[test]
    fn export_results_never_touch_state() {
        let mut session = Session::new();
        session.update(Message::ConfirmUsePhoto).unwrap();

        let gallery = Ok(ExportReceipt::Gallery {
            path: "/tmp/a.png".into(),
        });
        assert_eq!(
            session.update(Message::ExportFinished(gallery)),
            Ok(Some(Effect::Notify(Notice::SavedToGallery)))
        );

        let download = Ok(ExportReceipt::Download {
            file_name: "sticker-smash.jpeg".into(),
        });
        assert_eq!(session.update(Message::ExportFinished(download)), Ok(None));

        let failed = Err(crate::error::ExportError::EmptyCapture);
        assert_eq!(session.update(Message::ExportFinished(failed)), Ok(None));

        assert!(session.is_editing());
        assert!(session.selected_image().is_none());
    }
}
