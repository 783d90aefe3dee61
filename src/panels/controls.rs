use eframe::egui;

use crate::components::{CircleButton, FooterButton, IconButton};
use crate::event::Message;
use crate::state::{EditorMode, LayoutMode};

/// The control bar under the composition surface.
///
/// Idle shows the photo choice buttons, laid out by viewport width; editing
/// shows reset / add sticker / save in a single row.
pub fn controls(ui: &mut egui::Ui, mode: EditorMode, layout: LayoutMode, messages: &mut Vec<Message>) {
    match mode {
        EditorMode::Idle => match layout {
            LayoutMode::Narrow => {
                ui.vertical_centered(|ui| footer_buttons(ui, messages));
            }
            LayoutMode::Wide => {
                ui.horizontal(|ui| footer_buttons(ui, messages));
            }
        },
        EditorMode::Editing => {
            ui.horizontal(|ui| {
                if IconButton::new("🔄", "Reset").show(ui).clicked() {
                    messages.push(Message::ResetRequested);
                }
                ui.add_space(24.0);
                if CircleButton.show(ui).clicked() {
                    messages.push(Message::AddStickerRequested);
                }
                ui.add_space(24.0);
                if IconButton::new("💾", "Save").show(ui).clicked() {
                    messages.push(Message::SaveRequested);
                }
            });
        }
    }
}

fn footer_buttons(ui: &mut egui::Ui, messages: &mut Vec<Message>) {
    if FooterButton::new("Choose a photo", true).show(ui).clicked() {
        messages.push(Message::PickImageRequested);
    }
    if FooterButton::new("Use this photo", false).show(ui).clicked() {
        messages.push(Message::ConfirmUsePhoto);
    }
}

/// Width of the control bar, used to center it
pub fn controls_width(mode: EditorMode, layout: LayoutMode) -> f32 {
    match (mode, layout) {
        (EditorMode::Idle, LayoutMode::Narrow) => 320.0,
        (EditorMode::Idle, LayoutMode::Wide) => 648.0,
        (EditorMode::Editing, _) => 64.0 + 24.0 + 84.0 + 24.0 + 64.0,
    }
}
