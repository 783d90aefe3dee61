use eframe::egui;

use crate::event::Message;
use crate::stickers;

/// Bottom sheet listing the sticker catalog.
///
/// Choosing a sticker reports the choice and then closes the sheet, the same
/// as the close button would.
pub fn sticker_picker(ctx: &egui::Context, open: bool, messages: &mut Vec<Message>) {
    if !open {
        return;
    }

    egui::TopBottomPanel::bottom("sticker_picker")
        .resizable(false)
        .exact_height(160.0)
        .frame(egui::Frame::none().fill(egui::Color32::from_rgb(37, 41, 46)))
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(egui::Color32::from_rgb(70, 73, 80))
                .inner_margin(egui::Margin::symmetric(20.0, 10.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new("Choose a sticker")
                                .color(egui::Color32::WHITE)
                                .size(16.0),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("✖").on_hover_text("Close").clicked() {
                                messages.push(Message::PickerClosed);
                            }
                        });
                    });
                });

            egui::ScrollArea::horizontal().show(ui, |ui| {
                ui.horizontal_centered(|ui| {
                    for sticker in stickers::catalog() {
                        let button = egui::Button::new(egui::RichText::new(sticker.glyph).size(60.0))
                            .frame(false)
                            .min_size(egui::vec2(100.0, 100.0));
                        if ui.add(button).on_hover_text(sticker.name).clicked() {
                            log::info!("Sticker selected: {}", sticker.name);
                            messages.push(Message::StickerChosen(sticker.id));
                            messages.push(Message::PickerClosed);
                        }
                    }
                });
            });
        });
}
