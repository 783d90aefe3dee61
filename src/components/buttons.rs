use eframe::egui;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(255, 211, 105);
const TEXT: egui::Color32 = egui::Color32::from_rgb(37, 41, 46);

/// Wide footer button ("Choose a photo" / "Use this photo").
pub struct FooterButton {
    pub label: &'static str,
    /// Primary buttons get the yellow outline and a light fill
    pub primary: bool,
}

impl FooterButton {
    pub fn new(label: &'static str, primary: bool) -> Self {
        Self { label, primary }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(320.0, 68.0);
        let (outer, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(outer) {
            let painter = ui.painter();
            let inner = outer.shrink(4.0);

            if self.primary {
                painter.rect_stroke(outer, 18.0, egui::Stroke::new(4.0, ACCENT));
                let fill = if response.hovered() {
                    egui::Color32::from_gray(230)
                } else {
                    egui::Color32::WHITE
                };
                painter.rect_filled(inner, 10.0, fill);
            } else if response.hovered() {
                painter.rect_filled(inner, 10.0, egui::Color32::from_gray(50));
            }

            let text_color = if self.primary { TEXT } else { egui::Color32::WHITE };
            painter.text(
                inner.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(16.0),
                text_color,
            );
        }

        response
    }
}

/// Small icon-over-label button used in the editing options row.
pub struct IconButton {
    pub icon: &'static str,
    pub label: &'static str,
}

impl IconButton {
    pub fn new(icon: &'static str, label: &'static str) -> Self {
        Self { icon, label }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(64.0, 56.0), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let color = if response.hovered() {
                ACCENT
            } else {
                egui::Color32::WHITE
            };
            let painter = ui.painter();
            painter.text(
                rect.center_top() + egui::vec2(0.0, 16.0),
                egui::Align2::CENTER_CENTER,
                self.icon,
                egui::FontId::proportional(24.0),
                color,
            );
            painter.text(
                rect.center_bottom() - egui::vec2(0.0, 10.0),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(13.0),
                color,
            );
        }

        response
    }
}

/// Round "+" button that opens the sticker picker.
pub struct CircleButton;

impl CircleButton {
    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(84.0, 84.0), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = rect.center();
            painter.circle_stroke(center, 40.0, egui::Stroke::new(4.0, ACCENT));
            let fill = if response.hovered() {
                egui::Color32::from_gray(230)
            } else {
                egui::Color32::WHITE
            };
            painter.circle_filled(center, 36.0, fill);
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                "+",
                egui::FontId::proportional(38.0),
                TEXT,
            );
        }

        response
    }
}
