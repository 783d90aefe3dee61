use std::collections::VecDeque;

use eframe::egui;

use crate::event::Notice;

/// Alerts waiting to be acknowledged, shown one at a time.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    pending: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, notice: Notice) {
        log::info!("Notice: {}", notice.text());
        self.pending.push_back(notice);
    }

    pub fn current(&self) -> Option<Notice> {
        self.pending.front().copied()
    }

    pub fn dismiss(&mut self) -> Option<Notice> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Show the front notice as a modal window until "OK" is clicked
    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.current() else {
            return;
        };

        // Dim and swallow clicks on everything behind the alert
        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("notice_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(160));
                ui.allocate_rect(screen, egui::Sense::click());
            });

        let mut dismissed = false;
        egui::Window::new("Notice")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(notice.text());
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.dismiss();
        }
    }
}
