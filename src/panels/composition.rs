use eframe::egui;

use crate::config::LayoutConfig;
use crate::photo::placeholder_image;
use crate::state::{BaseImage, Session};
use crate::stickers::{self, StickerId};
use crate::texture_manager::TextureManager;

/// The region stacking the base image and the optional sticker.
///
/// It remembers where it was last drawn so a later screenshot can be cropped
/// to exactly this area.
pub struct CompositionSurface {
    placeholder: Option<egui::TextureHandle>,
    /// Sticker center relative to the surface's top-left corner
    sticker_pos: Option<egui::Vec2>,
    sticker_for: Option<StickerId>,
    last_rect: Option<egui::Rect>,
}

impl Default for CompositionSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositionSurface {
    pub fn new() -> Self {
        Self {
            placeholder: None,
            sticker_pos: None,
            sticker_for: None,
            last_rect: None,
        }
    }

    /// Rect (in points) the surface occupied in the last frame
    pub fn rect(&self) -> Option<egui::Rect> {
        self.last_rect
    }

    /// Sticker center relative to the surface's top-left corner, once placed
    pub fn sticker_offset(&self) -> Option<egui::Vec2> {
        self.sticker_pos
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        session: &Session,
        textures: &mut TextureManager,
        layout: &LayoutConfig,
    ) {
        let size = egui::vec2(layout.surface_width, layout.surface_height);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        self.last_rect = Some(rect);

        let rounding = egui::Rounding::same(layout.surface_rounding);
        match session.visible_base() {
            BaseImage::Placeholder => {
                let texture = self.placeholder_texture(ui.ctx(), layout).id();
                egui::Image::new((texture, size))
                    .rounding(rounding)
                    .paint_at(ui, rect);
            }
            BaseImage::Selected(image) => {
                ui.painter().rect_filled(rect, rounding, egui::Color32::BLACK);
                let texture = textures.texture_for(image, ui.ctx());
                let fitted = image.fit_within(size);
                egui::Image::new((texture, fitted))
                    .rounding(rounding)
                    .paint_at(ui, egui::Rect::from_center_size(rect.center(), fitted));
            }
        }

        if let Some(id) = session.sticker() {
            self.show_sticker(ui, rect, id, layout.sticker_size);
        }
    }

    fn show_sticker(&mut self, ui: &mut egui::Ui, surface: egui::Rect, id: StickerId, size: f32) {
        let Some(sticker) = stickers::lookup(id) else {
            log::warn!("Unknown sticker {:?}", id);
            return;
        };

        // A newly chosen sticker starts near the top of the photo
        if self.sticker_for != Some(id) {
            self.sticker_for = Some(id);
            self.sticker_pos = Some(egui::vec2(surface.width() / 2.0, size * 1.5));
        }
        let mut pos = self.sticker_pos.unwrap_or(surface.size() / 2.0);

        let sticker_rect = egui::Rect::from_center_size(surface.min + pos, egui::vec2(size, size));
        let response = ui.interact(sticker_rect, ui.id().with("sticker"), egui::Sense::drag());
        if response.dragged() {
            pos += response.drag_delta();
            let half = size / 2.0;
            pos.x = pos.x.clamp(half, surface.width() - half);
            pos.y = pos.y.clamp(half, surface.height() - half);
            self.sticker_pos = Some(pos);
        }

        ui.painter().text(
            surface.min + pos,
            egui::Align2::CENTER_CENTER,
            sticker.glyph,
            egui::FontId::proportional(size),
            egui::Color32::WHITE,
        );
    }

    fn placeholder_texture(&mut self, ctx: &egui::Context, layout: &LayoutConfig) -> &egui::TextureHandle {
        self.placeholder.get_or_insert_with(|| {
            let image = placeholder_image(layout.surface_width as usize, layout.surface_height as usize);
            ctx.load_texture("placeholder", image, egui::TextureOptions::LINEAR)
        })
    }
}
