use std::collections::HashMap;

use egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::photo::{self, ImageHandle, ImageId};

/// Uploads picked images to the GPU once and keeps the handles around.
///
/// Only the most recently used images stay cached; older ones are dropped
/// (which frees the texture) when the cache grows past its limit.
pub struct TextureManager {
    textures: HashMap<ImageId, TextureHandle>,
    /// Frame each texture was last drawn in
    last_used: HashMap<ImageId, u64>,
    current_frame: u64,
    max_cache_size: usize,
}

impl TextureManager {
    pub fn new(max_cache_size: usize) -> Self {
        Self {
            textures: HashMap::new(),
            last_used: HashMap::new(),
            current_frame: 0,
            max_cache_size: max_cache_size.max(1),
        }
    }

    /// Should be called at the start of each frame
    pub fn begin_frame(&mut self) {
        self.current_frame += 1;
    }

    /// Texture for the given image, uploading it on first use
    pub fn texture_for(&mut self, image: &ImageHandle, ctx: &Context) -> TextureId {
        let key = image.id();
        self.last_used.insert(key, self.current_frame);

        if let Some(handle) = self.textures.get(&key) {
            return handle.id();
        }

        // Uploads larger than the GPU allows abort the renderer
        let max_side = ctx.input(|i| i.max_texture_side);
        let [width, height] = image.size();
        let pixels = if width > max_side || height > max_side {
            photo::fit_color_image(image.pixels(), max_side)
        } else {
            (**image.pixels()).clone()
        };
        let handle = ctx.load_texture(format!("picked_{}", key), pixels, TextureOptions::LINEAR);
        let id = handle.id();
        self.textures.insert(key, handle);
        self.prune_if_needed(key);
        id
    }

    /// Evict least recently used textures, never the one just requested
    fn prune_if_needed(&mut self, keep: ImageId) {
        if self.textures.len() <= self.max_cache_size {
            return;
        }

        let mut entries: Vec<(ImageId, u64)> = self
            .last_used
            .iter()
            .filter(|(id, _)| **id != keep)
            .map(|(id, frame)| (*id, *frame))
            .collect();
        entries.sort_by_key(|(_, frame)| *frame);

        let to_remove = self.textures.len() - self.max_cache_size;
        for (id, _) in entries.into_iter().take(to_remove) {
            self.textures.remove(&id);
            self.last_used.remove(&id);
        }
    }

    pub fn cache_size(&self) -> usize {
        self.textures.len()
    }

    pub fn contains(&self, id: ImageId) -> bool {
        self.textures.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::placeholder_image;

    fn image() -> ImageHandle {
        ImageHandle::new("t.png", placeholder_image(4, 4))
    }

    #[test]
    fn test_cache_hit() {
        let ctx = Context::default();
        let mut manager = TextureManager::new(4);
        let img = image();

        let first = manager.texture_for(&img, &ctx);
        let second = manager.texture_for(&img.clone(), &ctx);

        assert_eq!(first, second);
        assert_eq!(manager.cache_size(), 1);
    }

    #[test]
    fn test_lru_eviction() {
        let ctx = Context::default();
        let mut manager = TextureManager::new(2);
        let (a, b, c) = (image(), image(), image());

        manager.texture_for(&a, &ctx);
        manager.begin_frame();
        manager.texture_for(&b, &ctx);
        manager.begin_frame();
        manager.texture_for(&c, &ctx);

        assert_eq!(manager.cache_size(), 2);
        assert!(!manager.contains(a.id()));
        assert!(manager.contains(b.id()));
        assert!(manager.contains(c.id()));
    }

    #[test]
    fn test_oversized_image_is_clamped_to_texture_limit() {
        let ctx = Context::default();
        let max_side = ctx.input(|i| i.max_texture_side);
        let mut manager = TextureManager::new(2);
        let wide = ImageHandle::new("wide.png", placeholder_image(max_side + 1000, 300));

        manager.texture_for(&wide, &ctx);

        assert!(manager.contains(wide.id()));
        let size = manager.textures[&wide.id()].size();
        assert_eq!(size[0], max_side);
        assert!(size[1] < 300);
    }

    #[test]
    fn test_newest_survives_even_in_same_frame() {
        let ctx = Context::default();
        let mut manager = TextureManager::new(1);
        let (a, b) = (image(), image());

        manager.texture_for(&a, &ctx);
        manager.texture_for(&b, &ctx);

        assert_eq!(manager.cache_size(), 1);
        assert!(manager.contains(b.id()));
    }
}
