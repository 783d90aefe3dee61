/// Stable identifier of a catalog sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StickerId(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sticker {
    pub id: StickerId,
    pub name: &'static str,
    /// Rendered with the emoji font bundled with egui
    pub glyph: &'static str,
}

const CATALOG: [Sticker; 6] = [
    Sticker { id: StickerId(0), name: "grinning", glyph: "😀" },
    Sticker { id: StickerId(1), name: "sunglasses", glyph: "😎" },
    Sticker { id: StickerId(2), name: "laughing", glyph: "😂" },
    Sticker { id: StickerId(3), name: "heart", glyph: "❤" },
    Sticker { id: StickerId(4), name: "star", glyph: "⭐" },
    Sticker { id: StickerId(5), name: "fire", glyph: "🔥" },
];

/// All selectable stickers, in display order
pub fn catalog() -> &'static [Sticker] {
    &CATALOG
}

pub fn lookup(id: StickerId) -> Option<&'static Sticker> {
    CATALOG.iter().find(|sticker| sticker.id == id)
}
