use tiny_skia::Color;

#[inline]
pub fn transparent() -> Color {
    Color::from_rgba8(0, 0, 0, 0)
}

/// Text shadow at a given opacity
#[inline]
pub fn shadow(alpha: u8) -> Color {
    Color::from_rgba8(0, 0, 0, alpha)
}

/// Warm-gray frame tone of the game's native widgets
#[inline]
pub fn widget_frame(alpha: u8) -> Color {
    Color::from_rgba8(90, 82, 69, alpha)
}
