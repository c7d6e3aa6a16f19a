//! Common utility functions for overlay rendering

use tiny_skia::Color;

/// Worst-case experience string, used to size the overlay while nothing is
/// drawn so its anchor does not jitter.
pub const XP_PLACEHOLDER: &str = "###,###,###";

/// Convert [u8; 4] RGBA array to tiny_skia Color
#[inline]
pub fn color_from_rgba(rgba: [u8; 4]) -> Color {
    Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Format an experience total with thousands grouping.
pub fn format_xp(xp: u64) -> String {
    let digits = xp.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_xp() {
        assert_eq!(format_xp(0), "0");
        assert_eq!(format_xp(999), "999");
        assert_eq!(format_xp(1_000), "1,000");
        assert_eq!(format_xp(1_234_567), "1,234,567");
        assert_eq!(format_xp(200_000_000), "200,000,000");
    }

    #[test]
    fn test_color_from_rgba() {
        let color = color_from_rgba([255, 0, 0, 128]);
        assert_eq!((color.red() * 255.0).round() as u8, 255);
        assert_eq!((color.alpha() * 255.0).round() as u8, 128);
    }
}
