//! Skill icon layout
//!
//! Icons are authored against a 25-unit reference grid; the effective size
//! scales both dimensions proportionally, so non-square icons keep their
//! aspect ratio.

/// Reference grid the icon art is authored against.
const ICON_REFERENCE_UNITS: i32 = 25;

/// Smallest rendered icon edge, in pixels.
const MIN_ICON_SIZE: i32 = 18;

/// Scaled icon dimensions and its vertical placement against the text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLayout {
    pub width: i32,
    pub height: i32,
    /// Offset that centers the icon on the text line; negative when the
    /// icon is taller than the line.
    pub y_offset: i32,
}

impl IconLayout {
    pub const HIDDEN: IconLayout = IconLayout {
        width: 0,
        height: 0,
        y_offset: 0,
    };
}

/// Compute the rendered size of a skill icon.
///
/// `requested_size` of 0 (or less) sizes the icon from the font height;
/// either way the effective size is floored at 18 px.
pub fn layout_icon(
    show_icon: bool,
    requested_size: i32,
    icon_width: i32,
    icon_height: i32,
    font_height: i32,
) -> IconLayout {
    if !show_icon {
        return IconLayout::HIDDEN;
    }

    let requested = if requested_size > 0 {
        requested_size
    } else {
        font_height
    };
    let effective = requested.max(MIN_ICON_SIZE);

    let width = icon_width * effective / ICON_REFERENCE_UNITS;
    let height = icon_height * effective / ICON_REFERENCE_UNITS;

    IconLayout {
        width,
        height,
        y_offset: font_height / 2 - height / 2,
    }
}
