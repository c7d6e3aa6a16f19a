//! Goal progress bar
//!
//! A fixed-thickness bar drawn as three nested rectangle fills: a warm-gray
//! outer frame, a black inset background, and a gradient fill that shifts
//! from red at 0% to green at 100%.

use tiny_skia::Color;

use crate::surface::DrawSurface;
use crate::widgets::colors;

/// Declared bar thickness; the frame adds a pixel on each side.
const BAR_HEIGHT: i32 = 6;

/// A goal progress bar between two experience bounds.
///
/// Negative bounds mean "no goal configured" and render nothing, as does a
/// zero-span goal. The fill ratio is intentionally not clamped above 1.0:
/// experience past the goal keeps widening the fill exactly as the original
/// widget renders it.
#[derive(Debug, Clone, Copy)]
pub struct GoalBar {
    pub start: i64,
    pub end: i64,
    pub current: i64,
}

impl GoalBar {
    /// Draw the bar at the given opacity.
    ///
    /// Returns the bar thickness consumed by the layout, or 0 when no goal
    /// is configured.
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        x: i32,
        y: i32,
        width: i32,
        alpha: u8,
    ) -> i32 {
        if self.start < 0 || self.end < 0 || self.start == self.end {
            return 0;
        }

        let total = self.end - self.start;
        let offset = (self.current - self.start).max(0);
        let ratio = if total > 0 {
            offset as f64 / total as f64
        } else {
            1.0
        };

        surface.fill_rect(x, y, width, BAR_HEIGHT + 2, colors::widget_frame(alpha));
        surface.fill_rect(x + 1, y + 1, width - 2, BAR_HEIGHT, colors::shadow(alpha));

        let fill_width = (ratio * (width - 4) as f64) as i32;
        if fill_width > 0 {
            let (r, g, b) = fill_color(ratio);
            surface.fill_rect(
                x + 2,
                y + 2,
                fill_width,
                BAR_HEIGHT - 2,
                Color::from_rgba8(r, g, b, alpha),
            );
        }

        BAR_HEIGHT
    }
}

/// Red→green gradient over the fill ratio. Channels saturate past 100%.
fn fill_color(ratio: f64) -> (u8, u8, u8) {
    let r = (255.0 - 130.0 * ratio) as u8;
    let g = (255.0 * ratio) as u8;
    (r, g, 0)
}
