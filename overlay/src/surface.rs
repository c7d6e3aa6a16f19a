//! Draw surface abstraction
//!
//! Overlay content renders through the [`DrawSurface`] trait so the
//! composition logic stays independent of the pixel backend. The production
//! implementation, [`SoftwareSurface`], owns an RGBA buffer and delegates to
//! the software [`Renderer`]; tests substitute a recording double that logs
//! every primitive op.

use tiny_skia::Color;

use crate::icons::IconData;
use crate::renderer::{FontSpec, Renderer};
use crate::widgets::colors;

/// Width and height of a rendered layout, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub width: i32,
    pub height: i32,
}

/// Metrics of the active font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Line height in pixels.
    pub height: i32,
    /// Baseline distance from the top of the line, in pixels.
    pub ascent: i32,
}

/// Primitive drawing operations with alpha-compositing semantics.
///
/// Text is anchored at its baseline. `draw_image` scales to the requested
/// size and blends source-over with the given opacity factor.
pub trait DrawSurface {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color);

    fn draw_image(
        &mut self,
        image: &IconData,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        opacity: f32,
    );

    fn text_width(&mut self, text: &str) -> i32;

    fn font_metrics(&mut self) -> FontMetrics;
}

/// A CPU-rendered surface over an owned RGBA pixel buffer.
pub struct SoftwareSurface {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    renderer: Renderer,
    font: FontSpec,
    metrics: FontMetrics,
}

impl SoftwareSurface {
    pub fn new(width: u32, height: u32, font: FontSpec) -> Self {
        let mut renderer = Renderer::new();
        let metrics = renderer.font_metrics(&font);
        Self {
            pixels: Renderer::create_buffer(width, height),
            width,
            height,
            renderer,
            font,
            metrics,
        }
    }

    /// Swap the active font, invalidating the shaping cache.
    ///
    /// Call when the font configuration changes; metrics are recomputed
    /// eagerly so `font_metrics` stays cheap.
    pub fn set_font(&mut self, font: FontSpec) {
        if font == self.font {
            return;
        }
        self.renderer.clear_cache();
        self.metrics = self.renderer.font_metrics(&font);
        self.font = font;
    }

    /// Clear the buffer to fully transparent.
    pub fn clear(&mut self) {
        self.renderer
            .clear(&mut self.pixels, self.width, self.height, colors::transparent());
    }

    /// The backing RGBA pixels, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl DrawSurface for SoftwareSurface {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.renderer.fill_rect(
            &mut self.pixels,
            self.width,
            self.height,
            x as f32,
            y as f32,
            width as f32,
            height as f32,
            color,
        );
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        self.renderer.draw_text(
            &mut self.pixels,
            self.width,
            self.height,
            text,
            x as f32,
            y as f32,
            &self.font,
            color,
        );
    }

    fn draw_image(
        &mut self,
        image: &IconData,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        opacity: f32,
    ) {
        self.renderer.draw_image(
            &mut self.pixels,
            self.width,
            self.height,
            image,
            x,
            y,
            width,
            height,
            opacity,
        );
    }

    fn text_width(&mut self, text: &str) -> i32 {
        let (width, _) = self.renderer.measure_text(text, &self.font);
        width.ceil() as i32
    }

    fn font_metrics(&mut self) -> FontMetrics {
        self.metrics
    }
}
