//! Software renderer using tiny-skia and cosmic-text
//!
//! CPU rendering of the tracker's primitives into an RGBA pixel buffer:
//! rectangle fills, shaped text, and scaled icon blits. Shaped text is
//! cached per (text, font size) so per-frame measurement stays cheap; the
//! cache must be cleared when the font configuration changes.
#![allow(clippy::too_many_arguments)]
use std::collections::HashMap;

use cosmic_text::{
    Attrs, Buffer, Color as CosmicColor, Family, FontSystem, LayoutGlyph, Metrics, Shaping, Style,
    SwashCache, Weight,
};
use tiny_skia::{Color, Paint, PixmapMut, Rect, Transform};

use skillhud_core::config::{FontStyle, TrackerConfig};

use crate::icons::IconData;
use crate::surface::FontMetrics;
use crate::utils::XP_PLACEHOLDER;

/// Entries kept in the text shaping cache before it is dropped wholesale.
/// The tracker shapes a handful of unique strings per font, so recency
/// tracking would cost more than re-shaping.
const TEXT_CACHE_MAX_ENTRIES: usize = 256;

/// Font selection resolved from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Font family name; empty selects the system sans-serif.
    pub family: String,
    pub size: f32,
    pub style: FontStyle,
}

impl FontSpec {
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            family: config.font_name.clone(),
            size: config.font_size,
            style: config.font_style,
        }
    }

    fn attrs(&self) -> Attrs<'_> {
        let mut attrs = Attrs::new();
        if !self.family.is_empty() {
            attrs = attrs.family(Family::Name(&self.family));
        }
        match self.style {
            FontStyle::Plain => {}
            FontStyle::Bold => attrs = attrs.weight(Weight::BOLD),
            FontStyle::Italic => attrs = attrs.style(Style::Italic),
            FontStyle::BoldItalic => attrs = attrs.weight(Weight::BOLD).style(Style::Italic),
        }
        attrs
    }
}

/// Cached result of text shaping
struct CachedText {
    glyphs: Vec<LayoutGlyph>,
    width: f32,
    height: f32,
}

/// Key for text cache: (text content, font size rounded to tenths)
type TextCacheKey = (String, u32);

/// A software renderer for overlay content
pub struct Renderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    text_cache: HashMap<TextCacheKey, CachedText>,
}

impl Renderer {
    pub fn new() -> Self {
        let locale = sys_locale::get_locale().unwrap_or_else(|| String::from("en-US"));
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        Self {
            font_system: FontSystem::new_with_locale_and_db(locale, db),
            swash_cache: SwashCache::new(),
            text_cache: HashMap::with_capacity(64),
        }
    }

    /// Drop all shaped text; call when the font configuration changes.
    pub fn clear_cache(&mut self) {
        self.text_cache.clear();
    }

    /// Shape `text` if it is not cached yet. Returns (width, height).
    fn ensure_cached(&mut self, text: &str, font: &FontSpec) -> (f32, f32) {
        let size_key = (font.size * 10.0).round() as u32;
        if let Some(cached) = self.text_cache.get(&(text.to_string(), size_key)) {
            return (cached.width, cached.height);
        }

        let metrics = Metrics::new(font.size, font.size * 1.2);
        let mut text_buffer = Buffer::new(&mut self.font_system, metrics);
        let attrs = font.attrs();
        text_buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        text_buffer.shape_until_scroll(&mut self.font_system, false);

        let mut glyphs = Vec::new();
        let mut width = 0.0f32;
        let mut height = 0.0f32;
        for run in text_buffer.layout_runs() {
            width = width.max(run.line_w);
            height += run.line_height;
            glyphs.extend(run.glyphs.iter().cloned());
        }

        if self.text_cache.len() >= TEXT_CACHE_MAX_ENTRIES {
            self.text_cache.clear();
        }
        self.text_cache.insert(
            (text.to_string(), size_key),
            CachedText {
                glyphs,
                width,
                height,
            },
        );

        (width, height)
    }

    /// Measure text dimensions without drawing.
    pub fn measure_text(&mut self, text: &str, font: &FontSpec) -> (f32, f32) {
        self.ensure_cached(text, font)
    }

    /// Line height and baseline ascent for the font, derived by shaping the
    /// tracker's worst-case pattern string.
    pub fn font_metrics(&mut self, font: &FontSpec) -> FontMetrics {
        let metrics = Metrics::new(font.size, font.size * 1.2);
        let mut text_buffer = Buffer::new(&mut self.font_system, metrics);
        let attrs = font.attrs();
        text_buffer.set_text(
            &mut self.font_system,
            XP_PLACEHOLDER,
            &attrs,
            Shaping::Advanced,
            None,
        );
        text_buffer.shape_until_scroll(&mut self.font_system, false);

        let mut height = metrics.line_height;
        let mut ascent = font.size * 0.8;
        if let Some(run) = text_buffer.layout_runs().next() {
            height = run.line_height;
            ascent = run.line_y;
        }

        FontMetrics {
            height: height.round() as i32,
            ascent: ascent.round() as i32,
        }
    }

    /// Create a new pixel buffer (RGBA format)
    pub fn create_buffer(width: u32, height: u32) -> Vec<u8> {
        vec![0u8; (width * height * 4) as usize]
    }

    /// Clear a pixel buffer with a color
    pub fn clear(&self, buffer: &mut [u8], width: u32, height: u32, color: Color) {
        if let Some(mut pixmap) = PixmapMut::from_bytes(buffer, width, height) {
            pixmap.fill(color);
        }
    }

    /// Draw a filled rectangle
    pub fn fill_rect(
        &self,
        buffer: &mut [u8],
        width: u32,
        height: u32,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    ) {
        let Some(mut pixmap) = PixmapMut::from_bytes(buffer, width, height) else {
            return;
        };
        let Some(rect) = Rect::from_xywh(x, y, w, h) else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;

        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Draw text with its baseline at `y` (uses the shaping cache).
    pub fn draw_text(
        &mut self,
        buffer: &mut [u8],
        buf_width: u32,
        buf_height: u32,
        text: &str,
        x: f32,
        y: f32,
        font: &FontSpec,
        color: Color,
    ) {
        let Some(mut pixmap) = PixmapMut::from_bytes(buffer, buf_width, buf_height) else {
            return;
        };

        let _ = self.ensure_cached(text, font);
        let size_key = (font.size * 10.0).round() as u32;
        // Clone out of the cache: rasterization below needs the font system
        // mutably.
        let glyphs = self
            .text_cache
            .get(&(text.to_string(), size_key))
            .map(|cached| cached.glyphs.clone())
            .unwrap_or_default();

        let text_color = CosmicColor::rgba(
            (color.red() * 255.0) as u8,
            (color.green() * 255.0) as u8,
            (color.blue() * 255.0) as u8,
            (color.alpha() * 255.0) as u8,
        );

        for glyph in &glyphs {
            let physical_glyph = glyph.physical((x, y), 1.0);

            if let Some(image) = self
                .swash_cache
                .get_image(&mut self.font_system, physical_glyph.cache_key)
            {
                let glyph_x = physical_glyph.x + image.placement.left;
                let glyph_y = physical_glyph.y - image.placement.top;

                blend_mask(
                    &mut pixmap,
                    &image.data,
                    image.placement.width,
                    image.placement.height,
                    glyph_x,
                    glyph_y,
                    text_color,
                );
            }
        }
    }

    /// Blit an RGBA image scaled to `dest_w` x `dest_h` at the given
    /// opacity, source-over.
    pub fn draw_image(
        &self,
        buffer: &mut [u8],
        buf_width: u32,
        buf_height: u32,
        image: &IconData,
        x: i32,
        y: i32,
        dest_w: i32,
        dest_h: i32,
        opacity: f32,
    ) {
        if dest_w <= 0 || dest_h <= 0 || image.width == 0 || image.height == 0 {
            return;
        }
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity == 0.0 {
            return;
        }

        for dy in 0..dest_h {
            let py = y + dy;
            if py < 0 || py >= buf_height as i32 {
                continue;
            }
            let sy = dy as u32 * image.height / dest_h as u32;

            for dx in 0..dest_w {
                let px = x + dx;
                if px < 0 || px >= buf_width as i32 {
                    continue;
                }
                let sx = dx as u32 * image.width / dest_w as u32;

                let src_idx = ((sy * image.width + sx) * 4) as usize;
                let src_a = (image.rgba[src_idx + 3] as f32 * opacity) as u32;
                if src_a == 0 {
                    continue;
                }
                let inv_a = 255 - src_a;

                let dst_idx = ((py as u32 * buf_width + px as u32) * 4) as usize;
                for channel in 0..3 {
                    let src = image.rgba[src_idx + channel] as u32;
                    let dst = buffer[dst_idx + channel] as u32;
                    buffer[dst_idx + channel] = ((src * src_a + dst * inv_a) / 255) as u8;
                }
                buffer[dst_idx + 3] = (src_a + buffer[dst_idx + 3] as u32 * inv_a / 255) as u8;
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Blend an 8-bit coverage mask onto a pixmap in a single color.
fn blend_mask(
    pixmap: &mut PixmapMut<'_>,
    mask: &[u8],
    mask_width: u32,
    mask_height: u32,
    dest_x: i32,
    dest_y: i32,
    color: CosmicColor,
) {
    let pixmap_width = pixmap.width() as i32;
    let pixmap_height = pixmap.height() as i32;
    let data = pixmap.data_mut();

    for my in 0..mask_height as i32 {
        let py = dest_y + my;
        if py < 0 || py >= pixmap_height {
            continue;
        }

        for mx in 0..mask_width as i32 {
            let px = dest_x + mx;
            if px < 0 || px >= pixmap_width {
                continue;
            }

            let mask_idx = (my as u32 * mask_width + mx as u32) as usize;
            if mask_idx >= mask.len() {
                continue;
            }
            let coverage = mask[mask_idx];
            if coverage == 0 {
                continue;
            }

            let pixel_idx = ((py as u32 * pixmap_width as u32 + px as u32) * 4) as usize;
            if pixel_idx + 3 >= data.len() {
                continue;
            }

            let src_a = (coverage as u32 * color.a() as u32) / 255;
            let inv_a = 255 - src_a;

            data[pixel_idx] =
                ((color.r() as u32 * src_a + data[pixel_idx] as u32 * inv_a) / 255) as u8;
            data[pixel_idx + 1] =
                ((color.g() as u32 * src_a + data[pixel_idx + 1] as u32 * inv_a) / 255) as u8;
            data[pixel_idx + 2] =
                ((color.b() as u32 * src_a + data[pixel_idx + 2] as u32 * inv_a) / 255) as u8;
            data[pixel_idx + 3] = (src_a + (data[pixel_idx + 3] as u32 * inv_a) / 255) as u8;
        }
    }
}
