//! Skill icon loading
//!
//! Icons ship as one PNG per skill in a ZIP archive, keyed by the skill's
//! lowercase name. The whole set is decoded to RGBA up front; lookups during
//! rendering are indexed by skill ordinal and never touch the filesystem.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;
use zip::ZipArchive;

use skillhud_core::skill::Skill;

/// Decoded RGBA icon data
#[derive(Debug, Clone)]
pub struct IconData {
    /// RGBA pixel data (width * height * 4 bytes)
    pub rgba: Vec<u8>,
    /// Icon width in pixels
    pub width: u32,
    /// Icon height in pixels
    pub height: u32,
}

/// Raster icon lookup by skill ordinal.
pub trait IconSource {
    fn icon(&self, index: usize) -> Option<&IconData>;
}

#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to open icon archive: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read icon archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Decoded skill icons, indexed by skill ordinal.
pub struct SkillIconStore {
    icons: Vec<Option<IconData>>,
}

impl SkillIconStore {
    /// Load every skill's icon from a ZIP archive.
    ///
    /// Entries are named `<skill>.png` (lowercase). Missing or undecodable
    /// entries leave an empty slot and log a warning; only an unreadable
    /// archive is an error.
    pub fn load(zip_path: &Path) -> Result<Self, IconError> {
        let file = File::open(zip_path)?;
        let mut archive = ZipArchive::new(BufReader::new(file))?;

        let mut icons = Vec::with_capacity(Skill::ALL.len());
        for skill in Skill::ALL {
            let entry_name = format!("{}.png", skill.icon_name());
            let icon = match archive.by_name(&entry_name) {
                Ok(mut entry) => {
                    let mut png_data = Vec::new();
                    entry.read_to_end(&mut png_data)?;
                    let decoded = decode_png(&png_data);
                    if decoded.is_none() {
                        tracing::warn!(entry = %entry_name, "skipping undecodable skill icon");
                    }
                    decoded
                }
                Err(_) => {
                    tracing::warn!(entry = %entry_name, "icon archive has no entry for skill");
                    None
                }
            };
            icons.push(icon);
        }

        let loaded = icons.iter().filter(|icon| icon.is_some()).count();
        tracing::debug!(loaded, total = icons.len(), "loaded skill icons");

        Ok(Self { icons })
    }
}

impl IconSource for SkillIconStore {
    fn icon(&self, index: usize) -> Option<&IconData> {
        self.icons.get(index)?.as_ref()
    }
}

/// Decode PNG data to RGBA
fn decode_png(data: &[u8]) -> Option<IconData> {
    let decoder = png::Decoder::new(data);
    let mut reader = decoder.read_info().ok()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).ok()?;

    let width = info.width;
    let height = info.height;

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf[..info.buffer_size()].to_vec(),
        png::ColorType::Rgb => {
            let rgb = &buf[..info.buffer_size()];
            let mut rgba = Vec::with_capacity((width * height * 4) as usize);
            for chunk in rgb.chunks(3) {
                rgba.extend_from_slice(chunk);
                rgba.push(255);
            }
            rgba
        }
        png::ColorType::GrayscaleAlpha => {
            let ga = &buf[..info.buffer_size()];
            let mut rgba = Vec::with_capacity((width * height * 4) as usize);
            for chunk in ga.chunks(2) {
                let gray = chunk[0];
                let alpha = chunk[1];
                rgba.extend_from_slice(&[gray, gray, gray, alpha]);
            }
            rgba
        }
        png::ColorType::Grayscale => {
            let g = &buf[..info.buffer_size()];
            let mut rgba = Vec::with_capacity((width * height * 4) as usize);
            for &gray in g {
                rgba.extend_from_slice(&[gray, gray, gray, 255]);
            }
            rgba
        }
        png::ColorType::Indexed => return None,
    };

    Some(IconData {
        rgba,
        width,
        height,
    })
}
