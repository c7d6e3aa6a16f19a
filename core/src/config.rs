//! Tracker configuration
//!
//! Serializable knobs for the experience tracker overlay, persisted with
//! `confy`. Defaults are duplicated between the serde field defaults and the
//! `Default` impl so partially-written config files fill in sensibly.

use serde::{Deserialize, Serialize};

/// RGBA color as stored in configuration files.
pub type Color = [u8; 4];

/// Font style applied to the tracker text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

/// Configuration for the experience tracker overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Master switch; a disabled tracker renders nothing at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Draw the skill icon next to the experience total.
    #[serde(default = "default_true")]
    pub show_icons: bool,
    /// Draw the goal progress bar below the experience total.
    #[serde(default = "default_true")]
    pub show_progress_bar: bool,
    /// Font family name; empty selects the system sans-serif.
    #[serde(default)]
    pub font_name: String,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default)]
    pub font_style: FontStyle,
    /// How long the tracker lingers after a skill change, in 20 ms client
    /// ticks. 0 keeps it permanently visible.
    #[serde(default = "default_linger_ticks")]
    pub linger_ticks: u32,
    /// Fade out over the tail of the linger window instead of cutting off.
    #[serde(default = "default_true")]
    pub fade_out: bool,
    /// Icon edge length in pixels; 0 sizes the icon from the font height.
    #[serde(default)]
    pub icon_size_override: i32,
    #[serde(default = "default_text_color")]
    pub text_color: Color,
}

fn default_true() -> bool {
    true
}
fn default_font_size() -> f32 {
    16.0
}
fn default_linger_ticks() -> u32 {
    500
}
fn default_text_color() -> Color {
    [255, 255, 255, 255]
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_icons: true,
            show_progress_bar: true,
            font_name: String::new(),
            font_size: 16.0,
            font_style: FontStyle::Plain,
            linger_ticks: 500,
            fade_out: true,
            icon_size_override: 0,
            text_color: [255, 255, 255, 255],
        }
    }
}

impl TrackerConfig {
    /// Load the persisted configuration, falling back to defaults.
    pub fn load() -> Self {
        let config: Self = confy::load("skillhud", "tracker").unwrap_or_default();
        tracing::debug!(linger_ticks = config.linger_ticks, "loaded tracker config");
        config
    }

    /// Persist the configuration.
    pub fn save(self) {
        confy::store("skillhud", "tracker", self).expect("Failed to save configuration");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_tracker_visible() {
        let config = TrackerConfig::default();
        assert!(config.enabled);
        assert!(config.fade_out);
        assert_eq!(config.linger_ticks, 500);
        assert_eq!(config.icon_size_override, 0);
        assert_eq!(config.text_color, [255, 255, 255, 255]);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: TrackerConfig = toml::from_str("linger_ticks = 120").unwrap();
        assert_eq!(config.linger_ticks, 120);
        assert!(config.enabled);
        assert_eq!(config.font_size, 16.0);
    }
}
