//! Example tracker application demonstrating the experience overlay
//!
//! Renders a few frames of sample data at increasing elapsed times to show
//! the fade-out, then dumps the final frame to a PNG. In production the
//! providers are backed by live game state.

use std::fs::File;
use std::io::BufWriter;

use skillhud_core::config::TrackerConfig;
use skillhud_core::provider::{ExperienceSource, GoalSource};
use skillhud_core::skill::Skill;
use skillhud_overlay::icons::{IconData, IconSource};
use skillhud_overlay::overlays::{RenderContext, TrackerSnapshot, XpTrackerOverlay};
use skillhud_overlay::renderer::FontSpec;
use skillhud_overlay::surface::SoftwareSurface;

/// Sample experience values (in production these come from the game client)
struct SampleExperience;

impl ExperienceSource for SampleExperience {
    fn skill_experience(&self, _skill: Skill) -> u64 {
        1_234_567
    }

    fn overall_experience(&self) -> u64 {
        52_876_334
    }
}

struct SampleGoals;

impl GoalSource for SampleGoals {
    fn start_goal(&self, _skill: Skill) -> i64 {
        1_210_421
    }

    fn end_goal(&self, _skill: Skill) -> i64 {
        1_336_443
    }
}

/// A flat placeholder icon; real hosts load a `SkillIconStore` archive.
struct PlaceholderIcons {
    icon: IconData,
}

impl PlaceholderIcons {
    fn new() -> Self {
        let size = 25u32;
        let mut rgba = Vec::with_capacity((size * size * 4) as usize);
        for _ in 0..size * size {
            rgba.extend_from_slice(&[196, 160, 66, 255]);
        }
        Self {
            icon: IconData {
                rgba,
                width: size,
                height: size,
            },
        }
    }
}

impl IconSource for PlaceholderIcons {
    fn icon(&self, _index: usize) -> Option<&IconData> {
        Some(&self.icon)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = TrackerConfig {
        linger_ticks: 150,
        ..TrackerConfig::default()
    };
    let linger_ticks = config.linger_ticks;
    let font = FontSpec::from_config(&config);
    let overlay = XpTrackerOverlay::new(config);

    let mut surface = SoftwareSurface::new(200, 40, font);
    let icons = PlaceholderIcons::new();
    let ctx = RenderContext {
        experience: &SampleExperience,
        goals: &SampleGoals,
        icons: &icons,
    };

    // Walk through the linger window: opaque, fading, gone.
    for millis_since_update in [0u64, 1_000, 2_500, 2_900, 3_200] {
        surface.clear();
        let snapshot = TrackerSnapshot {
            skill: Skill::Attack,
            millis_since_update,
            should_draw: true,
        };
        match overlay.render(&mut surface, &ctx, &snapshot) {
            Some(dims) => tracing::info!(
                millis_since_update,
                width = dims.width,
                height = dims.height,
                "rendered tracker frame"
            ),
            None => tracing::info!("tracker disabled"),
        }
    }

    // Re-render a fresh frame for the screenshot.
    surface.clear();
    let snapshot = TrackerSnapshot {
        skill: Skill::Attack,
        millis_since_update: 0,
        should_draw: true,
    };
    let dims = overlay.render(&mut surface, &ctx, &snapshot);

    if let Err(e) = write_png("tracker.png", &surface) {
        eprintln!("Failed to write tracker.png: {}", e);
        return;
    }
    tracing::info!(linger_ticks, ?dims, "wrote tracker.png");
}

fn write_png(path: &str, surface: &SoftwareSurface) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), surface.width(), surface.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(surface.pixels())?;
    Ok(())
}
