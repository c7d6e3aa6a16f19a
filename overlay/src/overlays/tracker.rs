//! Experience tracker overlay
//!
//! Composes the active skill's icon, its formatted experience total, and an
//! optional goal bar into one row, fading the whole group out after the
//! configured linger window.

use tiny_skia::Color;

use skillhud_core::config::TrackerConfig;
use skillhud_core::provider::{ExperienceSource, GoalSource};
use skillhud_core::skill::Skill;

use crate::fade;
use crate::icons::IconSource;
use crate::surface::{Dimension, DrawSurface, FontMetrics};
use crate::utils::{XP_PLACEHOLDER, format_xp};
use crate::widgets::{GoalBar, colors, layout_icon};

/// Gap between the icon and the experience text, in pixels.
const ICON_TEXT_GAP: i32 = 5;

/// Host capabilities the tracker reads each frame.
pub struct RenderContext<'a> {
    pub experience: &'a dyn ExperienceSource,
    pub goals: &'a dyn GoalSource,
    pub icons: &'a dyn IconSource,
}

/// Per-frame tracker state, supplied by the host's skill-change tracker.
#[derive(Debug, Clone, Copy)]
pub struct TrackerSnapshot {
    /// Skill whose experience the tracker shows.
    pub skill: Skill,
    /// Milliseconds since the shown skill last changed.
    pub millis_since_update: u64,
    /// Whether the tracker currently has content to show. When false the
    /// overlay still reports a placeholder dimension so its anchor does not
    /// jitter.
    pub should_draw: bool,
}

/// The experience tracker overlay.
pub struct XpTrackerOverlay {
    config: TrackerConfig,
}

impl XpTrackerOverlay {
    pub fn new(config: TrackerConfig) -> Self {
        Self { config }
    }

    /// Update the config
    pub fn set_config(&mut self, config: TrackerConfig) {
        self.config = config;
    }

    /// Render one frame.
    ///
    /// Returns the bounding box the tracker consumed, or `None` when the
    /// tracker is disabled entirely (distinct from a zero-size box). Pure in
    /// its inputs: identical context and snapshot produce identical draw
    /// commands and dimensions.
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        ctx: &RenderContext<'_>,
        snapshot: &TrackerSnapshot,
    ) -> Option<Dimension> {
        if !self.config.enabled {
            return None;
        }

        let metrics = surface.font_metrics();
        let alpha = fade::compute(
            self.config.linger_ticks,
            self.config.fade_out,
            snapshot.millis_since_update,
        );

        // Worst-case placeholder keeps the anchor stable while hidden.
        let mut width = surface.text_width(XP_PLACEHOLDER);
        let mut height = metrics.height;

        if snapshot.should_draw {
            let xp = ctx.experience.experience_for(snapshot.skill);
            let row = self.draw_row(surface, ctx, snapshot.skill, xp, alpha, metrics);
            width = row.width;
            height = row.height;

            if self.config.show_progress_bar {
                let bar = GoalBar {
                    start: ctx.goals.start_goal(snapshot.skill),
                    end: ctx.goals.end_goal(snapshot.skill),
                    current: xp as i64,
                };
                height += bar.render(surface, 0, row.height + 1, width, alpha);
            }
        }

        Some(Dimension { width, height })
    }

    /// Draw the icon + experience row; returns its bounding box.
    fn draw_row(
        &self,
        surface: &mut dyn DrawSurface,
        ctx: &RenderContext<'_>,
        skill: Skill,
        xp: u64,
        alpha: u8,
        metrics: FontMetrics,
    ) -> Dimension {
        let icon = if self.config.show_icons {
            ctx.icons.icon(skill.icon_index())
        } else {
            None
        };

        let layout = match icon {
            Some(image) => layout_icon(
                true,
                self.config.icon_size_override,
                image.width as i32,
                image.height as i32,
                metrics.height,
            ),
            None => layout_icon(false, 0, 0, 0, metrics.height),
        };
        if let Some(image) = icon {
            surface.draw_image(
                image,
                0,
                layout.y_offset,
                layout.width,
                layout.height,
                alpha as f32 / 255.0,
            );
        }

        let text = format_xp(xp);
        let text_x = if layout.width > 0 {
            layout.width + ICON_TEXT_GAP
        } else {
            0
        };
        let text_y = metrics.ascent;

        // Shadow pass first, one pixel down-right, then the foreground.
        let [r, g, b, _] = self.config.text_color;
        surface.draw_text(&text, text_x + 1, text_y + 1, colors::shadow(alpha));
        surface.draw_text(&text, text_x, text_y, Color::from_rgba8(r, g, b, alpha));

        Dimension {
            width: surface.text_width(&text) + text_x,
            height: metrics.height.max(layout.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconData;
    use crate::surface::testing::{DrawOp, RecordingSurface};

    struct FixedXp(u64);

    impl ExperienceSource for FixedXp {
        fn skill_experience(&self, _skill: Skill) -> u64 {
            self.0
        }

        fn overall_experience(&self) -> u64 {
            self.0 * 10
        }
    }

    struct FixedGoals {
        start: i64,
        end: i64,
    }

    impl GoalSource for FixedGoals {
        fn start_goal(&self, _skill: Skill) -> i64 {
            self.start
        }

        fn end_goal(&self, _skill: Skill) -> i64 {
            self.end
        }
    }

    struct NoIcons;

    impl IconSource for NoIcons {
        fn icon(&self, _index: usize) -> Option<&IconData> {
            None
        }
    }

    struct SquareIcons(IconData);

    impl SquareIcons {
        fn new(size: u32) -> Self {
            Self(IconData {
                rgba: vec![255; (size * size * 4) as usize],
                width: size,
                height: size,
            })
        }
    }

    impl IconSource for SquareIcons {
        fn icon(&self, _index: usize) -> Option<&IconData> {
            Some(&self.0)
        }
    }

    fn snapshot(should_draw: bool) -> TrackerSnapshot {
        TrackerSnapshot {
            skill: Skill::Attack,
            millis_since_update: 0,
            should_draw,
        }
    }

    fn config() -> TrackerConfig {
        TrackerConfig {
            show_icons: false,
            show_progress_bar: false,
            linger_ticks: 0,
            ..TrackerConfig::default()
        }
    }

    #[test]
    fn disabled_tracker_renders_nothing() {
        let mut surface = RecordingSurface::new();
        let overlay = XpTrackerOverlay::new(TrackerConfig {
            enabled: false,
            ..config()
        });
        let ctx = RenderContext {
            experience: &FixedXp(1_234_567),
            goals: &FixedGoals { start: -1, end: -1 },
            icons: &NoIcons,
        };

        assert_eq!(overlay.render(&mut surface, &ctx, &snapshot(true)), None);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn hidden_tracker_reports_placeholder_size() {
        let mut surface = RecordingSurface::new();
        let overlay = XpTrackerOverlay::new(config());
        let ctx = RenderContext {
            experience: &FixedXp(1_234_567),
            goals: &FixedGoals { start: -1, end: -1 },
            icons: &NoIcons,
        };

        let dims = overlay
            .render(&mut surface, &ctx, &snapshot(false))
            .unwrap();
        // "###,###,###" is 11 chars at 7 px each; line height 16.
        assert_eq!(
            dims,
            Dimension {
                width: 77,
                height: 16,
            }
        );
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn text_is_drawn_shadow_first() {
        let mut surface = RecordingSurface::new();
        let overlay = XpTrackerOverlay::new(config());
        let ctx = RenderContext {
            experience: &FixedXp(1_234_567),
            goals: &FixedGoals { start: -1, end: -1 },
            icons: &NoIcons,
        };

        let dims = overlay.render(&mut surface, &ctx, &snapshot(true)).unwrap();
        // "1,234,567" is 9 chars; no icon, so text starts at the origin.
        assert_eq!(
            dims,
            Dimension {
                width: 63,
                height: 16,
            }
        );
        assert_eq!(
            surface.ops,
            vec![
                DrawOp::Text {
                    text: "1,234,567".to_string(),
                    x: 1,
                    y: 13,
                    rgba: [0, 0, 0, 255],
                },
                DrawOp::Text {
                    text: "1,234,567".to_string(),
                    x: 0,
                    y: 12,
                    rgba: [255, 255, 255, 255],
                },
            ]
        );
    }

    #[test]
    fn icon_offsets_text_and_grows_the_row() {
        let mut surface = RecordingSurface::new();
        let overlay = XpTrackerOverlay::new(TrackerConfig {
            show_icons: true,
            ..config()
        });
        let icons = SquareIcons::new(25);
        let ctx = RenderContext {
            experience: &FixedXp(50),
            goals: &FixedGoals { start: -1, end: -1 },
            icons: &icons,
        };

        let dims = overlay.render(&mut surface, &ctx, &snapshot(true)).unwrap();
        // Font height 16 floors to an 18 px icon: 25 * 18 / 25 = 18.
        assert_eq!(
            surface.ops[0],
            DrawOp::Image {
                x: 0,
                y: -1,
                width: 18,
                height: 18,
                opacity: 1.0,
            }
        );
        // Text shifted right of the icon by the 5 px gap.
        let DrawOp::Text { x, .. } = surface.ops[1].clone() else {
            panic!("expected text");
        };
        assert_eq!(x, 18 + 5 + 1);
        // "50" is 2 chars: width = 14 + 23; row height grows to the icon.
        assert_eq!(
            dims,
            Dimension {
                width: 37,
                height: 18,
            }
        );
    }

    #[test]
    fn goal_bar_stacks_below_the_row() {
        let mut surface = RecordingSurface::new();
        let overlay = XpTrackerOverlay::new(TrackerConfig {
            show_progress_bar: true,
            ..config()
        });
        let ctx = RenderContext {
            experience: &FixedXp(50),
            goals: &FixedGoals { start: 0, end: 100 },
            icons: &NoIcons,
        };

        let dims = overlay.render(&mut surface, &ctx, &snapshot(true)).unwrap();
        // Two text passes then three bar rectangles.
        assert_eq!(surface.ops.len(), 5);
        let DrawOp::FillRect { x, y, width, .. } = surface.ops[2].clone() else {
            panic!("expected fill rect");
        };
        assert_eq!((x, y), (0, 17));
        assert_eq!(width, 14);
        assert_eq!(
            dims,
            Dimension {
                width: 14,
                height: 22,
            }
        );
    }

    #[test]
    fn unset_goals_leave_the_height_alone() {
        let mut surface = RecordingSurface::new();
        let overlay = XpTrackerOverlay::new(TrackerConfig {
            show_progress_bar: true,
            ..config()
        });
        let ctx = RenderContext {
            experience: &FixedXp(50),
            goals: &FixedGoals { start: 10, end: 10 },
            icons: &NoIcons,
        };

        let dims = overlay.render(&mut surface, &ctx, &snapshot(true)).unwrap();
        assert_eq!(surface.ops.len(), 2);
        assert_eq!(dims.height, 16);
    }

    #[test]
    fn faded_out_tracker_draws_fully_transparent() {
        let mut surface = RecordingSurface::new();
        let overlay = XpTrackerOverlay::new(TrackerConfig {
            linger_ticks: 100,
            fade_out: true,
            ..config()
        });
        let ctx = RenderContext {
            experience: &FixedXp(1_234_567),
            goals: &FixedGoals { start: -1, end: -1 },
            icons: &NoIcons,
        };
        let snapshot = TrackerSnapshot {
            skill: Skill::Attack,
            millis_since_update: 2_100,
            should_draw: true,
        };

        overlay.render(&mut surface, &ctx, &snapshot).unwrap();
        for op in &surface.ops {
            let DrawOp::Text { rgba, .. } = op else {
                panic!("expected text");
            };
            assert_eq!(rgba[3], 0);
        }
    }

    #[test]
    fn overall_skill_reads_the_summed_total() {
        let mut surface = RecordingSurface::new();
        let overlay = XpTrackerOverlay::new(config());
        let ctx = RenderContext {
            experience: &FixedXp(100),
            goals: &FixedGoals { start: -1, end: -1 },
            icons: &NoIcons,
        };
        let snapshot = TrackerSnapshot {
            skill: Skill::Overall,
            millis_since_update: 0,
            should_draw: true,
        };

        overlay.render(&mut surface, &ctx, &snapshot).unwrap();
        let DrawOp::Text { text, .. } = surface.ops[0].clone() else {
            panic!("expected text");
        };
        assert_eq!(text, "1,000");
    }

    #[test]
    fn identical_inputs_produce_identical_commands() {
        let overlay = XpTrackerOverlay::new(TrackerConfig {
            show_icons: true,
            show_progress_bar: true,
            ..config()
        });
        let icons = SquareIcons::new(25);
        let ctx = RenderContext {
            experience: &FixedXp(1_234_567),
            goals: &FixedGoals { start: 0, end: 100 },
            icons: &icons,
        };

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        let dims_a = overlay.render(&mut first, &ctx, &snapshot(true));
        let dims_b = overlay.render(&mut second, &ctx, &snapshot(true));

        assert_eq!(dims_a, dims_b);
        assert_eq!(first.ops, second.ops);
    }
}
