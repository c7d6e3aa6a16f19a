//! Skillhud core types
//!
//! Host-facing domain types for the skill experience HUD: the [`Skill`]
//! enum, serializable tracker configuration, and the provider traits the
//! host application implements. This crate has no rendering dependencies;
//! everything pixel-shaped lives in `skillhud-overlay`.

pub mod config;
pub mod provider;
pub mod skill;

pub use config::{Color, FontStyle, TrackerConfig};
pub use provider::{ExperienceSource, GoalSource};
pub use skill::Skill;
