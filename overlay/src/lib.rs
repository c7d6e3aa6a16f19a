//! Skillhud Overlay Library
//!
//! Rendering for the transient skill experience HUD.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    overlays/                        │
//! │                 XpTrackerOverlay                    │
//! │        (icon + total + goal bar composition)        │
//! ├─────────────────────────────────────────────────────┤
//! │                widgets/ + fade                      │
//! │            GoalBar, IconLayout, alpha               │
//! │             (reusable layout pieces)                │
//! ├─────────────────────────────────────────────────────┤
//! │                    surface                          │
//! │          DrawSurface / SoftwareSurface              │
//! │        (primitive ops over an RGBA buffer)          │
//! ├─────────────────────────────────────────────────────┤
//! │                    renderer                         │
//! │            tiny-skia + cosmic-text                  │
//! │              (drawing primitives)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The host composites the surface's pixel buffer onto its own render
//! target and decides screen placement from the [`Dimension`] each render
//! call returns.

pub mod fade;
pub mod icons;
pub mod overlays;
pub mod renderer;
pub mod surface;
pub mod utils;
pub mod widgets;

// Re-export commonly used types
pub use icons::{IconData, IconSource, SkillIconStore};
pub use overlays::{RenderContext, TrackerSnapshot, XpTrackerOverlay};
pub use renderer::{FontSpec, Renderer};
pub use surface::{Dimension, DrawSurface, FontMetrics, SoftwareSurface};
pub use widgets::GoalBar;

// Re-export tiny_skia Color for external use
pub use tiny_skia::Color;
