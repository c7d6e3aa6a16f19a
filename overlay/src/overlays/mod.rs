//! Complete overlay implementations
//!
//! Each overlay composes widgets onto a [`DrawSurface`](crate::surface::DrawSurface)
//! and reports the dimension it consumed; the host decides placement.

mod tracker;

pub use tracker::{RenderContext, TrackerSnapshot, XpTrackerOverlay};
