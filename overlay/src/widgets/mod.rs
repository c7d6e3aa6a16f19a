//! Reusable layout pieces for the tracker overlay
//!
//! - [`GoalBar`] - goal progress bar with a red→green gradient fill
//! - [`IconLayout`] / [`layout_icon`] - skill icon scaling and centering

pub mod colors;
mod icon;
mod progress_bar;

pub use icon::{IconLayout, layout_icon};
pub use progress_bar::GoalBar;
