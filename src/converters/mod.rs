//! Converters
//!
//! This module maps host input into the render-ready view model.

pub mod layout;
pub mod view_model;

// Re-export for convenience
pub use layout::LayoutDefaults;
pub use view_model::{visual_transform, visual_transform_with_layout};
