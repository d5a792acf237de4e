//! Models module for the card visual
//!
//! This module contains the host-facing input shapes (data view, settings)
//! and the render-ready view model produced from them.

pub mod data_view;
pub mod roles;
pub mod serde_helpers;
pub mod settings;
pub mod view_model;

// Re-export commonly used types
pub use data_view::*;
pub use roles::{columns_with_role, first_column_with_role, DataRole};
pub use settings::{CardSettings, VisualObjectInstance, VisualSettings};
pub use view_model::*;
