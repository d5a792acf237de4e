//! Card visual WASM API
//!
//! This module provides the JavaScript-facing API for the card visual.
//!
//! # Module Structure
//!
//! - `helpers`: Logging macros and serde conversions for the boundary
//! - `visual`: The `Visual` class (constructor, `update`,
//!   `enumerateObjectInstances`) and `getCapabilities`

pub mod helpers;
pub mod visual;

pub use visual::{get_capabilities, Visual};
