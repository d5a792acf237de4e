//! Card Visual WASM Module
//!
//! A single-measure card visual for a BI host. The host hands over its data
//! view and viewport on every update; the visual maps them into a view model
//! and renders one SVG card with the formatted value, its label and a hover
//! tooltip.

pub mod api;
pub mod capabilities;
pub mod converters;
pub mod error;
pub mod format;
pub mod models;
pub mod renderers;
pub mod visual;

// Re-export commonly used types
pub use converters::visual_transform;
pub use error::{VisualError, VisualResult};
pub use models::*;
pub use visual::CardVisual;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Card visual WASM module initialized");
}
