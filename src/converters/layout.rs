//! Layout defaults for the card
//!
//! These were hard-coded in the mapping; they live in one place so they can
//! be promoted to settings later without touching the converter.

use crate::models::Padding;

/// Text shown in place of the value when no measure is bound
pub const BLANK_VALUE_TEXT: &str = "(blank)";

/// Text shown in place of the label when no measure is bound
pub const NO_MEASURE_LABEL_TEXT: &str = "[No Measure Supplied]";

/// Horizontal/vertical anchor for both text elements
pub const TEXT_ANCHOR_CENTRE: &str = "50%";

/// Baseline shift that visually centres the value on `y`
pub const VALUE_BASELINE_SHIFT: &str = "0.35em";

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDefaults {
    pub padding: Padding,
    pub fill_opacity: &'static str,
    pub stroke: &'static str,
    /// Value font size is `min(width, height) / value_font_divisor`
    pub value_font_divisor: f64,
    /// Label font size is the value font size divided by this
    pub label_font_divisor: f64,
    /// Label `dy` is the value font size divided by this, in px
    pub label_offset_divisor: f64,
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            padding: Padding { left: 2.0, top: 2.0 },
            fill_opacity: "0.5",
            stroke: "black",
            value_font_divisor: 5.0,
            label_font_divisor: 4.0,
            label_offset_divisor: 1.2,
        }
    }
}

impl LayoutDefaults {
    pub fn value_font_size(&self, width: f64, height: f64) -> f64 {
        width.min(height) / self.value_font_divisor
    }

    pub fn label_font_size(&self, value_font_size: f64) -> f64 {
        value_font_size / self.label_font_divisor
    }

    pub fn label_offset(&self, value_font_size: f64) -> f64 {
        value_font_size / self.label_offset_divisor
    }
}
