//! Render-ready view model
//!
//! The view model is everything the renderer needs for one update cycle.
//! It is built fresh by `converters::view_model::visual_transform` and
//! handed to JavaScript as-is, so field names follow the host's camelCase.

use serde::{Deserialize, Serialize};

use super::settings::VisualSettings;

/// Everything we need to render the visual
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    /// Parsed visual settings
    pub settings: VisualSettings,

    /// Dimensions of the visual container
    pub dimensions: Dimensions,

    pub card: Card,
}

/// Width/height in pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Offset of the card from the top/left of the canvas, in pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
}

/// The rectangle and its two text children
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub padding: Padding,

    /// Viewport minus twice the padding; may be negative for tiny viewports
    pub dimensions: Dimensions,

    /// SVG attributes for the `rect`, applied in order
    pub attributes: Vec<HtmlAttribute>,

    /// CSS styles for the `rect`, applied in order
    pub styles: Vec<HtmlAttribute>,

    pub measure_value: CardText,

    /// Shown underneath the measure value
    pub measure_label: CardText,

    pub tooltips: Vec<TooltipItem>,
}

/// A piece of text on the card with its own attributes and styles
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CardText {
    pub text: String,
    pub attributes: Vec<HtmlAttribute>,
    pub styles: Vec<HtmlAttribute>,
}

/// Key/value pair applied as an attribute or a style.
///
/// Later duplicates overwrite earlier ones when applied.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HtmlAttribute {
    pub key: String,
    pub value: String,
}

impl HtmlAttribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One row of the hover tooltip
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TooltipItem {
    pub display_name: String,
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
