//! Visual settings
//!
//! Settings are persisted by the host under `metadata.objects` of the data
//! view and edited through its property pane. Parsing never fails: a missing
//! or mistyped property keeps its default.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::data_view::DataView;
use super::serde_helpers::serialize_option_as_null;

/// Object name of the card settings in the capabilities and data view
pub const CARD_OBJECT: &str = "card";

pub const DEFAULT_FILL_COLOUR: &str = "#01B8AA";
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct VisualSettings {
    pub card: CardSettings,
}

/// Properties of the `card` object
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardSettings {
    /// CSS colour used to fill the card and tag the primary tooltip entry
    pub fill_colour: String,
    pub stroke_width: f64,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            fill_colour: DEFAULT_FILL_COLOUR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// One entry for the host property pane
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisualObjectInstance {
    pub object_name: String,

    #[serde(serialize_with = "serialize_option_as_null")]
    pub selector: Option<Value>,

    pub properties: serde_json::Map<String, Value>,
}

impl VisualSettings {
    /// Read settings from the data view's persisted objects
    pub fn parse(data_view: Option<&DataView>) -> Self {
        let mut settings = Self::default();

        let Some(card) = data_view.and_then(|view| view.object(CARD_OBJECT)) else {
            return settings;
        };

        if let Some(colour) = card.get("fillColour").and_then(read_colour) {
            settings.card.fill_colour = colour;
        } else if card.get("fillColour").is_some() {
            log::debug!("Ignoring unreadable card.fillColour: {}", card["fillColour"]);
        }

        match card.get("strokeWidth").and_then(Value::as_f64) {
            Some(width) => settings.card.stroke_width = width,
            None if card.get("strokeWidth").is_some() => {
                log::debug!("Ignoring non-numeric card.strokeWidth: {}", card["strokeWidth"]);
            }
            None => {}
        }

        settings
    }

    /// Instances to show in the property pane for `object_name`
    pub fn enumerate_object_instances(&self, object_name: &str) -> Vec<VisualObjectInstance> {
        match object_name {
            CARD_OBJECT => {
                let mut properties = serde_json::Map::new();
                properties.insert("fillColour".to_string(), json!(self.card.fill_colour));
                properties.insert("strokeWidth".to_string(), json!(self.card.stroke_width));

                vec![VisualObjectInstance {
                    object_name: CARD_OBJECT.to_string(),
                    selector: None,
                    properties,
                }]
            }
            _ => Vec::new(),
        }
    }
}

/// Colours are persisted as `{"solid": {"color": ".."}}`; accept a bare string too
fn read_colour(value: &Value) -> Option<String> {
    match value {
        Value::String(colour) => Some(colour.clone()),
        Value::Object(_) => value
            .pointer("/solid/color")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with_card(card: Value) -> DataView {
        serde_json::from_value(json!({
            "metadata": { "columns": [], "objects": { "card": card } }
        }))
        .unwrap()
    }

    #[test]
    fn test_defaults_without_data_view() {
        let settings = VisualSettings::parse(None);
        assert_eq!(settings.card.fill_colour, DEFAULT_FILL_COLOUR);
        assert_eq!(settings.card.stroke_width, DEFAULT_STROKE_WIDTH);
    }

    #[test]
    fn test_parse_solid_colour_and_width() {
        let view = view_with_card(json!({
            "fillColour": { "solid": { "color": "#ff0000" } },
            "strokeWidth": 4
        }));
        let settings = VisualSettings::parse(Some(&view));
        assert_eq!(settings.card.fill_colour, "#ff0000");
        assert_eq!(settings.card.stroke_width, 4.0);
    }

    #[test]
    fn test_parse_bare_colour_string() {
        let view = view_with_card(json!({ "fillColour": "blue" }));
        let settings = VisualSettings::parse(Some(&view));
        assert_eq!(settings.card.fill_colour, "blue");
        assert_eq!(settings.card.stroke_width, DEFAULT_STROKE_WIDTH);
    }

    #[test]
    fn test_mistyped_properties_keep_defaults() {
        let view = view_with_card(json!({ "fillColour": 12, "strokeWidth": "wide" }));
        assert_eq!(VisualSettings::parse(Some(&view)), VisualSettings::default());
    }

    #[test]
    fn test_enumerate_card() {
        let settings = VisualSettings::default();
        let instances = settings.enumerate_object_instances("card");
        assert_eq!(instances.len(), 1);

        let json = serde_json::to_value(&instances[0]).unwrap();
        assert_eq!(
            json,
            json!({
                "objectName": "card",
                "selector": null,
                "properties": { "fillColour": "#01B8AA", "strokeWidth": 1.0 }
            })
        );
    }

    #[test]
    fn test_enumerate_unknown_object_is_empty() {
        assert!(VisualSettings::default().enumerate_object_instances("legend").is_empty());
    }
}
