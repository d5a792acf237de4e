//! Capability manifest
//!
//! Declares to the host which data roles the visual accepts and which
//! settings objects appear in the property pane.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::models::settings::CARD_OBJECT;
use crate::models::DataRole;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub data_roles: Vec<DataRoleDefinition>,
    pub objects: BTreeMap<String, ObjectDefinition>,
    pub data_view_mappings: Vec<Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataRoleDefinition {
    pub display_name: String,
    pub name: String,
    pub kind: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDefinition {
    pub display_name: String,
    pub properties: BTreeMap<String, PropertyDefinition>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    pub display_name: String,
    #[serde(rename = "type")]
    pub kind: Value,
}

impl Capabilities {
    /// The manifest for the card: one measure, any number of tooltip
    /// fields, and the `card` settings object.
    pub fn card_visual() -> Self {
        let data_roles = DataRole::ALL
            .iter()
            .map(|role| DataRoleDefinition {
                display_name: role.display_name().to_string(),
                name: role.name().to_string(),
                kind: "Measure".to_string(),
            })
            .collect();

        let mut properties = BTreeMap::new();
        properties.insert(
            "fillColour".to_string(),
            PropertyDefinition {
                display_name: "Fill Colour".to_string(),
                kind: json!({ "fill": { "solid": { "color": true } } }),
            },
        );
        properties.insert(
            "strokeWidth".to_string(),
            PropertyDefinition {
                display_name: "Stroke Width".to_string(),
                kind: json!({ "numeric": true }),
            },
        );

        let mut objects = BTreeMap::new();
        objects.insert(
            CARD_OBJECT.to_string(),
            ObjectDefinition {
                display_name: "Card".to_string(),
                properties,
            },
        );

        // At most one field may be bound to the measure role
        let mut condition = serde_json::Map::new();
        condition.insert(DataRole::Measure.name().to_string(), json!({ "max": 1 }));

        let data_view_mappings = vec![json!({
            "conditions": [condition],
            "categorical": {
                "values": {
                    "select": [
                        { "bind": { "to": DataRole::Measure.name() } },
                        { "for": { "in": DataRole::Tooltip.name() } }
                    ]
                }
            }
        })];

        Self {
            data_roles,
            objects,
            data_view_mappings,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
