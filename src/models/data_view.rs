//! Host data view shapes
//!
//! These mirror the subset of the host's `DataView` and `VisualUpdateOptions`
//! objects the card visual reads. Everything is optional or defaulted because
//! the host sends partial views while fields are still being bound.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::serde_helpers::deserialize_null_default;

/// Per-object property bags persisted by the host (`metadata.objects`)
pub type DataViewObjects = serde_json::Map<String, serde_json::Value>;

/// Options passed to every `update` call
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisualUpdateOptions {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub viewport: Viewport,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub data_views: Vec<DataView>,
}

impl VisualUpdateOptions {
    /// The data view the visual binds to (always the first one)
    pub fn data_view(&self) -> Option<&DataView> {
        self.data_views.first()
    }
}

/// Size of the container the host gives the visual, in pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Columnar snapshot of the bound dataset
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataView {
    #[serde(default)]
    pub metadata: Option<DataViewMetadata>,

    #[serde(default)]
    pub categorical: Option<DataViewCategorical>,
}

impl DataView {
    /// Value columns, if the view carries metadata columns and a categorical
    /// section with a values array. `None` means the view isn't usable.
    pub fn value_columns(&self) -> Option<&[DataViewValueColumn]> {
        let metadata = self.metadata.as_ref()?;
        if metadata.columns.is_empty() {
            return None;
        }
        self.categorical.as_ref()?.values.as_deref()
    }

    /// Persisted property bag for one object (e.g. `card`)
    pub fn object(&self, name: &str) -> Option<&serde_json::Value> {
        self.metadata.as_ref()?.objects.as_ref()?.get(name)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataViewMetadata {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub columns: Vec<DataViewMetadataColumn>,

    #[serde(default)]
    pub objects: Option<DataViewObjects>,
}

/// Description of one bound field
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataViewMetadataColumn {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub display_name: String,

    /// Role name -> bound flag
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub roles: BTreeMap<String, bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl DataViewMetadataColumn {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.get(role).copied().unwrap_or(false)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataViewCategorical {
    /// Missing entirely when no measure-like field is bound
    #[serde(default)]
    pub values: Option<Vec<DataViewValueColumn>>,
}

/// One measure-like column in the categorical section
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DataViewValueColumn {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub source: DataViewMetadataColumn,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub values: Vec<PrimitiveValue>,
}

impl DataViewValueColumn {
    /// First value of the column; an empty column reads as blank
    pub fn first_value(&self) -> &PrimitiveValue {
        self.values.first().unwrap_or(&PrimitiveValue::Null)
    }
}

/// A single cell value. Dates come through as ISO-8601 text.
///
/// Deserialization never fails: objects, arrays and numbers outside `f64`
/// read as `Null`, so one odd cell can't reject a whole update.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(untagged)]
pub enum PrimitiveValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for PrimitiveValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => PrimitiveValue::Null,
            Value::Bool(b) => PrimitiveValue::Bool(b),
            Value::Number(n) => n.as_f64().map_or(PrimitiveValue::Null, PrimitiveValue::Number),
            Value::String(s) => PrimitiveValue::Text(s),
            other => {
                log::debug!("Reading non-primitive cell as blank: {}", other);
                PrimitiveValue::Null
            }
        })
    }
}

impl From<f64> for PrimitiveValue {
    fn from(value: f64) -> Self {
        PrimitiveValue::Number(value)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_host_shape() {
        let options: VisualUpdateOptions = serde_json::from_value(json!({
            "viewport": { "width": 300, "height": 200 },
            "dataViews": [{
                "metadata": { "columns": [{ "displayName": "Sales", "roles": { "measure": true } }] },
                "categorical": {
                    "values": [{
                        "source": { "displayName": "Sales", "roles": { "measure": true }, "format": "#,0" },
                        "values": [42, null, "x", true]
                    }]
                }
            }]
        }))
        .unwrap();

        assert_eq!(options.viewport, Viewport::new(300.0, 200.0));
        let columns = options.data_view().unwrap().value_columns().unwrap();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].source.format.as_deref(), Some("#,0"));
        assert_eq!(
            columns[0].values,
            vec![
                PrimitiveValue::Number(42.0),
                PrimitiveValue::Null,
                PrimitiveValue::Text("x".into()),
                PrimitiveValue::Bool(true),
            ]
        );
    }

    #[test]
    fn test_value_columns_requires_metadata_columns() {
        let view: DataView = serde_json::from_value(json!({
            "metadata": { "columns": [] },
            "categorical": { "values": [] }
        }))
        .unwrap();
        assert!(view.value_columns().is_none());
    }

    #[test]
    fn test_value_columns_requires_values_array() {
        let view: DataView = serde_json::from_value(json!({
            "metadata": { "columns": [{ "displayName": "Sales" }] },
            "categorical": {}
        }))
        .unwrap();
        assert!(view.value_columns().is_none());
    }

    #[test]
    fn test_null_roles_read_as_unbound() {
        let column: DataViewMetadataColumn =
            serde_json::from_value(json!({ "displayName": "Sales", "roles": null })).unwrap();
        assert!(!column.has_role("measure"));
    }

    #[test]
    fn test_empty_column_first_value_is_null() {
        let column = DataViewValueColumn::default();
        assert_eq!(column.first_value(), &PrimitiveValue::Null);
    }

    #[test]
    fn test_non_primitive_cells_read_as_null() {
        let column: DataViewValueColumn = serde_json::from_value(json!({
            "source": { "displayName": "When", "roles": { "tooltip": true } },
            "values": [{}, [1, 2], "2024-03-07", 5]
        }))
        .unwrap();
        assert_eq!(
            column.values,
            vec![
                PrimitiveValue::Null,
                PrimitiveValue::Null,
                PrimitiveValue::Text("2024-03-07".into()),
                PrimitiveValue::Number(5.0),
            ]
        );
    }

    #[test]
    fn test_partial_columns_deserialize() {
        let view: DataView = serde_json::from_value(json!({
            "metadata": { "columns": [{ "displayName": null }] },
            "categorical": { "values": [
                { "values": [1] },
                { "source": { "displayName": null, "roles": { "measure": true } }, "values": [2] }
            ]}
        }))
        .unwrap();

        let columns = view.value_columns().unwrap();
        assert_eq!(columns[0].source, DataViewMetadataColumn::default());
        assert_eq!(columns[1].source.display_name, "");
        assert!(columns[1].source.has_role("measure"));
    }

    #[test]
    fn test_missing_viewport_reads_as_zero() {
        let options: VisualUpdateOptions = serde_json::from_value(json!({ "dataViews": null })).unwrap();
        assert_eq!(options.viewport, Viewport::default());
        assert!(options.data_view().is_none());
    }

    #[test]
    fn test_object_lookup() {
        let view: DataView = serde_json::from_value(json!({
            "metadata": { "columns": [], "objects": { "card": { "strokeWidth": 3 } } }
        }))
        .unwrap();
        assert_eq!(view.object("card"), Some(&json!({ "strokeWidth": 3 })));
        assert!(view.object("other").is_none());
    }
}
