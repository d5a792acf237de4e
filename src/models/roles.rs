//! Data roles and role-based column lookup

use serde::{Deserialize, Serialize};
use std::fmt;

use super::data_view::DataViewValueColumn;

/// Named slots the host maps user-selected fields onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataRole {
    /// The single value shown on the card
    Measure,
    /// Extra fields shown only in the tooltip
    Tooltip,
}

impl DataRole {
    pub const ALL: [DataRole; 2] = [DataRole::Measure, DataRole::Tooltip];

    /// Role name as it appears in the data view's `roles` map
    pub fn name(self) -> &'static str {
        match self {
            DataRole::Measure => "measure",
            DataRole::Tooltip => "tooltip",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DataRole::Measure => "Measure",
            DataRole::Tooltip => "Tooltips",
        }
    }
}

impl fmt::Display for DataRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Select the columns tagged with `role`, preserving source order.
pub fn columns_with_role(columns: &[DataViewValueColumn], role: DataRole) -> Vec<&DataViewValueColumn> {
    columns
        .iter()
        .filter(|column| column.source.has_role(role.name()))
        .collect()
}

/// First column tagged with `role` in source order
pub fn first_column_with_role(columns: &[DataViewValueColumn], role: DataRole) -> Option<&DataViewValueColumn> {
    columns.iter().find(|column| column.source.has_role(role.name()))
}
