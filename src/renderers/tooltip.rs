//! Tooltip binding
//!
//! The hover handler is registered once; each update swaps the list it
//! returns. Nothing is shown while the list is empty.

use serde::{Deserialize, Serialize};

use crate::models::TooltipItem;

/// Payload for the host tooltip service's `show`/`move` calls
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TooltipShowOptions {
    pub coordinates: [f64; 2],
    pub is_touch_event: bool,
    pub data_items: Vec<TooltipItem>,
    pub identities: Vec<serde_json::Value>,
}

/// Payload for the host tooltip service's `hide` call
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TooltipHideOptions {
    pub immediately: bool,
    pub is_touch_event: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipBinding {
    items: Vec<TooltipItem>,
}

impl TooltipBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tooltip list wholesale
    pub fn update(&mut self, items: &[TooltipItem]) {
        self.items = items.to_vec();
    }

    pub fn items(&self) -> &[TooltipItem] {
        &self.items
    }

    pub fn is_active(&self) -> bool {
        !self.items.is_empty()
    }

    /// Options for showing the tooltip at pointer position `(x, y)`, or
    /// `None` when there's nothing to show.
    pub fn show_options(&self, x: f64, y: f64) -> Option<TooltipShowOptions> {
        if !self.is_active() {
            return None;
        }
        Some(TooltipShowOptions {
            coordinates: [x, y],
            is_touch_event: false,
            data_items: self.items.clone(),
            identities: Vec::new(),
        })
    }

    pub fn hide_options(&self) -> TooltipHideOptions {
        TooltipHideOptions {
            immediately: false,
            is_touch_event: false,
        }
    }
}
