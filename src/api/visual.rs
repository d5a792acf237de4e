//! The `Visual` class the host drives
//!
//! Constructed once with the host element (and optionally the host tooltip
//! service), then `update` is called on every data or viewport change.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, deserialize_json, serialize};
use crate::capabilities::Capabilities;
use crate::error::VisualError;
use crate::models::VisualUpdateOptions;
use crate::renderers::dom::{create_card_elements, DomNode, TooltipListeners, TooltipService};
use crate::renderers::{render_view_model, CardElements};
use crate::visual::CardVisual;
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

/// Argument of `enumerateObjectInstances`
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EnumerateObjectInstancesOptions {
    pub object_name: String,
}

#[wasm_bindgen]
pub struct Visual {
    state: CardVisual,
    elements: CardElements<DomNode>,
    _tooltip_listeners: Option<TooltipListeners>,
}

#[wasm_bindgen]
impl Visual {
    /// Create the card's elements under `element`
    #[wasm_bindgen(constructor)]
    pub fn new(element: web_sys::Element, tooltip_service: Option<TooltipService>) -> Result<Visual, JsValue> {
        let state = CardVisual::new();
        let elements = create_card_elements(&element).map_err(|e| {
            wasm_error!("Failed to create card elements: {}", e);
            e
        })?;

        let tooltip_listeners = match tooltip_service {
            Some(service) => Some(TooltipListeners::attach(
                &elements.svg.0,
                service,
                state.tooltip_binding(),
            )?),
            None => {
                wasm_warn!("No tooltip service supplied; tooltips disabled");
                None
            }
        };

        wasm_info!("Card visual created");
        Ok(Visual {
            state,
            elements,
            _tooltip_listeners: tooltip_listeners,
        })
    }

    /// Re-render from the host's update options
    pub fn update(&mut self, options: JsValue) -> Result<(), JsValue> {
        let options: VisualUpdateOptions = deserialize_json(options, "update options")?;
        wasm_log!(
            "update: viewport {}x{}, {} data view(s)",
            options.viewport.width,
            options.viewport.height,
            options.data_views.len()
        );

        let view_model = self.state.update(&options)?;
        render_view_model(&mut self.elements, &view_model).map_err(|e| {
            wasm_error!("Render failed: {}", e);
            JsValue::from(e)
        })
    }

    /// Settings objects to show in the host property pane
    #[wasm_bindgen(js_name = enumerateObjectInstances)]
    pub fn enumerate_object_instances(&self, options: JsValue) -> Result<JsValue, JsValue> {
        let options: EnumerateObjectInstancesOptions = deserialize(options, "enumerate options")?;
        let instances = self.state.enumerate_object_instances(&options.object_name);
        Ok(serialize(&instances, "object instances")?)
    }

    /// Current tooltip entries (what the hover handler shows)
    #[wasm_bindgen(js_name = tooltipItems)]
    pub fn tooltip_items(&self) -> Result<JsValue, JsValue> {
        Ok(serialize(&self.state.tooltip_items(), "tooltip items")?)
    }

    /// The current card as a standalone SVG document
    #[wasm_bindgen(js_name = renderSvg)]
    pub fn render_svg(&self) -> Result<String, JsValue> {
        Ok(self.state.scene().to_svg_string()?)
    }
}

/// Capability manifest as JSON
#[wasm_bindgen(js_name = getCapabilities)]
pub fn get_capabilities() -> Result<String, JsValue> {
    Capabilities::card_visual()
        .to_json()
        .map_err(|e| VisualError::Serialization(e.to_string()).into())
}
