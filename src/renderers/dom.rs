//! DOM rendering through web-sys
//!
//! Creates the card's SVG elements under the host element once and applies
//! view models to them on every update. Also wires the host tooltip service
//! to the canvas.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::card::{classes, CardElements, SvgTarget};
use super::svg::SVG_NAMESPACE;
use super::tooltip::TooltipBinding;
use crate::error::{VisualError, VisualResult};

#[wasm_bindgen]
extern "C" {
    /// The host's tooltip service (`host.tooltipService`)
    #[derive(Clone, Debug)]
    pub type TooltipService;

    #[wasm_bindgen(method)]
    fn show(this: &TooltipService, options: JsValue);

    #[wasm_bindgen(method, js_name = "move")]
    fn move_to(this: &TooltipService, options: JsValue);

    #[wasm_bindgen(method)]
    fn hide(this: &TooltipService, options: JsValue);
}

fn dom_error(context: &str, err: JsValue) -> VisualError {
    VisualError::Dom(format!("{}: {:?}", context, err))
}

/// A live SVG element
#[derive(Debug, Clone)]
pub struct DomNode(pub web_sys::Element);

impl SvgTarget for DomNode {
    fn set_attribute(&mut self, key: &str, value: &str) -> VisualResult<()> {
        self.0
            .set_attribute(key, value)
            .map_err(|e| dom_error(&format!("set attribute '{}'", key), e))
    }

    fn set_style(&mut self, key: &str, value: &str) -> VisualResult<()> {
        let element = self
            .0
            .dyn_ref::<web_sys::SvgElement>()
            .ok_or_else(|| VisualError::Dom(format!("<{}> is not an SVG element", self.0.tag_name())))?;
        element
            .style()
            .set_property(key, value)
            .map_err(|e| dom_error(&format!("set style '{}'", key), e))
    }

    fn set_text(&mut self, text: &str) -> VisualResult<()> {
        self.0.set_text_content(Some(text));
        Ok(())
    }
}

/// Create the fixed card elements under `parent`.
pub fn create_card_elements(parent: &web_sys::Element) -> VisualResult<CardElements<DomNode>> {
    let document = parent
        .owner_document()
        .ok_or_else(|| VisualError::Dom("host element has no owner document".to_string()))?;

    let append = |parent: &web_sys::Element, tag: &str, class: &str| -> VisualResult<web_sys::Element> {
        let element = document
            .create_element_ns(Some(SVG_NAMESPACE), tag)
            .map_err(|e| dom_error(&format!("create <{}>", tag), e))?;
        element
            .set_attribute("class", class)
            .map_err(|e| dom_error("set class", e))?;
        parent
            .append_child(&element)
            .map_err(|e| dom_error(&format!("append <{}>", tag), e))?;
        Ok(element)
    };

    let svg = append(parent, "svg", classes::CANVAS)?;
    let container = append(&svg, "g", classes::CONTAINER)?;
    let rect = append(&container, "rect", classes::RECT)?;
    let measure_value = append(&container, "text", classes::VALUE)?;
    let measure_label = append(&container, "text", classes::LABEL)?;

    Ok(CardElements {
        svg: DomNode(svg),
        container: DomNode(container),
        rect: DomNode(rect),
        measure_value: DomNode(measure_value),
        measure_label: DomNode(measure_label),
    })
}

/// Mouse listeners on the canvas that feed the tooltip service.
///
/// Dropping this removes nothing from the DOM but invalidates the
/// callbacks, so it lives as long as the visual.
pub struct TooltipListeners {
    _mouse_move: Closure<dyn FnMut(web_sys::MouseEvent)>,
    _mouse_leave: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl TooltipListeners {
    pub fn attach(
        target: &web_sys::Element,
        service: TooltipService,
        binding: Rc<RefCell<TooltipBinding>>,
    ) -> VisualResult<Self> {
        let shown = Rc::new(RefCell::new(false));

        let mouse_move = {
            let service = service.clone();
            let binding = Rc::clone(&binding);
            let shown = Rc::clone(&shown);
            Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
                let options = binding
                    .borrow()
                    .show_options(f64::from(event.client_x()), f64::from(event.client_y()));
                let Some(options) = options else {
                    return;
                };
                let Some(payload) = to_js(&options) else {
                    return;
                };
                let mut shown = shown.borrow_mut();
                if *shown {
                    service.move_to(payload);
                } else {
                    service.show(payload);
                    *shown = true;
                }
            })
        };

        // `mouseleave` rather than `mouseout`: moving between the card's own
        // children must not hide the tooltip
        let mouse_leave = {
            let binding = Rc::clone(&binding);
            let shown = Rc::clone(&shown);
            Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_event: web_sys::MouseEvent| {
                let mut shown = shown.borrow_mut();
                if !*shown {
                    return;
                }
                if let Some(payload) = to_js(&binding.borrow().hide_options()) {
                    service.hide(payload);
                }
                *shown = false;
            })
        };

        target
            .add_event_listener_with_callback("mousemove", mouse_move.as_ref().unchecked_ref())
            .map_err(|e| dom_error("add mousemove listener", e))?;
        target
            .add_event_listener_with_callback("mouseleave", mouse_leave.as_ref().unchecked_ref())
            .map_err(|e| dom_error("add mouseleave listener", e))?;

        Ok(Self {
            _mouse_move: mouse_move,
            _mouse_leave: mouse_leave,
        })
    }
}

fn to_js<T: Serialize>(value: &T) -> Option<JsValue> {
    crate::api::helpers::serialize(value, "Tooltip options").ok()
}
