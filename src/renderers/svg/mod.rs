//! SVG rendering output
//!
//! `SvgScene` is the in-memory counterpart of the DOM scene: the same fixed
//! card elements, updated through `render_view_model`, and serialisable to a
//! standalone SVG document for export and snapshot tests.

pub mod elements;

pub use elements::*;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::VisualResult;
use crate::models::ViewModel;
use crate::renderers::card::{classes, render_view_model, CardElements};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Card elements held in memory
#[derive(Debug, Clone, PartialEq)]
pub struct SvgScene {
    pub elements: CardElements<SvgNode>,
}

impl Default for SvgScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgScene {
    /// Create the fixed element set, unstyled
    pub fn new() -> Self {
        Self {
            elements: CardElements {
                svg: SvgNode::with_class("svg", classes::CANVAS),
                container: SvgNode::with_class("g", classes::CONTAINER),
                rect: SvgNode::with_class("rect", classes::RECT),
                measure_value: SvgNode::with_class("text", classes::VALUE),
                measure_label: SvgNode::with_class("text", classes::LABEL),
            },
        }
    }

    pub fn update(&mut self, view_model: &ViewModel) -> VisualResult<()> {
        render_view_model(&mut self.elements, view_model)
    }

    /// Assemble the element tree
    pub fn tree(&self) -> SvgNode {
        let els = &self.elements;

        let mut container = els.container.clone();
        container.children = vec![els.rect.clone(), els.measure_value.clone(), els.measure_label.clone()];

        let mut svg = els.svg.clone();
        svg.children = vec![container];
        svg
    }

    /// Serialise the scene as a standalone SVG document
    pub fn to_svg_string(&self) -> VisualResult<String> {
        let mut writer = Writer::new(Vec::new());
        write_node(&mut writer, &self.tree(), true)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &SvgNode, root: bool) -> VisualResult<()> {
    let mut start = BytesStart::new(node.tag.as_str());
    if root {
        start.push_attribute(("xmlns", SVG_NAMESPACE));
    }
    for (key, value) in &node.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    let style = node.style_attribute();
    if let Some(style) = style.as_deref() {
        start.push_attribute(("style", style));
    }

    if node.children.is_empty() && node.text.is_none() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = &node.text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &node.children {
        write_node(writer, child, false)?;
    }
    writer.write_event(Event::End(BytesEnd::new(node.tag.as_str())))?;
    Ok(())
}
