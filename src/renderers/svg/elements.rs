//! In-memory SVG elements
//!
//! `SvgNode` behaves like a DOM element for the purposes of the card: setting
//! an attribute or style that already exists replaces its value in place,
//! so the last write wins while first-write order is kept for output.

use crate::error::VisualResult;
use crate::renderers::card::SvgTarget;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SvgNode {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub styles: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<SvgNode>,
}

impl SvgNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    /// Element with a `class` attribute, like `selection.classed(name, true)`
    pub fn with_class(tag: &str, class: &str) -> Self {
        let mut node = Self::new(tag);
        upsert(&mut node.attributes, "class", class);
        node
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        lookup(&self.attributes, key)
    }

    pub fn style(&self, key: &str) -> Option<&str> {
        lookup(&self.styles, key)
    }

    /// Inline `style` attribute value (`key:value;key:value`)
    pub fn style_attribute(&self) -> Option<String> {
        if self.styles.is_empty() {
            return None;
        }
        Some(
            self.styles
                .iter()
                .map(|(k, v)| format!("{}:{}", k, v))
                .collect::<Vec<_>>()
                .join(";"),
        )
    }
}

impl SvgTarget for SvgNode {
    fn set_attribute(&mut self, key: &str, value: &str) -> VisualResult<()> {
        upsert(&mut self.attributes, key, value);
        Ok(())
    }

    fn set_style(&mut self, key: &str, value: &str) -> VisualResult<()> {
        upsert(&mut self.styles, key, value);
        Ok(())
    }

    fn set_text(&mut self, text: &str) -> VisualResult<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

fn upsert(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    match pairs.iter_mut().find(|(k, _)| k == key) {
        Some((_, existing)) => *existing = value.to_string(),
        None => pairs.push((key.to_string(), value.to_string())),
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}
