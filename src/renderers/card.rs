//! Applying a view model to the card's elements
//!
//! The card is a fixed set of elements created once:
//!
//! ```text
//! svg.card
//! └── g.container
//!     ├── rect.rect
//!     ├── text.textValue
//!     └── text.textLabel
//! ```
//!
//! Every update re-applies the view model's attributes, styles and text to
//! those elements. The same code drives the in-memory [`SvgNode`] tree and
//! real DOM elements through the [`SvgTarget`] trait.
//!
//! [`SvgNode`]: super::svg::SvgNode

use crate::error::VisualResult;
use crate::format::js_number;
use crate::models::{CardText, HtmlAttribute, ViewModel};

/// Something attributes, styles and text can be applied to
pub trait SvgTarget {
    fn set_attribute(&mut self, key: &str, value: &str) -> VisualResult<()>;
    fn set_style(&mut self, key: &str, value: &str) -> VisualResult<()>;
    fn set_text(&mut self, text: &str) -> VisualResult<()>;
}

/// Class names of the fixed elements
pub mod classes {
    pub const CANVAS: &str = "card";
    pub const CONTAINER: &str = "container";
    pub const RECT: &str = "rect";
    pub const VALUE: &str = "textValue";
    pub const LABEL: &str = "textLabel";
}

/// Handles to the card's elements
#[derive(Debug, Clone, PartialEq)]
pub struct CardElements<T> {
    pub svg: T,
    pub container: T,
    pub rect: T,
    pub measure_value: T,
    pub measure_label: T,
}

/// Apply one update's view model to the elements.
pub fn render_view_model<T: SvgTarget>(elements: &mut CardElements<T>, view_model: &ViewModel) -> VisualResult<()> {
    // Scale canvas to match viewport
    elements
        .svg
        .set_attribute("width", &js_number(view_model.dimensions.width))?;
    elements
        .svg
        .set_attribute("height", &js_number(view_model.dimensions.height))?;

    let card = &view_model.card;
    apply_styles(&mut elements.rect, &card.styles)?;
    apply_attributes(&mut elements.rect, &card.attributes)?;

    apply_text(&mut elements.measure_value, &card.measure_value)?;
    apply_text(&mut elements.measure_label, &card.measure_label)?;

    Ok(())
}

fn apply_text<T: SvgTarget>(element: &mut T, text: &CardText) -> VisualResult<()> {
    element.set_text(&text.text)?;
    apply_attributes(element, &text.attributes)?;
    apply_styles(element, &text.styles)
}

fn apply_attributes<T: SvgTarget>(element: &mut T, attributes: &[HtmlAttribute]) -> VisualResult<()> {
    for attribute in attributes {
        element.set_attribute(&attribute.key, &attribute.value)?;
    }
    Ok(())
}

fn apply_styles<T: SvgTarget>(element: &mut T, styles: &[HtmlAttribute]) -> VisualResult<()> {
    for style in styles {
        element.set_style(&style.key, &style.value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::visual_transform;
    use crate::models::{VisualSettings, VisualUpdateOptions, Viewport};

    /// Records every call in order
    #[derive(Default, Debug, Clone, PartialEq)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl SvgTarget for Recorder {
        fn set_attribute(&mut self, key: &str, value: &str) -> VisualResult<()> {
            self.calls.push(format!("attr {}={}", key, value));
            Ok(())
        }

        fn set_style(&mut self, key: &str, value: &str) -> VisualResult<()> {
            self.calls.push(format!("style {}={}", key, value));
            Ok(())
        }

        fn set_text(&mut self, text: &str) -> VisualResult<()> {
            self.calls.push(format!("text {}", text));
            Ok(())
        }
    }

    fn recorders() -> CardElements<Recorder> {
        CardElements {
            svg: Recorder::default(),
            container: Recorder::default(),
            rect: Recorder::default(),
            measure_value: Recorder::default(),
            measure_label: Recorder::default(),
        }
    }

    #[test]
    fn test_rect_gets_styles_then_attributes_in_order() {
        let options = VisualUpdateOptions {
            viewport: Viewport::new(120.0, 80.0),
            data_views: vec![],
        };
        let vm = visual_transform(&options, &VisualSettings::default());
        let mut elements = recorders();
        render_view_model(&mut elements, &vm).unwrap();

        assert_eq!(elements.svg.calls, vec!["attr width=120", "attr height=80"]);
        assert_eq!(
            elements.rect.calls,
            vec![
                "style fill=#01B8AA",
                "style fill-opacity=0.5",
                "style stroke=black",
                "style stroke-width=1",
                "attr x=2",
                "attr y=2",
                "attr width=116",
                "attr height=76",
            ]
        );
        assert!(elements.container.calls.is_empty());
    }

    #[test]
    fn test_text_elements_get_text_first() {
        let vm = visual_transform(&VisualUpdateOptions::default(), &VisualSettings::default());
        let mut elements = recorders();
        render_view_model(&mut elements, &vm).unwrap();

        assert_eq!(elements.measure_value.calls[0], "text (blank)");
        assert_eq!(elements.measure_label.calls[0], "text [No Measure Supplied]");
        assert_eq!(elements.measure_value.calls.last().unwrap(), "style font-size=0");
    }
}
