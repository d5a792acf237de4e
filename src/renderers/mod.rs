//! Renderers for the card visual
//!
//! `card` applies a view model to any [`card::SvgTarget`]; `svg` holds the
//! in-memory scene and its SVG serialisation; `dom` drives the host's DOM;
//! `tooltip` keeps the hover tooltip list.

pub mod card;
pub mod dom;
pub mod svg;
pub mod tooltip;

pub use card::{render_view_model, CardElements, SvgTarget};
pub use svg::{SvgNode, SvgScene};
pub use tooltip::TooltipBinding;
