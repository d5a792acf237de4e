//! Error types for the WASM boundary and rendering
//!
//! The view-model path never fails; these only cover talking to the host:
//! reading its options, writing results back, and driving the DOM.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum VisualError {
    /// The options object passed to `update` doesn't have the expected shape
    #[error("Invalid update options: {0}")]
    InvalidOptions(String),

    /// A result couldn't be converted for JavaScript
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A DOM call was rejected by the browser
    #[error("DOM error: {0}")]
    Dom(String),

    /// Writing the SVG document failed
    #[error("SVG serialization failed: {0}")]
    Xml(String),
}

pub type VisualResult<T> = Result<T, VisualError>;

impl From<quick_xml::Error> for VisualError {
    fn from(err: quick_xml::Error) -> Self {
        VisualError::Xml(err.to_string())
    }
}

impl From<std::io::Error> for VisualError {
    fn from(err: std::io::Error) -> Self {
        VisualError::Xml(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for VisualError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        VisualError::Xml(err.to_string())
    }
}

impl From<VisualError> for JsValue {
    fn from(err: VisualError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
