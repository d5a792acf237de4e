//! Shared helpers for WASM API operations
//!
//! Logging macros and the serde conversions every entry point uses to cross
//! the JavaScript boundary.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::VisualError;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        log::debug!("[WASM] {}", format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        log::info!("[WASM] {}", format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        log::warn!("[WASM] ⚠️ {}", format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        log::error!("[WASM] ❌ {}", format!($($arg)*))
    };
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize host input, logging and wrapping failures
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, VisualError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let err = VisualError::InvalidOptions(format!("{}: {}", error_context, e));
        crate::wasm_error!("{}", err);
        err
    })
}

/// Deserialize host input after a `JSON.stringify` pass.
///
/// `Date` cells become ISO-8601 text through `Date.prototype.toJSON`;
/// `serde-wasm-bindgen` alone would read them as empty objects.
pub fn deserialize_json<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, VisualError> {
    let invalid = |message: String| {
        let err = VisualError::InvalidOptions(format!("{}: {}", error_context, message));
        crate::wasm_error!("{}", err);
        err
    };

    let text = js_sys::JSON::stringify(&value)
        .map_err(|e| invalid(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| invalid("not JSON-serialisable".to_string()))?;
    serde_json::from_str(&text).map_err(|e| invalid(e.to_string()))
}

/// Serialize a result for JavaScript as plain objects (maps become objects,
/// `None` becomes `null`)
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, VisualError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| {
        let err = VisualError::Serialization(format!("{}: {}", error_context, e));
        crate::wasm_error!("{}", err);
        err
    })
}
