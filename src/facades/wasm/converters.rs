use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::domain::browse::VaultEntry;

pub fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

pub fn to_js_value<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(to_js_error)
}

/// Navigation context from the JS side. `null`/`undefined` mean the vault
/// root, matching the dashboard's optional folder params.
pub fn context_from_js(value: JsValue) -> Result<Vec<String>, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(Vec::new());
    }
    from_value(value).map_err(|e| to_js_error(format!("Invalid navigation context: {}", e)))
}

pub fn entry_from_js(value: JsValue) -> Result<VaultEntry, JsValue> {
    from_value(value).map_err(|e| to_js_error(format!("Invalid vault entry: {}", e)))
}
