use wasm_bindgen::prelude::JsValue;
use wasm_bindgen::prelude::*;
use web_sys::{self, DedicatedWorkerGlobalScope, Window};

use crate::domain::browse::BrowseError;

/// Resolve the JS global this module runs under, preferring a worker scope
/// over the window.
pub fn get_global_scope() -> Result<JsValue, BrowseError> {
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Ok(JsValue::from(scope));
    }

    let window = web_sys::window().ok_or_else(|| {
        BrowseError::backend_error("Neither DedicatedWorkerGlobalScope nor Window found")
    })?;
    Ok(JsValue::from(window))
}

/// Post a message to whichever global scope is running the module: the
/// worker's `postMessage` when inside a worker, `window.postMessage` with a
/// wildcard origin otherwise.
pub fn post_to_global(message: &JsValue) -> Result<(), String> {
    let scope = get_global_scope().map_err(|e| e.to_string())?;

    if let Ok(worker) = scope.clone().dyn_into::<DedicatedWorkerGlobalScope>() {
        worker
            .post_message(message)
            .map_err(|e| format!("postMessage failed: {:?}", e))
    } else if let Ok(window) = scope.dyn_into::<Window>() {
        window
            .post_message(message, "*")
            .map_err(|e| format!("postMessage failed: {:?}", e))
    } else {
        Err("Unknown global scope".to_string())
    }
}
