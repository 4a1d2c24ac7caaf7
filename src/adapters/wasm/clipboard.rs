use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::global::get_global_scope;
use crate::ports::ClipboardPort;

/// Clipboard adapter over `navigator.clipboard`.
///
/// Only available in a window context; worker scopes report an error, which
/// the flows treat as a skipped copy.
#[derive(Clone, Copy)]
pub struct NavigatorClipboard;

impl NavigatorClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl ClipboardPort for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        let scope = get_global_scope().map_err(|e| e.to_string())?;
        let window = scope
            .dyn_into::<web_sys::Window>()
            .map_err(|_| "Clipboard is only available in a window context".to_string())?;

        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("Clipboard write failed: {:?}", e))
    }
}
