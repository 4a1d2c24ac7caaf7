use crate::global::post_to_global;
use crate::notifications::{EventType, Message, Toast};
use crate::ports::NotifierPort;

/// Notifier adapter for WASM: posts toast events to the embedding page (or
/// the worker's owner), which renders them with its own toast component.
#[derive(Clone, Copy)]
pub struct ToastNotifier;

impl ToastNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotifierPort for ToastNotifier {
    fn toast(&self, message: &str, duration_ms: u32) -> Result<(), String> {
        let msg = Message {
            event: EventType::Toast,
            data: Toast {
                message: message.to_string(),
                duration_ms,
            },
        };

        let js_value = serde_wasm_bindgen::to_value(&msg)
            .map_err(|e| format!("Failed to serialize toast: {:?}", e))?;
        post_to_global(&js_value)
    }
}
