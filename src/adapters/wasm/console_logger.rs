use wasm_bindgen::JsValue;

use crate::ports::LoggerPort;

/// Logger adapter for WASM, forwarding to the browser console. Timing
/// brackets map onto `console.time`/`console.timeEnd` so they land in the
/// devtools timings panel.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        web_sys::console::log_1(&JsValue::from_str(message));
    }

    fn error(&self, message: &str) {
        web_sys::console::error_1(&JsValue::from_str(message));
    }

    fn warn(&self, message: &str) {
        web_sys::console::warn_1(&JsValue::from_str(message));
    }

    fn time(&self, label: &str) {
        web_sys::console::time_with_label(label);
    }

    fn time_end(&self, label: &str) {
        web_sys::console::time_end_with_label(label);
    }
}
