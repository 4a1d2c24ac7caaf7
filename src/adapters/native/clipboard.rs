use async_trait::async_trait;
use parking_lot::Mutex;

use crate::ports::ClipboardPort;

/// Clipboard adapter for native builds: keeps the last written text in
/// memory where tests can read it back.
pub struct BufferClipboard {
    last: Mutex<Option<String>>,
}

impl BufferClipboard {
    pub fn new() -> Self {
        Self {
            last: Mutex::new(None),
        }
    }

    pub fn last_copied(&self) -> Option<String> {
        self.last.lock().clone()
    }
}

impl Default for BufferClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ClipboardPort for BufferClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        *self.last.lock() = Some(text.to_string());
        Ok(())
    }
}
