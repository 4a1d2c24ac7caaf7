use parking_lot::Mutex;

use crate::notifications::Toast;
use crate::ports::NotifierPort;

/// Notifier adapter for native builds: records toasts instead of rendering
/// them, so flows can assert on what the user would have seen.
pub struct ToastRecorder {
    history: Mutex<Vec<Toast>>,
}

impl ToastRecorder {
    pub fn new() -> Self {
        Self {
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.history.lock().clone()
    }

    pub fn clear(&self) {
        self.history.lock().clear();
    }
}

impl Default for ToastRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifierPort for ToastRecorder {
    fn toast(&self, message: &str, duration_ms: u32) -> Result<(), String> {
        self.history.lock().push(Toast {
            message: message.to_string(),
            duration_ms,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_keeps_toasts_in_order() {
        let notifier = ToastRecorder::new();
        notifier.toast("first", 4_000).unwrap();
        notifier.toast("second", 2_000).unwrap();

        let toasts = notifier.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].message, "first");
        assert_eq!(toasts[0].duration_ms, 4_000);
        assert_eq!(toasts[1].message, "second");

        notifier.clear();
        assert!(notifier.toasts().is_empty());
    }
}
