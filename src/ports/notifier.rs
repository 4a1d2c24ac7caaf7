/// Port for transient user notifications (toasts).
pub trait NotifierPort: Send + Sync {
    /// Show a toast for `duration_ms`. Fire-and-forget: callers do not wait
    /// for display or dismissal.
    fn toast(&self, message: &str, duration_ms: u32) -> Result<(), String>;
}
