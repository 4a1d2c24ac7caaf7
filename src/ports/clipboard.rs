use async_trait::async_trait;

/// Port for the host clipboard.
///
/// Writes are best-effort: the flows treat a failed copy as a skipped
/// convenience, never as a failed action.
#[async_trait(?Send)]
pub trait ClipboardPort: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), String>;
}
