/// Native Rust facade for vault browsing
/// Provides an ergonomic Rust API that delegates to domain logic
use crate::domain::browse::{
    actions, display, entry::CreatedFolder, entry::VaultEntry, error::BrowseError, policy, share,
    DeleteRequest,
};
use crate::platform::Platform;

/// High-level vault browsing API over a [`Platform`].
pub struct VaultBrowser {
    platform: Platform,
}

impl VaultBrowser {
    /// Create a browser over the default platform adapters.
    pub fn new() -> Self {
        Self {
            platform: Platform::new(),
        }
    }

    /// Create a browser over a custom platform, e.g. with swapped ports.
    pub fn with_platform(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Label shown for an entry, with reserved folder names translated.
    pub fn display_name(&self, entry: &VaultEntry) -> String {
        display::display_name(&self.platform, &entry.name)
    }

    /// Context-menu actions offered for an entry in the given context.
    pub fn actions(&self, context: &[String], entry: &VaultEntry) -> policy::EntryActions {
        policy::entry_actions(context, entry)
    }

    /// Share-link lifetimes, in menu order.
    pub fn expiry_options(&self) -> &'static [share::ShareExpiry; 3] {
        share::expiry_options()
    }

    /// Direct download link for an entry.
    pub fn download_url(&self, context: &[String], entry: &VaultEntry) -> String {
        actions::download_url(context, entry)
    }

    /// Create a folder in the current context; `None` means the untitled
    /// default name.
    pub async fn create_folder(
        &self,
        context: &[String],
        name: Option<&str>,
    ) -> Result<CreatedFolder, BrowseError> {
        actions::create_folder(&self.platform, context, name).await
    }

    /// Start a delete; the returned request still has to be confirmed.
    pub fn request_delete(
        &self,
        context: &[String],
        entry: &VaultEntry,
    ) -> Result<DeleteRequest, BrowseError> {
        actions::request_delete(context, entry)
    }

    /// Dispatch a confirmed delete.
    pub async fn confirm_delete(&self, request: DeleteRequest) -> Result<(), BrowseError> {
        request.confirm(&self.platform).await
    }

    /// Grant a share link for a file and copy it to the clipboard.
    pub async fn share(
        &self,
        context: &[String],
        entry: &VaultEntry,
        expire_in_seconds: u32,
    ) -> Result<String, BrowseError> {
        actions::share_entry(&self.platform, context, entry, expire_in_seconds).await
    }
}

impl Default for VaultBrowser {
    fn default() -> Self {
        Self::new()
    }
}
