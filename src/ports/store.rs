use async_trait::async_trait;

use crate::domain::browse::{BrowseError, CreatedFolder};

/// Port for the storage backend's vault actions.
///
/// Implementations may be remote (server actions bridged over JS) or local
/// (the in-memory store used natively), so every method is fallible and
/// async.
#[async_trait(?Send)]
pub trait VaultStorePort: Send + Sync {
    /// Create folder `name` under `path` (`""` is the vault root).
    ///
    /// Must fail with [`BrowseError::FolderAlreadyExists`] when the name is
    /// taken in that directory.
    async fn create_folder(&self, path: &str, name: &str) -> Result<CreatedFolder, BrowseError>;

    /// Delete the entry the target resolution pointed at: folders by their
    /// own path, files by their parent folder's path.
    async fn delete_entry(&self, path: &str, is_folder: bool) -> Result<(), BrowseError>;

    /// Grant a time-limited share link for the file at `filepath` and return
    /// its URL.
    async fn share_file(&self, filepath: &str, expire_in_seconds: u32)
        -> Result<String, BrowseError>;
}
