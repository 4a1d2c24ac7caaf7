use std::collections::BTreeSet;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::browse::policy::PROTECTED_FOLDERS;
use crate::domain::browse::{BrowseError, CreatedFolder};
use crate::ports::VaultStorePort;

/// In-memory store adapter for native builds.
///
/// Tracks the folder tree and records every delete and share call so flows
/// can be exercised without a real backend. File content is out of scope;
/// file deletes arrive addressed by parent folder and the entry itself lives
/// in backend addressing, so for them only the call is recorded.
pub struct MemoryVaultStore {
    folders: Mutex<BTreeSet<String>>,
    deletes: Mutex<Vec<(String, bool)>>,
    shares: Mutex<Vec<(String, u32)>>,
}

impl MemoryVaultStore {
    /// New store seeded with the reserved system folders, like every
    /// provisioned vault.
    pub fn new() -> Self {
        let folders = PROTECTED_FOLDERS
            .iter()
            .map(|name| name.to_string())
            .collect();
        Self {
            folders: Mutex::new(folders),
            deletes: Mutex::new(Vec::new()),
            shares: Mutex::new(Vec::new()),
        }
    }

    pub fn contains_folder(&self, path: &str) -> bool {
        self.folders.lock().contains(path)
    }

    /// All folder paths, sorted.
    pub fn folders(&self) -> Vec<String> {
        self.folders.lock().iter().cloned().collect()
    }

    /// Every delete dispatched so far, as `(path, is_folder)` in call order.
    pub fn deletes(&self) -> Vec<(String, bool)> {
        self.deletes.lock().clone()
    }

    /// Every share granted so far, as `(filepath, expire_in_seconds)`.
    pub fn shares(&self) -> Vec<(String, u32)> {
        self.shares.lock().clone()
    }
}

impl Default for MemoryVaultStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl VaultStorePort for MemoryVaultStore {
    async fn create_folder(&self, path: &str, name: &str) -> Result<CreatedFolder, BrowseError> {
        let full_path = if path.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", path, name)
        };

        let mut folders = self.folders.lock();
        if !folders.insert(full_path.clone()) {
            return Err(BrowseError::FolderAlreadyExists);
        }

        Ok(CreatedFolder {
            path: full_path,
            name: name.to_string(),
        })
    }

    async fn delete_entry(&self, path: &str, is_folder: bool) -> Result<(), BrowseError> {
        if is_folder {
            let mut folders = self.folders.lock();
            if !folders.remove(path) {
                return Err(BrowseError::backend_error(format!(
                    "No folder at '{}'",
                    path
                )));
            }
            let prefix = format!("{}/", path);
            folders.retain(|folder| !folder.starts_with(&prefix));
        }
        self.deletes.lock().push((path.to_string(), is_folder));
        Ok(())
    }

    async fn share_file(
        &self,
        filepath: &str,
        expire_in_seconds: u32,
    ) -> Result<String, BrowseError> {
        self.shares
            .lock()
            .push((filepath.to_string(), expire_in_seconds));
        Ok(format!(
            "https://vault.invalid/share/{}?expires_in={}",
            filepath, expire_in_seconds
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_new_store_has_system_folders() {
        let store = MemoryVaultStore::new();
        assert!(store.contains_folder("inbox"));
        assert!(store.contains_folder("exports"));
        assert!(store.contains_folder("transactions"));
        assert_eq!(store.folders().len(), 3);
    }

    #[test]
    fn test_create_folder_at_root_and_nested() {
        let store = MemoryVaultStore::new();

        let created = block_on(store.create_folder("", "reports")).unwrap();
        assert_eq!(created.path, "reports");
        assert_eq!(created.name, "reports");

        let created = block_on(store.create_folder("reports", "2024")).unwrap();
        assert_eq!(created.path, "reports/2024");
        assert!(store.contains_folder("reports/2024"));
    }

    #[test]
    fn test_create_folder_rejects_duplicates() {
        let store = MemoryVaultStore::new();
        block_on(store.create_folder("", "reports")).unwrap();
        let err = block_on(store.create_folder("", "reports")).unwrap_err();
        assert!(matches!(err, BrowseError::FolderAlreadyExists));

        // Seeded system folders collide too.
        let err = block_on(store.create_folder("", "inbox")).unwrap_err();
        assert!(matches!(err, BrowseError::FolderAlreadyExists));
    }

    #[test]
    fn test_same_name_in_different_directories_is_fine() {
        let store = MemoryVaultStore::new();
        block_on(store.create_folder("", "2024")).unwrap();
        block_on(store.create_folder("exports", "2024")).unwrap();
        assert!(store.contains_folder("2024"));
        assert!(store.contains_folder("exports/2024"));
    }

    #[test]
    fn test_delete_folder_removes_subtree() {
        let store = MemoryVaultStore::new();
        block_on(store.create_folder("", "reports")).unwrap();
        block_on(store.create_folder("reports", "2024")).unwrap();
        block_on(store.create_folder("", "reports-archive")).unwrap();

        block_on(store.delete_entry("reports", true)).unwrap();

        assert!(!store.contains_folder("reports"));
        assert!(!store.contains_folder("reports/2024"));
        // Sibling with the same name prefix but not under the folder survives.
        assert!(store.contains_folder("reports-archive"));
        assert_eq!(store.deletes(), vec![("reports".to_string(), true)]);
    }

    #[test]
    fn test_delete_missing_folder_fails() {
        let store = MemoryVaultStore::new();
        let err = block_on(store.delete_entry("nope", true)).unwrap_err();
        assert!(matches!(err, BrowseError::BackendError(_)));
        assert!(store.deletes().is_empty());
    }

    #[test]
    fn test_file_delete_is_recorded_only() {
        let store = MemoryVaultStore::new();
        block_on(store.delete_entry("exports", false)).unwrap();
        assert!(store.contains_folder("exports"));
        assert_eq!(store.deletes(), vec![("exports".to_string(), false)]);
    }

    #[test]
    fn test_share_file_returns_url_and_records() {
        let store = MemoryVaultStore::new();
        let url = block_on(store.share_file("exports/q1.csv", 604_800)).unwrap();
        assert!(url.contains("exports/q1.csv"));
        assert!(url.contains("604800"));
        assert_eq!(store.shares(), vec![("exports/q1.csv".to_string(), 604_800)]);
    }
}
