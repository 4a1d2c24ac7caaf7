use serde::Serialize;

use super::entry::VaultEntry;
use super::path;

/// Reserved top-level folders owned by the system. They can never be renamed
/// or deleted, whatever the navigation context.
pub const PROTECTED_FOLDERS: [&str; 3] = ["inbox", "exports", "transactions"];

/// Context roots under which every entry is read-only. Only the first
/// navigation segment is consulted; deeper segments never restrict.
pub const RESTRICTED_ROOTS: [&str; 1] = ["transactions"];

/// Whether a name matches a reserved system folder.
pub fn is_protected(name: &str) -> bool {
    PROTECTED_FOLDERS.contains(&name)
}

/// Whether the navigation context sits under a read-only root.
pub fn is_restricted_context(context: &[String]) -> bool {
    context
        .first()
        .is_some_and(|root| RESTRICTED_ROOTS.contains(&root.as_str()))
}

/// Whether rename and delete may be offered for this entry here.
///
/// Two independent vetoes: reserved system folders, and listings under a
/// restricted root. Everything else is mutable.
pub fn can_mutate(context: &[String], entry: &VaultEntry) -> bool {
    !is_protected(&entry.name) && !is_restricted_context(context)
}

/// Path and kind handed to the backend delete action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteTarget {
    pub path: String,
    #[serde(rename = "isFolder")]
    pub is_folder: bool,
}

/// Resolve what a delete must point the backend at.
///
/// Folders are addressed by their own full path. Files are addressed by
/// their containing folder's path only; the backend combines it with the
/// entry name through its own addressing. The backend contract depends on
/// this asymmetry.
pub fn delete_target(context: &[String], entry: &VaultEntry) -> DeleteTarget {
    let path = if entry.is_file() {
        path::folder_path(context)
    } else {
        path::entry_path(context, &entry.name)
    };
    DeleteTarget {
        path,
        is_folder: entry.is_folder,
    }
}

/// Context-menu decision record for one listed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryActions {
    pub share: bool,
    pub create_folder: bool,
    pub rename: bool,
    pub download: bool,
    pub delete: bool,
}

/// Which context-menu actions a row offers.
///
/// Share is file-only. Create-folder and download are always offered; the
/// restriction policy gates mutation of existing entries, not creation or
/// reading. Rename and delete follow [`can_mutate`].
pub fn entry_actions(context: &[String], entry: &VaultEntry) -> EntryActions {
    let mutable = can_mutate(context, entry);
    EntryActions {
        share: entry.is_file(),
        create_folder: true,
        rename: mutable,
        download: true,
        delete: mutable,
    }
}
