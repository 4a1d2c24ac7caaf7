use serde::{Deserialize, Serialize};

/// Optional attributes the backend attaches to a listed entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryMetadata {
    /// MIME type; only meaningful for files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    /// Size in bytes; only meaningful for files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// One item of a vault listing: a file or a folder, never both.
///
/// Field names follow the listing's wire shape: `isFolder` is camelCase,
/// the timestamps stay snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultEntry {
    pub name: String,
    #[serde(rename = "isFolder", default)]
    pub is_folder: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<EntryMetadata>,
    /// Unix seconds; absent when the backend does not report it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl VaultEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_folder: false,
            metadata: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_folder: true,
            metadata: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn is_file(&self) -> bool {
        !self.is_folder
    }

    pub fn size(&self) -> Option<u64> {
        self.metadata.as_ref().and_then(|meta| meta.size)
    }

    pub fn mimetype(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|meta| meta.mimetype.as_deref())
    }
}

/// Handle returned by the backend once a folder has been created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedFolder {
    /// Full path of the new folder, from the vault root.
    pub path: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_is_exclusive() {
        let file = VaultEntry::file("report.pdf");
        assert!(file.is_file());
        assert!(!file.is_folder);

        let folder = VaultEntry::folder("reports");
        assert!(!folder.is_file());
        assert!(folder.is_folder);
    }

    #[test]
    fn test_entry_metadata_accessors() {
        let mut entry = VaultEntry::file("invoice.pdf");
        assert_eq!(entry.size(), None);
        assert_eq!(entry.mimetype(), None);

        entry.metadata = Some(EntryMetadata {
            mimetype: Some("application/pdf".to_string()),
            size: Some(52_428),
        });
        assert_eq!(entry.size(), Some(52_428));
        assert_eq!(entry.mimetype(), Some("application/pdf"));
    }

    #[test]
    fn test_entry_wire_shape() {
        let entry = VaultEntry::folder("exports");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["isFolder"], true);
        assert_eq!(json["name"], "exports");
        assert!(json.get("metadata").is_none());

        let parsed: VaultEntry =
            serde_json::from_str(r#"{"name":"a.csv","isFolder":false,"created_at":1700000000}"#)
                .unwrap();
        assert!(parsed.is_file());
        assert_eq!(parsed.created_at, Some(1_700_000_000));
    }

    #[test]
    fn test_entry_defaults_to_file() {
        // Listings may omit isFolder entirely for plain files.
        let parsed: VaultEntry = serde_json::from_str(r#"{"name":"a.csv"}"#).unwrap();
        assert!(parsed.is_file());
    }
}
