use std::fmt;

/// Errors raised by the vault browsing flows.
#[derive(Debug, Clone)]
pub enum BrowseError {
    /// The storage backend rejected or failed an action.
    BackendError(String),
    /// A folder with the requested name is already present in the target directory.
    FolderAlreadyExists,
    /// The entry is a reserved system folder and cannot be mutated.
    ProtectedEntry,
    /// The current navigation context is read-only.
    RestrictedContext,
    /// Share links are only granted for files.
    FolderNotShareable,
    SerializationError(String),
}

impl fmt::Display for BrowseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowseError::BackendError(msg) => write!(f, "Backend error: {}", msg),
            BrowseError::FolderAlreadyExists => {
                write!(f, "A folder with this name already exists here")
            }
            BrowseError::ProtectedEntry => write!(f, "This entry is a protected system folder"),
            BrowseError::RestrictedContext => write!(f, "This folder is read-only"),
            BrowseError::FolderNotShareable => write!(f, "Folders cannot be shared"),
            BrowseError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for BrowseError {}

impl BrowseError {
    pub fn backend_error(message: impl Into<String>) -> Self {
        BrowseError::BackendError(message.into())
    }

    pub fn serialization_error(message: impl Into<String>) -> Self {
        BrowseError::SerializationError(message.into())
    }
}
