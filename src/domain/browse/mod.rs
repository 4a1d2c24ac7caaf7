/// Vault browsing domain - path composition, mutation policy, share expiry,
/// display naming, and the action flows built on top of them.
///
/// Everything here is either pure (path/policy/share/display) or reaches the
/// outside world exclusively through the ports carried by
/// [`crate::platform::Platform`].

pub mod actions;
pub mod display;
pub mod entry;
pub mod error;
pub mod path;
pub mod policy;
pub mod share;

pub use actions::{
    create_folder, download_url, request_delete, share_entry, DeleteRequest,
    DELETE_SUCCESS_MESSAGE, FOLDER_EXISTS_MESSAGE, TOAST_DURATION_MS, UNTITLED_FOLDER_NAME,
};
pub use display::{display_name, folder_label_key, format_size, format_timestamp};
pub use entry::{CreatedFolder, EntryMetadata, VaultEntry};
pub use error::BrowseError;
pub use path::{entry_path, folder_path};
pub use policy::{
    can_mutate, delete_target, entry_actions, is_protected, is_restricted_context, DeleteTarget,
    EntryActions, PROTECTED_FOLDERS, RESTRICTED_ROOTS,
};
pub use share::{
    expires_at, expiry_options, ShareExpiry, EXPIRY_OPTIONS, ONE_MONTH_IN_SECONDS,
    ONE_WEEK_IN_SECONDS, ONE_YEAR_IN_SECONDS,
};
