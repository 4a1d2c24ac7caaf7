#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Domain logic, its port traits, and the per-target adapters behind them
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;

// Cross-cutting modules
#[cfg(target_arch = "wasm32")]
pub mod global;
pub mod measure;
pub mod notifications;

// Re-exports for embedding and testing
pub use domain::browse::{
    can_mutate, delete_target, download_url, entry_actions, entry_path, expires_at,
    expiry_options, folder_label_key, folder_path, format_size, format_timestamp, BrowseError,
    CreatedFolder, DeleteRequest, DeleteTarget, EntryActions, EntryMetadata, ShareExpiry,
    VaultEntry, EXPIRY_OPTIONS, PROTECTED_FOLDERS, RESTRICTED_ROOTS,
};
#[cfg(not(target_arch = "wasm32"))]
pub use facades::native::VaultBrowser;
pub use platform::Platform;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
