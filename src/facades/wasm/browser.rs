use std::collections::HashMap;

use js_sys::Function;
use once_cell::sync::Lazy;
use wasm_bindgen::prelude::*;

use super::converters;
use crate::adapters::wasm::{store, translations};
use crate::domain::browse::{actions, display, path, policy, share};
use crate::platform::Platform;

static PLATFORM: Lazy<Platform> = Lazy::new(Platform::new);

/// Wire the module to the host's storage handlers. Must be called before any
/// create/delete/share flow.
#[wasm_bindgen]
pub fn register_vault_backend(create_folder: Function, delete_entry: Function, share_file: Function) {
    store::register_backend(create_folder, delete_entry, share_file);
}

/// Push the host's label catalog (a plain `{key: label}` object).
#[wasm_bindgen]
pub fn set_translations(labels: JsValue) -> Result<(), JsValue> {
    let catalog: HashMap<String, String> = serde_wasm_bindgen::from_value(labels)
        .map_err(|e| converters::to_js_error(format!("Invalid label catalog: {}", e)))?;
    translations::set_catalog(catalog);
    Ok(())
}

#[wasm_bindgen]
pub fn folder_display_name(name: &str) -> String {
    display::display_name(&PLATFORM, name)
}

#[wasm_bindgen]
pub fn vault_folder_path(context: JsValue) -> Result<String, JsValue> {
    let context = converters::context_from_js(context)?;
    Ok(path::folder_path(&context))
}

#[wasm_bindgen]
pub fn vault_entry_path(context: JsValue, name: &str) -> Result<String, JsValue> {
    let context = converters::context_from_js(context)?;
    Ok(path::entry_path(&context, name))
}

#[wasm_bindgen]
pub fn can_mutate_entry(context: JsValue, entry: JsValue) -> Result<bool, JsValue> {
    let context = converters::context_from_js(context)?;
    let entry = converters::entry_from_js(entry)?;
    Ok(policy::can_mutate(&context, &entry))
}

/// Context-menu decision record (`{share, createFolder, rename, download,
/// delete}`) for one row.
#[wasm_bindgen]
pub fn vault_entry_actions(context: JsValue, entry: JsValue) -> Result<JsValue, JsValue> {
    let context = converters::context_from_js(context)?;
    let entry = converters::entry_from_js(entry)?;
    converters::to_js_value(&policy::entry_actions(&context, &entry))
}

/// The fixed share lifetimes as `[{label, seconds}]`, in menu order.
#[wasm_bindgen]
pub fn share_expiry_options() -> Result<JsValue, JsValue> {
    converters::to_js_value(&share::EXPIRY_OPTIONS)
}

#[wasm_bindgen]
pub fn download_file_url(context: JsValue, entry: JsValue) -> Result<String, JsValue> {
    let context = converters::context_from_js(context)?;
    let entry = converters::entry_from_js(entry)?;
    Ok(actions::download_url(&context, &entry))
}

#[wasm_bindgen]
pub fn format_file_size(bytes: f64) -> String {
    display::format_size(bytes.max(0.0) as u64)
}

#[wasm_bindgen]
pub fn format_entry_timestamp(seconds: Option<f64>) -> String {
    display::format_timestamp(seconds.map(|s| s as i64))
}

/// Create a folder in the given context; omit `name` for the untitled
/// default. Resolves to the created `{path, name}` handle.
#[wasm_bindgen]
pub async fn create_vault_folder(
    context: JsValue,
    name: Option<String>,
) -> Result<JsValue, JsValue> {
    let context = converters::context_from_js(context)?;
    let created = actions::create_folder(&PLATFORM, &context, name.as_deref()).await?;
    converters::to_js_value(&created)
}

/// A policy-checked delete awaiting confirmation.
#[wasm_bindgen]
pub struct PendingDelete {
    inner: actions::DeleteRequest,
}

#[wasm_bindgen]
impl PendingDelete {
    /// Backend path the delete will be pointed at.
    #[wasm_bindgen(getter)]
    pub fn path(&self) -> String {
        self.inner.target().path.clone()
    }

    #[wasm_bindgen(getter, js_name = isFolder)]
    pub fn is_folder(&self) -> bool {
        self.inner.target().is_folder
    }

    #[wasm_bindgen(getter, js_name = entryName)]
    pub fn entry_name(&self) -> String {
        self.inner.entry_name().to_string()
    }
}

/// Start a delete. Fails when the entry is a protected system folder or the
/// context is read-only; nothing reaches the backend here.
#[wasm_bindgen]
pub fn request_entry_delete(context: JsValue, entry: JsValue) -> Result<PendingDelete, JsValue> {
    let context = converters::context_from_js(context)?;
    let entry = converters::entry_from_js(entry)?;
    let inner = actions::request_delete(&context, &entry)?;
    Ok(PendingDelete { inner })
}

/// Dispatch a confirmed delete. Consumes the pending request.
#[wasm_bindgen]
pub async fn confirm_entry_delete(request: PendingDelete) -> Result<(), JsValue> {
    request.inner.confirm(&PLATFORM).await?;
    Ok(())
}

/// Share a file for `expire_in_seconds` and copy the URL to the clipboard.
/// Resolves to the granted URL.
#[wasm_bindgen]
pub async fn share_vault_file(
    context: JsValue,
    entry: JsValue,
    expire_in_seconds: u32,
) -> Result<String, JsValue> {
    let context = converters::context_from_js(context)?;
    let entry = converters::entry_from_js(entry)?;
    let url = actions::share_entry(&PLATFORM, &context, &entry, expire_in_seconds).await?;
    Ok(url)
}
