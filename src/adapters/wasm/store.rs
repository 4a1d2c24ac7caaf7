use std::cell::RefCell;

use async_trait::async_trait;
use js_sys::{Function, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::domain::browse::{BrowseError, CreatedFolder};
use crate::ports::VaultStorePort;

// JS callbacks are not Sync; the registry stays thread-local like the rest
// of the wasm glue.
thread_local! {
    static BACKEND: RefCell<Option<BackendHandlers>> = RefCell::new(None);
}

struct BackendHandlers {
    create_folder: Function,
    delete_entry: Function,
    share_file: Function,
}

/// Register the host's storage handlers. Each handler may return a value or
/// a promise; promises are awaited before the flow continues. Registering
/// again replaces the previous handlers.
pub fn register_backend(create_folder: Function, delete_entry: Function, share_file: Function) {
    BACKEND.with(|cell| {
        *cell.borrow_mut() = Some(BackendHandlers {
            create_folder,
            delete_entry,
            share_file,
        });
    });
}

fn handler(pick: impl Fn(&BackendHandlers) -> Function) -> Result<Function, BrowseError> {
    BACKEND.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(pick)
            .ok_or_else(|| BrowseError::backend_error("No vault backend registered"))
    })
}

async fn invoke(func: Function, arg1: &JsValue, arg2: &JsValue) -> Result<JsValue, BrowseError> {
    let returned = func.call2(&JsValue::NULL, arg1, arg2)?;
    match returned.dyn_into::<Promise>() {
        Ok(promise) => Ok(JsFuture::from(promise).await?),
        Err(value) => Ok(value),
    }
}

/// Store adapter for WASM: bridges the port to host-registered JS handlers
/// (in the dashboard these wrap its server actions).
#[derive(Clone, Copy)]
pub struct BackendBridge;

impl BackendBridge {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl VaultStorePort for BackendBridge {
    async fn create_folder(&self, path: &str, name: &str) -> Result<CreatedFolder, BrowseError> {
        let func = handler(|handlers| handlers.create_folder.clone())?;
        let value = invoke(func, &JsValue::from_str(path), &JsValue::from_str(name)).await?;
        serde_wasm_bindgen::from_value(value).map_err(|e| {
            BrowseError::serialization_error(format!("Bad create-folder response: {}", e))
        })
    }

    async fn delete_entry(&self, path: &str, is_folder: bool) -> Result<(), BrowseError> {
        let func = handler(|handlers| handlers.delete_entry.clone())?;
        invoke(
            func,
            &JsValue::from_str(path),
            &JsValue::from_bool(is_folder),
        )
        .await?;
        Ok(())
    }

    async fn share_file(
        &self,
        filepath: &str,
        expire_in_seconds: u32,
    ) -> Result<String, BrowseError> {
        let func = handler(|handlers| handlers.share_file.clone())?;
        let value = invoke(
            func,
            &JsValue::from_str(filepath),
            &JsValue::from_f64(f64::from(expire_in_seconds)),
        )
        .await?;
        value.as_string().ok_or_else(|| {
            BrowseError::serialization_error("Share handler must resolve to a URL string")
        })
    }
}
