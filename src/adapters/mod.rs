/// Adapters module - platform-specific implementations of the ports.

use std::sync::Arc;

use crate::ports::{ClipboardPort, NotifierPort, TranslatePort, VaultStorePort};

pub mod global_clock;
pub mod global_logger;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use global_clock::clock;
pub use global_logger::logger;

#[cfg(not(target_arch = "wasm32"))]
pub use native::ConsoleLogger;
#[cfg(target_arch = "wasm32")]
pub use wasm::ConsoleLogger;

/// Default store adapter for the current target.
///
/// Native builds share one process-wide in-memory store so that every
/// default [`crate::platform::Platform`] sees the same vault; wasm builds
/// bridge to whatever backend the host registered.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> Arc<dyn VaultStorePort> {
    use once_cell::sync::Lazy;
    static STORE: Lazy<Arc<native::MemoryVaultStore>> =
        Lazy::new(|| Arc::new(native::MemoryVaultStore::new()));
    STORE.clone()
}

#[cfg(target_arch = "wasm32")]
pub fn default_store() -> Arc<dyn VaultStorePort> {
    Arc::new(wasm::BackendBridge::new())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_clipboard() -> Arc<dyn ClipboardPort> {
    use once_cell::sync::Lazy;
    static CLIPBOARD: Lazy<Arc<native::BufferClipboard>> =
        Lazy::new(|| Arc::new(native::BufferClipboard::new()));
    CLIPBOARD.clone()
}

#[cfg(target_arch = "wasm32")]
pub fn default_clipboard() -> Arc<dyn ClipboardPort> {
    Arc::new(wasm::NavigatorClipboard::new())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_notifier() -> Arc<dyn NotifierPort> {
    use once_cell::sync::Lazy;
    static NOTIFIER: Lazy<Arc<native::ToastRecorder>> =
        Lazy::new(|| Arc::new(native::ToastRecorder::new()));
    NOTIFIER.clone()
}

#[cfg(target_arch = "wasm32")]
pub fn default_notifier() -> Arc<dyn NotifierPort> {
    Arc::new(wasm::ToastNotifier::new())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_translator() -> Arc<dyn TranslatePort> {
    use once_cell::sync::Lazy;
    static TRANSLATOR: Lazy<Arc<native::StaticTranslations>> =
        Lazy::new(|| Arc::new(native::StaticTranslations::new()));
    TRANSLATOR.clone()
}

#[cfg(target_arch = "wasm32")]
pub fn default_translator() -> Arc<dyn TranslatePort> {
    Arc::new(wasm::HostTranslations::new())
}
