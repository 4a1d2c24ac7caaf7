/// Native adapters - implementations for native Rust (non-WASM).

pub mod clipboard;
pub mod clock;
pub mod console_logger;
pub mod notifier;
pub mod store;
pub mod translations;

pub use clipboard::BufferClipboard;
pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use notifier::ToastRecorder;
pub use store::MemoryVaultStore;
pub use translations::StaticTranslations;
