/// WASM adapters - implementations using browser APIs.

pub mod clipboard;
pub mod clock;
pub mod console_logger;
pub mod error_conversions;
pub mod notifier;
pub mod store;
pub mod translations;

pub use clipboard::NavigatorClipboard;
pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use notifier::ToastNotifier;
pub use store::BackendBridge;
pub use translations::HostTranslations;
