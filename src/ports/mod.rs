/// Ports module - interfaces (traits) that abstract platform-specific
/// functionality.
///
/// These traits are the contracts between the browsing domain and the
/// infrastructure adapters. They keep the business logic decoupled from the
/// storage backend, the clipboard, the toast surface, and the i18n catalog
/// of whichever host embeds the crate.

pub mod clipboard;
pub mod clock;
pub mod logger;
pub mod notifier;
pub mod store;
pub mod translate;

pub use clipboard::ClipboardPort;
pub use clock::ClockPort;
pub use logger::LoggerPort;
pub use notifier::NotifierPort;
pub use store::VaultStorePort;
pub use translate::TranslatePort;
