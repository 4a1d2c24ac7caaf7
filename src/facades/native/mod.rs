pub mod browser;

pub use browser::VaultBrowser;
