/// Facades module - the public entry points, one per target.
///
/// Native embeds get [`native::VaultBrowser`]; wasm builds export free
/// functions through wasm-bindgen instead.

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use native::VaultBrowser;
