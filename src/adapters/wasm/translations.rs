use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::ports::TranslatePort;

static CATALOG: Lazy<RwLock<HashMap<String, String>>> = Lazy::new(|| RwLock::new(HashMap::new()));

/// Replace the catalog with labels provided by the host app. The host pushes
/// a fresh catalog whenever its locale changes.
pub fn set_catalog(labels: HashMap<String, String>) {
    *CATALOG.write() = labels;
}

/// Translation adapter for WASM, backed by the host-provided catalog.
///
/// Until the host pushes a catalog every lookup misses, which makes the
/// display layer fall back to raw names.
#[derive(Clone, Copy)]
pub struct HostTranslations;

impl HostTranslations {
    pub fn new() -> Self {
        Self
    }
}

impl TranslatePort for HostTranslations {
    fn translate(&self, key: &str) -> Option<String> {
        CATALOG.read().get(key).cloned()
    }
}
