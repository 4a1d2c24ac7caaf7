use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::ports::TranslatePort;

static CATALOG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("folders.all", "All"),
        ("folders.inbox", "Inbox"),
        ("folders.transactions", "Transactions"),
        ("folders.exports", "Exports"),
    ])
});

/// Translation adapter for native builds: a fixed English catalog covering
/// the reserved folder labels.
#[derive(Debug, Clone, Copy)]
pub struct StaticTranslations;

impl StaticTranslations {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StaticTranslations {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslatePort for StaticTranslations {
    fn translate(&self, key: &str) -> Option<String> {
        CATALOG.get(key).map(|label| (*label).to_string())
    }
}
