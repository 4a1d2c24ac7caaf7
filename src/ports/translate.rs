/// Port for the host i18n catalog.
pub trait TranslatePort: Send + Sync {
    /// Look up the label for a key; `None` when the catalog lacks it.
    fn translate(&self, key: &str) -> Option<String>;
}
