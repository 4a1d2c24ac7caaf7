/// Dependency injection container bundling every port the browse flows use.
///
/// Two kinds of slots:
/// - logger and clock are `&'static` globals shared by the whole process
/// - store, clipboard, notifier, and translator are `Arc<dyn ...>` slots,
///   swappable per instance so embedders and tests can inject their own

use std::sync::Arc;

use crate::ports::{
    ClipboardPort, ClockPort, LoggerPort, NotifierPort, TranslatePort, VaultStorePort,
};

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    clock: &'static dyn ClockPort,
    store: Arc<dyn VaultStorePort>,
    clipboard: Arc<dyn ClipboardPort>,
    notifier: Arc<dyn NotifierPort>,
    translator: Arc<dyn TranslatePort>,
}

impl Platform {
    /// Platform wired with the default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            clock: crate::adapters::clock(),
            store: crate::adapters::default_store(),
            clipboard: crate::adapters::default_clipboard(),
            notifier: crate::adapters::default_notifier(),
            translator: crate::adapters::default_translator(),
        }
    }

    pub fn with_store(mut self, store: Arc<dyn VaultStorePort>) -> Self {
        self.store = store;
        self
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn ClipboardPort>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn NotifierPort>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn TranslatePort>) -> Self {
        self.translator = translator;
        self
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn clock(&self) -> &'static dyn ClockPort {
        self.clock
    }

    #[inline]
    pub fn store(&self) -> &dyn VaultStorePort {
        self.store.as_ref()
    }

    #[inline]
    pub fn clipboard(&self) -> &dyn ClipboardPort {
        self.clipboard.as_ref()
    }

    #[inline]
    pub fn notifier(&self) -> &dyn NotifierPort {
        self.notifier.as_ref()
    }

    #[inline]
    pub fn translator(&self) -> &dyn TranslatePort {
        self.translator.as_ref()
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
