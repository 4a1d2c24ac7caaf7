#![cfg(not(target_arch = "wasm32"))]

//! Flow tests for the create/delete/share actions, run against the native
//! adapters with injected test doubles where a failure path is needed.

use std::sync::Arc;

use async_trait::async_trait;
use futures::executor::block_on;

use strongroom::adapters::native::{BufferClipboard, MemoryVaultStore, ToastRecorder};
use strongroom::domain::browse::{
    actions, BrowseError, CreatedFolder, DELETE_SUCCESS_MESSAGE, FOLDER_EXISTS_MESSAGE,
    TOAST_DURATION_MS, UNTITLED_FOLDER_NAME,
};
use strongroom::ports::{ClipboardPort, VaultStorePort};
use strongroom::{Platform, VaultBrowser, VaultEntry};

fn context(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|s| s.to_string()).collect()
}

struct Harness {
    platform: Platform,
    store: Arc<MemoryVaultStore>,
    clipboard: Arc<BufferClipboard>,
    notifier: Arc<ToastRecorder>,
}

fn harness() -> Harness {
    let store = Arc::new(MemoryVaultStore::new());
    let clipboard = Arc::new(BufferClipboard::new());
    let notifier = Arc::new(ToastRecorder::new());
    let platform = Platform::new()
        .with_store(store.clone())
        .with_clipboard(clipboard.clone())
        .with_notifier(notifier.clone());
    Harness {
        platform,
        store,
        clipboard,
        notifier,
    }
}

/// Store double whose every call fails with a cause unrelated to naming.
struct FailingStore;

#[async_trait(?Send)]
impl VaultStorePort for FailingStore {
    async fn create_folder(&self, _path: &str, _name: &str) -> Result<CreatedFolder, BrowseError> {
        Err(BrowseError::backend_error("backend offline"))
    }

    async fn delete_entry(&self, _path: &str, _is_folder: bool) -> Result<(), BrowseError> {
        Err(BrowseError::backend_error("backend offline"))
    }

    async fn share_file(
        &self,
        _filepath: &str,
        _expire_in_seconds: u32,
    ) -> Result<String, BrowseError> {
        Err(BrowseError::backend_error("backend offline"))
    }
}

/// Clipboard double that always refuses the write.
struct FailingClipboard;

#[async_trait(?Send)]
impl ClipboardPort for FailingClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), String> {
        Err("clipboard denied".to_string())
    }
}

#[test]
fn create_folder_uses_untitled_default() {
    let h = harness();
    let created = block_on(actions::create_folder(&h.platform, &[], None)).unwrap();

    assert_eq!(created.name, UNTITLED_FOLDER_NAME);
    assert_eq!(created.path, "Untitled folder");
    assert!(h.store.contains_folder("Untitled folder"));
    assert!(h.notifier.toasts().is_empty());
}

#[test]
fn create_folder_in_nested_context() {
    let h = harness();
    let created = block_on(actions::create_folder(
        &h.platform,
        &context(&["exports", "2024"]),
        Some("Q1"),
    ))
    .unwrap();

    assert_eq!(created.path, "exports/2024/Q1");
    assert_eq!(created.name, "Q1");
}

#[test]
fn create_folder_is_allowed_in_restricted_context() {
    // The restriction policy gates mutation of existing entries, not creation.
    let h = harness();
    let created = block_on(actions::create_folder(
        &h.platform,
        &context(&["transactions"]),
        Some("notes"),
    ))
    .unwrap();
    assert_eq!(created.path, "transactions/notes");
}

#[test]
fn create_folder_collision_toasts_fixed_message() {
    let h = harness();
    block_on(actions::create_folder(&h.platform, &[], Some("reports"))).unwrap();

    let err = block_on(actions::create_folder(&h.platform, &[], Some("reports"))).unwrap_err();
    assert!(matches!(err, BrowseError::FolderAlreadyExists));

    let toasts = h.notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, FOLDER_EXISTS_MESSAGE);
    assert_eq!(toasts[0].duration_ms, TOAST_DURATION_MS);
}

#[test]
fn create_folder_failure_toast_is_lossy() {
    // Whatever actually went wrong, the user sees the name-collision message;
    // the real cause stays on the error channel.
    let h = harness();
    let platform = h.platform.clone().with_store(Arc::new(FailingStore));

    let err = block_on(actions::create_folder(&platform, &[], Some("reports"))).unwrap_err();
    assert!(matches!(err, BrowseError::BackendError(ref msg) if msg == "backend offline"));

    let toasts = h.notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, FOLDER_EXISTS_MESSAGE);
}

#[test]
fn delete_file_dispatches_parent_folder_path() {
    let h = harness();
    block_on(h.store.create_folder("", "reports")).unwrap();

    let entry = VaultEntry::file("q1.pdf");
    let request = actions::request_delete(&context(&["reports"]), &entry).unwrap();
    block_on(request.confirm(&h.platform)).unwrap();

    assert_eq!(h.store.deletes(), vec![("reports".to_string(), false)]);

    let toasts = h.notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, DELETE_SUCCESS_MESSAGE);
    assert_eq!(toasts[0].duration_ms, TOAST_DURATION_MS);
}

#[test]
fn delete_folder_dispatches_full_path() {
    let h = harness();
    block_on(h.store.create_folder("", "reports")).unwrap();
    block_on(h.store.create_folder("reports", "2024")).unwrap();

    let entry = VaultEntry::folder("2024");
    let request = actions::request_delete(&context(&["reports"]), &entry).unwrap();
    block_on(request.confirm(&h.platform)).unwrap();

    assert!(!h.store.contains_folder("reports/2024"));
    assert!(h.store.contains_folder("reports"));
    assert_eq!(h.store.deletes(), vec![("reports/2024".to_string(), true)]);
}

#[test]
fn delete_of_protected_folder_never_reaches_backend() {
    let h = harness();
    let err = actions::request_delete(&[], &VaultEntry::folder("inbox")).unwrap_err();
    assert!(matches!(err, BrowseError::ProtectedEntry));
    assert!(h.store.deletes().is_empty());
    assert!(h.notifier.toasts().is_empty());
}

#[test]
fn delete_in_restricted_context_never_reaches_backend() {
    let h = harness();
    let err =
        actions::request_delete(&context(&["transactions", "2024"]), &VaultEntry::file("a.csv"))
            .unwrap_err();
    assert!(matches!(err, BrowseError::RestrictedContext));
    assert!(h.store.deletes().is_empty());
}

#[test]
fn delete_failure_skips_success_toast() {
    let h = harness();
    let platform = h.platform.clone().with_store(Arc::new(FailingStore));

    let request = actions::request_delete(&[], &VaultEntry::file("a.csv")).unwrap();
    let err = block_on(request.confirm(&platform)).unwrap_err();
    assert!(matches!(err, BrowseError::BackendError(_)));
    assert!(h.notifier.toasts().is_empty());
}

#[test]
fn share_copies_url_and_toasts() {
    let h = harness();
    let entry = VaultEntry::file("q1.csv");

    let url = block_on(actions::share_entry(
        &h.platform,
        &context(&["exports"]),
        &entry,
        604_800,
    ))
    .unwrap();

    assert_eq!(h.store.shares(), vec![("exports/q1.csv".to_string(), 604_800)]);
    assert_eq!(h.clipboard.last_copied(), Some(url.clone()));

    let toasts = h.notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Copied URL for q1.csv to clipboard.");
    assert_eq!(toasts[0].duration_ms, TOAST_DURATION_MS);
    assert!(url.contains("exports/q1.csv"));
}

#[test]
fn share_survives_clipboard_refusal() {
    let h = harness();
    let platform = h.platform.clone().with_clipboard(Arc::new(FailingClipboard));

    let url = block_on(actions::share_entry(
        &platform,
        &[],
        &VaultEntry::file("q1.csv"),
        2_629_743,
    ))
    .unwrap();

    // The link was granted; only the copied-toast is skipped.
    assert!(url.contains("q1.csv"));
    assert!(h.notifier.toasts().is_empty());
    assert_eq!(h.clipboard.last_copied(), None);
}

#[test]
fn share_rejects_folders_before_dispatch() {
    let h = harness();
    let err = block_on(actions::share_entry(
        &h.platform,
        &[],
        &VaultEntry::folder("reports"),
        604_800,
    ))
    .unwrap_err();

    assert!(matches!(err, BrowseError::FolderNotShareable));
    assert!(h.store.shares().is_empty());
    assert_eq!(h.clipboard.last_copied(), None);
}

#[test]
fn browser_facade_runs_the_full_cycle() {
    let h = harness();
    let browser = VaultBrowser::with_platform(h.platform.clone());

    let created = block_on(browser.create_folder(&[], Some("projects"))).unwrap();
    assert_eq!(created.path, "projects");

    let url = block_on(browser.share(
        &context(&["projects"]),
        &VaultEntry::file("plan.pdf"),
        604_800,
    ))
    .unwrap();
    assert!(url.contains("projects/plan.pdf"));

    let request = browser
        .request_delete(&[], &VaultEntry::folder("projects"))
        .unwrap();
    block_on(browser.confirm_delete(request)).unwrap();
    assert!(!h.store.contains_folder("projects"));

    assert_eq!(
        browser.download_url(&context(&["projects"]), &VaultEntry::file("plan.pdf")),
        "/api/download/file?path=projects&filename=plan.pdf"
    );
    assert_eq!(browser.expiry_options().len(), 3);
}
