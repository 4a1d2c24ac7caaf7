use crate::platform::Platform;
use crate::time_it;

use super::entry::{CreatedFolder, VaultEntry};
use super::error::BrowseError;
use super::path;
use super::policy::{self, DeleteTarget};
use super::share;

/// Name given to folders created without an explicit name.
pub const UNTITLED_FOLDER_NAME: &str = "Untitled folder";

/// How long action toasts stay on screen.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// The single user-facing message for any create-folder failure. The real
/// cause only travels on the error channel and the log.
pub const FOLDER_EXISTS_MESSAGE: &str =
    "The folder already exists in the current directory. Please use a different name.";

pub const DELETE_SUCCESS_MESSAGE: &str = "Successfully deleted file";

#[cfg(target_arch = "wasm32")]
const DELETE_TOAST_DELAY_MS: u32 = 100;

/// Create a folder under the current navigation context.
///
/// Never gated by the mutation policy: creation is permitted even under
/// restricted roots. On any backend failure the user sees the fixed
/// name-collision toast; callers that care about the actual cause must
/// inspect the returned error.
pub async fn create_folder(
    platform: &Platform,
    context: &[String],
    name: Option<&str>,
) -> Result<CreatedFolder, BrowseError> {
    let parent = path::folder_path(context);
    let name = name.unwrap_or(UNTITLED_FOLDER_NAME);

    match platform.store().create_folder(&parent, name).await {
        Ok(folder) => Ok(folder),
        Err(err) => {
            platform
                .logger()
                .error(&format!("Failed to create folder '{}': {}", name, err));
            let _ = platform
                .notifier()
                .toast(FOLDER_EXISTS_MESSAGE, TOAST_DURATION_MS);
            Err(err)
        }
    }
}

/// A delete that has passed the mutation policy and awaits confirmation.
///
/// Dropping the request abandons the delete; [`DeleteRequest::confirm`]
/// dispatches it.
#[derive(Debug)]
pub struct DeleteRequest {
    target: DeleteTarget,
    entry_name: String,
}

/// First step of the delete flow: apply the mutation policy and resolve the
/// backend target. Nothing is dispatched yet.
pub fn request_delete(
    context: &[String],
    entry: &VaultEntry,
) -> Result<DeleteRequest, BrowseError> {
    if policy::is_protected(&entry.name) {
        return Err(BrowseError::ProtectedEntry);
    }
    if policy::is_restricted_context(context) {
        return Err(BrowseError::RestrictedContext);
    }
    Ok(DeleteRequest {
        target: policy::delete_target(context, entry),
        entry_name: entry.name.clone(),
    })
}

impl DeleteRequest {
    /// Target shown in the confirmation dialog.
    pub fn target(&self) -> &DeleteTarget {
        &self.target
    }

    pub fn entry_name(&self) -> &str {
        &self.entry_name
    }

    /// Dispatch the delete. Consumes the request: once sent there is no
    /// retraction path.
    pub async fn confirm(self, platform: &Platform) -> Result<(), BrowseError> {
        time_it!("Delete dispatch", {
            platform
                .store()
                .delete_entry(&self.target.path, self.target.is_folder)
                .await
        })?;

        // Give the listing a beat to drop the row before toasting.
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::TimeoutFuture::new(DELETE_TOAST_DELAY_MS).await;

        let _ = platform
            .notifier()
            .toast(DELETE_SUCCESS_MESSAGE, TOAST_DURATION_MS);
        Ok(())
    }
}

/// Share a file and copy the granted URL to the clipboard.
///
/// Folders are rejected before the backend is contacted. Clipboard failures
/// are swallowed: the link was still granted, so the URL is returned either
/// way and the copied-toast is simply skipped.
pub async fn share_entry(
    platform: &Platform,
    context: &[String],
    entry: &VaultEntry,
    expire_in_seconds: u32,
) -> Result<String, BrowseError> {
    if entry.is_folder {
        return Err(BrowseError::FolderNotShareable);
    }

    let filepath = path::entry_path(context, &entry.name);
    let url = time_it!("Share grant", {
        platform
            .store()
            .share_file(&filepath, expire_in_seconds)
            .await
    })?;

    let deadline = share::expires_at(expire_in_seconds, platform.clock().unix_seconds());
    platform.logger().log(&format!(
        "Share link granted for '{}', expires at unix {}",
        filepath, deadline
    ));

    if platform.clipboard().write_text(&url).await.is_ok() {
        let _ = platform.notifier().toast(
            &format!("Copied URL for {} to clipboard.", entry.name),
            TOAST_DURATION_MS,
        );
    }

    Ok(url)
}

/// Direct download link for an entry. The query string carries the folder
/// path and filename verbatim; the download endpoint owns decoding.
pub fn download_url(context: &[String], entry: &VaultEntry) -> String {
    format!(
        "/api/download/file?path={}&filename={}",
        path::folder_path(context),
        entry.name
    )
}
