//! Local preview-handle store
//!
//! Stands in for the browser's object-URL facility: a selected file gets a
//! locally scoped `preview://` URL so it can be displayed without being
//! uploaded anywhere. Handles must be revoked when the file is replaced or
//! removed; an unrevoked handle stays live for the store's lifetime.

use std::collections::HashSet;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::features::signup::models::UploadedFile;

/// A live preview reference. Not `Clone`: whoever holds the handle is the
/// only party that can hand it back to [`PreviewStore::revoke`].
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewHandle {
    id: Uuid,
    url: String,
}

impl PreviewHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The locally scoped URL the UI renders the preview from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Issues and tracks preview handles for one form instance.
#[derive(Debug, Default)]
pub struct PreviewStore {
    live: HashSet<Uuid>,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a preview handle bound to `file` and record it as live.
    pub fn create(&mut self, file: &UploadedFile) -> PreviewHandle {
        let id = Uuid::new_v4();
        let url = format!("preview://{}.{}", id, file.extension());
        self.live.insert(id);

        debug!("Preview created: url={}, file={}", url, file.file_name);

        PreviewHandle { id, url }
    }

    /// Release a handle. Takes it by value so a revoked handle can never be
    /// rendered again.
    pub fn revoke(&mut self, handle: PreviewHandle) {
        if self.live.remove(&handle.id) {
            debug!("Preview revoked: url={}", handle.url);
        } else {
            warn!("Revoked a preview unknown to this store: url={}", handle.url);
        }
    }

    pub fn is_live(&self, handle: &PreviewHandle) -> bool {
        self.live.contains(&handle.id)
    }

    /// Number of handles that have been created but not revoked.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> UploadedFile {
        UploadedFile::new("frente-dni.jpg", "image/jpeg", vec![0xff, 0xd8, 0xff])
    }

    #[test]
    fn test_create_mints_live_unique_handles() {
        let mut store = PreviewStore::new();

        let a = store.create(&sample_file());
        let b = store.create(&sample_file());

        assert_ne!(a.url(), b.url());
        assert!(a.url().starts_with("preview://"));
        assert!(a.url().ends_with(".jpg"));
        assert!(store.is_live(&a));
        assert!(store.is_live(&b));
        assert_eq!(store.live_count(), 2);
    }

    #[test]
    fn test_revoke_releases_only_that_handle() {
        let mut store = PreviewStore::new();

        let a = store.create(&sample_file());
        let b = store.create(&sample_file());

        store.revoke(a);

        assert_eq!(store.live_count(), 1);
        assert!(store.is_live(&b));
    }
}
