//! Sync requests for the linked player.

use std::sync::Arc;

use athly_core::{Document, SyncScope};
use client_kbo::{PlayerDirectory, SyncOrigin};

/// Message shown while a sync request is pending.
pub const SYNC_PENDING_MESSAGE: &str = "동기화 중...";

/// Asks the directory to pull data for the linked player.
///
/// The trigger owns a single status message that reflects the outcome of the
/// latest request. Syncing never touches the record collections.
pub struct SyncTrigger {
    directory: Arc<dyn PlayerDirectory>,
    message: Option<String>,
}

impl SyncTrigger {
    pub fn new(directory: Arc<dyn PlayerDirectory>) -> Self {
        Self {
            directory,
            message: None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Request a sync for the document's linked player.
    ///
    /// Without a linked player this does nothing and returns `None`. Otherwise
    /// the returned message is also kept as the trigger's current message.
    pub async fn sync(&mut self, doc: &Document, scope: SyncScope) -> Option<&str> {
        let player = doc.linked_player.as_ref()?;

        self.message = Some(SYNC_PENDING_MESSAGE.to_string());
        tracing::info!("Sync requested for {} ({})", player.id, scope.as_ref());

        let message = match self.directory.sync(&player.id, scope).await {
            Ok(result) => match result.origin {
                SyncOrigin::Remote => format!("동기화 완료: {}", result.message),
                SyncOrigin::Demo => result.message,
            },
            Err(e) => {
                tracing::warn!("Sync for {} failed: {}", player.id, e);
                format!("동기화 실패: {e}")
            }
        };

        self.message = Some(message);
        self.message.as_deref()
    }
}
