//! Wire and result types.

use athly_core::Player;
use serde::{Deserialize, Serialize};

/// Body of `GET {base}/kbo/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub players: Vec<Player>,
}

/// Body of `GET {base}/kbo/sync`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncResponse {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOrigin {
    Remote,
    Demo,
}

/// Outcome of a sync request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncResult {
    pub message: String,
    pub origin: SyncOrigin,
}
