use async_trait::async_trait;
use athly_core::{Player, SyncScope};

use crate::error::Result;
use crate::types::SyncResult;

/// Lookup and sync capability for player identities.
#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    /// Find players whose name matches `query`.
    ///
    /// Callers are expected not to search with an empty query.
    async fn search(&self, query: &str) -> Result<Vec<Player>>;

    /// Ask the source to pull game data for `player_id` within `scope`.
    ///
    /// Nothing is written into the local document; the result only carries a
    /// message for the user.
    async fn sync(&self, player_id: &str, scope: SyncScope) -> Result<SyncResult>;

    /// True for the in-process stand-in.
    fn is_demo(&self) -> bool {
        false
    }
}
