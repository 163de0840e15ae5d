//! In-process stand-in used when no backend is configured.

use async_trait::async_trait;
use athly_core::{Player, SyncScope};

use crate::config::DemoConfig;
use crate::error::Result;
use crate::traits::PlayerDirectory;
use crate::types::{SyncOrigin, SyncResult};

/// Message returned by every demo sync.
pub const DEMO_SYNC_MESSAGE: &str = "데모: 오늘 경기 1건, 이벤트 5개를 불러온 것으로 처리됨.";

/// The fixed demo roster, in search result order.
pub fn demo_roster() -> Vec<Player> {
    vec![
        Player::new("70001", "김성민", "키움 히어로즈", "투수"),
        Player::new("70002", "이정후", "KBO 샘플", "외야수"),
        Player::new("70003", "안우진", "키움 히어로즈", "투수"),
    ]
}

/// Player directory answering from [`demo_roster`] after a simulated delay.
pub struct DemoPlayerDirectory {
    roster: Vec<Player>,
    config: DemoConfig,
}

impl DemoPlayerDirectory {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            roster: demo_roster(),
            config,
        }
    }
}

impl Default for DemoPlayerDirectory {
    fn default() -> Self {
        Self::new(DemoConfig::default())
    }
}

#[async_trait]
impl PlayerDirectory for DemoPlayerDirectory {
    async fn search(&self, query: &str) -> Result<Vec<Player>> {
        let matches: Vec<Player> = self
            .roster
            .iter()
            .filter(|player| player.name.contains(query))
            .cloned()
            .collect();

        tokio::time::sleep(self.config.search_delay).await;
        tracing::debug!("Demo search {:?}: {} match(es)", query, matches.len());
        Ok(matches)
    }

    async fn sync(&self, player_id: &str, scope: SyncScope) -> Result<SyncResult> {
        tokio::time::sleep(self.config.sync_delay).await;
        tracing::debug!("Demo sync for {} ({})", player_id, scope.as_ref());
        Ok(SyncResult {
            message: DEMO_SYNC_MESSAGE.to_string(),
            origin: SyncOrigin::Demo,
        })
    }

    fn is_demo(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> DemoPlayerDirectory {
        DemoPlayerDirectory::new(DemoConfig::instant())
    }

    #[tokio::test]
    async fn search_matches_name_substring() {
        let results = directory().search("안").await.unwrap();
        assert_eq!(
            results,
            vec![Player::new("70003", "안우진", "키움 히어로즈", "투수")]
        );
    }

    #[tokio::test]
    async fn search_keeps_roster_order() {
        let results = directory().search("이").await.unwrap();
        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["70002"]);

        let results = directory().search("").await.unwrap();
        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["70001", "70002", "70003"]);
    }

    #[tokio::test]
    async fn search_without_match_is_empty() {
        assert!(directory().search("류현진").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn sync_returns_canned_message() {
        let result = directory().sync("70001", SyncScope::Today).await.unwrap();
        assert_eq!(result.message, DEMO_SYNC_MESSAGE);
        assert_eq!(result.origin, SyncOrigin::Demo);
    }
}
