//! Player lookup and linking.

use std::sync::Arc;

use athly_core::{Document, Player};
use athly_storage::{DocumentStore, Result as StoreResult};
use client_kbo::PlayerDirectory;

/// Transient state of the most recent search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub loading: bool,
    pub results: Vec<Player>,
    /// Human-readable failure of the last search.
    pub error: Option<String>,
}

/// Looks players up in the directory and links the chosen one.
pub struct PlayerLinkResolver {
    directory: Arc<dyn PlayerDirectory>,
    state: SearchState,
}

impl PlayerLinkResolver {
    pub fn new(directory: Arc<dyn PlayerDirectory>) -> Self {
        Self {
            directory,
            state: SearchState::default(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Whether `query` may be searched right now.
    pub fn can_search(&self, query: &str) -> bool {
        !query.trim().is_empty() && !self.state.loading
    }

    /// Run a search and return the matches.
    ///
    /// Previous results and errors are cleared first. Failures never
    /// propagate: they are recorded as the state's error and yield no results.
    pub async fn search(&mut self, query: &str) -> &[Player] {
        self.state = SearchState {
            loading: true,
            ..SearchState::default()
        };

        match self.directory.search(query).await {
            Ok(players) => {
                tracing::debug!("Search {:?} matched {} player(s)", query, players.len());
                self.state.results = players;
            }
            Err(e) => {
                tracing::warn!("Player search {:?} failed: {}", query, e);
                self.state.error = Some(e.to_string());
            }
        }

        self.state.loading = false;
        &self.state.results
    }

    /// Set `player` as the linked player and persist the document.
    ///
    /// Any previously linked player is replaced.
    pub fn link<'a>(store: &'a mut DocumentStore, player: Player) -> StoreResult<&'a Document> {
        tracing::info!("Linking player {} ({})", player.name, player.id);
        store.update(|doc| doc.with_linked_player(player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use athly_core::SyncScope;
    use athly_storage::InMemoryKeyValueRepository;
    use client_kbo::{DemoConfig, DemoPlayerDirectory, KboError, SyncResult};

    struct FailingDirectory;

    #[async_trait]
    impl PlayerDirectory for FailingDirectory {
        async fn search(&self, _query: &str) -> client_kbo::Result<Vec<Player>> {
            Err(KboError::SearchRejected { status: 500 })
        }

        async fn sync(&self, _player_id: &str, _scope: SyncScope) -> client_kbo::Result<SyncResult> {
            Err(KboError::SyncRejected { status: 500 })
        }
    }

    fn demo_resolver() -> PlayerLinkResolver {
        PlayerLinkResolver::new(Arc::new(DemoPlayerDirectory::new(DemoConfig::instant())))
    }

    #[tokio::test]
    async fn demo_search_matches_by_name() {
        let mut resolver = demo_resolver();

        let results = resolver.search("안").await.to_vec();

        assert_eq!(results, vec![Player::new("70003", "안우진", "키움 히어로즈", "투수")]);
        assert!(!resolver.state().loading);
        assert!(resolver.state().error.is_none());
    }

    #[tokio::test]
    async fn failed_search_records_message_and_clears_results() {
        let mut resolver = demo_resolver();
        resolver.search("김").await;
        assert_eq!(resolver.state().results.len(), 1);

        resolver.directory = Arc::new(FailingDirectory);
        let results = resolver.search("김").await;

        assert!(results.is_empty());
        assert_eq!(resolver.state().error.as_deref(), Some("검색 실패"));
    }

    #[tokio::test]
    async fn new_search_clears_previous_error() {
        let mut resolver = PlayerLinkResolver::new(Arc::new(FailingDirectory));
        resolver.search("김").await;
        assert!(resolver.state().error.is_some());

        resolver.directory = Arc::new(DemoPlayerDirectory::new(DemoConfig::instant()));
        resolver.search("이").await;

        assert!(resolver.state().error.is_none());
        assert_eq!(resolver.state().results[0].id, "70002");
    }

    #[test]
    fn blank_query_cannot_be_searched() {
        let mut resolver = demo_resolver();
        assert!(!resolver.can_search(""));
        assert!(!resolver.can_search("   "));
        assert!(resolver.can_search("안"));

        resolver.state.loading = true;
        assert!(!resolver.can_search("안"));
    }

    #[test]
    fn link_persists_and_replaces() {
        let mut store = DocumentStore::open(InMemoryKeyValueRepository::new());

        PlayerLinkResolver::link(&mut store, Player::new("70001", "김성민", "키움 히어로즈", "투수"))
            .unwrap();
        let doc =
            PlayerLinkResolver::link(&mut store, Player::new("70003", "안우진", "키움 히어로즈", "투수"))
                .unwrap();

        assert_eq!(doc.linked_player.as_ref().map(|p| p.id.as_str()), Some("70003"));
        assert_eq!(store.load(), *store.document());
    }
}
