//! HTTP player directory backed by the configured server.

use async_trait::async_trait;
use athly_core::{Player, SyncScope};
use reqwest::Url;

use crate::error::{KboError, Result};
use crate::traits::PlayerDirectory;
use crate::types::{SearchResponse, SyncOrigin, SyncResponse, SyncResult};

/// Player directory using the backend's HTTP API.
///
/// - `GET {base}/kbo/search?name={query}` returns `{ "players": [...] }`
/// - `GET {base}/kbo/sync?playerId={id}&scope={today|recent}` returns
///   `{ "message": "..." }`
///
/// No timeout is configured: a hung request stays pending until it resolves.
pub struct HttpPlayerDirectory {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpPlayerDirectory {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse_with_params(&raw, params)
            .map_err(|e| KboError::InvalidBaseUrl(format!("{raw}: {e}")))
    }
}

#[async_trait]
impl PlayerDirectory for HttpPlayerDirectory {
    async fn search(&self, query: &str) -> Result<Vec<Player>> {
        let url = self.endpoint("/kbo/search", &[("name", query)])?;
        tracing::debug!("Searching players: {}", url);

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Player search failed with status {}", status);
            return Err(KboError::SearchRejected {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| KboError::InvalidResponse(e.to_string()))?;

        tracing::debug!("Search {:?}: {} player(s)", query, parsed.players.len());
        Ok(parsed.players)
    }

    async fn sync(&self, player_id: &str, scope: SyncScope) -> Result<SyncResult> {
        let url = self.endpoint(
            "/kbo/sync",
            &[("playerId", player_id), ("scope", scope.as_ref())],
        )?;
        tracing::debug!("Requesting sync: {}", url);

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Sync failed with status {}", status);
            return Err(KboError::SyncRejected {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SyncResponse =
            serde_json::from_str(&body).map_err(|e| KboError::InvalidResponse(e.to_string()))?;

        let message = parsed
            .message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| "ok".to_string());

        Ok(SyncResult {
            message,
            origin: SyncOrigin::Remote,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{Value, json};

    use super::*;

    async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        let name = params.get("name").cloned().unwrap_or_default();
        if name == "김" {
            Json(json!({
                "players": [{"id": "1", "name": "김광현", "team": "SSG", "position": "투수"}]
            }))
        } else {
            Json(json!({}))
        }
    }

    async fn sync(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        let player = params.get("playerId").cloned().unwrap_or_default();
        let scope = params.get("scope").cloned().unwrap_or_default();
        if player == "silent" {
            Json(json!({}))
        } else {
            Json(json!({ "message": format!("{player}/{scope}") }))
        }
    }

    async fn unavailable() -> StatusCode {
        StatusCode::SERVICE_UNAVAILABLE
    }

    async fn garbage() -> &'static str {
        "<html>not json</html>"
    }

    /// Bind to port 0 and return the actual address.
    async fn start_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn backend() -> Router {
        Router::new()
            .route("/kbo/search", get(search))
            .route("/kbo/sync", get(sync))
    }

    #[tokio::test]
    async fn search_returns_players() {
        let base = start_server(backend()).await;
        let directory = HttpPlayerDirectory::new(format!("{base}/"));

        let players = directory.search("김").await.unwrap();

        assert_eq!(players, vec![Player::new("1", "김광현", "SSG", "투수")]);
    }

    #[tokio::test]
    async fn search_without_players_field_is_empty() {
        let base = start_server(backend()).await;
        let directory = HttpPlayerDirectory::new(base);

        assert!(directory.search("박").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_non_ok_status_is_rejected() {
        let base = start_server(Router::new().route("/kbo/search", get(unavailable))).await;
        let directory = HttpPlayerDirectory::new(base);

        let err = directory.search("김").await.unwrap_err();

        assert!(matches!(err, KboError::SearchRejected { status: 503 }));
        assert_eq!(err.to_string(), "검색 실패");
    }

    #[tokio::test]
    async fn search_unparseable_body_is_reported() {
        let base = start_server(Router::new().route("/kbo/search", get(garbage))).await;
        let directory = HttpPlayerDirectory::new(base);

        let err = directory.search("김").await.unwrap_err();

        assert!(matches!(err, KboError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn sync_passes_player_and_scope() {
        let base = start_server(backend()).await;
        let directory = HttpPlayerDirectory::new(base);

        let result = directory.sync("70001", SyncScope::Recent).await.unwrap();

        assert_eq!(result.message, "70001/recent");
        assert_eq!(result.origin, SyncOrigin::Remote);
    }

    #[tokio::test]
    async fn sync_missing_message_reads_ok() {
        let base = start_server(backend()).await;
        let directory = HttpPlayerDirectory::new(base);

        let result = directory.sync("silent", SyncScope::Today).await.unwrap();

        assert_eq!(result.message, "ok");
    }

    #[tokio::test]
    async fn sync_non_ok_status_is_rejected() {
        let base = start_server(Router::new().route("/kbo/sync", get(unavailable))).await;
        let directory = HttpPlayerDirectory::new(base);

        let err = directory.sync("70001", SyncScope::Today).await.unwrap_err();

        assert!(matches!(err, KboError::SyncRejected { status: 503 }));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let directory = HttpPlayerDirectory::new(format!("http://{addr}"));

        let err = directory.search("김").await.unwrap_err();

        assert!(matches!(err, KboError::Transport(_)));
    }

    #[test]
    fn query_values_are_encoded() {
        let directory = HttpPlayerDirectory::new("http://localhost:8080");
        let url = directory
            .endpoint("/kbo/search", &[("name", "안 우&진")])
            .unwrap();
        assert_eq!(url.path(), "/kbo/search");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, vec![("name".to_string(), "안 우&진".to_string())]);
    }

    #[test]
    fn malformed_base_url_is_reported() {
        let directory = HttpPlayerDirectory::new("not a url");
        assert!(matches!(
            directory.endpoint("/kbo/search", &[]),
            Err(KboError::InvalidBaseUrl(_))
        ));
    }
}
