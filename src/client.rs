// HTTP client for the season snapshot collaborator.
//
// One request-response per fetch, no retry or backoff at this layer; the
// caller may abandon an in-flight fetch freely since the engine never
// observes a partial snapshot.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::schedule::{DirectoryPlayer, Snapshot};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Client for the stats backend's `/api` surface.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the backend origin, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the full season snapshot.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, FetchError> {
        let snapshot: Snapshot = self.get_json("/api/snapshot").await?;
        debug!(
            players = snapshot.players.len(),
            games = snapshot.games.len(),
            "snapshot fetched"
        );
        Ok(snapshot)
    }

    /// Fetch the player directory for import matching. The backend exposes
    /// no dedicated directory endpoint; the directory is the snapshot's
    /// player list projected down to id, name, and team.
    pub async fn fetch_player_directory(&self) -> Result<Vec<DirectoryPlayer>, FetchError> {
        Ok(self.fetch_snapshot().await?.player_directory())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        Ok(response.json().await?)
    }
}
