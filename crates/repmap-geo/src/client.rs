use std::time::Duration;

use reqwest::Client;

use crate::error::BoundaryError;
use crate::types::{BoundarySet, FeatureCollection};

/// HTTP client for the static region boundary file.
///
/// One GET, no retries: a failed fetch is terminal for the session and the
/// recovery path is a reload.
pub struct BoundaryClient {
    client: Client,
    timeout_secs: u64,
}

impl BoundaryClient {
    /// Creates a `BoundaryClient` with a whole-request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, BoundaryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            timeout_secs,
        })
    }

    /// Fetches and parses the boundary file at `url`.
    ///
    /// # Errors
    ///
    /// - [`BoundaryError::Timeout`] if the request exceeds the timeout.
    /// - [`BoundaryError::UnexpectedStatus`] for any non-2xx status.
    /// - [`BoundaryError::Http`] for other network or TLS failures.
    /// - [`BoundaryError::Deserialize`] if the body is not a feature collection.
    pub async fn fetch(&self, url: &str) -> Result<FeatureCollection, BoundaryError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoundaryError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await.map_err(|e| self.classify(e, url))?;
        FeatureCollection::from_json(&body, &format!("boundary file from {url}"))
    }

    fn classify(&self, error: reqwest::Error, url: &str) -> BoundaryError {
        if error.is_timeout() {
            BoundaryError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.timeout_secs,
            }
        } else {
            BoundaryError::Http(error)
        }
    }
}

/// State of the map view after the one load-time fetch.
#[derive(Debug, Clone)]
pub enum MapView {
    Ready(BoundarySet),
    /// Terminal for the session. `message` is the generic user-facing text.
    Unavailable { message: String },
}

impl MapView {
    #[must_use]
    pub fn boundaries(&self) -> Option<&BoundarySet> {
        match self {
            MapView::Ready(set) => Some(set),
            MapView::Unavailable { .. } => None,
        }
    }
}

/// Fetches the boundary file once and settles the map view state.
///
/// Failures are logged in full and collapsed into [`MapView::Unavailable`].
pub async fn load_map(client: &BoundaryClient, url: &str) -> MapView {
    match client.fetch(url).await {
        Ok(collection) => {
            let set = BoundarySet::new(collection);
            tracing::info!(features = set.len(), url, "loaded region boundaries");
            MapView::Ready(set)
        }
        Err(e) => {
            tracing::error!(error = %e, url, "failed to load region boundaries");
            MapView::Unavailable {
                message: e.user_message().to_owned(),
            }
        }
    }
}
