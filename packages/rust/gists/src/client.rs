//! HTTP client for the GitHub Gist listing API.
//!
//! One unauthenticated GET per call, no retry, no caching. Failures are
//! surfaced as [`FolioError`] by [`GistClient::fetch_gists`]; the absorbing
//! wrapper [`GistClient::load_feed`] turns them into a renderable
//! [`GistFeed::Failed`] instead.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use folio_shared::{FolioError, Gist, GistFeed, GistsConfig, Result};

/// User-Agent string for API requests (GitHub rejects requests without one).
const USER_AGENT: &str = concat!("Folio/", env!("CARGO_PKG_VERSION"));

/// Client for fetching a user's public Gist listing.
pub struct GistClient {
    client: Client,
    api_base: Url,
}

impl GistClient {
    /// Create a new client from the `[gists]` config section.
    pub fn new(config: &GistsConfig) -> Result<Self> {
        let api_base = Url::parse(&config.api_base).map_err(|e| {
            FolioError::config(format!("invalid api_base '{}': {e}", config.api_base))
        })?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FolioError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, api_base })
    }

    /// The listing endpoint for a given username.
    fn listing_url(&self, username: &str) -> Result<Url> {
        let base = self.api_base.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/users/{username}/gists"))
            .map_err(|e| FolioError::config(format!("invalid listing URL for '{username}': {e}")))
    }

    /// Fetch the user's public gists, in the order the API returned them.
    ///
    /// Transport errors, non-2xx statuses, and JSON decode failures all
    /// surface as `Err`; no filtering or reordering is applied on success.
    #[instrument(skip(self))]
    pub async fn fetch_gists(&self, username: &str) -> Result<Vec<Gist>> {
        let url = self.listing_url(username)?;
        debug!(%url, "fetching gist listing");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| FolioError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::Network(format!("{url}: HTTP {status}")));
        }

        let gists: Vec<Gist> = response
            .json()
            .await
            .map_err(|e| FolioError::Decode(format!("{url}: {e}")))?;

        debug!(count = gists.len(), "gist listing fetched");
        Ok(gists)
    }

    /// Fetch the user's gists as a [`GistFeed`], absorbing any failure.
    ///
    /// This never returns an error: a failed fetch is logged and becomes
    /// [`GistFeed::Failed`], so the caller can always render something.
    pub async fn load_feed(&self, username: &str) -> GistFeed {
        match self.fetch_gists(username).await {
            Ok(gists) if gists.is_empty() => GistFeed::Empty {
                fetched_at: Utc::now(),
            },
            Ok(gists) => GistFeed::Loaded {
                gists,
                fetched_at: Utc::now(),
            },
            Err(e) => {
                warn!(username, error = %e, "failed to fetch gists");
                GistFeed::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(api_base: &str) -> GistClient {
        let config = GistsConfig {
            username: "octocat".into(),
            api_base: api_base.into(),
            timeout_secs: 5,
        };
        GistClient::new(&config).expect("build client")
    }

    fn listing_body() -> serde_json::Value {
        serde_json::json!([
            {
                "description": "second newest",
                "created_at": "2024-02-01T00:00:00Z",
                "files": {
                    "b.rs": { "filename": "b.rs", "raw_url": "https://raw.example/b.rs" }
                }
            },
            {
                "description": null,
                "created_at": "2023-01-01T00:00:00Z",
                "files": {}
            }
        ])
    }

    #[test]
    fn listing_url_construction() {
        let client = test_client("https://api.github.com");
        let url = client.listing_url("octocat").unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat/gists");

        // Trailing slash on the base must not double up.
        let client = test_client("https://api.github.com/");
        let url = client.listing_url("octocat").unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat/gists");
    }

    #[tokio::test]
    async fn fetch_preserves_response_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/gists"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing_body()))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let gists = client.fetch_gists("octocat").await.unwrap();

        assert_eq!(gists.len(), 2);
        assert_eq!(gists[0].description.as_deref(), Some("second newest"));
        assert!(gists[1].description.is_none());
        assert!(gists[1].files.is_empty());
    }

    #[tokio::test]
    async fn fetch_surfaces_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/gists"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.fetch_gists("octocat").await.unwrap_err();
        assert!(err.to_string().contains("503"), "got: {err}");
    }

    #[tokio::test]
    async fn fetch_surfaces_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/gists"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.fetch_gists("octocat").await.unwrap_err();
        assert!(matches!(err, FolioError::Decode(_)), "got: {err}");
    }

    #[tokio::test]
    async fn load_feed_absorbs_failure() {
        // Grab a local address, then shut the server down so the call fails.
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let client = test_client(&uri);
        let feed = client.load_feed("octocat").await;
        assert!(feed.is_failed());
        assert!(feed.gists().is_empty());
    }

    #[tokio::test]
    async fn load_feed_distinguishes_empty_from_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/gists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let feed = client.load_feed("octocat").await;
        assert!(matches!(feed, GistFeed::Empty { .. }));
        assert!(!feed.is_failed());
    }

    #[tokio::test]
    async fn load_feed_returns_loaded_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/gists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing_body()))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let feed = client.load_feed("octocat").await;
        assert_eq!(feed.gists().len(), 2);
    }
}
