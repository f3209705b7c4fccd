//! Page fetching with user-agent rotation.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use std::time::Duration;
use thiserror::Error;

use crate::models::FetchConfig;

const FALLBACK_USER_AGENT: &str = "Mozilla/5.0 (compatible; huescout)";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    Status { url: String, status: u16 },
}

/// Source of raw HTML pages. The crawl layer only sees this trait, so
/// tests can substitute a canned implementation.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one URL and return the response body as text.
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches pages over HTTP, rotating through the configured user agents.
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agents: Vec<String>,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            client,
            user_agents: config.user_agents.clone(),
        })
    }

    fn pick_user_agent(&self) -> &str {
        self.user_agents
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or(FALLBACK_USER_AGENT)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let user_agent = self.pick_user_agent();
        tracing::debug!(url = %url, user_agent = %user_agent, "Fetching page");

        let response = self
            .client
            .get(url)
            .header("User-Agent", user_agent)
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Referer", "https://www.google.com/")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
