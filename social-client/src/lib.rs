//! Fetch adapters for the supported social networks. This crate owns all
//! network IO, credential checks, and retry behavior; the analytics core
//! only ever sees the resulting `Vec<Post>`.

pub mod reddit;
pub mod retry;
pub mod twitter;

use reqwest::Response;
use tracing::{info, warn};

use socialscope_core::{ConfigError, CoreError, Credentials, FetchError, Post, SocialNetwork};

use crate::retry::RetryConfig;

/// Facade over the per-network clients. Dispatches on the network,
/// enforcing its credential requirements before any request is made.
pub struct SocialClient {
    retry: RetryConfig,
}

impl SocialClient {
    pub fn new() -> Self {
        Self {
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Fetch up to `max_results` posts matching `keyword`.
    ///
    /// Networks without an adapter (Instagram, Facebook) return an empty
    /// sequence rather than erroring; callers treat that exactly like an
    /// empty search result.
    pub async fn fetch_posts(
        &self,
        network: SocialNetwork,
        keyword: &str,
        credentials: &Credentials,
        max_results: u32,
    ) -> Result<Vec<Post>, CoreError> {
        match network {
            SocialNetwork::Twitter => {
                let token = required_credential(
                    network,
                    "twitter_bearer_token",
                    &credentials.twitter_bearer_token,
                )?;
                let client = twitter::TwitterClient::new(token)?;
                let client = &client;
                retry::with_backoff(&self.retry, move || {
                    client.search_recent(keyword, max_results)
                })
                .await
            }
            SocialNetwork::Reddit => {
                let client_id = required_credential(
                    network,
                    "reddit_client_id",
                    &credentials.reddit_client_id,
                )?;
                let client_secret = required_credential(
                    network,
                    "reddit_client_secret",
                    &credentials.reddit_client_secret,
                )?;
                let client = reddit::RedditClient::new(
                    client_id,
                    client_secret,
                    credentials.reddit_user_agent.clone(),
                )?;
                let client = &client;
                retry::with_backoff(&self.retry, move || client.search(keyword, max_results))
                    .await
            }
            SocialNetwork::Instagram | SocialNetwork::Facebook => {
                warn!("No fetch adapter for {}, returning empty post set", network);
                Ok(Vec::new())
            }
        }
    }
}

impl Default for SocialClient {
    fn default() -> Self {
        Self::new()
    }
}

fn required_credential(
    network: SocialNetwork,
    field: &str,
    value: &Option<String>,
) -> Result<String, CoreError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Config(ConfigError::MissingCredential {
            network,
            field: field.to_string(),
        })),
    }
}

/// Map non-success HTTP statuses to the fetch error taxonomy. Shared by
/// every adapter.
pub(crate) fn check_status(
    network: SocialNetwork,
    endpoint: &str,
    response: Response,
) -> Result<Response, CoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status.as_u16() {
        401 => Err(CoreError::Fetch(FetchError::AuthenticationFailed {
            network,
        })),
        403 => Err(CoreError::Fetch(FetchError::Forbidden {
            resource: endpoint.to_string(),
        })),
        429 => {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse().ok())
                .unwrap_or(60);
            warn!("Rate limited by {}, retry after {}s", network, retry_after);
            Err(CoreError::Fetch(FetchError::RateLimitExceeded {
                retry_after,
            }))
        }
        code if status.is_server_error() => Err(CoreError::Fetch(FetchError::ServerError {
            status_code: code,
        })),
        _ => Err(CoreError::Fetch(FetchError::InvalidResponse {
            details: format!("unexpected status {} from {}", status, endpoint),
        })),
    }
}

pub(crate) fn log_fetched(network: SocialNetwork, keyword: &str, count: usize) {
    info!("Retrieved {} posts from {} for '{}'", count, network, keyword);
}
