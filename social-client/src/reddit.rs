use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

use socialscope_core::{CoreError, FetchError, Post, SocialNetwork, MINUTE_FORMAT};

use crate::{check_status, log_fetched};

const REDDIT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const REDDIT_API_BASE: &str = "https://oauth.reddit.com";
const DEFAULT_USER_AGENT: &str = "socialscope/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedditListing<T> {
    pub data: RedditListingData<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedditListingData<T> {
    pub children: Vec<RedditListingChild<T>>,
    pub after: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedditListingChild<T> {
    pub kind: String,
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedditPostData {
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    pub created_utc: f64,
}

pub struct RedditClient {
    http: Client,
    client_id: String,
    client_secret: String,
    user_agent: String,
    search_url: Url,
}

impl RedditClient {
    pub fn new(
        client_id: String,
        client_secret: String,
        user_agent: Option<String>,
    ) -> Result<Self, CoreError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(CoreError::Network)?;
        let search_url = Url::parse(REDDIT_API_BASE)
            .and_then(|base| base.join("/search"))
            .map_err(|e| CoreError::Internal {
                message: format!("invalid Reddit API base URL: {e}"),
            })?;
        Ok(Self {
            http,
            client_id,
            client_secret,
            user_agent: user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            search_url,
        })
    }

    /// Application-only token via the client-credentials grant.
    async fn access_token(&self) -> Result<String, CoreError> {
        debug!("Requesting Reddit access token");
        let response = self
            .http
            .post(REDDIT_TOKEN_URL)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .header("User-Agent", &self.user_agent)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CoreError::Fetch(FetchError::RequestTimeout)
                } else {
                    CoreError::Network(e)
                }
            })?;

        let response = check_status(SocialNetwork::Reddit, REDDIT_TOKEN_URL, response)?;
        let token: TokenResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Reddit token response: {}", e);
            CoreError::Fetch(FetchError::InvalidResponse {
                details: "Failed to parse Reddit token response".to_string(),
            })
        })?;
        Ok(token.access_token)
    }

    /// Search across all subreddits for posts matching `keyword`.
    pub async fn search(&self, keyword: &str, max_results: u32) -> Result<Vec<Post>, CoreError> {
        let token = self.access_token().await?;
        debug!("Searching Reddit for '{}'", keyword);
        let limit = max_results.to_string();

        let response = self
            .http
            .get(self.search_url.clone())
            .bearer_auth(&token)
            .header("User-Agent", &self.user_agent)
            .query(&[("q", keyword), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CoreError::Fetch(FetchError::RequestTimeout)
                } else {
                    CoreError::Network(e)
                }
            })?;

        let response = check_status(SocialNetwork::Reddit, self.search_url.as_str(), response)?;
        let listing: RedditListing<RedditPostData> = response.json().await.map_err(|e| {
            error!("Failed to parse Reddit search listing: {}", e);
            CoreError::Fetch(FetchError::InvalidResponse {
                details: format!("Failed to parse search listing for '{keyword}'"),
            })
        })?;

        let posts: Vec<Post> = listing
            .data
            .children
            .into_iter()
            .map(|child| Post::from(child.data))
            .collect();
        log_fetched(SocialNetwork::Reddit, keyword, posts.len());
        Ok(posts)
    }
}

impl From<RedditPostData> for Post {
    fn from(data: RedditPostData) -> Self {
        // Title and body are analyzed as one text span.
        let text = format!("{} {}", data.title, data.selftext);
        let created_at = DateTime::from_timestamp(data.created_utc as i64, 0)
            .map(|dt| dt.format(MINUTE_FORMAT).to_string())
            .unwrap_or_default();
        Self { text, created_at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reddit_post_conversion() {
        let data = RedditPostData {
            title: "Rust 2.0 announced".to_string(),
            selftext: "just kidding".to_string(),
            created_utc: 1704099600.0, // 2024-01-01 09:00 UTC
        };
        let post: Post = data.into();
        assert_eq!(post.text, "Rust 2.0 announced just kidding");
        assert_eq!(post.created_at, "2024-01-01 09:00");
    }

    #[test]
    fn test_link_post_has_empty_selftext() {
        let data = RedditPostData {
            title: "A link post".to_string(),
            selftext: String::new(),
            created_utc: 1704099600.0,
        };
        let post: Post = data.into();
        assert_eq!(post.text, "A link post ");
    }

    #[test]
    fn test_listing_deserializes() {
        let raw = r#"{
            "data": {
                "children": [
                    {"kind": "t3", "data": {"title": "hello", "selftext": "world", "created_utc": 1704099600.0}}
                ],
                "after": null
            }
        }"#;
        let listing: RedditListing<RedditPostData> = serde_json::from_str(raw).unwrap();
        assert_eq!(listing.data.children.len(), 1);
        assert_eq!(listing.data.children[0].kind, "t3");
        assert_eq!(listing.data.children[0].data.title, "hello");
        assert!(listing.data.after.is_none());
    }
}
