use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

use socialscope_core::{CoreError, FetchError, Post, SocialNetwork, MINUTE_FORMAT};

use crate::{check_status, log_fetched};

const TWITTER_SEARCH_URL: &str = "https://api.twitter.com/2/tweets/search/recent";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Deserialize)]
pub struct TweetData {
    pub text: String,
    /// RFC 3339 as returned by the v2 API.
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Absent entirely when the search matched nothing.
    pub data: Option<Vec<TweetData>>,
}

pub struct TwitterClient {
    http: Client,
    bearer_token: String,
}

impl TwitterClient {
    pub fn new(bearer_token: String) -> Result<Self, CoreError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(CoreError::Network)?;
        Ok(Self { http, bearer_token })
    }

    /// Search recent tweets matching `keyword`, newest first.
    pub async fn search_recent(
        &self,
        keyword: &str,
        max_results: u32,
    ) -> Result<Vec<Post>, CoreError> {
        debug!("Searching recent tweets for '{}'", keyword);
        let max_results = max_results.to_string();

        let response = self
            .http
            .get(TWITTER_SEARCH_URL)
            .bearer_auth(&self.bearer_token)
            .query(&[
                ("query", keyword),
                ("max_results", max_results.as_str()),
                ("tweet.fields", "created_at"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CoreError::Fetch(FetchError::RequestTimeout)
                } else {
                    CoreError::Network(e)
                }
            })?;

        let response = check_status(SocialNetwork::Twitter, TWITTER_SEARCH_URL, response)?;
        let body: SearchResponse = response.json().await.map_err(|e| {
            error!("Failed to parse tweet search response: {}", e);
            CoreError::Fetch(FetchError::InvalidResponse {
                details: "Failed to parse tweet search response".to_string(),
            })
        })?;

        let posts: Vec<Post> = body
            .data
            .unwrap_or_default()
            .into_iter()
            .map(Post::from)
            .collect();
        log_fetched(SocialNetwork::Twitter, keyword, posts.len());
        Ok(posts)
    }
}

impl From<TweetData> for Post {
    fn from(tweet: TweetData) -> Self {
        // The pipeline works at minute precision. An unparsable timestamp
        // is passed through untouched so the aggregator rejects it instead
        // of this adapter silently dropping the post.
        let created_at = match DateTime::parse_from_rfc3339(&tweet.created_at) {
            Ok(parsed) => parsed.format(MINUTE_FORMAT).to_string(),
            Err(_) => tweet.created_at,
        };
        Self {
            text: tweet.text,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tweet_conversion_truncates_to_minute() {
        let tweet = TweetData {
            text: "Loving #rustlang".to_string(),
            created_at: "2024-01-01T09:30:45.000Z".to_string(),
        };
        let post: Post = tweet.into();
        assert_eq!(post.text, "Loving #rustlang");
        assert_eq!(post.created_at, "2024-01-01 09:30");
    }

    #[test]
    fn test_unparsable_timestamp_passes_through() {
        let tweet = TweetData {
            text: "odd clock".to_string(),
            created_at: "whenever".to_string(),
        };
        let post: Post = tweet.into();
        assert_eq!(post.created_at, "whenever");
    }

    #[test]
    fn test_empty_search_response_deserializes() {
        let body: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(body.data.is_none());
    }

    #[test]
    fn test_search_response_with_tweets_deserializes() {
        let body: SearchResponse = serde_json::from_str(
            r#"{"data":[{"text":"hello","created_at":"2024-01-01T09:00:00Z"}]}"#,
        )
        .unwrap();
        let tweets = body.data.unwrap();
        assert_eq!(tweets.len(), 1);
        assert_eq!(tweets[0].text, "hello");
    }
}
