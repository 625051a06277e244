use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ConfigError;

/// Timestamp format carried by every `Post`: minute precision, no zone.
pub const MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One ingested social-media item. Immutable once fetched; consumed
/// read-only by the analytics pipeline and discarded after the run.
#[derive(Debug, Clone)]
pub struct Post {
    pub text: String,
    /// Formatted with [`MINUTE_FORMAT`]. Parsed (and validated) by the
    /// aggregator when bucketing by hour.
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Map a continuous polarity score in [-1, 1] to a discrete label.
    /// Strictly positive scores are Positive, strictly negative scores
    /// are Negative, exactly zero is Neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Twitter,
    Reddit,
    Instagram,
    Facebook,
}

impl SocialNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialNetwork::Twitter => "twitter",
            SocialNetwork::Reddit => "reddit",
            SocialNetwork::Instagram => "instagram",
            SocialNetwork::Facebook => "facebook",
        }
    }
}

impl fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialNetwork {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "twitter" => Ok(SocialNetwork::Twitter),
            "reddit" => Ok(SocialNetwork::Reddit),
            "instagram" => Ok(SocialNetwork::Instagram),
            "facebook" => Ok(SocialNetwork::Facebook),
            _ => Err(ConfigError::InvalidValue {
                field: "network".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Per-network API secrets. Which fields are required depends on the
/// network; see [`crate::config::AppConfig::validate_credentials`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    pub twitter_bearer_token: Option<String>,
    pub reddit_client_id: Option<String>,
    pub reddit_client_secret: Option<String>,
    pub reddit_user_agent: Option<String>,
}

/// Raw per-label post counts from one aggregation pass. Chart input for
/// the report boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Aggregate output of one pipeline run, consumed by reporting.
///
/// Invariant: the three percentages sum to 100 (within rounding) when
/// `total > 0`, and are all exactly 0 when `total == 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub total: usize,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
    /// Mean character count of the original post texts.
    pub mean_length: f64,
    /// Top-5 (keyword, frequency) pairs among Positive-labeled posts.
    pub top_positive: Vec<(String, usize)>,
    /// Top-5 (keyword, frequency) pairs among Negative-labeled posts.
    pub top_negative: Vec<(String, usize)>,
    /// Top-5 (keyword, frequency) pairs across the whole corpus.
    pub top_overall: Vec<(String, usize)>,
    /// Post count per hour of day, keyed "00".."23".
    pub hourly: BTreeMap<String, usize>,
}

/// The bundle handed to the report boundary after a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRun {
    pub run_id: Uuid,
    pub network: SocialNetwork,
    pub keyword: String,
    pub counts: SentimentCounts,
    pub summary: SummaryRecord,
}

impl AnalysisRun {
    pub fn new(
        network: SocialNetwork,
        keyword: String,
        counts: SentimentCounts,
        summary: SummaryRecord,
    ) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            network,
            keyword,
            counts,
            summary,
        }
    }
}
