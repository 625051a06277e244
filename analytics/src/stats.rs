//! Single-pass aggregation of classified, tokenized posts into the
//! summary record consumed by the report boundary.

use chrono::{NaiveDateTime, Timelike};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use socialscope_core::{
    AnalyticsError, Post, SentimentCounts, SentimentLabel, SummaryRecord, MINUTE_FORMAT,
};

use crate::classify::{classify, PolarityScorer};
use crate::keywords;
use crate::normalize;

const TOP_KEYWORD_COUNT: usize = 5;

pub struct StatsAggregator<'a> {
    scorer: &'a dyn PolarityScorer,
}

impl<'a> StatsAggregator<'a> {
    pub fn new(scorer: &'a dyn PolarityScorer) -> Self {
        Self { scorer }
    }

    /// Aggregate a post set into raw sentiment counts plus the summary
    /// record. Degenerate inputs (empty corpus, empty text) resolve to
    /// zero-valued defaults; a timestamp that cannot be parsed aborts the
    /// run with no partial record.
    pub fn aggregate(
        &self,
        posts: &[Post],
    ) -> Result<(SentimentCounts, SummaryRecord), AnalyticsError> {
        let mut counts = SentimentCounts::default();
        let mut total_chars = 0usize;
        let mut positive_tokens: Vec<String> = Vec::new();
        let mut negative_tokens: Vec<String> = Vec::new();
        let mut corpus_tokens: Vec<String> = Vec::new();
        let mut hourly: BTreeMap<String, usize> = BTreeMap::new();

        for post in posts {
            // Sentiment is scored on the raw text; keywords come from the
            // URL-stripped text. The asymmetry is intentional.
            let label = classify(self.scorer, &post.text);
            counts.record(label);
            total_chars += post.text.chars().count();

            let tokens = keywords::extract(&normalize::strip_urls(&post.text));
            match label {
                SentimentLabel::Positive => positive_tokens.extend(tokens.iter().cloned()),
                SentimentLabel::Negative => negative_tokens.extend(tokens.iter().cloned()),
                SentimentLabel::Neutral => {}
            }
            corpus_tokens.extend(tokens);

            let hour = hour_bucket(&post.created_at)?;
            *hourly.entry(hour).or_insert(0) += 1;
        }

        let total = posts.len();
        debug!(
            "Aggregated {} posts: {} positive, {} negative, {} neutral",
            total, counts.positive, counts.negative, counts.neutral
        );

        let summary = SummaryRecord {
            total,
            positive_pct: percentage(counts.positive, total),
            negative_pct: percentage(counts.negative, total),
            neutral_pct: percentage(counts.neutral, total),
            mean_length: if total > 0 {
                total_chars as f64 / total as f64
            } else {
                0.0
            },
            top_positive: top_keywords(&positive_tokens, TOP_KEYWORD_COUNT),
            top_negative: top_keywords(&negative_tokens, TOP_KEYWORD_COUNT),
            top_overall: top_keywords(&corpus_tokens, TOP_KEYWORD_COUNT),
            hourly,
        };

        Ok((counts, summary))
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Extract the two-digit hour bucket from a minute-precision timestamp.
fn hour_bucket(created_at: &str) -> Result<String, AnalyticsError> {
    let parsed = NaiveDateTime::parse_from_str(created_at, MINUTE_FORMAT).map_err(|_| {
        AnalyticsError::MalformedTimestamp {
            value: created_at.to_string(),
        }
    })?;
    Ok(format!("{:02}", parsed.hour()))
}

/// Top-`n` (keyword, frequency) pairs, descending by frequency with ties
/// broken by first-encounter order. A stable sort over insertion-ordered
/// counts reproduces a frequency-count-then-take-top-N policy exactly.
pub fn top_keywords(tokens: &[String], n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for token in tokens {
        let entry = counts.entry(token.as_str()).or_insert(0);
        if *entry == 0 {
            order.push(token.as_str());
        }
        *entry += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|token| (token.to_string(), counts[token]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}
