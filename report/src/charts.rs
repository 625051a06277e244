//! Chart input construction. Rasterization is out of scope; these
//! structures are what a renderer would consume.

use serde::Serialize;
use std::collections::BTreeMap;

use socialscope_core::{SentimentCounts, SentimentLabel};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: SentimentLabel,
    pub count: usize,
    /// Share of the total in percent; 0 for every slice of an empty total.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordBar {
    pub keyword: String,
    pub frequency: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourPoint {
    pub hour: String,
    pub count: usize,
}

/// Sentiment distribution slices, one per label, in fixed label order.
pub fn sentiment_pie(counts: &SentimentCounts) -> Vec<PieSlice> {
    let total = counts.total();
    [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ]
    .into_iter()
    .map(|label| {
        let count = counts.get(label);
        let share = if total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / total as f64
        };
        PieSlice {
            label,
            count,
            share,
        }
    })
    .collect()
}

/// Bars for a top-keyword table, preserving its ranking order.
pub fn keyword_bars(top: &[(String, usize)]) -> Vec<KeywordBar> {
    top.iter()
        .map(|(keyword, frequency)| KeywordBar {
            keyword: keyword.clone(),
            frequency: *frequency,
        })
        .collect()
}

/// Hour-of-day frequency series, sorted by hour key.
pub fn hourly_series(hourly: &BTreeMap<String, usize>) -> Vec<HourPoint> {
    hourly
        .iter()
        .map(|(hour, count)| HourPoint {
            hour: hour.clone(),
            count: *count,
        })
        .collect()
}
