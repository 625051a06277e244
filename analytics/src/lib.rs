//! The analytics aggregation pipeline: turns a stream of raw posts into
//! sentiment labels, keyword frequency tables, temporal distributions, and
//! a summary record for the report boundary.

pub mod classify;
pub mod keywords;
pub mod normalize;
pub mod pipeline;
pub mod stats;

pub use classify::{LexiconScorer, PolarityScorer};
pub use pipeline::run;
pub use stats::StatsAggregator;
