//! The report boundary: consumes one finished analysis run and produces
//! chart input data plus exported documents.

pub mod charts;
pub mod document;

pub use charts::{hourly_series, keyword_bars, sentiment_pie, HourPoint, KeywordBar, PieSlice};
pub use document::{render_markdown, ReportAssembler};
