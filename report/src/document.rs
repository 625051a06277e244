//! Report document export: a JSON summary plus a human-readable markdown
//! document, written into an explicitly configured output directory.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use socialscope_core::{AnalysisRun, CoreError, ReportError};

use crate::charts::{hourly_series, sentiment_pie};

const SUMMARY_FILE: &str = "summary.json";
const REPORT_FILE: &str = "report.md";

/// Consumes a finished analysis run and renders its artifacts. The output
/// directory is a constructor argument, never process-wide state.
pub struct ReportAssembler {
    output_dir: PathBuf,
}

impl ReportAssembler {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `summary.json` and `report.md`, creating the output
    /// directory if needed. Returns the paths written.
    pub fn write_report(&self, run: &AnalysisRun) -> Result<Vec<PathBuf>, CoreError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ReportError::WriteFailed {
            artifact: self.output_dir.display().to_string(),
            source,
        })?;

        let summary_path = self.output_dir.join(SUMMARY_FILE);
        let json = serde_json::to_string_pretty(run).map_err(ReportError::Serialize)?;
        fs::write(&summary_path, json).map_err(|source| ReportError::WriteFailed {
            artifact: SUMMARY_FILE.to_string(),
            source,
        })?;

        let report_path = self.output_dir.join(REPORT_FILE);
        fs::write(&report_path, render_markdown(run)).map_err(|source| {
            ReportError::WriteFailed {
                artifact: REPORT_FILE.to_string(),
                source,
            }
        })?;

        info!(
            "Report for '{}' written to {}",
            run.keyword,
            self.output_dir.display()
        );
        Ok(vec![summary_path, report_path])
    }
}

/// Render the run as a markdown document: totals, percentages to one
/// decimal, mean length, keyword tables, and the hourly distribution.
pub fn render_markdown(run: &AnalysisRun) -> String {
    let summary = &run.summary;
    let mut doc = String::new();

    doc.push_str(&format!(
        "# Social Analysis - {} - {}\n\n",
        run.network, run.keyword
    ));
    doc.push_str(&format!("- Total posts: {}\n", summary.total));
    doc.push_str(&format!("- Positive: {:.1}%\n", summary.positive_pct));
    doc.push_str(&format!("- Negative: {:.1}%\n", summary.negative_pct));
    doc.push_str(&format!("- Neutral: {:.1}%\n", summary.neutral_pct));
    doc.push_str(&format!(
        "- Mean length: {:.1} characters\n\n",
        summary.mean_length
    ));

    doc.push_str("## Top positive keywords\n\n");
    push_keyword_list(&mut doc, &summary.top_positive);

    doc.push_str("## Top negative keywords\n\n");
    push_keyword_list(&mut doc, &summary.top_negative);

    doc.push_str("## Top trends\n\n");
    push_keyword_list(&mut doc, &summary.top_overall);

    doc.push_str("## Sentiment distribution\n\n");
    for slice in sentiment_pie(&run.counts) {
        doc.push_str(&format!(
            "- {}: {} ({:.1}%)\n",
            slice.label, slice.count, slice.share
        ));
    }
    doc.push('\n');

    doc.push_str("## Posts per hour\n\n");
    for point in hourly_series(&summary.hourly) {
        doc.push_str(&format!("- {}h: {}\n", point.hour, point.count));
    }

    doc
}

fn push_keyword_list(doc: &mut String, keywords: &[(String, usize)]) {
    if keywords.is_empty() {
        doc.push_str("_none_\n\n");
        return;
    }
    for (keyword, frequency) in keywords {
        doc.push_str(&format!("- {} ({})\n", keyword, frequency));
    }
    doc.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialscope_core::{SentimentCounts, SocialNetwork, SummaryRecord};
    use std::collections::BTreeMap;

    fn sample_run() -> AnalysisRun {
        let mut hourly = BTreeMap::new();
        hourly.insert("09".to_string(), 2);

        AnalysisRun::new(
            SocialNetwork::Twitter,
            "rust".to_string(),
            SentimentCounts {
                positive: 1,
                negative: 1,
                neutral: 0,
            },
            SummaryRecord {
                total: 2,
                positive_pct: 50.0,
                negative_pct: 50.0,
                neutral_pct: 0.0,
                mean_length: 16.5,
                top_positive: vec![("#great".to_string(), 1)],
                top_negative: vec![("days".to_string(), 1)],
                top_overall: vec![("days".to_string(), 2)],
                hourly,
            },
        )
    }

    #[test]
    fn test_markdown_contains_summary_lines() {
        let doc = render_markdown(&sample_run());
        assert!(doc.contains("# Social Analysis - twitter - rust"));
        assert!(doc.contains("- Total posts: 2"));
        assert!(doc.contains("- Positive: 50.0%"));
        assert!(doc.contains("- Mean length: 16.5 characters"));
        assert!(doc.contains("- #great (1)"));
        assert!(doc.contains("- 09h: 2"));
    }

    #[test]
    fn test_write_report_creates_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let assembler = ReportAssembler::new(dir.path().join("out"));

        let paths = assembler.write_report(&sample_run()).unwrap();
        assert_eq!(paths.len(), 2);
        for path in &paths {
            assert!(path.exists(), "missing artifact {}", path.display());
        }

        let json = std::fs::read_to_string(&paths[0]).unwrap();
        assert!(json.contains("\"keyword\": \"rust\""));
        assert!(json.contains("\"total\": 2"));
    }

    #[test]
    fn test_write_report_to_unwritable_path_fails() {
        // A file where the directory should be
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "file, not a dir").unwrap();

        let assembler = ReportAssembler::new(&blocker);
        let err = assembler.write_report(&sample_run()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Report(ReportError::WriteFailed { .. })
        ));
    }
}
