//! Pipeline result with the number mapping and run statistics.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::NumberMap;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Result of renumbering a document, including content, the old-to-new
/// label mapping, and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenumberResult {
    /// The renumbered document text
    pub content: String,

    /// Old label to new label, for every header whose number changed
    pub mapping: NumberMap,

    /// Pass statistics
    pub stats: RenumberStats,
}

impl RenumberResult {
    /// Create a new renumber result.
    pub fn new(content: String, mapping: NumberMap, stats: RenumberStats) -> Self {
        Self {
            content,
            mapping,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Serialize the mapping and statistics (not the content) as a JSON
    /// report document.
    pub fn report_json(&self, format: ReportFormat) -> Result<String> {
        let report = Report {
            mapping: &self.mapping,
            stats: &self.stats,
        };

        let result = match format {
            ReportFormat::Pretty => serde_json::to_string_pretty(&report),
            ReportFormat::Compact => serde_json::to_string(&report),
        };

        result.map_err(|e| Error::Report(e.to_string()))
    }
}

/// Report body: everything in the result except the document text.
#[derive(Serialize)]
struct Report<'a> {
    mapping: &'a NumberMap,
    stats: &'a RenumberStats,
}

/// Statistics collected during a renumbering run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenumberStats {
    /// Number of lines in the input document
    pub line_count: u32,

    /// Number of headers assigned a number
    pub header_count: u32,

    /// Number of headers whose pre-existing label changed
    pub relabeled_count: u32,

    /// Number of in-text section references rewritten
    pub reference_count: u32,
}

impl RenumberStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RenumberResult {
        let mapping: NumberMap = [("3", "1.2")].into_iter().collect();
        let stats = RenumberStats {
            line_count: 4,
            header_count: 4,
            relabeled_count: 1,
            reference_count: 2,
        };
        RenumberResult::new("# 1. Intro\n".to_string(), mapping, stats)
    }

    #[test]
    fn test_report_json_pretty() {
        let report = sample().report_json(ReportFormat::Pretty).unwrap();

        assert!(report.contains("\"mapping\""));
        assert!(report.contains("\"3\": \"1.2\""));
        assert!(report.contains("\"reference_count\": 2"));
        assert!(report.contains('\n'));
        // The document text stays out of the report.
        assert!(!report.contains("Intro"));
    }

    #[test]
    fn test_report_json_compact() {
        let report = sample().report_json(ReportFormat::Compact).unwrap();

        assert!(!report.contains('\n'));
        assert!(report.contains("\"3\":\"1.2\""));
    }

    #[test]
    fn test_content_len() {
        assert_eq!(sample().content_len(), 11);
    }
}
