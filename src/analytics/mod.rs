//! Content measurement and statistics for loaded documents.

use crate::api::LoadReport;
use crate::model::Document;
use chrono::NaiveDateTime;

/// Quick statistics for user-facing progress messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSummary {
    pub documents: usize,
    pub total_chars: usize,
    /// Documents whose extracted text is blank.
    pub empty_documents: usize,
    pub latest_update: Option<NaiveDateTime>,
}

/// Measures basic content statistics for a batch of documents.
pub fn measure_documents(documents: &[Document]) -> ContentSummary {
    documents
        .iter()
        .fold(ContentSummary::default(), |mut summary, doc| {
            summary.documents += 1;
            summary.total_chars += doc.text.chars().count();
            if doc.text.trim().is_empty() {
                summary.empty_documents += 1;
            }
            summary.latest_update = match (summary.latest_update, doc.extra_info.modified_at()) {
                (Some(a), Some(b)) => Some(a.max(b)),
                (a, b) => a.or(b),
            };
            summary
        })
}

/// One line per collection, e.g. `posts: 250 items over 3 pages (of 5, truncated)`.
pub fn describe_report(report: &LoadReport) -> Vec<String> {
    report
        .collections
        .iter()
        .map(|c| {
            let mut line = format!(
                "{}: {} items over {} pages",
                c.content_type, c.items_fetched, c.pages_fetched
            );
            if c.truncated {
                let total = c
                    .total_pages
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "?".to_string());
                line.push_str(&format!(" (of {}, truncated)", total));
            }
            line
        })
        .collect()
}
