//! Output and reference records.
//!
//! Field names serialize in snake_case so extracted corpora and gold files
//! share one JSON shape.

use serde::{Deserialize, Serialize};

/// An article produced by the extraction engine.
///
/// `headline` and `body` are `None` only in lenient extraction, where a
/// field no strategy could fill is kept as absent rather than dropping the
/// record. `language` is always populated; `"unknown"` when detection fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedArticle {
    /// Page URL.
    pub url: String,
    /// Publisher identifier.
    #[serde(default)]
    pub source: String,
    /// Corpus split or document category.
    #[serde(default = "unknown", alias = "type")]
    pub doc_type: String,
    /// Detected language code, or `"unknown"`.
    #[serde(default = "unknown")]
    pub language: String,
    /// Winning headline candidate, normalized.
    #[serde(default, alias = "title")]
    pub headline: Option<String>,
    /// Winning body candidate, normalized.
    #[serde(default)]
    pub body: Option<String>,
    /// Publication date as `YYYY-MM-DD HH:MM:SS`.
    #[serde(default)]
    pub publication_date: Option<String>,
}

fn unknown() -> String {
    "unknown".to_string()
}

impl ExtractedArticle {
    /// Headline, or empty when absent.
    #[must_use]
    pub fn headline_text(&self) -> &str {
        self.headline.as_deref().unwrap_or_default()
    }

    /// Body, or empty when absent.
    #[must_use]
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Hand-labeled ground truth for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldRecord {
    /// Page URL.
    pub url: String,
    /// Correct headline.
    #[serde(default, alias = "title")]
    pub headline: String,
    /// Correct body text.
    #[serde(default)]
    pub body: String,
    /// Correct publication date as `YYYY-MM-DD`.
    #[serde(default)]
    pub publication_date: Option<String>,
}

/// A document a batch run did not turn into an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDocument {
    /// Page URL.
    pub url: String,
    /// Why it was skipped.
    pub reason: String,
}
