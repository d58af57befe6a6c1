//! Configuration options for extraction, quality reporting and evaluation.
//!
//! `Options` is a plain struct with public fields. Every value the
//! pipeline compares against lives here; nothing is hardcoded in the
//! strategies themselves.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Matching strategy used by the evaluation harness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Bind extracted records to gold records by fuzzy headline similarity.
    #[default]
    FuzzyHeadline,
    /// Bind by exact URL, then gate on Jaccard word-set similarity.
    UrlJaccard,
}

/// Configuration options for the whole pipeline.
///
/// A JSON config file only needs to name the fields it overrides.
///
/// # Example
///
/// ```rust
/// use news_extract::Options;
///
/// let options = Options {
///     min_body_words: 80,
///     fuzzy_threshold: 85.0,
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Tags whose whole subtree the boilerplate stripper removes.
    ///
    /// Default: script, style, header, footer, nav, aside, form, iframe
    pub boilerplate_tags: Vec<String>,

    /// Case-insensitive substrings that mark a class or id as advertising.
    ///
    /// Default: `["ad", "promo", "sponsor"]`
    pub ad_patterns: Vec<String>,

    /// Minimum characters for an `article` or container body candidate.
    ///
    /// Default: `100`
    pub min_block_chars: usize,

    /// A paragraph joins the flat body candidate only when longer than this.
    ///
    /// Default: `50`
    pub min_paragraph_chars: usize,

    /// Minimum body word count accepted by strict extraction.
    ///
    /// Default: `50`
    pub min_body_words: usize,

    /// Quality gate: headline must be longer than this many characters.
    ///
    /// Default: `15`
    pub quality_min_headline_chars: usize,

    /// Quality gate: body must have more than this many words.
    ///
    /// Default: `100`
    pub quality_min_body_words: usize,

    /// Which matching strategy the evaluation harness runs.
    ///
    /// Default: `MatchStrategy::FuzzyHeadline`
    pub match_strategy: MatchStrategy,

    /// Fuzzy ratio (0-100) a headline or body must reach to count as correct.
    ///
    /// Default: `90.0`
    pub fuzzy_threshold: f64,

    /// Jaccard similarity (0-1) both title and body must reach.
    ///
    /// Default: `0.7`
    pub jaccard_threshold: f64,

    /// Worker threads for batch runs. `None` uses the rayon default.
    ///
    /// Default: `None`
    pub max_workers: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            boilerplate_tags: [
                "script", "style", "header", "footer", "nav", "aside", "form", "iframe",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            ad_patterns: ["ad", "promo", "sponsor"].into_iter().map(String::from).collect(),
            min_block_chars: 100,
            min_paragraph_chars: 50,
            min_body_words: 50,
            quality_min_headline_chars: 15,
            quality_min_body_words: 100,
            match_strategy: MatchStrategy::FuzzyHeadline,
            fuzzy_threshold: 90.0,
            jaccard_threshold: 0.7,
            max_workers: None,
        }
    }
}

impl Options {
    /// Load options from a JSON file. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` or `Error::Json` if the file cannot be read or
    /// parsed, and `Error::InvalidOptions` if a value is out of range.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let options: Self = serde_json::from_str(&content)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that thresholds are within their ranges.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOptions` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.fuzzy_threshold) {
            return Err(Error::InvalidOptions(format!(
                "fuzzy_threshold must be within 0..=100, got {}",
                self.fuzzy_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.jaccard_threshold) {
            return Err(Error::InvalidOptions(format!(
                "jaccard_threshold must be within 0..=1, got {}",
                self.jaccard_threshold
            )));
        }
        if self.max_workers == Some(0) {
            return Err(Error::InvalidOptions("max_workers must be at least 1".to_string()));
        }
        if let Some(tag) = self.boilerplate_tags.iter().find(|t| !is_tag_name(t)) {
            return Err(Error::InvalidOptions(format!(
                "boilerplate_tags must be plain tag names, got {tag:?}"
            )));
        }
        if self.ad_patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(Error::InvalidOptions(
                "ad_patterns must not contain empty patterns".to_string(),
            ));
        }
        Ok(())
    }
}

/// A bare HTML tag name: an ASCII letter followed by letters, digits or `-`.
pub(crate) fn is_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}
