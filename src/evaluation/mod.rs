//! Evaluation harness.
//!
//! Scores a batch of extracted articles against a gold-standard corpus.
//! Two interchangeable [`Matcher`] implementations decide which gold record
//! an extracted record is compared with and what counts as correct:
//!
//! - [`FuzzyHeadlineMatcher`]: binds by closest headline, reports per-field accuracy
//! - [`UrlJaccardMatcher`]: binds by exact URL, gates on word-set similarity
//!
//! [`Evaluator`] picks one from [`Options::match_strategy`]. Matchers only
//! read their inputs and keep no state, so the same inputs always produce
//! the same report. Each gold record is bound at most once, which keeps
//! every percentage within 0-100.

pub mod fuzzy;
pub mod url_jaccard;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::options::{MatchStrategy, Options};
use crate::quality::round2;
use crate::result::{ExtractedArticle, GoldRecord};

pub use fuzzy::FuzzyHeadlineMatcher;
pub use url_jaccard::UrlJaccardMatcher;

/// A matching and scoring strategy.
pub trait Matcher {
    /// Which strategy this is, recorded in the report.
    fn strategy(&self) -> MatchStrategy;

    /// Score `extracted` against `gold`.
    fn evaluate(&self, extracted: &[ExtractedArticle], gold: &[GoldRecord]) -> EvaluationReport;
}

/// Accuracy of one fuzzy-matched field set, each in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldAccuracy {
    /// Headline-correct records over total gold records.
    pub headline: f64,
    /// Body-correct records over total gold records.
    pub body: f64,
    /// Date-correct records over total gold records.
    pub publication_date: f64,
}

/// Accuracy figures; their shape depends on the strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accuracy {
    /// Per-field accuracy from fuzzy headline matching.
    PerField(FieldAccuracy),
    /// Single success rate from URL + Jaccard matching.
    Overall {
        /// Successful records over total gold records, in percent.
        accuracy_percent: f64,
    },
}

/// Result of one evaluation run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Strategy that produced the report.
    pub strategy: MatchStrategy,
    /// Gold records supplied.
    pub total_gold: usize,
    /// Extracted records supplied.
    pub total_extracted: usize,
    /// Records bound to a gold record (headline-correct) or successful (URL + Jaccard).
    pub matched: usize,
    /// Accuracy figures.
    pub accuracy: Accuracy,
    /// Number of entries in `failed_urls`.
    pub failed_extractions: usize,
    /// URLs with no gold counterpart or below the similarity threshold, in input order.
    pub failed_urls: Vec<String>,
}

impl EvaluationReport {
    /// Headline accuracy for per-field reports, overall accuracy otherwise.
    #[must_use]
    pub fn headline_or_overall_percent(&self) -> f64 {
        match self.accuracy {
            Accuracy::PerField(fields) => fields.headline,
            Accuracy::Overall { accuracy_percent } => accuracy_percent,
        }
    }

    /// Pretty JSON, stable for identical reports.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `count / total * 100`, rounded to two decimals; 0 for an empty gold set.
#[must_use]
pub fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2((count as f64 / total as f64 * 100.0).min(100.0))
}

/// Evaluation harness configured from [`Options`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    strategy: MatchStrategy,
    fuzzy_threshold: f64,
    jaccard_threshold: f64,
}

impl Evaluator {
    /// Harness using the strategy and thresholds in `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            strategy: options.match_strategy,
            fuzzy_threshold: options.fuzzy_threshold,
            jaccard_threshold: options.jaccard_threshold,
        }
    }

    /// Same thresholds, different strategy.
    #[must_use]
    pub fn with_strategy(self, strategy: MatchStrategy) -> Self {
        Self { strategy, ..self }
    }

    /// The matcher for the configured strategy.
    #[must_use]
    pub fn matcher(&self) -> Box<dyn Matcher> {
        match self.strategy {
            MatchStrategy::FuzzyHeadline => Box::new(FuzzyHeadlineMatcher::new(self.fuzzy_threshold)),
            MatchStrategy::UrlJaccard => Box::new(UrlJaccardMatcher::new(self.jaccard_threshold)),
        }
    }

    /// Score `extracted` against `gold` with the configured strategy.
    #[must_use]
    pub fn evaluate(&self, extracted: &[ExtractedArticle], gold: &[GoldRecord]) -> EvaluationReport {
        let report = self.matcher().evaluate(extracted, gold);
        info!(
            strategy = ?report.strategy,
            total_gold = report.total_gold,
            matched = report.matched,
            accuracy = report.headline_or_overall_percent(),
            failed = report.failed_extractions,
            "evaluation complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_empty_total_is_zero() {
        assert!(percent_of(0, 0).abs() < f64::EPSILON);
        assert!(percent_of(5, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn percent_of_rounds_to_two_decimals() {
        assert!((percent_of(1, 3) - 33.33).abs() < f64::EPSILON);
        assert!((percent_of(2, 3) - 66.67).abs() < f64::EPSILON);
        assert!((percent_of(3, 3) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn evaluator_follows_configured_strategy() {
        let options = Options {
            match_strategy: MatchStrategy::UrlJaccard,
            ..Options::default()
        };
        let evaluator = Evaluator::from_options(&options);
        assert_eq!(evaluator.matcher().strategy(), MatchStrategy::UrlJaccard);
        assert_eq!(
            evaluator.with_strategy(MatchStrategy::FuzzyHeadline).matcher().strategy(),
            MatchStrategy::FuzzyHeadline
        );
    }

    #[test]
    fn report_serializes_accuracy_by_shape() {
        let report = EvaluationReport {
            strategy: MatchStrategy::UrlJaccard,
            total_gold: 2,
            total_extracted: 2,
            matched: 1,
            accuracy: Accuracy::Overall { accuracy_percent: 50.0 },
            failed_extractions: 1,
            failed_urls: vec!["https://example.com/b".to_string()],
        };
        let json = report.to_json_pretty().expect("json");
        assert!(json.contains("\"strategy\": \"url_jaccard\""));
        assert!(json.contains("\"accuracy_percent\": 50.0"));
        let back: EvaluationReport = serde_json::from_str(&json).expect("parse");
        assert_eq!(back, report);
    }
}
