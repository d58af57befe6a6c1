//! Quality gate and corpus health.
//!
//! A coarse good/partial/fail classifier for reporting on a batch. It does
//! not reject records; strict extraction does that.

use serde::{Deserialize, Serialize};

use crate::normalize::word_count;
use crate::options::Options;
use crate::result::ExtractedArticle;

/// Health bucket of one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    /// Neither check passed.
    Fail,
    /// Exactly one check passed.
    Partial,
    /// Both checks passed.
    Good,
}

impl Quality {
    /// Bucket for a count of passing checks.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Self::Fail,
            1 => Self::Partial,
            _ => Self::Good,
        }
    }
}

/// The two thresholds of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityGate {
    /// Headline must have more characters than this.
    pub min_headline_chars: usize,
    /// Body must have more words than this.
    pub min_body_words: usize,
}

impl Default for QualityGate {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

impl QualityGate {
    /// Gate configured from `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            min_headline_chars: options.quality_min_headline_chars,
            min_body_words: options.quality_min_body_words,
        }
    }

    /// Number of checks passed: 0, 1 or 2.
    #[must_use]
    pub fn score(&self, article: &ExtractedArticle) -> u8 {
        let headline_ok = article.headline_text().chars().count() > self.min_headline_chars;
        let body_ok = word_count(article.body_text()) > self.min_body_words;
        u8::from(headline_ok) + u8::from(body_ok)
    }

    /// Bucket for one article.
    #[must_use]
    pub fn classify(&self, article: &ExtractedArticle) -> Quality {
        Quality::from_score(self.score(article))
    }

    /// Aggregate bucket counts over a batch.
    #[must_use]
    pub fn assess<'a, I>(&self, articles: I) -> CorpusHealth
    where
        I: IntoIterator<Item = &'a ExtractedArticle>,
    {
        articles
            .into_iter()
            .fold(CorpusHealth::default(), |mut health, article| {
                health.record(self.classify(article));
                health
            })
    }
}

/// Bucket counts for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusHealth {
    /// Articles assessed.
    pub total: usize,
    /// Articles passing both checks.
    pub good: usize,
    /// Articles passing one check.
    pub partial: usize,
    /// Articles passing neither check.
    pub fail: usize,
}

impl CorpusHealth {
    /// Count one article.
    pub fn record(&mut self, quality: Quality) {
        self.total += 1;
        match quality {
            Quality::Good => self.good += 1,
            Quality::Partial => self.partial += 1,
            Quality::Fail => self.fail += 1,
        }
    }

    /// Percentage of `total` in the given bucket; 0 for an empty batch.
    #[must_use]
    pub fn percent(&self, quality: Quality) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let count = match quality {
            Quality::Good => self.good,
            Quality::Partial => self.partial,
            Quality::Fail => self.fail,
        };
        count as f64 / self.total as f64 * 100.0
    }

    /// Counts with rounded percentages, for reports.
    #[must_use]
    pub fn summary(&self) -> HealthSummary {
        HealthSummary {
            total: self.total,
            good: self.good,
            partial: self.partial,
            fail: self.fail,
            good_percent: round2(self.percent(Quality::Good)),
            partial_percent: round2(self.percent(Quality::Partial)),
            fail_percent: round2(self.percent(Quality::Fail)),
        }
    }
}

/// Serializable corpus health with percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSummary {
    /// Articles assessed.
    pub total: usize,
    /// Articles passing both checks.
    pub good: usize,
    /// Articles passing one check.
    pub partial: usize,
    /// Articles passing neither check.
    pub fail: usize,
    /// `good / total`, percent.
    pub good_percent: f64,
    /// `partial / total`, percent.
    pub partial_percent: f64,
    /// `fail / total`, percent.
    pub fail_percent: f64,
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
