//! URL + Jaccard matching.
//!
//! Each extracted record is bound to the gold record with the same URL. The
//! record succeeds when both its headline and its body reach the Jaccard
//! threshold against the gold text.

use std::collections::{HashMap, HashSet};

use super::{percent_of, Accuracy, EvaluationReport, Matcher};
use crate::options::MatchStrategy;
use crate::result::{ExtractedArticle, GoldRecord};
use crate::scoring::jaccard_similarity;

/// Bind-by-URL matcher reporting a single success rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UrlJaccardMatcher {
    threshold: f64,
}

impl UrlJaccardMatcher {
    /// Matcher accepting similarities at or above `threshold` (0-1).
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    fn passes(&self, article: &ExtractedArticle, record: &GoldRecord) -> bool {
        let (Some(headline), Some(body)) = (article.headline.as_deref(), article.body.as_deref())
        else {
            return false;
        };
        jaccard_similarity(headline, &record.headline) >= self.threshold
            && jaccard_similarity(body, &record.body) >= self.threshold
    }
}

impl Matcher for UrlJaccardMatcher {
    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::UrlJaccard
    }

    fn evaluate(&self, extracted: &[ExtractedArticle], gold: &[GoldRecord]) -> EvaluationReport {
        // Later duplicates replace earlier ones.
        let by_url: HashMap<&str, &GoldRecord> =
            gold.iter().map(|record| (record.url.as_str(), record)).collect();
        let mut bound: HashSet<&str> = HashSet::new();
        let mut failed_urls = Vec::new();
        let mut successful = 0usize;

        for article in extracted {
            let url = article.url.as_str();
            let ok = match by_url.get(url) {
                Some(record) if !bound.contains(url) => {
                    bound.insert(url);
                    self.passes(article, record)
                }
                _ => false,
            };
            if ok {
                successful += 1;
            } else {
                failed_urls.push(article.url.clone());
            }
        }

        EvaluationReport {
            strategy: MatchStrategy::UrlJaccard,
            total_gold: gold.len(),
            total_extracted: extracted.len(),
            matched: successful,
            accuracy: Accuracy::Overall {
                accuracy_percent: percent_of(successful, gold.len()),
            },
            failed_extractions: failed_urls.len(),
            failed_urls,
        }
    }
}
