//! Fuzzy headline matching.
//!
//! Each extracted record is bound to the gold record whose normalized
//! headline is closest by [`fuzzy_ratio`]. A binding at or above the
//! threshold makes the headline correct; the body and date of a bound
//! record are then checked on their own.
//!
//! Comparison text is lowercased ASCII, so a headline or body that is
//! absent, or normalizes to nothing, never binds and never earns credit.

use std::collections::{HashMap, HashSet};

use super::{percent_of, Accuracy, EvaluationReport, FieldAccuracy, Matcher};
use crate::normalize::normalize_for_comparison;
use crate::options::MatchStrategy;
use crate::result::{ExtractedArticle, GoldRecord};
use crate::scoring::fuzzy_ratio;

/// Gold records keyed by normalized headline, in first-seen key order.
///
/// A later record with the same key replaces the earlier one but keeps its
/// position, so lookups and tie-breaking never depend on hash order.
struct GoldIndex<'a> {
    entries: Vec<(String, &'a GoldRecord)>,
}

impl<'a> GoldIndex<'a> {
    fn build(gold: &'a [GoldRecord]) -> Self {
        let mut entries: Vec<(String, &'a GoldRecord)> = Vec::with_capacity(gold.len());
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(gold.len());
        for record in gold {
            let key = normalize_for_comparison(&record.headline);
            if key.is_empty() {
                continue;
            }
            if let Some(&at) = positions.get(&key) {
                entries[at].1 = record;
            } else {
                positions.insert(key.clone(), entries.len());
                entries.push((key, record));
            }
        }
        Self { entries }
    }

    /// Position and score of the closest key; first wins on ties.
    fn best_match(&self, headline: &str) -> Option<(usize, f64)> {
        self.entries
            .iter()
            .enumerate()
            .fold(None, |best, (at, (key, _))| {
                let score = fuzzy_ratio(headline, key);
                match best {
                    Some((_, best_score)) if best_score >= score => best,
                    _ => Some((at, score)),
                }
            })
    }
}

/// Comparison form of a field; `None` when absent or empty after normalizing.
fn comparison_text(field: Option<&str>) -> Option<String> {
    field
        .map(normalize_for_comparison)
        .filter(|text| !text.is_empty())
}

/// Date portion of a rendered date: everything before the first space or `T`.
fn date_only(rendered: &str) -> &str {
    rendered.split([' ', 'T']).next().unwrap_or(rendered)
}

fn dates_agree(extracted: Option<&str>, gold: Option<&str>) -> bool {
    extracted.map(date_only) == gold
}

/// Bind-by-headline matcher reporting per-field accuracy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyHeadlineMatcher {
    threshold: f64,
}

impl FuzzyHeadlineMatcher {
    /// Matcher accepting ratios at or above `threshold` (0-100).
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Matcher for FuzzyHeadlineMatcher {
    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::FuzzyHeadline
    }

    fn evaluate(&self, extracted: &[ExtractedArticle], gold: &[GoldRecord]) -> EvaluationReport {
        let index = GoldIndex::build(gold);
        let mut bound: HashSet<usize> = HashSet::new();
        let mut failed_urls = Vec::new();
        let (mut headline_correct, mut body_correct, mut date_correct) = (0usize, 0usize, 0usize);

        for article in extracted {
            let hit = comparison_text(article.headline.as_deref())
                .and_then(|headline| index.best_match(&headline))
                .filter(|&(at, score)| score >= self.threshold && !bound.contains(&at));
            let Some((at, _)) = hit else {
                failed_urls.push(article.url.clone());
                continue;
            };
            bound.insert(at);
            headline_correct += 1;

            let record = index.entries[at].1;
            let body_matches = comparison_text(article.body.as_deref())
                .zip(comparison_text(Some(record.body.as_str())))
                .is_some_and(|(body, gold_body)| fuzzy_ratio(&body, &gold_body) >= self.threshold);
            if body_matches {
                body_correct += 1;
            }
            if dates_agree(
                article.publication_date.as_deref(),
                record.publication_date.as_deref(),
            ) {
                date_correct += 1;
            }
        }

        let total = gold.len();
        EvaluationReport {
            strategy: MatchStrategy::FuzzyHeadline,
            total_gold: total,
            total_extracted: extracted.len(),
            matched: headline_correct,
            accuracy: Accuracy::PerField(FieldAccuracy {
                headline: percent_of(headline_correct, total),
                body: percent_of(body_correct, total),
                publication_date: percent_of(date_correct, total),
            }),
            failed_extractions: failed_urls.len(),
            failed_urls,
        }
    }
}
