//! Similarity measures for matching extracted text against gold text.
//!
//! - [`fuzzy_ratio`]: Indel (insert/delete) edit-distance similarity on a 0-100 scale
//! - [`jaccard_similarity`]: overlap of lowercased word sets on a 0-1 scale
//!
//! Both are pure and symmetric.

use std::collections::HashSet;

use crate::patterns::WORD;

/// Edit-distance similarity of two strings, 0 (nothing shared) to 100
/// (identical).
///
/// Computed as `(1 - indel / (len_a + len_b)) * 100` over characters, where
/// `indel` counts insertions and deletions only. Equivalently
/// `2 * lcs / (len_a + len_b) * 100`. Two empty strings score 100; callers
/// that must not credit empty text check for it themselves.
///
/// # Examples
///
/// ```
/// use news_extract::scoring::fuzzy_ratio;
///
/// assert_eq!(fuzzy_ratio("fed raises rates", "fed raises rates"), 100.0);
/// assert!(fuzzy_ratio("fed raises rates", "fed cuts rates") < 90.0);
/// ```
#[must_use]
pub fn fuzzy_ratio(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 100.0;
    }
    let distance = rapidfuzz::distance::indel::distance(a.chars(), b.chars());
    (1.0 - distance as f64 / total as f64) * 100.0
}

/// Jaccard similarity of the lowercased word sets of two texts.
///
/// Words are `\w+` runs. If either text has no words the similarity is 0.
///
/// # Examples
///
/// ```
/// use news_extract::scoring::jaccard_similarity;
///
/// let score = jaccard_similarity("Market rally continues", "market rally ends");
/// assert!((score - 0.5).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let words_a = word_set(a);
    let words_b = word_set(b);
    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }
    let intersection = words_a.intersection(&words_b).count() as f64;
    let union = words_a.union(&words_b).count() as f64;
    intersection / union
}

/// Lowercased set of `\w+` words.
fn word_set(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
