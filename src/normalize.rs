//! Text normalization.
//!
//! Two variants: [`normalize`] for anything that gets stored, and
//! [`normalize_for_comparison`] for matching extracted text against gold
//! text. Only the comparison variant is lossy.

use unicode_normalization::UnicodeNormalization;

use crate::patterns::{NON_ASCII, WHITESPACE_NORMALIZE};

/// Canonicalize Unicode (NFKC), collapse whitespace runs to one ASCII
/// space and trim.
///
/// Non-Latin scripts are preserved. The function is idempotent.
///
/// # Examples
///
/// ```
/// use news_extract::normalize::normalize;
///
/// assert_eq!(normalize("  Fed\u{a0}\u{a0}raises \n rates "), "Fed raises rates");
/// assert_eq!(normalize("ﬁnance"), "finance");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let composed: String = text.nfkc().collect();
    WHITESPACE_NORMALIZE
        .replace_all(&composed, " ")
        .trim()
        .to_string()
}

/// Normalize for comparison only: [`normalize`], then lowercase and drop
/// every non-ASCII character.
///
/// Never use this on text that is persisted.
#[must_use]
pub fn normalize_for_comparison(text: &str) -> String {
    let lowered = normalize(text).to_lowercase();
    let ascii = NON_ASCII.replace_all(&lowered, "");
    WHITESPACE_NORMALIZE.replace_all(&ascii, " ").trim().to_string()
}

/// Number of whitespace-separated words.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_all_whitespace_kinds() {
        assert_eq!(normalize("a \t\n b\u{a0}c\u{2003}d"), "a b c d");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(normalize("\n\n  hello  \r\n"), "hello");
    }

    #[test]
    fn applies_nfkc() {
        // Full-width digits and ligatures compose to their compatibility forms.
        assert_eq!(normalize("２０２３ ﬀ"), "2023 ff");
    }

    #[test]
    fn keeps_non_latin_text() {
        assert_eq!(normalize("  Привет,  мир  "), "Привет, мир");
        assert_eq!(normalize("東京 の ニュース"), "東京 の ニュース");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "  Fed\u{a0}raises  rates ",
            "ﬁ\u{2003}\u{a0}x",
            "Ａ　Ｂ",
            "",
            "   ",
            "e\u{301} café",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn comparison_lowercases_and_strips_non_ascii() {
        assert_eq!(normalize_for_comparison("Fed Raises Rates Again"), "fed raises rates again");
        assert_eq!(normalize_for_comparison("Café  — Crème"), "caf crme");
        assert_eq!(normalize_for_comparison("日本 news"), "news");
    }

    #[test]
    fn comparison_of_empty_is_empty() {
        assert_eq!(normalize_for_comparison(""), "");
        assert_eq!(normalize_for_comparison("東京"), "");
    }

    #[test]
    fn counts_words() {
        assert_eq!(word_count("one  two\tthree\nfour"), 4);
        assert_eq!(word_count("   "), 0);
    }
}
