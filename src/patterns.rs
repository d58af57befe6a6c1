//! Compiled regex patterns shared by the normalizer, extractors and scorers.
//!
//! All patterns are compiled once using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Any run of Unicode whitespace, including non-breaking spaces.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Runs of non-ASCII characters, dropped from comparison text.
pub static NON_ASCII: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\x00-\x7F]+").expect("NON_ASCII regex"));

/// Numeric day/month/year token such as `1/5/2023` or `01-05-23`.
pub static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})\b").expect("NUMERIC_DATE regex")
});

/// English ordinal suffix after a day number ("1st", "22nd").
pub static ORDINAL_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})(st|nd|rd|th)\b").expect("ORDINAL_SUFFIX regex")
});

/// Label words that often precede a date in bylines.
pub static DATE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(published|posted|updated|last updated|date)\s*(on)?\s*:?\s*")
        .expect("DATE_LABEL regex")
});

/// Word tokens for set similarity.
pub static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("WORD regex"));
