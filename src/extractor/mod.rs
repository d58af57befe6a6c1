//! Candidate extraction engine.
//!
//! Each field has its own ordered strategy list:
//!
//! - `headline`: longest of h1, h2, Open Graph title, `<title>`; meta description as fallback
//! - `body`: longest of best `<article>`, best paragraph container, joined long paragraphs;
//!   meta description as fallback
//! - `date`: first parseable of `<time>`, `article:published_time`, numeric date scan
//! - `language`: statistical detection over the chosen body
//!
//! Three entry points share those strategies:
//!
//! - [`extract_fields`] never fails and keeps whatever it found
//! - [`extract`] requires both a headline and a body
//! - [`extract_strict`] additionally requires a minimum body word count and
//!   rejects before language detection runs
//!
//! A miss is not an error. [`extract_with_mode`] reports why a record was
//! not produced; [`extract`] and [`extract_strict`] log that reason and
//! return `None`.

pub mod body;
pub mod cascade;
pub mod date;
pub mod headline;
pub mod language;

use tracing::{debug, warn};

use crate::document::ArticleSource;
use crate::normalize::word_count;
use crate::options::Options;
use crate::result::ExtractedArticle;

pub use cascade::{Candidate, Page, Strategy, Tier};

/// Which acceptance rule an extraction applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Headline and body must both be present.
    #[default]
    Standard,
    /// Headline and body present, body at least `min_body_words` words.
    Strict,
}

/// Why no article was produced for a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionMiss {
    /// The HTML was empty or whitespace only.
    #[error("empty HTML")]
    EmptyHtml,
    /// No headline strategy produced text.
    #[error("no headline found")]
    NoHeadline,
    /// No body strategy produced text.
    #[error("no body found")]
    NoBody,
    /// The body was shorter than the strict minimum.
    #[error("body has {words} words, minimum is {minimum}")]
    BodyTooShort {
        /// Words in the extracted body.
        words: usize,
        /// Configured minimum.
        minimum: usize,
    },
}

/// Extract every field, keeping absent ones as `None`.
///
/// Language is detected on the body when there is one; if detection fails
/// the document's known language is used, then `"unknown"`.
#[must_use]
pub fn extract_fields<S: ArticleSource + ?Sized>(doc: &S, options: &Options) -> ExtractedArticle {
    let page = Page::parse(doc.html());
    let headline = headline::extract_headline(&page, options);
    let body = body::extract_body(&page, options);
    finish(doc, &page, headline, body, options)
}

/// Extract with the standard acceptance rule. Logs and returns `None` on a miss.
#[must_use]
pub fn extract<S: ArticleSource + ?Sized>(doc: &S, options: &Options) -> Option<ExtractedArticle> {
    log_miss(doc, extract_with_mode(doc, options, Mode::Standard))
}

/// Extract with the strict acceptance rule. Logs and returns `None` on a miss.
#[must_use]
pub fn extract_strict<S: ArticleSource + ?Sized>(
    doc: &S,
    options: &Options,
) -> Option<ExtractedArticle> {
    log_miss(doc, extract_with_mode(doc, options, Mode::Strict))
}

/// Extract under `mode`, reporting why nothing was produced.
///
/// # Errors
///
/// Returns the [`ExtractionMiss`] that stopped extraction. Date and
/// language never cause a miss.
pub fn extract_with_mode<S: ArticleSource + ?Sized>(
    doc: &S,
    options: &Options,
    mode: Mode,
) -> Result<ExtractedArticle, ExtractionMiss> {
    if doc.html().trim().is_empty() {
        return Err(ExtractionMiss::EmptyHtml);
    }

    let page = Page::parse(doc.html());
    let headline = headline::extract_headline(&page, options).ok_or(ExtractionMiss::NoHeadline)?;
    let body = body::extract_body(&page, options).ok_or(ExtractionMiss::NoBody)?;

    if mode == Mode::Strict {
        let words = word_count(&body.text);
        if words < options.min_body_words {
            return Err(ExtractionMiss::BodyTooShort {
                words,
                minimum: options.min_body_words,
            });
        }
    }

    Ok(finish(doc, &page, Some(headline), Some(body), options))
}

/// Fill in date and language once headline and body are settled.
fn finish<S: ArticleSource + ?Sized>(
    doc: &S,
    page: &Page<'_>,
    headline: Option<Candidate>,
    body: Option<Candidate>,
    options: &Options,
) -> ExtractedArticle {
    let publication_date = date::extract_date(page, options);
    let language = body
        .as_ref()
        .and_then(|b| language::detect(&b.text))
        .or_else(|| doc.language_hint().map(str::to_string))
        .unwrap_or_else(|| language::UNKNOWN_LANGUAGE.to_string());

    debug!(
        url = doc.url(),
        headline_strategy = headline.as_ref().map(|c| c.strategy),
        body_strategy = body.as_ref().map(|c| c.strategy),
        has_date = publication_date.is_some(),
        %language,
        "extracted article"
    );

    ExtractedArticle {
        url: doc.url().to_string(),
        source: doc.source(),
        doc_type: doc.doc_type().to_string(),
        language,
        headline: headline.map(|c| c.text),
        body: body.map(|c| c.text),
        publication_date,
    }
}

fn log_miss<S: ArticleSource + ?Sized>(
    doc: &S,
    outcome: Result<ExtractedArticle, ExtractionMiss>,
) -> Option<ExtractedArticle> {
    match outcome {
        Ok(article) => Some(article),
        Err(miss) => {
            warn!(url = doc.url(), reason = %miss, "could not extract article");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RawDocument;

    fn paragraph(words: usize) -> String {
        // Digits carry no language signal, so detection always fails on them.
        let mut text = vec!["2024"; words].join(" ");
        text.push('.');
        text
    }

    #[test]
    fn lenient_keeps_partial_fields() {
        let raw = RawDocument::new("https://example.com/a", "<h1>Only a headline</h1>");
        let article = extract_fields(&raw, &Options::default());
        assert_eq!(article.headline.as_deref(), Some("Only a headline"));
        assert!(article.body.is_none());
        assert_eq!(article.language, "unknown");
        assert_eq!(article.source, "example.com");
    }

    #[test]
    fn standard_rejects_missing_body() {
        let raw = RawDocument::new("https://example.com/a", "<h1>Only a headline</h1>");
        assert_eq!(
            extract_with_mode(&raw, &Options::default(), Mode::Standard),
            Err(ExtractionMiss::NoBody)
        );
        assert!(extract(&raw, &Options::default()).is_none());
    }

    #[test]
    fn standard_rejects_missing_headline() {
        let html = format!("<article>{}</article>", paragraph(40));
        let raw = RawDocument::new("https://example.com/a", html);
        assert_eq!(
            extract_with_mode(&raw, &Options::default(), Mode::Standard),
            Err(ExtractionMiss::NoHeadline)
        );
    }

    #[test]
    fn empty_html_is_a_miss() {
        let raw = RawDocument::new("https://example.com/a", "  ");
        assert_eq!(
            extract_with_mode(&raw, &Options::default(), Mode::Strict),
            Err(ExtractionMiss::EmptyHtml)
        );
    }

    #[test]
    fn strict_enforces_minimum_words() {
        let html = format!("<h1>Headline</h1><article>{}</article>", paragraph(30));
        let raw = RawDocument::new("https://example.com/a", html);

        assert!(extract_with_mode(&raw, &Options::default(), Mode::Standard).is_ok());
        assert_eq!(
            extract_with_mode(&raw, &Options::default(), Mode::Strict),
            Err(ExtractionMiss::BodyTooShort { words: 30, minimum: 50 })
        );

        let relaxed = Options {
            min_body_words: 30,
            ..Options::default()
        };
        assert!(extract_strict(&raw, &relaxed).is_some());
    }

    #[test]
    fn language_falls_back_to_hint_then_unknown() {
        let html = format!("<h1>Headline</h1><article>{}</article>", paragraph(30));
        let hinted = RawDocument {
            known_language: Some("fr".to_string()),
            ..RawDocument::new("https://example.com/a", html.clone())
        };
        let article = extract(&hinted, &Options::default()).expect("article");
        assert_eq!(article.language, "fr");

        let plain = RawDocument::new("https://example.com/a", html);
        let article = extract(&plain, &Options::default()).expect("article");
        assert_eq!(article.language, "unknown");
    }
}
