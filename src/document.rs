//! Input documents and the preprocessing stage.
//!
//! A [`RawDocument`] comes from the fetch collaborator untouched. Preprocessing
//! turns it into a [`CleanedDocument`]: boilerplate-stripped, normalized text
//! for display or later NLP, with the raw HTML kept verbatim because the
//! extraction strategies need the structural tags.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::boilerplate;
use crate::error::{Error, Result};
use crate::extractor::language;
use crate::options::Options;

/// Document type used when a record does not declare one.
pub const UNKNOWN_DOC_TYPE: &str = "unknown";

/// A fetched page as delivered by the upstream collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    /// Page URL.
    pub url: String,

    /// Publisher identifier; derived from the URL host when absent.
    #[serde(default)]
    pub source: Option<String>,

    /// Raw HTML as fetched.
    #[serde(default)]
    pub html: String,

    /// Corpus split or document category (e.g. "training", "testing").
    #[serde(default = "unknown_doc_type", alias = "type")]
    pub doc_type: String,

    /// Language already known for this page, if any.
    #[serde(default, alias = "language")]
    pub known_language: Option<String>,
}

/// A preprocessed document: raw HTML plus boilerplate-free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedDocument {
    /// Page URL.
    pub url: String,
    /// Publisher identifier, never empty.
    pub source: String,
    /// Raw HTML, kept verbatim for extraction.
    pub html: String,
    /// Boilerplate-stripped, normalized text.
    pub clean_text: String,
    /// Corpus split or document category.
    #[serde(alias = "type")]
    pub doc_type: String,
    /// Language of the page, or `"unknown"`.
    pub language: String,
}

fn unknown_doc_type() -> String {
    UNKNOWN_DOC_TYPE.to_string()
}

/// Anything the extraction engine can run on.
///
/// Both raw and cleaned documents qualify; extraction only needs the HTML
/// and the identifying fields carried through to the output.
pub trait ArticleSource {
    /// Page URL.
    fn url(&self) -> &str;
    /// Publisher identifier.
    fn source(&self) -> String;
    /// Raw HTML.
    fn html(&self) -> &str;
    /// Corpus split or document category.
    fn doc_type(&self) -> &str;
    /// Language known before extraction, used when detection on the body fails.
    fn language_hint(&self) -> Option<&str>;
}

impl RawDocument {
    /// Create a document with no declared source, type or language.
    #[must_use]
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            source: None,
            html: html.into(),
            doc_type: unknown_doc_type(),
            known_language: None,
        }
    }

    /// True if the HTML is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.html.trim().is_empty()
    }
}

impl ArticleSource for RawDocument {
    fn url(&self) -> &str {
        &self.url
    }

    fn source(&self) -> String {
        self.source
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map_or_else(|| source_from_url(&self.url), str::to_string)
    }

    fn html(&self) -> &str {
        &self.html
    }

    fn doc_type(&self) -> &str {
        &self.doc_type
    }

    fn language_hint(&self) -> Option<&str> {
        self.known_language.as_deref().filter(|l| !l.trim().is_empty())
    }
}

impl ArticleSource for CleanedDocument {
    fn url(&self) -> &str {
        &self.url
    }

    fn source(&self) -> String {
        self.source.clone()
    }

    fn html(&self) -> &str {
        &self.html
    }

    fn doc_type(&self) -> &str {
        &self.doc_type
    }

    fn language_hint(&self) -> Option<&str> {
        Some(self.language.as_str()).filter(|l| *l != language::UNKNOWN_LANGUAGE)
    }
}

/// Host of `url`, or the URL itself when it has no parseable host.
#[must_use]
pub fn source_from_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

/// Preprocess a raw document.
///
/// The cleaned text is boilerplate-stripped and normalized. Language is the
/// document's known language if it has one, otherwise detected from the
/// cleaned text, otherwise `"unknown"`.
///
/// # Errors
///
/// Returns `Error::MalformedInput` when the HTML is empty. Batch callers
/// record this as a skip.
pub fn preprocess(raw: &RawDocument, options: &Options) -> Result<CleanedDocument> {
    if raw.is_blank() {
        return Err(Error::MalformedInput {
            url: raw.url.clone(),
            reason: "empty HTML".to_string(),
        });
    }

    let clean_text = boilerplate::clean_text(&raw.html, options);
    let language = raw
        .language_hint()
        .map(str::to_string)
        .unwrap_or_else(|| language::detect_or_unknown(&clean_text));
    debug!(url = %raw.url, chars = clean_text.len(), %language, "preprocessed document");

    Ok(CleanedDocument {
        url: raw.url.clone(),
        source: raw.source(),
        html: raw.html.clone(),
        clean_text,
        doc_type: raw.doc_type.clone(),
        language,
    })
}
