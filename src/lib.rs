//! # news-extract
//!
//! News article extraction and extraction-accuracy evaluation.
//!
//! Given the raw HTML of a news page, this library strips boilerplate,
//! picks a headline, a body and a publication date by running an ordered
//! list of strategies per field, and detects the body's language. A
//! separate harness scores a batch of extracted articles against a
//! hand-labeled gold corpus.
//!
//! ## Quick Start
//!
//! ```rust
//! use news_extract::{extract, Options, RawDocument};
//!
//! let html = r#"<html><head><title>Site</title></head><body>
//! <h1>Central bank holds rates steady</h1>
//! <article><p>The central bank left its benchmark rate unchanged on Wednesday,
//! pointing to slowing inflation and a cooling labour market.</p></article>
//! </body></html>"#;
//!
//! let doc = RawDocument::new("https://news.example.com/rates", html);
//! let article = extract(&doc, &Options::default()).expect("article");
//! assert_eq!(article.headline.as_deref(), Some("Central bank holds rates steady"));
//! assert_eq!(article.source, "news.example.com");
//! ```
//!
//! ## Evaluation
//!
//! ```rust
//! use news_extract::{Evaluator, ExtractedArticle, GoldRecord, Options};
//!
//! let extracted = vec![ExtractedArticle {
//!     url: "https://news.example.com/fed".into(),
//!     source: "news.example.com".into(),
//!     doc_type: "news".into(),
//!     language: "en".into(),
//!     headline: Some("Fed Raises Rates Again".into()),
//!     body: Some("The Federal Reserve raised rates.".into()),
//!     publication_date: Some("2023-05-01 14:30:00".into()),
//! }];
//! let gold = vec![GoldRecord {
//!     url: "https://news.example.com/fed".into(),
//!     headline: "fed raises rates again".into(),
//!     body: "The Federal Reserve raised rates.".into(),
//!     publication_date: Some("2023-05-01".into()),
//! }];
//!
//! let report = Evaluator::from_options(&Options::default()).evaluate(&extracted, &gold);
//! assert_eq!(report.matched, 1);
//! assert!(report.failed_urls.is_empty());
//! ```
//!
//! ## Features
//!
//! - **Boilerplate Removal**: structural tags and ad-like class/id patterns
//! - **Candidate Extraction**: longest-wins headline and body, first-hit date
//! - **Quality Gate**: good/partial/fail corpus health
//! - **Evaluation**: fuzzy headline matching or URL + Jaccard matching
//! - **Batch Processing**: parallel, order-preserving, cancellable

mod error;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Text normalization and word counting.
pub mod normalize;

/// Boilerplate stripping.
pub mod boilerplate;

/// Raw and cleaned documents, and preprocessing.
pub mod document;

/// Per-field extraction strategies and extraction modes.
pub mod extractor;

/// Corpus health classification.
pub mod quality;

/// Fuzzy ratio and Jaccard similarity.
pub mod scoring;

/// Evaluation harness and reports.
pub mod evaluation;

/// Parallel corpus processing.
pub mod batch;

/// JSON corpus files.
pub mod io;

// Public API - re-exports
pub use batch::{extract_corpus, preprocess_corpus, BatchOutcome, CancelFlag};
pub use document::{preprocess, ArticleSource, CleanedDocument, RawDocument};
pub use error::{Error, Result};
pub use evaluation::{Accuracy, EvaluationReport, Evaluator, FieldAccuracy, Matcher};
pub use extractor::{extract, extract_fields, extract_strict, extract_with_mode, ExtractionMiss, Mode};
pub use options::{MatchStrategy, Options};
pub use quality::{CorpusHealth, HealthSummary, Quality, QualityGate};
pub use result::{ExtractedArticle, GoldRecord, SkippedDocument};
