//! Parallel corpus processing.
//!
//! Documents are independent, so a batch is a `rayon` parallel map. Output
//! keeps input order regardless of which worker finished first. A document
//! that cannot be processed becomes a [`SkippedDocument`] and never stops
//! the batch.
//!
//! Cancellation is cooperative: once a [`CancelFlag`] is raised no new
//! document is started, and the batch returns [`Error::Cancelled`] instead
//! of its partial output.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::document::{preprocess, ArticleSource, CleanedDocument, RawDocument};
use crate::error::{Error, Result};
use crate::extractor::{extract_with_mode, Mode};
use crate::options::Options;
use crate::result::{ExtractedArticle, SkippedDocument};

/// Shared cancellation switch for a batch run.
///
/// Clones share the same flag, so one can be handed to a signal handler
/// while the batch holds another.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// A flag that is not raised.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop starting new documents.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Records produced by a batch, plus the documents that produced none.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome<T> {
    /// Produced records, in input order.
    pub records: Vec<T>,
    /// Documents that produced no record, in input order.
    pub skipped: Vec<SkippedDocument>,
}

/// Preprocess every raw document. Empty documents are skipped.
///
/// # Errors
///
/// Returns `Error::InvalidOptions` for bad options, `Error::WorkerPool` if a
/// bounded pool cannot be built, and `Error::Cancelled` if `cancel` was
/// raised before the batch finished.
pub fn preprocess_corpus(
    docs: &[RawDocument],
    options: &Options,
    cancel: &CancelFlag,
) -> Result<BatchOutcome<CleanedDocument>> {
    run_batch("preprocess", docs, options, cancel, |raw| {
        preprocess(raw, options).map_err(|err| {
            let reason = match err {
                Error::MalformedInput { reason, .. } => reason,
                other => other.to_string(),
            };
            warn!(url = %raw.url, %reason, "skipping document");
            SkippedDocument {
                url: raw.url.clone(),
                reason,
            }
        })
    })
}

/// Extract an article from every document under `mode`. Misses are skipped.
///
/// # Errors
///
/// Same conditions as [`preprocess_corpus`].
pub fn extract_corpus<D>(
    docs: &[D],
    options: &Options,
    mode: Mode,
    cancel: &CancelFlag,
) -> Result<BatchOutcome<ExtractedArticle>>
where
    D: ArticleSource + Sync,
{
    run_batch("extract", docs, options, cancel, |doc| {
        extract_with_mode(doc, options, mode).map_err(|miss| {
            warn!(url = doc.url(), reason = %miss, "could not extract article");
            SkippedDocument {
                url: doc.url().to_string(),
                reason: miss.to_string(),
            }
        })
    })
}

fn run_batch<D, T, F>(
    stage: &'static str,
    docs: &[D],
    options: &Options,
    cancel: &CancelFlag,
    work: F,
) -> Result<BatchOutcome<T>>
where
    D: Sync,
    T: Send,
    F: Fn(&D) -> std::result::Result<T, SkippedDocument> + Sync,
{
    options.validate()?;

    let total = docs.len();
    let completed = AtomicUsize::new(0);
    let run = || -> Vec<Option<std::result::Result<T, SkippedDocument>>> {
        docs.par_iter()
            .map(|doc| {
                if cancel.is_cancelled() {
                    return None;
                }
                let outcome = work(doc);
                completed.fetch_add(1, Ordering::Relaxed);
                Some(outcome)
            })
            .collect()
    };

    let results = match options.max_workers {
        Some(workers) => rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()?
            .install(run),
        None => run(),
    };

    let completed = completed.into_inner();
    if cancel.is_cancelled() {
        warn!(stage, completed, total, "batch cancelled, discarding partial output");
        return Err(Error::Cancelled { completed, total });
    }

    let mut outcome = BatchOutcome {
        records: Vec::with_capacity(total),
        skipped: Vec::new(),
    };
    for result in results.into_iter().flatten() {
        match result {
            Ok(record) => outcome.records.push(record),
            Err(skip) => outcome.skipped.push(skip),
        }
    }

    info!(
        stage,
        total,
        produced = outcome.records.len(),
        skipped = outcome.skipped.len(),
        "batch complete"
    );
    Ok(outcome)
}
