//! Preprocess a corpus of raw scraped pages.
//!
//! Reads a JSON array of raw documents and writes the cleaned documents.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use news_extract::{io, preprocess_corpus, CancelFlag, Options, RawDocument};

#[derive(Parser)]
#[command(name = "preprocess_corpus", about = "Strip boilerplate and detect language for raw pages")]
struct Cli {
    /// JSON array of raw documents
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the cleaned documents
    #[arg(short, long)]
    output: PathBuf,

    /// Options file (JSON); missing fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let options = match &cli.config {
        Some(path) => Options::from_json_file(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => Options::default(),
    };

    let raw: Vec<RawDocument> = io::load_corpus(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let outcome = preprocess_corpus(&raw, &options, &CancelFlag::new())?;
    io::write_json_pretty(&cli.output, &outcome.records)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    println!(
        "Preprocessed {} documents, skipped {}",
        outcome.records.len(),
        outcome.skipped.len()
    );
    Ok(())
}
