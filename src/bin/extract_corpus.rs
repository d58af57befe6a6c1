//! Extract articles from a corpus and report its health.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use news_extract::{extract_corpus, io, CancelFlag, Mode, Options, QualityGate, RawDocument};

#[derive(Parser)]
#[command(name = "extract_corpus", about = "Extract headline, body, date and language from pages")]
struct Cli {
    /// JSON array of raw or cleaned documents
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the extracted articles
    #[arg(short, long)]
    output: PathBuf,

    /// Where to write skipped documents and their reasons
    #[arg(long)]
    skipped: Option<PathBuf>,

    /// Reject bodies shorter than the configured minimum word count
    #[arg(long)]
    strict: bool,

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
    let mode = if cli.strict { Mode::Strict } else { Mode::Standard };

    // Cleaned documents deserialize as raw ones; the extra fields are ignored.
    let docs: Vec<RawDocument> = io::load_corpus(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let outcome = extract_corpus(&docs, &options, mode, &CancelFlag::new())?;

    io::write_json_pretty(&cli.output, &outcome.records)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    if let Some(path) = &cli.skipped {
        io::write_json_pretty(path, &outcome.skipped)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    let health = QualityGate::from_options(&options)
        .assess(&outcome.records)
        .summary();
    println!(
        "Extracted {} articles, skipped {}",
        outcome.records.len(),
        outcome.skipped.len()
    );
    println!("Total: {}", health.total);
    println!("Good: {} ({:.2}%)", health.good, health.good_percent);
    println!("Partial: {} ({:.2}%)", health.partial, health.partial_percent);
    println!("Fail: {} ({:.2}%)", health.fail, health.fail_percent);
    Ok(())
}
