//! Score extracted articles against a gold corpus.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use news_extract::{io, Accuracy, Evaluator, ExtractedArticle, GoldRecord, MatchStrategy, Options};

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Bind by closest headline, report per-field accuracy
    FuzzyHeadline,
    /// Bind by URL, gate on word-set similarity
    UrlJaccard,
}

impl From<StrategyArg> for MatchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::FuzzyHeadline => Self::FuzzyHeadline,
            StrategyArg::UrlJaccard => Self::UrlJaccard,
        }
    }
}

#[derive(Parser)]
#[command(name = "evaluate_corpus", about = "Measure extraction accuracy against hand-labeled pages")]
struct Cli {
    /// JSON array of extracted articles
    #[arg(short, long)]
    extracted: PathBuf,

    /// JSON array of gold records
    #[arg(short, long)]
    gold: PathBuf,

    /// Where to write the report; printed to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Matching strategy; overrides the options file
    #[arg(short, long, value_enum)]
    strategy: Option<StrategyArg>,

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
    let mut options = match &cli.config {
        Some(path) => Options::from_json_file(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => Options::default(),
    };
    if let Some(strategy) = cli.strategy {
        options.match_strategy = strategy.into();
    }

    let extracted: Vec<ExtractedArticle> = io::load_corpus(&cli.extracted)
        .with_context(|| format!("reading {}", cli.extracted.display()))?;
    let gold: Vec<GoldRecord> = io::load_corpus(&cli.gold)
        .with_context(|| format!("reading {}", cli.gold.display()))?;

    let report = Evaluator::from_options(&options).evaluate(&extracted, &gold);

    match report.accuracy {
        Accuracy::PerField(fields) => {
            eprintln!("Headline Accuracy: {}%", fields.headline);
            eprintln!("Body Accuracy: {}%", fields.body);
            eprintln!("Publication Date Accuracy: {}%", fields.publication_date);
        }
        Accuracy::Overall { accuracy_percent } => {
            eprintln!(
                "Successful: {}/{} ({accuracy_percent}%)",
                report.matched, report.total_gold
            );
        }
    }
    eprintln!("Failed: {}", report.failed_extractions);

    match &cli.output {
        Some(path) => io::write_json_pretty(path, &report)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{}", report.to_json_pretty()?),
    }
    Ok(())
}
