//! dedup-score CLI
//!
//! Compares two brief records stored as JSON files and prints the per-field
//! score vector as JSON.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dedup_score::config::DEFAULT_SCORE;
use dedup_score::{BriefRecord, EditionDictionary, RecordComparator, ScoringConfig};

#[derive(Parser, Debug)]
#[command(name = "dedup-score", version, about = "Score the similarity of two brief records")]
struct Cli {
    /// First brief record (JSON)
    record1: PathBuf,

    /// Second brief record (JSON)
    record2: PathBuf,

    /// Floor for non-empty comparisons; half of it scores a one-sided value
    #[arg(long, default_value_t = DEFAULT_SCORE)]
    default_score: f64,

    /// Edition dictionary replacing the embedded one (JSON object of expression: number)
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Pretty-print the scores
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ScoringConfig::with_default_score(cli.default_score)?;
    let dictionary = match &cli.dictionary {
        Some(path) => Arc::new(EditionDictionary::from_json(&std::fs::read_to_string(path)?)?),
        None => EditionDictionary::shared(),
    };
    let comparator = RecordComparator::with_dictionary(config, dictionary)?;

    let record1 = read_record(&cli.record1)?;
    let record2 = read_record(&cli.record2)?;
    tracing::debug!(record1 = %cli.record1.display(), record2 = %cli.record2.display(), "comparing records");

    let scores = comparator.compare(&record1, &record2);
    let output = if cli.pretty {
        serde_json::to_string_pretty(&scores)?
    } else {
        serde_json::to_string(&scores)?
    };
    println!("{}", output);

    Ok(())
}

fn read_record(path: &Path) -> dedup_score::Result<BriefRecord> {
    let json = std::fs::read_to_string(path)?;
    BriefRecord::from_json(&json)
}
