//! Command line argument parsing for the typogen CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// typogen - synthetic typo generation for retrieval queries
#[derive(Parser, Debug, Clone)]
#[command(name = "typogen")]
#[command(about = "Generate synthetically misspelled variants of retrieval queries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TypogenArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TypogenArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Corrupt a tab-separated query file
    Corrupt(CorruptArgs),

    /// Print corrupted variants of a single query
    Sample(SampleArgs),
}

/// Arguments for batch corruption
#[derive(Parser, Debug, Clone)]
pub struct CorruptArgs {
    /// Input query file (queryID<TAB>queryText, one per line)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output query file, same format
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Policy definition file (JSON); flags below override its fields
    #[arg(long, value_name = "POLICY_FILE")]
    pub policy_file: Option<PathBuf>,

    /// Probability in [0, 1] that a query is corrupted
    #[arg(short, long)]
    pub probability: Option<f64>,

    /// Random seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Words shorter than this are never edited
    #[arg(long)]
    pub min_word_length: Option<usize>,
}

/// Arguments for sampling corrupted variants of one query
#[derive(Parser, Debug, Clone)]
pub struct SampleArgs {
    /// The query text to corrupt
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Number of variants to generate
    #[arg(short = 'n', long, default_value = "5")]
    pub count: usize,

    /// Policy definition file (JSON); flags below override its fields
    #[arg(long, value_name = "POLICY_FILE")]
    pub policy_file: Option<PathBuf>,

    /// Probability in [0, 1] that a draw corrupts the query (default 1)
    #[arg(short, long)]
    pub probability: Option<f64>,

    /// Random seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Words shorter than this are never edited
    #[arg(long)]
    pub min_word_length: Option<usize>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_args() {
        let args = TypogenArgs::try_parse_from([
            "typogen",
            "corrupt",
            "queries.tsv",
            "queries.typo.tsv",
            "--probability",
            "1.0",
            "--seed",
            "7",
        ])
        .unwrap();

        if let Command::Corrupt(corrupt_args) = args.command {
            assert_eq!(corrupt_args.input, PathBuf::from("queries.tsv"));
            assert_eq!(corrupt_args.probability, Some(1.0));
            assert_eq!(corrupt_args.seed, Some(7));
            assert_eq!(corrupt_args.min_word_length, None);
        } else {
            panic!("expected corrupt command");
        }
    }

    #[test]
    fn test_sample_args_defaults() {
        let args = TypogenArgs::try_parse_from(["typogen", "sample", "pizza recipe"]).unwrap();

        if let Command::Sample(sample_args) = args.command {
            assert_eq!(sample_args.query, "pizza recipe");
            assert_eq!(sample_args.count, 5);
        } else {
            panic!("expected sample command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = TypogenArgs::try_parse_from(["typogen", "sample", "q"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = TypogenArgs::try_parse_from(["typogen", "-vv", "sample", "q"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = TypogenArgs::try_parse_from(["typogen", "--quiet", "sample", "q"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            TypogenArgs::try_parse_from(["typogen", "--format", "json", "sample", "q"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
