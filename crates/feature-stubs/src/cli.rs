//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Parse files from [.feature] format into [.e2e.js] format
#[derive(Parser, Debug, Clone)]
#[command(name = "feature-stubs")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Paths to work with
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Parse all US*.feature files in the specified directory
    #[arg(short = 'd', long = "dir")]
    pub directory: bool,

    /// Name of the output directory created next to the inputs
    #[arg(long, default_value = "step_definitions")]
    pub out_dir: String,

    /// Report format
    #[arg(long, default_value = "human")]
    pub output: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Format of the run report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// One JSON object per line
    Json,
}
