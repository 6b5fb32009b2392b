//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ringtab: finite ring table workbench
#[derive(Parser)]
#[command(name = "ringtab")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a CSV table template from a modulus or an element list
    Generate {
        /// Modulus n for the cyclic structure Z mod n (fully populated tables)
        #[arg(short, long, conflicts_with = "elements")]
        modulus: Option<usize>,

        /// Comma-separated element labels (blank tables)
        #[arg(short, long)]
        elements: Option<String>,

        /// Output path for the CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a table file: structure on import, then completeness
    Check {
        /// Path to the CSV table file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Submit a table file to the analysis service and print the verdict
    Analyze {
        /// Path to the CSV table file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Base URL of the analysis service (default: RINGTAB_ANALYZER_URL)
        #[arg(long)]
        url: Option<String>,

        /// Print the raw verdict as JSON
        #[arg(long)]
        json: bool,

        /// Use a canned offline verdict instead of the HTTP service
        #[arg(long, conflicts_with = "url")]
        mock: bool,
    },
}
