//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - global options (dataset path, page size)
//! - [`Command`] - the `report`, `csv`, `top` and `sources` subcommands

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_PAGE_SIZE, ReportConfig};

/// Hashtag reports over a dataset of tagged wiki revisions.
#[derive(Parser, Debug, Clone)]
#[command(name = "hashtag-report")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    hashtag-report --data revs.json report typo
    hashtag-report --data revs.json report typo --source en --offset 20
    hashtag-report --data revs.json report --json
    hashtag-report --data revs.json csv typo -o typo.csv
    hashtag-report --data revs.json top")]
pub struct Args {
    /// JSON dataset of revision rows
    #[arg(short, long, env = "HASHTAG_REPORT_DATA", value_name = "FILE")]
    pub data: PathBuf,

    /// Revisions per report page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Builds the engine configuration from the global options.
    pub fn config(&self) -> ReportConfig {
        ReportConfig::new().with_page_size(self.page_size)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print one page of revisions for a tag (all tags if omitted)
    Report {
        /// Hashtag to search for, without '#'
        tag: Option<String>,

        /// Only revisions from this source (e.g. "en", "wikidata")
        #[arg(short, long)]
        source: Option<String>,

        /// Zero-based index of the first revision to show
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export every revision for a tag as CSV
    Csv {
        /// Hashtag to export, without '#'
        tag: String,

        /// Only revisions from this source
        #[arg(short, long)]
        source: Option<String>,

        /// Maximum number of rows (default: 20000)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the most used hashtags
    Top,

    /// Print every known source
    Sources,
}
