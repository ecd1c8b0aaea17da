use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "order_pipeline")]
#[command(about = "A bounded order pipeline with a single cook and a few channel tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dispatch orders through the kitchen and serve them in order
    Run {
        /// Order labels (defaults to the six-dish menu)
        labels: Vec<String>,

        /// Capacity of both the order queue and the result queue
        #[arg(short, long)]
        capacity: Option<usize>,

        /// Cooking time per order in milliseconds
        #[arg(short, long)]
        delay_ms: Option<u64>,

        /// Close the result queue after this many orders (must equal the order count)
        #[arg(long)]
        close_after: Option<usize>,

        /// Give up waiting for a single result after this many milliseconds
        #[arg(short, long)]
        timeout_ms: Option<u64>,

        /// JSON settings file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Configuration preset (default, fast, testing)
        #[arg(short = 'p', long)]
        preset: Option<String>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Merge several periodic producers into one stream
    Merge {
        /// Producer labels (defaults to the three dishes)
        labels: Vec<String>,

        /// Interval of each producer in milliseconds, matched to labels by position
        #[arg(short, long, value_delimiter = ',', default_value = "1000,2000,3000")]
        interval_ms: Vec<u64>,

        /// Stop after this many merged items
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Run a group of stations, each ticking a fixed number of times
    Stations {
        /// Station labels (defaults to the three dishes)
        labels: Vec<String>,

        /// Interval between ticks in milliseconds
        #[arg(short, long, default_value = "1000")]
        interval_ms: u64,

        /// Ticks per station
        #[arg(short, long, default_value = "5")]
        ticks: usize,
    },

    /// Tick a single label until the duration elapses or Ctrl-C
    Ticker {
        /// Label to print
        label: String,

        /// Interval between ticks in milliseconds
        #[arg(short, long, default_value = "1000")]
        interval_ms: u64,

        /// Stop after this many milliseconds (runs until Ctrl-C when omitted)
        #[arg(short, long)]
        duration_ms: Option<u64>,
    },
}
