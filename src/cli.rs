// src/cli.rs

use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the web server log to analyze
    #[arg(env = "PAGEVIEWS_LOG", default_value = "webserver.log")]
    pub log_file: PathBuf,

    /// Fail on lines that have no address instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Only print the N highest ranked pages of each report
    #[arg(long, value_name = "N")]
    pub top: Option<NonZeroUsize>,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
