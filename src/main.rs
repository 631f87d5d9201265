// src/main.rs

use clap::Parser;
use pageviews::analyzer::{self, LoadOptions};
use pageviews::cli::Args;
use pageviews::{logging, renderer};
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::time::Instant;
use tracing::info;

fn main() {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    if let Err(err) = run(&args) {
        eprintln!("pageviews error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let start_time = Instant::now();
    let options = LoadOptions {
        strict: args.strict,
        show_progress: !args.quiet,
    };

    let (visit_log, stats) = analyzer::load_log_with(&args.log_file, &options)?;
    info!(
        "Read {} in {:.2?}: {} bytes, {} lines, {} records, {} skipped, {} pages",
        args.log_file.display(),
        start_time.elapsed(),
        stats.bytes,
        stats.lines,
        stats.records,
        stats.skipped_lines,
        visit_log.len()
    );

    let total = analyzer::rank_total_views(&visit_log);
    let unique = analyzer::rank_unique_views(&visit_log);
    drop(visit_log);

    // Nothing reaches stdout until both rankings exist
    let report = renderer::render_reports(&total, &unique, args.top.map(NonZeroUsize::get));
    io::stdout().lock().write_all(report.as_bytes())?;

    info!("Total time: {:.2?}", start_time.elapsed());
    Ok(())
}
