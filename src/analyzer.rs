// src/analyzer.rs

use crate::error::{PageViewsError, Result};
use crate::model::*;
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::borrow::Cow;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Reject lines missing an address instead of skipping them
    pub strict: bool,
    pub show_progress: bool,
}

/// Outcome of splitting one raw line
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    Blank,
    Record(LogRecord<'a>),
    /// Only a path, no address
    Malformed,
}

/// Splits a line into path and address on the first run of whitespace.
/// Anything after the second field is ignored.
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next()) {
        (None, _) => ParsedLine::Blank,
        (Some(_), None) => ParsedLine::Malformed,
        (Some(path), Some(address)) => ParsedLine::Record(LogRecord { path, address }),
    }
}

/// Reads the whole log at `path` with default options.
pub fn load_log(path: &Path) -> Result<PathVisitLog> {
    load_log_with(path, &LoadOptions::default()).map(|(log, _)| log)
}

pub fn load_log_with(path: &Path, options: &LoadOptions) -> Result<(PathVisitLog, LoadStats)> {
    if !path.is_file() {
        return Err(PageViewsError::FileNotFound { path: path.to_path_buf() });
    }

    let io_err = |source| PageViewsError::Io { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(io_err)?;
    let size = file.metadata().map_err(io_err)?.len();
    debug!("Reading {} ({} bytes)", path.display(), size);

    let bar = if options.show_progress {
        ProgressBar::new(size)
    } else {
        ProgressBar::hidden()
    };
    bar.set_message("Reading log");

    let mut log = PathVisitLog::new();
    let mut stats = LoadStats::default();

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(io_err)?;
        if read == 0 {
            break;
        }
        stats.lines += 1;
        stats.bytes += read as u64;
        bar.inc(read as u64);

        let decoded = String::from_utf8_lossy(&buf);
        if matches!(decoded, Cow::Owned(_)) {
            debug!("Line {} is not valid UTF-8, replacing invalid bytes", stats.lines);
        }
        let line = decoded.trim_end_matches(['\n', '\r']);
        match parse_line(line) {
            ParsedLine::Blank => {}
            ParsedLine::Record(record) => {
                log.record(record);
                stats.records += 1;
            }
            ParsedLine::Malformed if options.strict => {
                bar.abandon();
                return Err(PageViewsError::MalformedLine {
                    path: path.to_path_buf(),
                    line_number: stats.lines,
                    line: line.to_string(),
                });
            }
            ParsedLine::Malformed => {
                warn!("Skipping line {}: no address field", stats.lines);
                stats.skipped_lines += 1;
            }
        }
    }
    bar.finish_with_message("Log read");

    if log.is_empty() {
        return Err(PageViewsError::EmptyFile { path: path.to_path_buf() });
    }

    debug!("{} records over {} paths", stats.records, log.len());
    Ok((log, stats))
}

/// Ranks paths by number of requests, duplicates included.
pub fn rank_total_views(log: &PathVisitLog) -> RankedMetric {
    rank_by(log, |addresses| addresses.len())
}

/// Ranks paths by number of distinct client addresses.
pub fn rank_unique_views(log: &PathVisitLog) -> RankedMetric {
    rank_by(log, |addresses| {
        addresses.iter().map(String::as_str).collect::<HashSet<_>>().len()
    })
}

fn rank_by<F>(log: &PathVisitLog, count: F) -> RankedMetric
where
    F: Fn(&[String]) -> usize + Sync,
{
    // Indexed collect keeps first-seen order, so ties stay put after the sort
    let mut ranked: RankedMetric = log
        .entries()
        .par_iter()
        .map(|e| PathCount::new(e.path.clone(), count(&e.addresses)))
        .collect();
    sort_ranking(&mut ranked);
    debug!("Ranked {} paths", ranked.len());
    ranked
}

/// Stable descending sort by count.
pub fn sort_ranking(metric: &mut RankedMetric) {
    metric.sort_by_key(|e| Reverse(e.count));
}
