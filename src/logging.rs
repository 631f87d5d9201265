// src/logging.rs

use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Default filter for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,pageviews=info",
        2 => "info,pageviews=debug",
        _ => "trace",
    }
}

/// Initialize logging to stderr, leaving stdout to the reports.
///
/// `RUST_LOG` overrides the filter derived from `verbosity`.
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}
