//! Tracing subscriber setup for the CLI
//!
//! Diagnostics go to stderr so reports on stdout stay machine-readable.

use crate::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for the given `-v` count
pub const fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_LOG_FILTER,
        1 => "safedial=debug",
        _ => "safedial=trace",
    }
}

/// Install the global subscriber; `RUST_LOG` overrides the verbosity flag
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
