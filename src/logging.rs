//! Diagnostic logging.
//!
//! Events go to stderr so stdout stays reserved for command output. The
//! filter comes from `CONFIGFORGE_LOG` (`EnvFilter` syntax) and defaults to
//! `warn`, or `debug` with `--debug`.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CONFIGFORGE_LOG";

fn default_directive(debug: bool) -> &'static str {
    if debug {
        "configforge=debug"
    } else {
        "warn"
    }
}

/// Build the filter for this run.
pub fn filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(debug)))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(debug: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(debug)
        .without_time()
        .try_init();
}
