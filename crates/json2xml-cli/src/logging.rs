//! Diagnostic logging for the CLI, written to stderr.
//!
//! `-v` raises the level to `info`, `-vv` to `debug`. A `RUST_LOG` filter, if
//! set, takes precedence over the flags.

use tracing_subscriber::EnvFilter;

pub fn setup_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
