//! Tracing setup for the `irr` binary
//!
//! Logs go to stderr so stdout only carries the report.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// `-v` forces debug, `-vv` trace; otherwise `RUST_LOG` decides,
/// falling back to warnings only.
pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
