//! Console logging setup.
//!
//! Events go to stderr so a page exported to stdout is left untouched.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global fmt subscriber. `RUST_LOG` takes precedence over
/// `verbosity`.
pub fn init(verbosity: u8) {
    let filter = filter_for(verbosity);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
