//! Structured logging setup using `tracing`.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter, e.g.
/// `RUST_LOG=country_atlas=debug,tower_http=debug`.
pub const LOG_ENV: &str = "RUST_LOG";

/// Install the global compact subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug`
/// with `verbose`. Calling this twice is harmless: the second install is
/// ignored.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
