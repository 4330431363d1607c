//! Logging setup
//!
//! Structured logging through `tracing`, written to stderr so stdout stays
//! reserved for user-facing messages.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "TREEDUMP_LOG";

/// Pick the default filter directive for the given verbosity flags
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize the global subscriber.
///
/// Priority: `TREEDUMP_LOG` if set and valid, otherwise the level derived
/// from `--verbose` / `--quiet`. Calling this twice is a no-op.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(console::colors_enabled_stderr());

    let _ = Registry::default().with(filter).with(layer).try_init();
}
