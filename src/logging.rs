//! Logging configuration using tracing
//!
//! Diagnostics go to stderr so they never mix with `resolve` output on stdout.
//! The level is controlled by the `LSEDIT_LOG` environment variable.
//!
//! ```bash
//! LSEDIT_LOG=debug lsedit open src/main.cs --line 10
//! ```

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "LSEDIT_LOG";

/// Initialize the logging subsystem.
///
/// `verbose` raises the fallback level used when `LSEDIT_LOG` is unset.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "lsedit=debug" } else { "lsedit=warn" }
}
