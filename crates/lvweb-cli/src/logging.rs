//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "LVWEB_LOG";

const DEFAULT_FILTER: &str = "lvweb_cli=info,lvweb_codegen=info,lvweb_parser=info";

/// Initialize logging to stderr.
///
/// Reads `LVWEB_LOG` for per-crate levels, e.g.
/// `LVWEB_LOG=lvweb_codegen=debug,lvweb_parser=trace`. Falls back to info
/// level for the lvweb crates if the variable is unset or invalid.
///
/// Calling it more than once is harmless.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    });
}
