use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `WORDFREQ_LOG=wordfreq=debug`.
pub const LOG_ENV: &str = "WORDFREQ_LOG";

const DEFAULT_FILTER: &str = "wordfreq=warn";

static INIT: Once = Once::new();

/// Install the stderr log subscriber. Safe to call more than once.
///
/// Logs never go to stdout, which carries the report.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
