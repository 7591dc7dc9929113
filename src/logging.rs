use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;

/// Installs the stderr diagnostics subscriber. Silent unless `BSHELL_LOG` is set.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
