use tracing_subscriber::EnvFilter;

/// The environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "ABACUS_LOG";

/// The filter used when `ABACUS_LOG` is unset or invalid
///
/// Rejected input is already reported to the user, so the warnings logged
/// for it stay hidden unless asked for.
const DEFAULT_LOG_FILTER: &str = "error";

/// Installs the global subscriber, writing to standard error
///
/// Keeps the existing subscriber if one is already installed.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| default_filter());

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(error) = installed {
        tracing::debug!(%error, "keeping the existing subscriber");
    }
}

fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_LOG_FILTER)
}
