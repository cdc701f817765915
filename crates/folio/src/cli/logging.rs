//! Diagnostic logging to stderr.

use std::{
    env,
    io::{self, IsTerminal},
};

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Filter used when neither the environment nor the configuration yields a valid one.
const DEFAULT_FILTER: &str = "warn";

/// Picks the first valid filter among the environment value and the configured level.
fn choose_filter(from_env: Option<&str>, configured: &str) -> EnvFilter {
    from_env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the stderr subscriber.
///
/// `FOLIO_LOG` takes precedence over the configured `[log] level`.
pub fn init(configured: &str) {
    let from_env = env::var(LOG_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(choose_filter(from_env.as_deref(), configured))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
