//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the filter directives, e.g.
/// `FIXPARITY_LOG=fixparity_harness=debug,fixparity_fixture=info`.
pub const LOG_ENV: &str = "FIXPARITY_LOG";

const DEFAULT_FILTER: &str = "fixparity_fixture=info,fixparity_harness=info";

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Install the global subscriber with [`LogFormat::Text`].
///
/// Idempotent. If another subscriber is already installed (a test harness
/// or the embedding program), that one is kept.
pub fn init_tracing() {
    init_tracing_with(LogFormat::Text);
}

/// Install the global subscriber in the given format. Only the first call
/// has any effect.
pub fn init_tracing_with(format: LogFormat) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let registry = tracing_subscriber::registry().with(filter);
        let _ = match format {
            LogFormat::Text => registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
        };
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_tracing();
        init_tracing();
        init_tracing_with(LogFormat::Json);
        tracing::info!(target: "fixparity_harness", "logging initialised");
    }
}
