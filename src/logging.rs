//! Logging setup for hosts and tests
//!
//! The library itself only emits `tracing` events. Hosts that don't install
//! their own subscriber can call [`init_tracing`] once at startup.

use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber filtered by `directive`
/// (e.g. `"breedview=debug"`). An unparsable directive falls back to
/// `info`. Does nothing if a global subscriber is already set.
pub fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing("breedview=debug");
        init_tracing("not a [valid directive");
        tracing::debug!("logging initialized");
    }
}
