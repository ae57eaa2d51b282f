use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. Calls after the first are no-ops.
pub fn init_tracing(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .try_init();
}
