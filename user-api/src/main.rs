use demo_core::{server, telemetry, DemoResult, ServiceConfig};
use std::sync::Arc;
use user_api::{router, AppState, DEFAULT_PORT};

#[tokio::main]
async fn main() -> DemoResult<()> {
    let config = ServiceConfig::from_env("User API", "user_api", DEFAULT_PORT)?;

    telemetry::init_tracing(&config.log_filter);

    let app_state = Arc::new(AppState::seeded());
    let app = router(app_state);

    server::serve(app, &config).await
}
