use demo_core::{server, telemetry, DemoResult, ServiceConfig};
use order_api::{router, AppState, DEFAULT_PORT};
use std::sync::Arc;

#[tokio::main]
async fn main() -> DemoResult<()> {
    let config = ServiceConfig::from_env("Order API", "order_api", DEFAULT_PORT)?;

    telemetry::init_tracing(&config.log_filter);

    let app = router(Arc::new(AppState::seeded()));

    server::serve(app, &config).await
}
