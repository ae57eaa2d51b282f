use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::errors::DemoResult;

/// Bind the configured address and serve `app` until the process exits.
pub async fn serve(app: Router, config: &ServiceConfig) -> DemoResult<()> {
    let addr = config.bind_address;

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!(%e, addr = %addr, "Failed to bind");
        e
    })?;

    tracing::info!("{} listening on {}", config.service_name, addr);

    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!(%e, addr = %addr);
        e
    })?;

    Ok(())
}
