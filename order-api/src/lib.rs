pub mod api;

use axum::{routing::get, Router};
use chrono::Utc;
use demo_core::{models::Order, MemoryStore};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const SERVICE_NAME: &str = "order-service";
pub const DEFAULT_PORT: u16 = 8082;

#[derive(Clone)]
pub struct AppState {
    pub orders: MemoryStore<Order>,
}

impl AppState {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: MemoryStore::new(orders),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_orders())
    }
}

pub fn seed_orders() -> Vec<Order> {
    let now = Utc::now();
    vec![
        Order {
            id: "o-1".to_string(),
            user_id: "u-1".to_string(),
            product: "Widget".to_string(),
            quantity: 2,
            total: 19.98,
            created_at: now,
        },
        Order {
            id: "o-2".to_string(),
            user_id: "u-2".to_string(),
            product: "Gadget".to_string(),
            quantity: 1,
            total: 49.99,
            created_at: now,
        },
    ]
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/orders", get(api::list_orders).post(api::create_order))
        .route("/orders/:id", get(api::get_order))
        .route("/health", get(api::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
