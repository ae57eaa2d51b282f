use crate::{AppState, SERVICE_NAME};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use chrono::Utc;
use demo_core::{generate_id, models::Order, write_json, ApiError, HealthResponse};
use std::sync::Arc;

pub const NEW_ORDER_USER_ID: &str = "u-1";
pub const NEW_ORDER_PRODUCT: &str = "New Item";
pub const NEW_ORDER_QUANTITY: i64 = 1;
pub const NEW_ORDER_TOTAL: f64 = 9.99;

/// The record `POST /orders` stores. The owning user is not looked up anywhere.
pub fn new_order() -> Order {
    Order {
        id: generate_id(),
        user_id: NEW_ORDER_USER_ID.to_string(),
        product: NEW_ORDER_PRODUCT.to_string(),
        quantity: NEW_ORDER_QUANTITY,
        total: NEW_ORDER_TOTAL,
        created_at: Utc::now(),
    }
}

pub async fn list_orders(State(state): State<Arc<AppState>>) -> Response {
    let orders = state.orders.list().await;
    tracing::debug!(count = orders.len(), "Listing orders");
    write_json(StatusCode::OK, &orders)
}

pub async fn create_order(State(state): State<Arc<AppState>>) -> Response {
    let order = state.orders.insert(new_order()).await;
    tracing::info!(id = %order.id, user_id = %order.user_id, "Created order");
    write_json(StatusCode::CREATED, &order)
}

pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<Response, ApiError> {
    let order = state
        .orders
        .get(&order_id)
        .await
        .ok_or_else(|| ApiError::not_found("Order not found"))?;

    Ok(write_json(StatusCode::OK, &order))
}

pub async fn health() -> Response {
    write_json(StatusCode::OK, &HealthResponse::ok(SERVICE_NAME))
}
