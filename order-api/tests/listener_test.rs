use demo_core::models::Order;
use order_api::{router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::test]
async fn test_real_listener_round_trip() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = router(Arc::new(AppState::seeded()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let base = format!("http://{}", addr);

    let orders: Vec<Order> = client
        .get(format!("{}/orders", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(orders.len(), 2);

    let response = client
        .post(format!("{}/orders", base))
        .body("ignored")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);

    let created: Order = response.json().await.unwrap();
    assert_eq!(created.product, "New Item");
    assert_eq!(created.quantity, 1);
}
