pub mod api;

use axum::{routing::get, Router};
use chrono::Utc;
use demo_core::{models::User, MemoryStore};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const SERVICE_NAME: &str = "user-service";
pub const DEFAULT_PORT: u16 = 8081;

#[derive(Clone)]
pub struct AppState {
    pub users: MemoryStore<User>,
}

impl AppState {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: MemoryStore::new(users),
        }
    }

    /// State holding the two records every process starts with.
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }
}

pub fn seed_users() -> Vec<User> {
    let now = Utc::now();
    vec![
        User {
            id: "u-1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            created_at: now,
            demo: String::new(),
        },
        User {
            id: "u-2".to_string(),
            name: "Bob_test".to_string(),
            email: "bob@example.com".to_string(),
            created_at: now,
            demo: String::new(),
        },
    ]
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", get(api::list_users).post(api::create_user))
        .route("/users/:id", get(api::get_user))
        .route("/health", get(api::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_users() {
        let users = seed_users();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, "u-1");
        assert_eq!(users[0].name, "Alice");
        assert_eq!(users[1].id, "u-2");
        assert_eq!(users[1].name, "Bob_test");
        assert!(users.iter().all(|u| u.demo.is_empty()));
    }

    #[tokio::test]
    async fn test_states_do_not_share_records() {
        let a = AppState::seeded();
        let b = AppState::seeded();

        a.users.insert(api::new_user()).await;

        assert_eq!(a.users.len().await, 3);
        assert_eq!(b.users.len().await, 2);
    }
}
