use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A record that can be looked up by its string identifier.
pub trait Record {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub demo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: String, // not checked against any user service
    pub product: String,
    pub quantity: i64,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn ok(service: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.into(),
        }
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Fresh identifier for a newly created record.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn alice() -> User {
        User {
            id: "u-1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            demo: String::new(),
        }
    }

    #[test]
    fn test_user_omits_empty_demo() {
        let value = serde_json::to_value(alice()).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "u-1",
                "name": "Alice",
                "email": "alice@example.com",
                "created_at": "2025-01-01T00:00:00Z"
            })
        );
    }

    #[test]
    fn test_user_keeps_non_empty_demo() {
        let mut user = alice();
        user.demo = "sample".to_string();

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["demo"], "sample");
    }

    #[test]
    fn test_order_always_writes_zero_values() {
        let order = Order {
            id: String::new(),
            user_id: String::new(),
            product: String::new(),
            quantity: 0,
            total: 0.0,
            created_at: Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&order).unwrap();
        let object = value.as_object().unwrap();

        for key in ["id", "user_id", "product", "quantity", "total", "created_at"] {
            assert!(object.contains_key(key), "missing {}", key);
        }
        assert_eq!(object.len(), 6);
    }

    #[test]
    fn test_generate_id_is_unique() {
        let id1 = generate_id();
        let id2 = generate_id();

        assert_ne!(id1, id2);
        assert!(Uuid::parse_str(&id1).is_ok());
    }

    #[test]
    fn test_health_response_ok() {
        let health = HealthResponse::ok("user-service");
        assert_eq!(health.status, "ok");
        assert_eq!(health.service, "user-service");
    }
}
