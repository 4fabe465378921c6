//! # Response Formatting
//!
//! Standard response types for the REST API.

use serde::Serialize;
use utoipa::ToSchema;

use crate::store::Item;

/// List response wrapping all stored items
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListItemsResponse {
    pub items: Vec<Item>,
}

impl ListItemsResponse {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

/// Update response reporting how many records were modified
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdateItemResponse {
    pub modified_count: u64,
}

impl UpdateItemResponse {
    pub fn new(modified_count: u64) -> Self {
        Self { modified_count }
    }
}

/// Delete response reporting how many records were deleted
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteItemResponse {
    pub deleted_count: u64,
}

impl DeleteItemResponse {
    pub fn new(deleted_count: u64) -> Self {
        Self { deleted_count }
    }
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_serialization() {
        let response = ListItemsResponse::new(vec![Item {
            id: "65f0c0ffee00000000000001".to_string(),
            name: "Alice".to_string(),
            age: 30,
        }]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["items"][0]["name"], "Alice");
    }

    #[test]
    fn test_empty_list_serialization() {
        let json = serde_json::to_value(ListItemsResponse::new(Vec::new())).unwrap();
        assert_eq!(json, serde_json::json!({"items": []}));
    }

    #[test]
    fn test_count_responses_serialization() {
        let json = serde_json::to_value(UpdateItemResponse::new(1)).unwrap();
        assert_eq!(json, serde_json::json!({"modified_count": 1}));

        let json = serde_json::to_value(DeleteItemResponse::new(0)).unwrap();
        assert_eq!(json, serde_json::json!({"deleted_count": 0}));
    }

    #[test]
    fn test_health_response_serialization() {
        let json = serde_json::to_string(&HealthResponse::ok()).unwrap();
        assert!(json.contains("ok"));
    }
}
