//! # Request Parsing
//!
//! Parses and validates JSON request bodies into typed requests. Parsing is
//! explicit (no extractor rejections) so malformed input maps to the API's
//! own error messages.

use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::store::{ItemPatch, MAX_NAME_LEN};

use super::errors::{ApiError, ApiResult};

/// Body of POST /create-item/
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub name: String,
    pub age: i64,
}

impl CreateItemRequest {
    /// Parse a create request body.
    ///
    /// Requires `name` (string) and `age` (integer); any absent or
    /// mistyped key yields the canonical validation error.
    pub fn parse(body: &[u8]) -> ApiResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::Parse)?;
        let object = value.as_object().ok_or_else(ApiError::missing_fields)?;

        let name = object
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(ApiError::missing_fields)?;
        let age = object
            .get("age")
            .and_then(Value::as_i64)
            .ok_or_else(ApiError::missing_fields)?;

        Ok(Self {
            name: validate_name(name)?,
            age,
        })
    }
}

/// Body of POST /update-item/{item_id}/
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl UpdateItemRequest {
    /// Parse an update request body.
    ///
    /// Zero or more of `name`/`age` may be supplied; unknown keys are
    /// ignored. A supplied key must have the right type.
    pub fn parse(body: &[u8]) -> ApiResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::Parse)?;
        let object = value
            .as_object()
            .ok_or_else(|| ApiError::Validation("Request body must be a JSON object".to_string()))?;

        let name = match object.get("name") {
            None => None,
            Some(raw) => {
                let name = raw.as_str().ok_or_else(|| {
                    ApiError::Validation("name must be a string".to_string())
                })?;
                Some(validate_name(name)?)
            }
        };

        let age = match object.get("age") {
            None => None,
            Some(raw) => Some(raw.as_i64().ok_or_else(|| {
                ApiError::Validation("age must be an integer".to_string())
            })?),
        };

        Ok(Self { name, age })
    }

    /// Convert into the store's partial-update mask
    pub fn into_patch(self) -> ItemPatch {
        ItemPatch {
            name: self.name,
            age: self.age,
        }
    }
}

/// Enforce the Item name invariants: non-empty, at most 200 characters
fn validate_name(name: &str) -> ApiResult<String> {
    if name.is_empty() {
        return Err(ApiError::Validation("name must not be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ApiError::Validation(format!(
            "name exceeds maximum length of {}",
            MAX_NAME_LEN
        )));
    }
    Ok(name.to_string())
}
