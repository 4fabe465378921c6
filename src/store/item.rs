//! # Item Domain Types
//!
//! The Item entity, its identifier, and the partial-update mask.

use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::{StoreError, StoreResult};

/// Maximum allowed length of an item name
pub const MAX_NAME_LEN: usize = 200;

/// A stored Item with its generated identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Opaque identifier assigned by the store on creation
    pub id: String,
    pub name: String,
    pub age: i64,
}

/// Validated item identifier (BSON ObjectId hex encoding)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(ObjectId);

impl ItemId {
    /// Parse an identifier from its string form.
    ///
    /// Fails with `StoreError::InvalidId` when the string does not match
    /// the store's id encoding, rather than silently matching nothing.
    pub fn parse(raw: &str) -> StoreResult<Self> {
        ObjectId::parse_str(raw)
            .map(ItemId)
            .map_err(|_| StoreError::InvalidId(raw.to_string()))
    }

    /// Generate a fresh unique identifier
    pub fn generate() -> Self {
        ItemId(ObjectId::new())
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// Partial-update mask: only fields present here are modified
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl ItemPatch {
    /// True when the patch supplies no fields at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}
