//! # Resource Store
//!
//! Persistence abstraction over the Item document collection, with
//! identifier generation and lookup by identifier.

pub mod errors;
pub mod item;
pub mod memory;
pub mod mongo;

use async_trait::async_trait;

pub use errors::{StoreError, StoreResult};
pub use item::{Item, ItemId, ItemPatch, MAX_NAME_LEN};
pub use memory::MemoryItemStore;
pub use mongo::MongoItemStore;

/// Store trait for Item collection operations
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persist a new item and return it with its generated identifier
    async fn insert(&self, name: String, age: i64) -> StoreResult<Item>;

    /// Return all stored items as a materialized list
    async fn find_all(&self) -> StoreResult<Vec<Item>>;

    /// Apply only the fields present in the patch; returns the number of
    /// records modified (0 when no record matches the id)
    async fn update_fields(&self, id: &ItemId, patch: ItemPatch) -> StoreResult<u64>;

    /// Remove the record if present; returns the number of records deleted
    async fn delete(&self, id: &ItemId) -> StoreResult<u64>;
}
