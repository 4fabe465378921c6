//! # In-Memory Item Store
//!
//! In-memory store for testing.
//!
//! In production, `MongoItemStore` talks to the document database instead.

use std::sync::RwLock;

use async_trait::async_trait;

use super::errors::{StoreError, StoreResult};
use super::item::{Item, ItemId, ItemPatch};
use super::ItemStore;

/// In-memory Item store backed by a locked vector
#[derive(Default)]
pub struct MemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn insert(&self, name: String, age: i64) -> StoreResult<Item> {
        let item = Item {
            id: ItemId::generate().to_string(),
            name,
            age,
        };

        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::Backend("Lock poisoned".to_string()))?;
        items.push(item.clone());

        Ok(item)
    }

    async fn find_all(&self) -> StoreResult<Vec<Item>> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::Backend("Lock poisoned".to_string()))?;

        Ok(items.clone())
    }

    async fn update_fields(&self, id: &ItemId, patch: ItemPatch) -> StoreResult<u64> {
        if patch.is_empty() {
            return Ok(0);
        }

        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::Backend("Lock poisoned".to_string()))?;

        let id = id.to_string();
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(0);
        };

        // Mirror the document database: a record counts as modified only
        // when a supplied field actually changes its value.
        let mut modified = false;
        if let Some(name) = patch.name {
            modified |= item.name != name;
            item.name = name;
        }
        if let Some(age) = patch.age {
            modified |= item.age != age;
            item.age = age;
        }

        Ok(modified as u64)
    }

    async fn delete(&self, id: &ItemId) -> StoreResult<u64> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::Backend("Lock poisoned".to_string()))?;

        let id = id.to_string();
        match items.iter().position(|item| item.id == id) {
            Some(idx) => {
                items.remove(idx);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find_all() {
        let store = MemoryItemStore::new();

        let item = store.insert("Alice".to_string(), 30).await.unwrap();
        assert!(!item.id.is_empty());
        assert_eq!(item.name, "Alice");
        assert_eq!(item.age, 30);

        let items = store.find_all().await.unwrap();
        assert_eq!(items, vec![item]);
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let store = MemoryItemStore::new();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partial_update_leaves_other_fields() {
        let store = MemoryItemStore::new();
        let item = store.insert("Alice".to_string(), 30).await.unwrap();
        let id = ItemId::parse(&item.id).unwrap();

        let patch = ItemPatch {
            age: Some(99),
            ..Default::default()
        };
        let modified = store.update_fields(&id, patch).await.unwrap();
        assert_eq!(modified, 1);

        let items = store.find_all().await.unwrap();
        assert_eq!(items[0].name, "Alice");
        assert_eq!(items[0].age, 99);
    }

    #[tokio::test]
    async fn test_update_missing_id_yields_zero() {
        let store = MemoryItemStore::new();
        store.insert("Alice".to_string(), 30).await.unwrap();

        let missing = ItemId::generate();
        let patch = ItemPatch {
            age: Some(1),
            ..Default::default()
        };
        assert_eq!(store.update_fields(&missing, patch).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_empty_patch_modifies_nothing() {
        let store = MemoryItemStore::new();
        let item = store.insert("Alice".to_string(), 30).await.unwrap();
        let id = ItemId::parse(&item.id).unwrap();

        let modified = store.update_fields(&id, ItemPatch::default()).await.unwrap();
        assert_eq!(modified, 0);

        let items = store.find_all().await.unwrap();
        assert_eq!(items[0], item);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let store = MemoryItemStore::new();
        let item = store.insert("Alice".to_string(), 30).await.unwrap();
        let id = ItemId::parse(&item.id).unwrap();

        assert_eq!(store.delete(&id).await.unwrap(), 1);
        assert!(store.find_all().await.unwrap().is_empty());
        assert_eq!(store.delete(&id).await.unwrap(), 0);
    }
}
