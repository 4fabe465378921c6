//! # MongoDB Item Store
//!
//! Production store backed by a MongoDB collection. The client is created
//! once at startup and shared across requests; connection pooling is
//! handled by the driver.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;

use super::errors::StoreResult;
use super::item::{Item, ItemId, ItemPatch};
use super::ItemStore;

/// Wire shape of an Item document in the collection
#[derive(Debug, Serialize, Deserialize)]
struct ItemDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    age: i64,
}

impl From<ItemDocument> for Item {
    fn from(doc: ItemDocument) -> Self {
        Item {
            id: doc.id.to_hex(),
            name: doc.name,
            age: doc.age,
        }
    }
}

/// MongoDB-backed Item store
pub struct MongoItemStore {
    collection: Collection<ItemDocument>,
}

impl MongoItemStore {
    /// Connect to the database and bind to the Item collection
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let client = Client::with_uri_str(&config.uri).await?;
        let collection = client
            .database(&config.database)
            .collection(&config.collection);

        Ok(Self { collection })
    }
}

#[async_trait]
impl ItemStore for MongoItemStore {
    async fn insert(&self, name: String, age: i64) -> StoreResult<Item> {
        let document = ItemDocument {
            id: ItemId::generate().as_object_id(),
            name,
            age,
        };

        self.collection.insert_one(&document).await?;

        Ok(document.into())
    }

    async fn find_all(&self) -> StoreResult<Vec<Item>> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut items = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            items.push(document.into());
        }

        Ok(items)
    }

    async fn update_fields(&self, id: &ItemId, patch: ItemPatch) -> StoreResult<u64> {
        let mut fields = Document::new();
        if let Some(name) = patch.name {
            fields.insert("name", name);
        }
        if let Some(age) = patch.age {
            fields.insert("age", age);
        }

        // An empty $set is rejected by the server; nothing to apply anyway.
        if fields.is_empty() {
            return Ok(0);
        }

        let result = self
            .collection
            .update_one(doc! { "_id": id.as_object_id() }, doc! { "$set": fields })
            .await?;

        Ok(result.modified_count)
    }

    async fn delete(&self, id: &ItemId) -> StoreResult<u64> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.as_object_id() })
            .await?;

        Ok(result.deleted_count)
    }
}
