//! MongoDB storage backend.

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::doc;
use futures::stream::TryStreamExt;
use mongodb::{Client, Collection, Database};

use listkeeper_core::{Error, Item, ListName, Result, TodoList};

use crate::TodoStore;

/// Collection holding the default list's top-level items.
const ITEMS_COLLECTION: &str = "items";
/// Collection holding named list documents.
const LISTS_COLLECTION: &str = "lists";

/// MongoDB-backed store.
///
/// The driver pools connections internally; this type is cheap to share
/// behind an `Arc`.
pub struct MongoStore {
    db: Database,
    items: Collection<Item>,
    lists: Collection<TodoList>,
}

impl MongoStore {
    /// Connects to the given MongoDB deployment and database.
    ///
    /// The driver connects lazily, so this only fails on a malformed
    /// connection string. Use [`MongoStore::ping`] to probe reachability.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| Error::database(e.to_string()))?;
        let db = client.database(db_name);
        tracing::debug!(db = db_name, "MongoDB client created");

        Ok(Self {
            items: db.collection(ITEMS_COLLECTION),
            lists: db.collection(LISTS_COLLECTION),
            db,
        })
    }

    /// Probes the deployment with a `ping` command.
    pub async fn ping(&self) -> Result<()> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| Error::database(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl TodoStore for MongoStore {
    async fn find_today_items(&self) -> Result<Vec<Item>> {
        let cursor = self
            .items
            .find(doc! {})
            .await
            .map_err(|e| Error::database(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| Error::database(e.to_string()))
    }

    async fn insert_today_items(&self, items: Vec<Item>) -> Result<usize> {
        let result = self
            .items
            .insert_many(&items)
            .await
            .map_err(|e| Error::database(e.to_string()))?;
        Ok(result.inserted_ids.len())
    }

    async fn delete_today_item(&self, id: ObjectId) -> Result<bool> {
        let result = self
            .items
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| Error::database(e.to_string()))?;
        Ok(result.deleted_count > 0)
    }

    async fn find_list(&self, name: &ListName) -> Result<Option<TodoList>> {
        self.lists
            .find_one(doc! { "name": name.as_str() })
            .await
            .map_err(|e| Error::database(e.to_string()))
    }

    async fn insert_list(&self, list: &TodoList) -> Result<()> {
        self.lists
            .insert_one(list)
            .await
            .map_err(|e| Error::database(e.to_string()))?;
        Ok(())
    }

    async fn push_item(&self, name: &ListName, item: &Item) -> Result<bool> {
        let item_bson = bson::to_bson(item).map_err(|e| Error::database(e.to_string()))?;
        let result = self
            .lists
            .update_one(
                doc! { "name": name.as_str() },
                doc! { "$push": { "items": item_bson } },
            )
            .await
            .map_err(|e| Error::database(e.to_string()))?;
        Ok(result.matched_count > 0)
    }

    async fn pull_item(&self, name: &ListName, id: ObjectId) -> Result<bool> {
        let result = self
            .lists
            .update_one(
                doc! { "name": name.as_str() },
                doc! { "$pull": { "items": { "_id": id } } },
            )
            .await
            .map_err(|e| Error::database(e.to_string()))?;
        Ok(result.matched_count > 0)
    }
}
