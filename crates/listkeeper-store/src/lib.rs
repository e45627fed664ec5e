//! # Listkeeper Store
//!
//! Document-store backends for the to-do tracker:
//!
//! - [`MongoStore`]: MongoDB-backed persistence (two collections: top-level
//!   items for the default list, list documents with embedded items)
//! - [`MemoryStore`]: in-memory backend for development and testing

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use bson::oid::ObjectId;

use listkeeper_core::{Item, ListName, Result, TodoList};

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Trait for to-do storage backends.
///
/// The default "Today" list lives in its own collection of top-level items;
/// every other list is a single document with its items embedded by value.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Returns all items in the default collection, in insertion order.
    async fn find_today_items(&self) -> Result<Vec<Item>>;

    /// Inserts items into the default collection. Returns the count inserted.
    async fn insert_today_items(&self, items: Vec<Item>) -> Result<usize>;

    /// Deletes an item from the default collection by id.
    ///
    /// Returns `true` if an item was removed.
    async fn delete_today_item(&self, id: ObjectId) -> Result<bool>;

    /// Looks up a list by its canonical name.
    async fn find_list(&self, name: &ListName) -> Result<Option<TodoList>>;

    /// Persists a new list document.
    async fn insert_list(&self, list: &TodoList) -> Result<()>;

    /// Appends an item to the named list's embedded sequence.
    ///
    /// Returns `true` if a list with that name existed.
    async fn push_item(&self, name: &ListName, item: &Item) -> Result<bool>;

    /// Atomically removes the embedded item with the given id from the
    /// named list.
    ///
    /// Returns `true` if a list with that name existed (removing an id that
    /// is already gone is a no-op success).
    async fn pull_item(&self, name: &ListName, id: ObjectId) -> Result<bool>;
}
