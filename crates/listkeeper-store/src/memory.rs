//! In-memory store (for development/testing).

use async_trait::async_trait;
use bson::oid::ObjectId;
use parking_lot::RwLock;

use listkeeper_core::{Item, ListName, Result, TodoList};

use crate::TodoStore;

/// In-memory storage backend.
///
/// Mirrors the MongoDB backend's semantics, including per-document
/// last-write-wins updates on embedded item sequences.
#[derive(Default)]
pub struct MemoryStore {
    today: RwLock<Vec<Item>>,
    lists: RwLock<Vec<TodoList>>,
}

impl MemoryStore {
    /// Creates a new, empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn find_today_items(&self) -> Result<Vec<Item>> {
        Ok(self.today.read().clone())
    }

    async fn insert_today_items(&self, items: Vec<Item>) -> Result<usize> {
        let count = items.len();
        self.today.write().extend(items);
        Ok(count)
    }

    async fn delete_today_item(&self, id: ObjectId) -> Result<bool> {
        let mut today = self.today.write();
        let before = today.len();
        today.retain(|item| item.id != id);
        Ok(today.len() < before)
    }

    async fn find_list(&self, name: &ListName) -> Result<Option<TodoList>> {
        let lists = self.lists.read();
        Ok(lists.iter().find(|l| l.name == name.as_str()).cloned())
    }

    async fn insert_list(&self, list: &TodoList) -> Result<()> {
        self.lists.write().push(list.clone());
        Ok(())
    }

    async fn push_item(&self, name: &ListName, item: &Item) -> Result<bool> {
        let mut lists = self.lists.write();
        match lists.iter_mut().find(|l| l.name == name.as_str()) {
            Some(list) => {
                list.items.push(item.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn pull_item(&self, name: &ListName, id: ObjectId) -> Result<bool> {
        let mut lists = self.lists.write();
        match lists.iter_mut().find(|l| l.name == name.as_str()) {
            Some(list) => {
                list.items.retain(|item| item.id != id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_today_insert_and_find() {
        let store = MemoryStore::new();
        assert!(store.find_today_items().await.unwrap().is_empty());

        let items = vec![Item::new("Milk"), Item::new("Eggs")];
        let count = store.insert_today_items(items).await.unwrap();
        assert_eq!(count, 2);

        let found = store.find_today_items().await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "Milk");
        assert_eq!(found[1].name, "Eggs");
    }

    #[tokio::test]
    async fn test_delete_today_item() {
        let store = MemoryStore::new();
        let item = Item::new("Milk");
        let id = item.id;
        store.insert_today_items(vec![item]).await.unwrap();

        assert!(store.delete_today_item(id).await.unwrap());
        assert!(store.find_today_items().await.unwrap().is_empty());
        // Deleting again is a miss.
        assert!(!store.delete_today_item(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_lifecycle() {
        let store = MemoryStore::new();
        let name = ListName::new("groceries");
        assert!(store.find_list(&name).await.unwrap().is_none());

        let list = TodoList::seeded(&name);
        store.insert_list(&list).await.unwrap();

        let found = store.find_list(&name).await.unwrap().unwrap();
        assert_eq!(found.id, list.id);
        assert_eq!(found.items.len(), 3);
    }

    #[tokio::test]
    async fn test_push_and_pull_item() {
        let store = MemoryStore::new();
        let name = ListName::new("groceries");
        store
            .insert_list(&TodoList::new(&name))
            .await
            .unwrap();

        let milk = Item::new("Milk");
        let eggs = Item::new("Eggs");
        assert!(store.push_item(&name, &milk).await.unwrap());
        assert!(store.push_item(&name, &eggs).await.unwrap());

        assert!(store.pull_item(&name, milk.id).await.unwrap());
        let found = store.find_list(&name).await.unwrap().unwrap();
        assert_eq!(found.items.len(), 1);
        assert_eq!(found.items[0].name, "Eggs");
    }

    #[tokio::test]
    async fn test_push_to_missing_list() {
        let store = MemoryStore::new();
        let name = ListName::new("nonexistent");
        let pushed = store.push_item(&name, &Item::new("Milk")).await.unwrap();
        assert!(!pushed);
    }

    #[tokio::test]
    async fn test_pull_missing_item_is_noop() {
        let store = MemoryStore::new();
        let name = ListName::new("groceries");
        store.insert_list(&TodoList::new(&name)).await.unwrap();

        // The list matched, so this reports success even though nothing
        // was removed.
        assert!(store.pull_item(&name, ObjectId::new()).await.unwrap());
    }
}
