//! The to-do data model.
//!
//! Items are embedded by value inside their parent list document; the
//! default "Today" list is stored as top-level item documents instead of a
//! list document.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::name::ListName;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Display text.
    pub name: String,
}

impl Item {
    /// Creates a new item with a fresh identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.into(),
        }
    }
}

/// A named, user-created list with its items embedded by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Canonical list name (unique key).
    pub name: String,
    /// Embedded items, in insertion order.
    pub items: Vec<Item>,
}

impl TodoList {
    /// Creates an empty list with the given name.
    #[must_use]
    pub fn new(name: &ListName) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.to_string(),
            items: Vec::new(),
        }
    }

    /// Creates a list pre-populated with the welcome items.
    #[must_use]
    pub fn seeded(name: &ListName) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.to_string(),
            items: default_items(),
        }
    }
}

/// Returns the three welcome items shown on a freshly seeded list.
///
/// Built fresh on every call so embedded copies never share identifiers
/// across lists.
#[must_use]
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new("Welcome to your todolist!"),
        Item::new("Hit the + button to add a new item."),
        Item::new("<-- Hit this to delete an item."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ids_are_unique() {
        let a = Item::new("Milk");
        let b = Item::new("Milk");
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn test_default_items_fresh_per_call() {
        let first = default_items();
        let second = default_items();
        assert_eq!(first.len(), 3);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.name, b.name);
            assert_ne!(a.id, b.id);
        }
    }

    #[test]
    fn test_seeded_list_contains_welcome_items() {
        let list = TodoList::seeded(&ListName::new("groceries"));
        assert_eq!(list.name, "Groceries");
        assert_eq!(list.items.len(), 3);
        assert_eq!(list.items[0].name, "Welcome to your todolist!");
    }

    #[test]
    fn test_item_bson_round_trip() {
        let item = Item::new("Eggs");
        let doc = bson::to_document(&item).unwrap();
        assert!(doc.get_object_id("_id").is_ok());
        let back: Item = bson::from_document(doc).unwrap();
        assert_eq!(back, item);
    }
}
