//! Item registry
//!
//! `Holdings` owns every `LibraryItem` registered with the catalog, keyed by
//! item id. It only stores and looks items up; the circulation rules live in
//! the catalog.

use crate::types::{ItemId, LibraryItem};
use std::collections::HashMap;

/// Owns all registered items
#[derive(Debug, Default)]
pub struct Holdings {
    /// Map of item ids to item state
    items: HashMap<ItemId, LibraryItem>,
}

impl Holdings {
    /// Create an empty registry
    ///
    /// # Returns
    ///
    /// A new Holdings with no items
    pub fn new() -> Self {
        Holdings {
            items: HashMap::new(),
        }
    }

    /// Insert an item, keyed by its id
    ///
    /// # Arguments
    ///
    /// * `item` - The item to store
    ///
    /// # Returns
    ///
    /// * `Some(LibraryItem)` - The record previously stored under the same id
    /// * `None` - If the id was new
    pub fn insert(&mut self, item: LibraryItem) -> Option<LibraryItem> {
        self.items.insert(item.id(), item)
    }

    /// Look up an item by id
    pub fn get(&self, id: ItemId) -> Option<&LibraryItem> {
        self.items.get(&id)
    }

    /// Mutable lookup for the catalog's transitions
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut LibraryItem> {
        self.items.get_mut(&id)
    }

    /// Get all items sorted by id
    ///
    /// Sorting keeps report output deterministic.
    pub fn all(&self) -> Vec<&LibraryItem> {
        let mut items: Vec<&LibraryItem> = self.items.values().collect();
        items.sort_by_key(|item| item.id());
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_holdings_are_empty() {
        let holdings = Holdings::new();
        assert!(holdings.all().is_empty());
    }

    #[test]
    fn test_insert_replaces_by_id() {
        let mut holdings = Holdings::new();

        assert!(holdings.insert(LibraryItem::book(1, "Dune", "Herbert")).is_none());
        let replaced = holdings.insert(LibraryItem::book(1, "Dune Messiah", "Herbert"));

        assert_eq!(replaced.map(|item| item.title().to_string()), Some("Dune".to_string()));
        assert_eq!(holdings.all().len(), 1);
        assert_eq!(holdings.get(1).unwrap().title(), "Dune Messiah");
    }

    #[test]
    fn test_all_is_sorted_by_id() {
        let mut holdings = Holdings::new();
        holdings.insert(LibraryItem::movie(9, "Alien", "Scott"));
        holdings.insert(LibraryItem::book(1, "Dune", "Herbert"));
        holdings.insert(LibraryItem::album(4, "Low", "Bowie"));

        let ids: Vec<ItemId> = holdings.all().iter().map(|item| item.id()).collect();
        assert_eq!(ids, vec![1, 4, 9]);
    }

    #[test]
    fn test_get_missing_item() {
        let mut holdings = Holdings::new();
        assert!(holdings.get(1).is_none());
        assert!(holdings.get_mut(1).is_none());
    }
}
