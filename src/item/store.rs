use tracing::debug;

use super::error::StoreError;
use super::model::{Item, ItemCreate};

/// First id handed out by a fresh store.
pub const FIRST_ITEM_ID: u64 = 1;

/// Authoritative in-memory collection of items.
///
/// Items are kept in insertion order. Ids come from a counter that only
/// moves forward, so an id is never handed out twice, even after the item
/// holding it was deleted. Lookups are linear scans over the live items.
///
/// The store itself is not synchronized; callers that share it between
/// tasks wrap it in a lock (see [`crate::server::AppState`]).
#[derive(Debug)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: u64,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: FIRST_ITEM_ID,
        }
    }

    /// All live items, in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Result<&Item, StoreError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Assign the next id to `fields` and append the new item.
    pub fn create(&mut self, fields: ItemCreate) -> Result<Item, StoreError> {
        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or(StoreError::IdExhausted)?;

        let item = Item::from_fields(id, fields);
        self.items.push(item.clone());
        self.next_id = next_id;

        debug!(item.id = id, "Item created");
        Ok(item)
    }

    /// Replace the item with `id` wholesale, keeping its id and position.
    pub fn update(&mut self, id: u64, fields: ItemCreate) -> Result<Item, StoreError> {
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = Item::from_fields(id, fields);

        debug!(item.id = id, "Item updated");
        Ok(slot.clone())
    }

    /// Remove the item with `id`, returning it.
    pub fn delete(&mut self, id: u64) -> Result<Item, StoreError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = self.items.remove(position);

        debug!(item.id = id, "Item deleted");
        Ok(removed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
