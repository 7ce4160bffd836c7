//! Keyed, in-memory repository for one item kind.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use warehouse_core::{InventoryError, InventoryResult, ItemId, Quantity};

use crate::item::InventoryItem;

/// Exclusive owner of the `ItemId -> T` mapping for one item kind.
///
/// Identity is unique per repository and every stored quantity is
/// non-negative. The repository never logs; it only signals an
/// [`InventoryError`] to its caller.
#[derive(Debug, Clone)]
pub struct InventoryRepository<T> {
    items: HashMap<ItemId, T>,
}

impl<T> InventoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }
}

impl<T> Default for InventoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: InventoryItem> InventoryRepository<T> {
    /// Insert `item` under its own id. An existing entry is left untouched.
    pub fn add(&mut self, item: T) -> InventoryResult<()> {
        match self.items.entry(item.id()) {
            Entry::Occupied(e) => Err(InventoryError::duplicate(*e.key())),
            Entry::Vacant(e) => {
                e.insert(item);
                Ok(())
            }
        }
    }

    pub fn get(&self, id: ItemId) -> InventoryResult<&T> {
        self.items.get(&id).ok_or(InventoryError::not_found(id))
    }

    /// Remove the entry for `id`, handing the item back to the caller.
    pub fn remove(&mut self, id: ItemId) -> InventoryResult<T> {
        self.items.remove(&id).ok_or(InventoryError::not_found(id))
    }

    /// Replace the stored quantity for `id`.
    ///
    /// A negative `new_quantity` is reported as `InvalidQuantity` before the
    /// id is looked up, so it wins over `NotFound`.
    pub fn update_quantity(&mut self, id: ItemId, new_quantity: i64) -> InventoryResult<()> {
        let quantity = Quantity::new(new_quantity)?;
        let item = self
            .items
            .get_mut(&id)
            .ok_or(InventoryError::not_found(id))?;
        item.set_quantity(quantity);
        Ok(())
    }

    /// Snapshot of every stored item, in no particular order.
    pub fn all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }
}
