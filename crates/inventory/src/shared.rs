//! Thread-safe handle over a single repository.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use warehouse_core::{InventoryResult, ItemId};

use crate::item::InventoryItem;
use crate::repository::InventoryRepository;

/// Shared repository guarded by one lock over the whole mapping.
///
/// Every write (`add`, `remove`, `update_quantity`) runs under a single write
/// guard, so check-then-insert and read-modify-write are atomic with respect
/// to each other. Reads return clones, never guards.
#[derive(Debug)]
pub struct SharedInventoryRepository<T> {
    inner: Arc<RwLock<InventoryRepository<T>>>,
}

impl<T> Clone for SharedInventoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedInventoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SharedInventoryRepository<T> {
    pub fn new() -> Self {
        Self::from_repository(InventoryRepository::new())
    }

    pub fn from_repository(repository: InventoryRepository<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(repository)),
        }
    }

    // Repository methods never panic while holding the guard, so a poisoned
    // lock still protects a consistent mapping.
    fn read(&self) -> RwLockReadGuard<'_, InventoryRepository<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, InventoryRepository<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.read().contains(id)
    }
}

impl<T: InventoryItem> SharedInventoryRepository<T> {
    pub fn add(&self, item: T) -> InventoryResult<()> {
        self.write().add(item)
    }

    /// Clone of the stored item for `id`.
    pub fn get(&self, id: ItemId) -> InventoryResult<T> {
        self.read().get(id).cloned()
    }

    pub fn remove(&self, id: ItemId) -> InventoryResult<T> {
        self.write().remove(id)
    }

    pub fn update_quantity(&self, id: ItemId, new_quantity: i64) -> InventoryResult<()> {
        self.write().update_quantity(id, new_quantity)
    }

    /// Add `delta` to the current quantity under one write guard.
    pub fn adjust_quantity(&self, id: ItemId, delta: i64) -> InventoryResult<i64> {
        let mut repo = self.write();
        let next = repo.get(id)?.quantity().checked_add(delta)?;
        repo.update_quantity(id, next.get())?;
        Ok(next.get())
    }

    pub fn all(&self) -> Vec<T> {
        self.read().all()
    }
}
