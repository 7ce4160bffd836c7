//! Warehouse manager: one repository per item kind plus stock helpers.
//!
//! This is the caller side of the repositories. It owns the cross-kind
//! orchestration and is the only place in this crate that logs.

use chrono::{Days, NaiveDate};

use warehouse_core::{InventoryError, InventoryResult, ItemId, Quantity};

use crate::item::{ElectronicItem, GroceryItem, InventoryItem};
use crate::repository::InventoryRepository;

/// Electronics and groceries kept in separate, monomorphic repositories.
#[derive(Debug, Default, Clone)]
pub struct Warehouse {
    electronics: InventoryRepository<ElectronicItem>,
    groceries: InventoryRepository<GroceryItem>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn electronics(&self) -> &InventoryRepository<ElectronicItem> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut InventoryRepository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries(&self) -> &InventoryRepository<GroceryItem> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut InventoryRepository<GroceryItem> {
        &mut self.groceries
    }

    /// Populate both repositories with the standard sample stock.
    ///
    /// Grocery expiry dates are relative to `today`. Seeding twice fails with
    /// `DuplicateIdentity` on the first repeated id.
    pub fn seed_sample_data(&mut self, today: NaiveDate) -> InventoryResult<()> {
        let electronics = [
            (1, "Laptop", 10, "Dell", 24),
            (2, "Smartphone", 25, "Samsung", 12),
            (3, "Tablet", 15, "Apple", 12),
        ];
        for (id, name, qty, brand, warranty) in electronics {
            self.electronics
                .add(ElectronicItem::try_new(id, name, qty, brand, warranty)?)?;
        }

        let groceries = [(1, "Milk", 50, 7), (2, "Bread", 30, 3), (3, "Eggs", 100, 14)];
        for (id, name, qty, shelf_days) in groceries {
            let expiry = today
                .checked_add_days(Days::new(shelf_days))
                .unwrap_or(NaiveDate::MAX);
            self.groceries
                .add(GroceryItem::try_new(id, name, qty, expiry)?)?;
        }

        tracing::info!(
            electronics = self.electronics.len(),
            groceries = self.groceries.len(),
            "sample data added"
        );
        Ok(())
    }

    /// Groceries already past their expiry date on `on`.
    pub fn expired_groceries(&self, on: NaiveDate) -> Vec<GroceryItem> {
        self.groceries
            .all()
            .into_iter()
            .filter(|g| g.is_expired(on))
            .collect()
    }
}

/// Raise the stock of `id` by `delta`, returning the new quantity.
///
/// The write goes through `update_quantity`, so a result below zero (or an
/// overflow) is reported as `InvalidQuantity`.
pub fn increase_stock<T: InventoryItem>(
    repo: &mut InventoryRepository<T>,
    id: ItemId,
    delta: i64,
) -> InventoryResult<Quantity> {
    let result = repo
        .get(id)
        .and_then(|item| item.quantity().checked_add(delta))
        .and_then(|next| repo.update_quantity(id, next.get()).map(|()| next));

    match &result {
        Ok(next) => tracing::info!("Stock increased for item {}. New quantity: {}", id, next),
        Err(e) => tracing::warn!(item_id = %id, delta, "stock increase failed: {e}"),
    }
    result
}

/// Remove `id` from `repo`, logging the outcome.
pub fn remove_item<T: InventoryItem>(
    repo: &mut InventoryRepository<T>,
    id: ItemId,
) -> InventoryResult<T> {
    let result = repo.remove(id);
    match &result {
        Ok(_) => tracing::info!("Item with ID {} removed successfully", id),
        Err(e @ InventoryError::NotFound { .. }) => tracing::warn!("remove failed: {e}"),
        Err(e) => tracing::error!("unexpected error removing item {}: {e}", id),
    }
    result
}
