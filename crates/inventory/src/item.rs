use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use warehouse_core::{Entity, InventoryResult, ItemId, Quantity};

/// Capability set every stored item exposes: identity, label and stock count.
///
/// `id` and `name` never change after construction. `set_quantity` is the hook
/// `InventoryRepository::update_quantity` uses; once an item is stored, callers
/// only ever see `&T` and cannot reach it.
pub trait InventoryItem: Entity<Id = ItemId> + Clone {
    fn name(&self) -> &str;

    fn quantity(&self) -> Quantity;

    fn set_quantity(&mut self, quantity: Quantity);
}

/// Durable goods (electronics) with brand and warranty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    id: ItemId,
    name: String,
    quantity: Quantity,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: Quantity,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }

    /// Build from a raw quantity, rejecting negative counts.
    pub fn try_new(
        id: i64,
        name: impl Into<String>,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> InventoryResult<Self> {
        Ok(Self::new(
            ItemId::new(id),
            name,
            Quantity::new(quantity)?,
            brand,
            warranty_months,
        ))
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Entity for ElectronicItem {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

impl InventoryItem for ElectronicItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}

impl core::fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Electronic: ID={}, Name={}, Quantity={}, Brand={}, Warranty={} months",
            self.id, self.name, self.quantity, self.brand, self.warranty_months
        )
    }
}

/// Perishable goods (groceries) with an expiry date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    id: ItemId,
    name: String,
    quantity: Quantity,
    expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: Quantity, expiry_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }

    /// Build from a raw quantity, rejecting negative counts.
    pub fn try_new(
        id: i64,
        name: impl Into<String>,
        quantity: i64,
        expiry_date: NaiveDate,
    ) -> InventoryResult<Self> {
        Ok(Self::new(ItemId::new(id), name, Quantity::new(quantity)?, expiry_date))
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    /// Expired once `on` is past the expiry date; the expiry day itself is still sellable.
    pub fn is_expired(&self, on: NaiveDate) -> bool {
        on > self.expiry_date
    }

    /// Signed number of days from `on` until expiry (negative once expired).
    pub fn days_until_expiry(&self, on: NaiveDate) -> i64 {
        (self.expiry_date - on).num_days()
    }
}

impl Entity for GroceryItem {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

impl InventoryItem for GroceryItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}

impl core::fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Grocery: ID={}, Name={}, Quantity={}, Expiry={}",
            self.id,
            self.name,
            self.quantity,
            self.expiry_date.format("%Y-%m-%d")
        )
    }
}
