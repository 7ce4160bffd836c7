//! Inventory error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the inventory layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every variant is recoverable by the immediate caller. The set is closed:
/// repository operations signal nothing else.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// An item with the same identifier is already stored.
    #[error("item with ID {id} already exists")]
    DuplicateIdentity { id: ItemId },

    /// No item is stored under the identifier.
    #[error("item with ID {id} not found")]
    NotFound { id: ItemId },

    /// A quantity was negative, or a stock change overflowed.
    #[error("invalid quantity {quantity}: quantity cannot be negative")]
    InvalidQuantity { quantity: i64 },
}

impl InventoryError {
    pub fn duplicate(id: ItemId) -> Self {
        Self::DuplicateIdentity { id }
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound { id }
    }

    pub fn invalid_quantity(quantity: i64) -> Self {
        Self::InvalidQuantity { quantity }
    }
}
