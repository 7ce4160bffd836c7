//! Stock quantity value object.

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};
use crate::value_object::ValueObject;

/// Non-negative stock count.
///
/// The only way to obtain a `Quantity` is through validation, so any item
/// holding one satisfies `quantity >= 0` from construction onwards.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(i64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    /// Validate a raw count. Negative values are rejected.
    pub fn new(value: i64) -> InventoryResult<Self> {
        if value < 0 {
            return Err(InventoryError::invalid_quantity(value));
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Add a signed delta, failing if the result would be negative or overflow.
    pub fn checked_add(self, delta: i64) -> InventoryResult<Self> {
        let total = self
            .0
            .checked_add(delta)
            .ok_or_else(|| InventoryError::invalid_quantity(delta))?;
        Self::new(total)
    }
}

impl ValueObject for Quantity {}

impl TryFrom<i64> for Quantity {
    type Error = InventoryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for i64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
