//! Inventory domain module.
//!
//! Item kinds, the generic per-kind repository that enforces identity and
//! quantity invariants, and the warehouse manager that drives them. Pure
//! in-memory logic: no IO, no storage.

pub mod item;
pub mod repository;
pub mod shared;
pub mod warehouse;

pub use item::{ElectronicItem, GroceryItem, InventoryItem};
pub use repository::InventoryRepository;
pub use shared::SharedInventoryRepository;
pub use warehouse::{increase_stock, remove_item, Warehouse};
