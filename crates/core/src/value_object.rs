//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one; `Quantity` is the canonical example in this workspace.
///
/// - **Value Object**: no identity (two quantities of 10 are the same value)
/// - **Entity**: has identity (two items with the same ID are the same item)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
