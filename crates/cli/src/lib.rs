//! `warehouse` command-line driver.
//!
//! Seeds a warehouse, prints both inventories and walks the expected error
//! paths. Everything here is a caller of `warehouse-inventory`; the
//! repositories themselves stay silent.

pub mod config;
pub mod report;

use std::io::Write;

use chrono::NaiveDate;
use warehouse_core::{InventoryError, ItemId};
use warehouse_inventory::{ElectronicItem, Warehouse, remove_item};

pub use config::{CliConfig, ReportFormat};

/// Run the full session against `out`.
pub fn run<W: Write>(config: &CliConfig, today: NaiveDate, out: &mut W) -> anyhow::Result<Warehouse> {
    let mut warehouse = Warehouse::new();

    if config.seed {
        if let Err(e) = warehouse.seed_sample_data(today) {
            tracing::error!("error seeding data: {e}");
        }
    }

    report::write_section(out, "Grocery Items", warehouse.groceries(), config.report_format)?;
    report::write_section(
        out,
        "Electronic Items",
        warehouse.electronics(),
        config.report_format,
    )?;

    run_error_checks(&mut warehouse)?;
    Ok(warehouse)
}

/// Exercise each error kind once and confirm the expected one is signalled.
fn run_error_checks(warehouse: &mut Warehouse) -> anyhow::Result<()> {
    tracing::info!("running error checks");

    let dup = ElectronicItem::try_new(1, "Duplicate Laptop", 5, "HP", 12)?;
    report_expected(
        "duplicate add",
        warehouse.electronics_mut().add(dup),
        |e| matches!(e, InventoryError::DuplicateIdentity { .. }),
    );

    report_expected(
        "remove missing item",
        remove_item(warehouse.groceries_mut(), ItemId::new(999)).map(|_| ()),
        |e| matches!(e, InventoryError::NotFound { .. }),
    );

    report_expected(
        "negative quantity update",
        warehouse.electronics_mut().update_quantity(ItemId::new(1), -5),
        |e| matches!(e, InventoryError::InvalidQuantity { .. }),
    );

    Ok(())
}

fn report_expected(
    check: &str,
    result: Result<(), InventoryError>,
    expected: impl Fn(&InventoryError) -> bool,
) {
    match result {
        Err(e) if expected(&e) => tracing::info!(check, "caught expected error: {e}"),
        Err(e) => tracing::warn!(check, "caught unexpected error: {e}"),
        Ok(()) => tracing::warn!(check, "operation succeeded but an error was expected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warehouse_inventory::InventoryItem;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn seeded_run_prints_both_sections_and_keeps_state() {
        let mut out = Vec::new();
        let warehouse = run(&CliConfig::default(), today(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let groceries_at = text.find("=== Grocery Items ===").unwrap();
        let electronics_at = text.find("=== Electronic Items ===").unwrap();
        assert!(groceries_at < electronics_at);
        assert!(text.contains("Grocery: ID=3, Name=Eggs, Quantity=100, Expiry=2026-11-02"));
        assert!(text.contains("Electronic: ID=3, Name=Tablet, Quantity=15, Brand=Apple"));

        // Error checks must not have disturbed the seeded data.
        assert_eq!(warehouse.groceries().len(), 3);
        let laptop = warehouse.electronics().get(ItemId::new(1)).unwrap();
        assert_eq!(laptop.name(), "Laptop");
        assert_eq!(laptop.quantity().get(), 10);
    }

    #[test]
    fn unseeded_run_reports_empty_inventories() {
        let config = CliConfig {
            seed: false,
            ..CliConfig::default()
        };
        let mut out = Vec::new();
        let warehouse = run(&config, today(), &mut out).unwrap();

        // The duplicate check inserts into an empty repository, so it succeeds.
        assert_eq!(warehouse.electronics().len(), 1);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("No items found.").count(), 2);
    }
}
