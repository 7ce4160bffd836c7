//! Inventory listings.

use std::io::Write;

use serde::Serialize;
use warehouse_inventory::{InventoryItem, InventoryRepository};

use crate::config::ReportFormat;

/// Write every item of `repo` under `title`, ordered by id.
pub fn write_section<T, W>(
    out: &mut W,
    title: &str,
    repo: &InventoryRepository<T>,
    format: ReportFormat,
) -> anyhow::Result<()>
where
    T: InventoryItem + Serialize + core::fmt::Display,
    W: Write,
{
    let mut items = repo.all();
    items.sort_by_key(|i| i.id());

    match format {
        ReportFormat::Text => {
            writeln!(out, "\n=== {title} ===")?;
            if items.is_empty() {
                writeln!(out, "No items found.")?;
            }
            for item in &items {
                writeln!(out, "{item}")?;
            }
        }
        ReportFormat::Json => {
            let doc = serde_json::json!({ "section": title, "items": items });
            serde_json::to_writer(&mut *out, &doc)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use warehouse_inventory::{ElectronicItem, GroceryItem};

    fn render<T>(repo: &InventoryRepository<T>, format: ReportFormat) -> String
    where
        T: InventoryItem + Serialize + core::fmt::Display,
    {
        let mut buf = Vec::new();
        write_section(&mut buf, "Items", repo, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_report_lists_items_in_id_order() {
        let mut repo = InventoryRepository::new();
        repo.add(ElectronicItem::try_new(2, "Smartphone", 25, "Samsung", 12).unwrap())
            .unwrap();
        repo.add(ElectronicItem::try_new(1, "Laptop", 10, "Dell", 24).unwrap())
            .unwrap();

        let text = render(&repo, ReportFormat::Text);

        assert_eq!(
            text,
            "\n=== Items ===\n\
             Electronic: ID=1, Name=Laptop, Quantity=10, Brand=Dell, Warranty=24 months\n\
             Electronic: ID=2, Name=Smartphone, Quantity=25, Brand=Samsung, Warranty=12 months\n"
        );
    }

    #[test]
    fn empty_text_report_says_so() {
        let repo: InventoryRepository<GroceryItem> = InventoryRepository::new();
        assert!(render(&repo, ReportFormat::Text).contains("No items found."));
    }

    #[test]
    fn json_report_is_one_document_per_section() {
        let mut repo = InventoryRepository::new();
        let expiry = NaiveDate::from_ymd_opt(2026, 10, 26).unwrap();
        repo.add(GroceryItem::try_new(1, "Milk", 50, expiry).unwrap())
            .unwrap();

        let line = render(&repo, ReportFormat::Json);
        let doc: serde_json::Value = serde_json::from_str(line.trim()).unwrap();

        assert_eq!(doc["section"], "Items");
        assert_eq!(doc["items"][0]["name"], "Milk");
        assert_eq!(doc["items"][0]["expiry_date"], "2026-10-26");
    }
}
