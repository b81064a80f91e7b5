//! Plain-text rendering for the terminal.

use pharmacy_core::stats::{MedicineStatistics, SalesStatistics};
use pharmacy_core::ui::{format_currency, format_date};
use pharmacy_core::{FieldValue, Record};

/// Format one field for display: money as currency, dates spelled out.
fn display_value(field: &str, value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Decimal(n) if is_money(field) => format_currency(n),
        FieldValue::Date(d) => format_date(d),
        other => other.to_string(),
    }
}

fn is_money(field: &str) -> bool {
    matches!(field, "price" | "unitPrice" | "amount")
}

/// Render records as an aligned table with a leading 1-based position column.
pub fn records_table<T: Record>(records: &[T]) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(records.len() + 1);

    let mut header = vec!["#".to_string()];
    header.extend(T::FIELDS.iter().map(|f| f.to_string()));
    rows.push(header);

    for (i, record) in records.iter().enumerate() {
        let mut row = vec![(i + 1).to_string()];
        row.extend(T::FIELDS.iter().map(|f| {
            record
                .field(f)
                .map(|v| display_value(f, v))
                .unwrap_or_default()
        }));
        rows.push(row);
    }

    align(&rows)
}

fn align(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|r| r.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn statistics(meds: &MedicineStatistics, sales: &SalesStatistics) -> String {
    [
        "Medicines".to_string(),
        format!("  Total:            {}", meds.total),
        format!("  Low stock:        {}", meds.low_stock),
        format!("  Inventory value:  {}", format_currency(meds.total_value)),
        format!("  Expiring soon:    {}", meds.expiring_soon),
        "Sales".to_string(),
        format!("  Transactions:     {}", sales.total),
        format!("  Revenue:          {}", format_currency(sales.total_revenue)),
        format!("  Average sale:     {}", format_currency(sales.average_transaction)),
        format!("  Units sold:       {}", sales.total_quantity_sold),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmacy_core::seed::sample_medicines;

    #[test]
    fn test_records_table() {
        let table = records_table(&sample_medicines());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("#  name"));
        assert!(lines[1].starts_with("1  Aspirin"));
        assert!(lines[1].contains("$5.99"));
        assert!(lines[1].contains("Dec 31, 2025"));
    }

    #[test]
    fn test_statistics_block() {
        let text = statistics(&MedicineStatistics::default(), &SalesStatistics::default());
        assert!(text.contains("Average sale:     $0.00"));
    }
}
