//! Recording a sale against medicine stock.

use chrono::NaiveDate;

use crate::models::{Medicine, Sale, StorageKey};
use crate::store::{KeyValueStore, RecordStore};
use crate::validation::{validate_sale, ValidationResult};
use crate::{PharmacyError, Result};

/// Outcome of [`record_sale`].
#[derive(Debug, Clone, PartialEq)]
pub enum SaleOutcome {
    /// The sale was stored and stock decremented.
    Recorded(Sale),
    /// Validation failed; nothing was written.
    Rejected(ValidationResult),
}

/// Sell `quantity` units of the medicine with `code`.
///
/// The unit price is taken from the medicine and the amount computed from
/// it. On success the medicine's stock is decremented and the sale appended.
pub fn record_sale<S>(
    store: &S,
    code: &str,
    quantity: i64,
    customer: &str,
    date: NaiveDate,
) -> Result<SaleOutcome>
where
    S: KeyValueStore + ?Sized,
{
    let mut medicines: Vec<Medicine> = store
        .get_records(StorageKey::Medicines)?
        .ok_or_else(|| PharmacyError::MissingData(StorageKey::Medicines.to_string()))?;

    let medicine = medicines
        .iter_mut()
        .find(|m| m.code == code)
        .ok_or_else(|| PharmacyError::NotFound(format!("medicine with code {}", code)))?;

    let sale = Sale::new(
        medicine.name.clone(),
        medicine.code.clone(),
        quantity,
        medicine.price,
        date,
        customer.to_string(),
    );

    let result = validate_sale(&sale, medicine.quantity);
    if !result.valid {
        tracing::debug!("Sale of {} x{} rejected: {:?}", code, quantity, result.errors);
        return Ok(SaleOutcome::Rejected(result));
    }

    medicine.quantity -= quantity;

    let mut sales: Vec<Sale> = store.get_records_or_empty(StorageKey::Sales)?;
    sales.push(sale.clone());

    // stock and sales move together or not at all
    let medicines_json = serde_json::to_string(&medicines)?;
    let sales_json = serde_json::to_string(&sales)?;
    store.set_items(&[
        (StorageKey::Medicines.as_str(), medicines_json.as_str()),
        (StorageKey::Sales.as_str(), sales_json.as_str()),
    ])?;

    tracing::info!("Recorded sale of {} x{} for {:.2}", code, quantity, sale.amount);
    Ok(SaleOutcome::Recorded(sale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::initialize_sample_data;
    use crate::store::MemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        initialize_sample_data(&store, today()).unwrap();
        store
    }

    #[test]
    fn test_sale_decrements_stock() {
        let store = seeded();

        let outcome = record_sale(&store, "AMX-001", 4, "Patient B", today()).unwrap();
        let SaleOutcome::Recorded(sale) = outcome else {
            panic!("expected sale to be recorded");
        };
        assert_eq!(sale.unit_price, 12.50);
        assert_eq!(sale.amount, 50.0);
        assert_eq!(sale.medicine_name, "Amoxicillin");

        let medicines: Vec<Medicine> = store.get_records_or_empty(StorageKey::Medicines).unwrap();
        assert_eq!(medicines[2].quantity, 196);

        let sales: Vec<Sale> = store.get_records_or_empty(StorageKey::Sales).unwrap();
        assert_eq!(sales.len(), 2);
        assert_eq!(sales[1], sale);
    }

    #[test]
    fn test_oversell_is_rejected_without_writes() {
        let store = seeded();
        let before = store.get_item("medicines").unwrap();

        let outcome = record_sale(&store, "IBU-001", 31, "Patient C", today()).unwrap();
        match outcome {
            SaleOutcome::Rejected(result) => {
                assert!(!result.valid);
                assert!(result.errors[0].contains("30"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(store.get_item("medicines").unwrap(), before);
    }

    #[test]
    fn test_failed_sales_write_leaves_stock_untouched() {
        let store = seeded();
        store.set_failing_key(Some("sales"));

        assert!(record_sale(&store, "ASP-001", 10, "Patient B", today()).is_err());

        let medicines: Vec<Medicine> = store.get_records_or_empty(StorageKey::Medicines).unwrap();
        assert_eq!(medicines[0].quantity, 150);
        let sales: Vec<Sale> = store.get_records_or_empty(StorageKey::Sales).unwrap();
        assert_eq!(sales.len(), 1);
    }

    #[test]
    fn test_sale_is_atomic_on_sqlite() {
        let db = crate::Database::open_in_memory().unwrap();
        initialize_sample_data(&db, today()).unwrap();
        db.conn()
            .execute_batch(
                "CREATE TRIGGER reject_sales BEFORE UPDATE ON local_storage
                 WHEN NEW.key = 'sales'
                 BEGIN SELECT RAISE(ABORT, 'sales are read-only'); END;",
            )
            .unwrap();

        assert!(record_sale(&db, "ASP-001", 10, "Patient B", today()).is_err());

        let medicines: Vec<Medicine> = db.get_records_or_empty(StorageKey::Medicines).unwrap();
        assert_eq!(medicines[0].quantity, 150);
    }

    #[test]
    fn test_unknown_code() {
        let store = seeded();
        let err = record_sale(&store, "NOPE", 1, "A", today()).unwrap_err();
        assert!(matches!(err, PharmacyError::NotFound(_)));
    }

    #[test]
    fn test_no_medicines() {
        let store = MemoryStore::new();
        let err = record_sale(&store, "ASP-001", 1, "A", today()).unwrap_err();
        assert!(matches!(err, PharmacyError::MissingData(_)));
    }
}
