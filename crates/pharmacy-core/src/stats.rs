//! Inventory and sales statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Medicine, Sale, StorageKey, EXPIRY_WINDOW_DAYS};
use crate::store::{KeyValueStore, RecordStore};
use crate::Result;

/// Summary of the medicine collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineStatistics {
    /// Number of medicines
    pub total: usize,
    /// Medicines below their reorder threshold
    pub low_stock: usize,
    /// Sum of quantity * price
    pub total_value: f64,
    /// Medicines expiring within the window (exclusive of expired)
    pub expiring_soon: usize,
}

impl MedicineStatistics {
    /// Compute statistics over a slice with the default 30-day window.
    pub fn compute(medicines: &[Medicine], today: NaiveDate) -> Self {
        Self::compute_with_window(medicines, today, EXPIRY_WINDOW_DAYS)
    }

    pub fn compute_with_window(medicines: &[Medicine], today: NaiveDate, window_days: i64) -> Self {
        Self {
            total: medicines.len(),
            low_stock: medicines.iter().filter(|m| m.is_low_stock()).count(),
            total_value: medicines.iter().map(Medicine::stock_value).sum(),
            expiring_soon: medicines
                .iter()
                .filter(|m| m.is_expiring_within(today, window_days))
                .count(),
        }
    }
}

/// Summary of the sales collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesStatistics {
    pub total: usize,
    pub total_revenue: f64,
    /// Mean sale amount; 0 when there are no sales
    pub average_transaction: f64,
    pub total_quantity_sold: i64,
}

impl SalesStatistics {
    pub fn compute(sales: &[Sale]) -> Self {
        let total_revenue: f64 = sales.iter().map(|s| s.amount).sum();
        let average_transaction = if sales.is_empty() {
            0.0
        } else {
            total_revenue / sales.len() as f64
        };

        Self {
            total: sales.len(),
            total_revenue,
            average_transaction,
            total_quantity_sold: sales.iter().map(|s| s.quantity).sum(),
        }
    }
}

/// Statistics for the stored medicines. An absent collection counts as empty.
pub fn medicine_statistics<S>(store: &S, today: NaiveDate) -> Result<MedicineStatistics>
where
    S: KeyValueStore + ?Sized,
{
    medicine_statistics_with_window(store, today, EXPIRY_WINDOW_DAYS)
}

/// [`medicine_statistics`] with a custom expiry window in days.
pub fn medicine_statistics_with_window<S>(
    store: &S,
    today: NaiveDate,
    window_days: i64,
) -> Result<MedicineStatistics>
where
    S: KeyValueStore + ?Sized,
{
    let medicines: Vec<Medicine> = store.get_records_or_empty(StorageKey::Medicines)?;
    Ok(MedicineStatistics::compute_with_window(&medicines, today, window_days))
}

/// Statistics for the stored sales. An absent collection counts as empty.
pub fn sales_statistics<S>(store: &S) -> Result<SalesStatistics>
where
    S: KeyValueStore + ?Sized,
{
    let sales: Vec<Sale> = store.get_records_or_empty(StorageKey::Sales)?;
    Ok(SalesStatistics::compute(&sales))
}

/// Stored sales dated within `[start, end]`, inclusive on both ends.
pub fn sales_in_range<S>(store: &S, start: NaiveDate, end: NaiveDate) -> Result<Vec<Sale>>
where
    S: KeyValueStore + ?Sized,
{
    let sales: Vec<Sale> = store.get_records_or_empty(StorageKey::Sales)?;
    Ok(filter_sales_by_date(&sales, start, end))
}

pub fn filter_sales_by_date(sales: &[Sale], start: NaiveDate, end: NaiveDate) -> Vec<Sale> {
    sales
        .iter()
        .filter(|s| s.date >= start && s.date <= end)
        .cloned()
        .collect()
}

/// Stored medicines below their reorder threshold.
pub fn low_stock_medicines<S>(store: &S) -> Result<Vec<Medicine>>
where
    S: KeyValueStore + ?Sized,
{
    let medicines: Vec<Medicine> = store.get_records_or_empty(StorageKey::Medicines)?;
    Ok(medicines.into_iter().filter(Medicine::is_low_stock).collect())
}

/// Stored medicines expiring within `window_days` of `today`.
pub fn expiring_medicines<S>(store: &S, today: NaiveDate, window_days: i64) -> Result<Vec<Medicine>>
where
    S: KeyValueStore + ?Sized,
{
    let medicines: Vec<Medicine> = store.get_records_or_empty(StorageKey::Medicines)?;
    Ok(medicines
        .into_iter()
        .filter(|m| m.is_expiring_within(today, window_days))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{initialize_sample_data, sample_medicines};
    use crate::store::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sale_on(day: NaiveDate, amount: f64, quantity: i64) -> Sale {
        Sale {
            medicine_name: "Aspirin".into(),
            medicine_code: "ASP-001".into(),
            quantity,
            unit_price: amount / quantity as f64,
            amount,
            date: day,
            customer: "A".into(),
        }
    }

    #[test]
    fn test_single_low_stock_medicine() {
        let mut med = Medicine::new("X".into(), "X".into(), date(2030, 1, 1));
        med.quantity = 30;
        med.min_stock = 50;
        med.price = 1.0;

        let stats = MedicineStatistics::compute(&[med], date(2025, 1, 1));
        assert_eq!(stats.total, 1);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.total_value, 30.0);
        assert_eq!(stats.expiring_soon, 0);
    }

    #[test]
    fn test_sample_medicine_statistics() {
        // 20 days before Ibuprofen expires, Aspirin 51 days out
        let stats = MedicineStatistics::compute(&sample_medicines(), date(2025, 11, 10));
        assert_eq!(stats.total, 3);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.expiring_soon, 1);
        let expected = 150.0 * 5.99 + 30.0 * 7.99 + 200.0 * 12.50;
        assert!((stats.total_value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_sales_average_is_zero() {
        let stats = SalesStatistics::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_transaction, 0.0);
        assert!(!stats.average_transaction.is_nan());
    }

    #[test]
    fn test_sales_statistics() {
        let day = date(2025, 3, 1);
        let stats = SalesStatistics::compute(&[sale_on(day, 10.0, 2), sale_on(day, 30.0, 3)]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.total_revenue, 40.0);
        assert_eq!(stats.average_transaction, 20.0);
        assert_eq!(stats.total_quantity_sold, 5);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let sales = vec![
            sale_on(date(2025, 2, 28), 1.0, 1),
            sale_on(date(2025, 3, 1), 2.0, 1),
            sale_on(date(2025, 3, 31), 3.0, 1),
            sale_on(date(2025, 4, 1), 4.0, 1),
        ];
        let march = filter_sales_by_date(&sales, date(2025, 3, 1), date(2025, 3, 31));
        let amounts: Vec<f64> = march.iter().map(|s| s.amount).collect();
        assert_eq!(amounts, vec![2.0, 3.0]);
    }

    #[test]
    fn test_store_backed_statistics() {
        let store = MemoryStore::new();
        assert_eq!(sales_statistics(&store).unwrap(), SalesStatistics::default());

        let today = date(2025, 11, 10);
        initialize_sample_data(&store, today).unwrap();

        let meds = medicine_statistics(&store, today).unwrap();
        assert_eq!(meds.total, 3);
        assert_eq!(meds.expiring_soon, 1);
        let wide = medicine_statistics_with_window(&store, today, 60).unwrap();
        assert_eq!(wide.expiring_soon, 2);

        let sales = sales_statistics(&store).unwrap();
        assert_eq!(sales.total, 1);
        assert_eq!(sales.total_quantity_sold, 10);

        assert_eq!(sales_in_range(&store, today, today).unwrap().len(), 1);
        assert!(sales_in_range(&store, date(2020, 1, 1), date(2020, 12, 31))
            .unwrap()
            .is_empty());

        let low = low_stock_medicines(&store).unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].code, "IBU-001");

        let expiring = expiring_medicines(&store, today, EXPIRY_WINDOW_DAYS).unwrap();
        assert_eq!(expiring.len(), 1);
        assert_eq!(expiring[0].code, "IBU-001");
    }
}
