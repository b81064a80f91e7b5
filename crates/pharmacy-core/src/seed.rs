//! First-run sample data.
//!
//! Each collection is seeded only when its key is absent. A key that exists,
//! even holding an empty array, is left untouched.

use chrono::NaiveDate;

use crate::models::{Medicine, Sale, StorageKey, Supplier};
use crate::store::{KeyValueStore, RecordStore};
use crate::Result;

/// Which collections were written by a seeding pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub seeded: Vec<StorageKey>,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.seeded.is_empty()
    }
}

/// Populate every absent collection with the sample dataset.
pub fn initialize_sample_data<S>(store: &S, today: NaiveDate) -> Result<SeedReport>
where
    S: KeyValueStore + ?Sized,
{
    let mut report = SeedReport::default();

    if !store.contains_key(StorageKey::Medicines.as_str())? {
        store.put_records(StorageKey::Medicines, &sample_medicines())?;
        report.seeded.push(StorageKey::Medicines);
    }

    if !store.contains_key(StorageKey::Suppliers.as_str())? {
        store.put_records(StorageKey::Suppliers, &sample_suppliers())?;
        report.seeded.push(StorageKey::Suppliers);
    }

    if !store.contains_key(StorageKey::Sales.as_str())? {
        store.put_records(StorageKey::Sales, &sample_sales(today))?;
        report.seeded.push(StorageKey::Sales);
    }

    if report.is_empty() {
        tracing::debug!("Sample data already present, nothing seeded");
    } else {
        tracing::info!("Seeded sample data for {:?}", report.seeded);
    }

    Ok(report)
}

/// The three sample medicines.
pub fn sample_medicines() -> Vec<Medicine> {
    vec![
        medicine("Aspirin", "ASP-001", "Analgesic", 150, 50, 5.99, (2025, 12, 31)),
        medicine("Ibuprofen", "IBU-001", "Anti-inflammatory", 30, 50, 7.99, (2025, 11, 30)),
        medicine("Amoxicillin", "AMX-001", "Antibiotic", 200, 100, 12.50, (2026, 6, 30)),
    ]
}

/// The two sample suppliers.
pub fn sample_suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            name: "MediPharm Inc.".to_string(),
            contact_person: "John Smith".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "john@medipharm.com".to_string(),
            city: "New York".to_string(),
            address: "123 Medical Ave, NY 10001".to_string(),
        },
        Supplier {
            name: "PharmaCare Solutions".to_string(),
            contact_person: "Sarah Johnson".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            email: "sarah@pharmacare.com".to_string(),
            city: "Los Angeles".to_string(),
            address: "456 Pharma St, LA 90001".to_string(),
        },
    ]
}

/// A single sample sale dated `today`.
pub fn sample_sales(today: NaiveDate) -> Vec<Sale> {
    vec![Sale {
        medicine_name: "Aspirin".to_string(),
        medicine_code: "ASP-001".to_string(),
        quantity: 10,
        unit_price: 5.99,
        amount: 59.90,
        date: today,
        customer: "Patient A".to_string(),
    }]
}

fn medicine(
    name: &str,
    code: &str,
    category: &str,
    quantity: i64,
    min_stock: i64,
    price: f64,
    (y, m, d): (i32, u32, u32),
) -> Medicine {
    Medicine {
        name: name.to_string(),
        code: code.to_string(),
        category: category.to_string(),
        quantity,
        min_stock,
        price,
        expiry: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
    }
}
