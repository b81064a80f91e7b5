//! Medicine inventory records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{FieldValue, Record};

/// Days ahead that count as "expiring soon".
pub const EXPIRY_WINDOW_DAYS: i64 = 30;

/// A medicine held in stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    /// Display name
    pub name: String,
    /// Stock code, intended to be unique (e.g., "ASP-001")
    pub code: String,
    /// Therapeutic category (e.g., "Analgesic")
    #[serde(default)]
    pub category: String,
    /// Units on hand
    pub quantity: i64,
    /// Reorder threshold
    pub min_stock: i64,
    /// Unit price
    pub price: f64,
    /// Expiry date
    pub expiry: NaiveDate,
}

impl Medicine {
    /// Create a medicine with required fields and zero stock.
    pub fn new(name: String, code: String, expiry: NaiveDate) -> Self {
        Self {
            name,
            code,
            category: String::new(),
            quantity: 0,
            min_stock: 0,
            price: 0.0,
            expiry,
        }
    }

    /// Quantity has fallen below the reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.min_stock
    }

    /// Value of the units on hand.
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    /// Whole days from `today` until expiry; negative once expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry - today).num_days()
    }

    /// Expires within `window_days`, excluding today and anything already expired.
    pub fn is_expiring_within(&self, today: NaiveDate, window_days: i64) -> bool {
        let days = self.days_until_expiry(today);
        days > 0 && days <= window_days
    }
}

impl Record for Medicine {
    const FIELDS: &'static [&'static str] = &[
        "name", "code", "category", "quantity", "minStock", "price", "expiry",
    ];

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "code" => Some(FieldValue::Text(&self.code)),
            "category" => Some(FieldValue::Text(&self.category)),
            "quantity" => Some(FieldValue::Integer(self.quantity)),
            "minStock" => Some(FieldValue::Integer(self.min_stock)),
            "price" => Some(FieldValue::Decimal(self.price)),
            "expiry" => Some(FieldValue::Date(self.expiry)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_low_stock() {
        let mut med = Medicine::new("Ibuprofen".into(), "IBU-001".into(), date(2030, 1, 1));
        med.quantity = 30;
        med.min_stock = 50;
        assert!(med.is_low_stock());

        med.quantity = 50;
        assert!(!med.is_low_stock());
    }

    #[test]
    fn test_expiry_window() {
        let today = date(2025, 1, 1);
        let med = |expiry| Medicine::new("X".into(), "X".into(), expiry);

        assert!(!med(today).is_expiring_within(today, EXPIRY_WINDOW_DAYS));
        assert!(med(date(2025, 1, 2)).is_expiring_within(today, EXPIRY_WINDOW_DAYS));
        assert!(med(date(2025, 1, 31)).is_expiring_within(today, EXPIRY_WINDOW_DAYS));
        assert!(!med(date(2025, 2, 1)).is_expiring_within(today, EXPIRY_WINDOW_DAYS));
        assert!(!med(date(2024, 12, 1)).is_expiring_within(today, EXPIRY_WINDOW_DAYS));
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = r#"{
            "name": "Aspirin",
            "code": "ASP-001",
            "category": "Analgesic",
            "quantity": 150,
            "minStock": 50,
            "price": 5.99,
            "expiry": "2025-12-31"
        }"#;
        let med: Medicine = serde_json::from_str(json).unwrap();
        assert_eq!(med.min_stock, 50);
        assert_eq!(med.expiry, date(2025, 12, 31));

        let out = serde_json::to_string(&med).unwrap();
        assert!(out.contains("\"minStock\":50"));
        assert!(out.contains("\"expiry\":\"2025-12-31\""));
    }
}
