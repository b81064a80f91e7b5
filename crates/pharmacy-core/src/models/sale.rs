//! Sale transactions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{FieldValue, Record};

/// A recorded sale.
///
/// `amount` is stored as written; it is not re-derived from
/// `quantity * unit_price` when read back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub medicine_name: String,
    pub medicine_code: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub customer: String,
}

impl Sale {
    /// Create a sale, computing the amount from quantity and unit price.
    pub fn new(
        medicine_name: String,
        medicine_code: String,
        quantity: i64,
        unit_price: f64,
        date: NaiveDate,
        customer: String,
    ) -> Self {
        Self {
            medicine_name,
            medicine_code,
            quantity,
            unit_price,
            amount: quantity as f64 * unit_price,
            date,
            customer,
        }
    }
}

impl Record for Sale {
    const FIELDS: &'static [&'static str] = &[
        "medicineName",
        "medicineCode",
        "quantity",
        "unitPrice",
        "amount",
        "date",
        "customer",
    ];

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "medicineName" => Some(FieldValue::Text(&self.medicine_name)),
            "medicineCode" => Some(FieldValue::Text(&self.medicine_code)),
            "quantity" => Some(FieldValue::Integer(self.quantity)),
            "unitPrice" => Some(FieldValue::Decimal(self.unit_price)),
            "amount" => Some(FieldValue::Decimal(self.amount)),
            "date" => Some(FieldValue::Date(self.date)),
            "customer" => Some(FieldValue::Text(&self.customer)),
            _ => None,
        }
    }
}
