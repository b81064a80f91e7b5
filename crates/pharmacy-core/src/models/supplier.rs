//! Supplier records.

use serde::{Deserialize, Serialize};

use super::record::{FieldValue, Record};

/// A supplier the pharmacy orders from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Supplier {
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub address: String,
}

impl Supplier {
    pub fn new(name: String, email: String, phone: String) -> Self {
        Self {
            name,
            email,
            phone,
            ..Self::default()
        }
    }
}

impl Record for Supplier {
    const FIELDS: &'static [&'static str] =
        &["name", "contactPerson", "phone", "email", "city", "address"];

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        let value = match name {
            "name" => &self.name,
            "contactPerson" => &self.contact_person,
            "phone" => &self.phone,
            "email" => &self.email,
            "city" => &self.city,
            "address" => &self.address,
            _ => return None,
        };
        Some(FieldValue::Text(value))
    }
}
