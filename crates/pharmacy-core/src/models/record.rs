//! Field access by name, shared by search and sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The three record collections held in the local store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKey {
    Medicines,
    Suppliers,
    Sales,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [
        StorageKey::Medicines,
        StorageKey::Suppliers,
        StorageKey::Sales,
    ];

    /// The string key the collection is stored under.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Medicines => "medicines",
            StorageKey::Suppliers => "suppliers",
            StorageKey::Sales => "sales",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "medicines" | "medicine" => Ok(StorageKey::Medicines),
            "suppliers" | "supplier" => Ok(StorageKey::Suppliers),
            "sales" | "sale" => Ok(StorageKey::Sales),
            other => Err(format!("unknown collection: {}", other)),
        }
    }
}

/// A single field value read off a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
    Decimal(f64),
    Date(NaiveDate),
}

impl FieldValue<'_> {
    /// Lowercased text used for substring search.
    pub fn to_search_text(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// Empty text and zero numbers; these never match a search term.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Integer(n) => *n == 0,
            FieldValue::Decimal(x) => *x == 0.0,
            FieldValue::Date(_) => false,
        }
    }

    /// Compare two values of a field.
    ///
    /// Text uses [`collate`], numbers compare numerically (integers and
    /// decimals mix), dates chronologically. Values of unrelated kinds fall
    /// back to a fixed kind order so the comparison stays total.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => collate(a, b),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => a.kind_rank().cmp(&b.kind_rank()),
            },
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(n) => Some(*n as f64),
            FieldValue::Decimal(n) => Some(*n),
            _ => None,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Integer(_) | FieldValue::Decimal(_) => 0,
            FieldValue::Date(_) => 1,
            FieldValue::Text(_) => 2,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Decimal(n) => write!(f, "{}", n),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// Locale-style string ordering: letters compare case-insensitively first,
/// and on a tie lowercase sorts before uppercase.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| {
        for (x, y) in a.chars().zip(b.chars()) {
            if x != y {
                // lowercase first
                return match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => x.cmp(&y),
                };
            }
        }
        a.len().cmp(&b.len())
    })
}

/// A stored record whose fields can be addressed by their JSON name.
pub trait Record {
    /// Names of the fields, in display order.
    const FIELDS: &'static [&'static str];

    /// Read a field by its JSON name (`minStock`, `unitPrice`, ...).
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_round_trip() {
        for key in StorageKey::ALL {
            assert_eq!(key.as_str().parse::<StorageKey>().unwrap(), key);
        }
        assert_eq!("Medicine".parse::<StorageKey>().unwrap(), StorageKey::Medicines);
        assert!("patients".parse::<StorageKey>().is_err());
    }

    #[test]
    fn test_collate_is_case_insensitive_first() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zinc", "aspirin"), Ordering::Greater);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
        assert_eq!(collate("ab", "abc"), Ordering::Less);
    }

    #[test]
    fn test_compare_mixed_numbers() {
        assert_eq!(
            FieldValue::Integer(3).compare(&FieldValue::Decimal(2.5)),
            Ordering::Greater
        );
        assert_eq!(
            FieldValue::Decimal(1.0).compare(&FieldValue::Integer(1)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_search_text() {
        assert_eq!(FieldValue::Text("ASP-001").to_search_text(), "asp-001");
        assert_eq!(FieldValue::Decimal(5.99).to_search_text(), "5.99");
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(FieldValue::Date(date).to_search_text(), "2025-12-31");
    }
}
