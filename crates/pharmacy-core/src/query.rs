//! Search and sort over record collections.
//!
//! Both operate on borrowed slices and return new vectors; the input is
//! never reordered.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Record;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}

/// Records where any of `fields` contains `term`, case-insensitively.
///
/// An empty term matches every record. Missing or empty fields never match
/// a non-empty term, and numeric fields holding zero count as empty. Original
/// order is preserved.
pub fn search<T, F>(records: &[T], term: &str, fields: &[F]) -> Vec<T>
where
    T: Record + Clone,
    F: AsRef<str>,
{
    let term = term.to_lowercase();
    if term.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            fields.iter().any(|field| {
                record
                    .field(field.as_ref())
                    .filter(|value| !value.is_empty())
                    .is_some_and(|value| value.to_search_text().contains(&term))
            })
        })
        .cloned()
        .collect()
}

/// Stable sort of a copy of `records` by the named field.
///
/// Records lacking the field go last in ascending order (first in
/// descending). Equal keys keep their relative order in both directions.
pub fn sort<T>(records: &[T], field: &str, order: SortOrder) -> Vec<T>
where
    T: Record + Clone,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match (a.field(field), b.field(field)) {
            (Some(x), Some(y)) => x.compare(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}
