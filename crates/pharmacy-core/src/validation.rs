//! Form validation for medicines, suppliers and sales.
//!
//! Every rule is checked and every violation reported; the caller decides
//! whether a failed result blocks the save.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Medicine, Sale, Supplier};

/// Minimum phone length, counting separators.
const MIN_PHONE_LEN: usize = 10;

/// Outcome of validating one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

pub fn validate_medicine(medicine: &Medicine, today: NaiveDate) -> ValidationResult {
    let mut errors = Vec::new();

    if is_blank(&medicine.name) {
        errors.push("Medicine name is required".to_string());
    }
    if is_blank(&medicine.code) {
        errors.push("Medicine code is required".to_string());
    }
    if medicine.quantity < 0 {
        errors.push("Quantity cannot be negative".to_string());
    }
    if !medicine.price.is_finite() {
        errors.push("Price must be a number".to_string());
    } else if medicine.price < 0.0 {
        errors.push("Price cannot be negative".to_string());
    }
    if medicine.expiry < today {
        errors.push("Expiry date cannot be in the past".to_string());
    }

    ValidationResult::from_errors(errors)
}

pub fn validate_supplier(supplier: &Supplier) -> ValidationResult {
    let mut errors = Vec::new();

    if is_blank(&supplier.name) {
        errors.push("Supplier name is required".to_string());
    }
    if !is_valid_email(&supplier.email) {
        errors.push("Valid email address is required".to_string());
    }
    if !is_valid_phone(&supplier.phone) {
        errors.push("Valid phone number is required".to_string());
    }

    ValidationResult::from_errors(errors)
}

/// Check a sale against the stock of the medicine it draws from.
pub fn validate_sale(sale: &Sale, available: i64) -> ValidationResult {
    let mut errors = Vec::new();

    if sale.quantity <= 0 {
        errors.push("Quantity sold must be positive".to_string());
    } else if sale.quantity > available {
        errors.push(format!(
            "Sorry, this quantity is out of stock! Currently available in the warehouse {} just.",
            available
        ));
    }
    if !sale.unit_price.is_finite() || !sale.amount.is_finite() {
        errors.push("Price must be a number".to_string());
    }
    if is_blank(&sale.customer) {
        errors.push("Customer name is required".to_string());
    }

    ValidationResult::from_errors(errors)
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot in the
/// domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // some dot must split the domain into two non-empty parts
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// At least ten characters, all digits, spaces, `-`, `+`, `(` or `)`.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().count() >= MIN_PHONE_LEN
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'))
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
