//! # Domain Types
//!
//! Core domain types for the invoice builder.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐       │
//! │  │   LineItem     │   │ InvoiceDetails │   │  PaymentInfo   │       │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │       │
//! │  │  id (UUID)     │   │  number        │   │  bank_name     │       │
//! │  │  description   │   │  date          │   │  account_*     │       │
//! │  │  quantity      │   └────────────────┘   │  due_date      │       │
//! │  │  unit_price    │                        │  notes         │       │
//! │  └────────────────┘                        └────────────────┘       │
//! │                                                                     │
//! │  SenderInfo / RecipientInfo: opaque address blocks, passed through  │
//! │  to the preview and export layers without processing.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Numeric Policy
//! Quantities and prices are `f64` and follow the form's coercion rules:
//! non-numeric input becomes `0`, `NaN` factors contribute `0` to a line
//! total, and negative values propagate arithmetically (documented
//! behavior). See [`coerce_numeric_input`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Line Item
// =============================================================================

/// One invoice row: description, quantity and unit price.
///
/// ## Lifecycle
/// - Created on "add item" with a fresh v4 id and zero values
/// - Mutated in place by field edits (via the view-model layer)
/// - Removed by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Unique identifier (UUID v4).
    #[ts(as = "String")]
    pub id: Uuid,

    /// Free-text description shown on the invoice row.
    pub description: String,

    /// Quantity. Non-numeric form input coerces to 0.
    pub quantity: f64,

    /// Unit price in the selected currency's major unit.
    pub unit_price: f64,
}

impl LineItem {
    /// Creates a fresh line item with a new id and zero values.
    pub fn new() -> Self {
        LineItem {
            id: Uuid::new_v4(),
            description: String::new(),
            quantity: 0.0,
            unit_price: 0.0,
        }
    }

    /// Line total (quantity × unit price) with `NaN` factors coerced to 0.
    ///
    /// ## Example
    /// ```rust
    /// use faktur_core::types::LineItem;
    ///
    /// let mut item = LineItem::new();
    /// item.quantity = 3.0;
    /// item.unit_price = 2.5;
    /// assert_eq!(item.line_total(), 7.5);
    /// ```
    pub fn line_total(&self) -> f64 {
        let quantity = if self.quantity.is_nan() { 0.0 } else { self.quantity };
        let unit_price = if self.unit_price.is_nan() { 0.0 } else { self.unit_price };
        quantity * unit_price
    }
}

impl Default for LineItem {
    fn default() -> Self {
        LineItem::new()
    }
}

// =============================================================================
// Numeric Input Coercion
// =============================================================================

/// Coerces raw numeric form input to an `f64`.
///
/// Parses the longest leading prefix that forms a valid decimal number
/// (optional sign, digits, decimal point, optional exponent). Empty or
/// unparseable input yields `0.0`, matching the form's silent-coercion
/// policy for quantity, unit price and tax rate fields.
///
/// ## Example
/// ```rust
/// use faktur_core::types::coerce_numeric_input;
///
/// assert_eq!(coerce_numeric_input("12.5"), 12.5);
/// assert_eq!(coerce_numeric_input("  -3"), -3.0);
/// assert_eq!(coerce_numeric_input("7x"), 7.0);
/// assert_eq!(coerce_numeric_input(""), 0.0);
/// assert_eq!(coerce_numeric_input("abc"), 0.0);
/// ```
pub fn coerce_numeric_input(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        // A bare "." with no digits on either side is not a number
        if has_digits || frac_end > frac_start {
            end = frac_end;
            has_digits = true;
        }
    }

    if !has_digits {
        return 0.0;
    }

    // Exponent is only consumed if it is complete ("1e" parses as 1)
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

// =============================================================================
// Invoice Metadata (pass-through)
// =============================================================================

/// Invoice number and issue date. Passed through opaquely by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceDetails {
    pub invoice_number: String,
    #[ts(as = "String")]
    pub invoice_date: NaiveDate,
}

/// Sender ("from") address block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SenderInfo {
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

/// Recipient ("to") address block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecipientInfo {
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub email: String,
}

/// Payment instructions shown on the invoice footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PaymentInfo {
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
    /// Free-form payment reference code.
    pub reference_code: String,
    #[ts(as = "String")]
    pub due_date: NaiveDate,
    pub notes: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
