//! # Totals Engine
//!
//! Derives subtotal, tax amount and grand total from a list of line items
//! and a tax rate.
//!
//! ## Derivation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  items: [LineItem]          tax_rate_percent: f64                   │
//! │       │                            │                                │
//! │       ▼                            │                                │
//! │  subtotal = Σ (quantity × unit_price)                               │
//! │       │                            │                                │
//! │       ├────────────────────────────┘                                │
//! │       ▼                                                             │
//! │  tax_amount = subtotal × rate / 100                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  total = subtotal + tax_amount                                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are derived, never stored: the view-model recomputes them from
//! the item list on every read.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::LineItem;

// =============================================================================
// Totals
// =============================================================================

/// Derived invoice totals.
///
/// Invariant: `total == subtotal + tax_amount` and
/// `tax_amount == subtotal × rate / 100`, exactly as computed (no rounding
/// policy here - rounding belongs to display formatting).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Totals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
}

/// Computes invoice totals from line items and a tax rate percentage.
///
/// Total over its input domain: never fails, always returns a numeric
/// triple. An empty item list yields `{0, 0, 0}`. `NaN` quantities or
/// prices contribute 0 (defensive coercion; upstream form input is already
/// sanitized). Negative quantities or prices are not rejected and
/// propagate arithmetically.
///
/// ## Example
/// ```rust
/// use faktur_core::totals::compute_totals;
/// use faktur_core::types::LineItem;
///
/// let mut item = LineItem::new();
/// item.quantity = 2.0;
/// item.unit_price = 500.0;
///
/// let totals = compute_totals(&[item], 10.0);
/// assert_eq!(totals.subtotal, 1000.0);
/// assert_eq!(totals.tax_amount, 100.0);
/// assert_eq!(totals.total, 1100.0);
/// ```
pub fn compute_totals(items: &[LineItem], tax_rate_percent: f64) -> Totals {
    let subtotal: f64 = items.iter().map(LineItem::line_total).sum();
    let tax_amount = subtotal * tax_rate_percent / 100.0;
    let total = subtotal + tax_amount;

    Totals {
        subtotal,
        tax_amount,
        total,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, unit_price: f64) -> LineItem {
        let mut item = LineItem::new();
        item.quantity = quantity;
        item.unit_price = unit_price;
        item
    }

    #[test]
    fn test_empty_items_yield_zero_triple() {
        let totals = compute_totals(&[], 10.0);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn test_subtotal_sums_line_totals() {
        let items = vec![item(1.0, 10_000_000.0), item(1.0, 15_000_000.0)];
        let totals = compute_totals(&items, 10.0);
        assert_eq!(totals.subtotal, 25_000_000.0);
        assert_eq!(totals.tax_amount, 2_500_000.0);
        assert_eq!(totals.total, 27_500_000.0);
    }

    #[test]
    fn test_total_minus_tax_equals_subtotal() {
        let items = vec![item(3.0, 19.99), item(2.0, 4.37), item(7.0, 0.01)];
        let totals = compute_totals(&items, 8.25);
        assert!((totals.total - totals.tax_amount - totals.subtotal).abs() <= 1e-9);
    }

    #[test]
    fn test_zero_tax_rate() {
        let totals = compute_totals(&[item(2.0, 50.0)], 0.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn test_nan_factors_contribute_zero() {
        let items = vec![item(f64::NAN, 100.0), item(1.0, 200.0)];
        let totals = compute_totals(&items, 10.0);
        assert_eq!(totals.subtotal, 200.0);
    }

    #[test]
    fn test_negative_values_propagate() {
        // Negative quantities are documented behavior, not rejected
        let items = vec![item(-1.0, 100.0), item(2.0, 100.0)];
        let totals = compute_totals(&items, 10.0);
        assert_eq!(totals.subtotal, 100.0);
        assert_eq!(totals.tax_amount, 10.0);
    }

    #[test]
    fn test_idempotence() {
        let items = vec![item(3.0, 33.33)];
        let a = compute_totals(&items, 11.0);
        let b = compute_totals(&items, 11.0);
        assert_eq!(a.subtotal.to_bits(), b.subtotal.to_bits());
        assert_eq!(a.tax_amount.to_bits(), b.tax_amount.to_bits());
        assert_eq!(a.total.to_bits(), b.total.to_bits());
    }

    #[test]
    fn test_totals_serde_shape() {
        let totals = compute_totals(&[item(1.0, 100.0)], 10.0);
        let json = serde_json::to_value(totals).unwrap();
        assert_eq!(json["subtotal"], 100.0);
        assert_eq!(json["taxAmount"], 10.0);
        assert_eq!(json["total"], 110.0);
    }
}
