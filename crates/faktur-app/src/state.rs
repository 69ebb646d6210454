//! # Form State
//!
//! The invoice form as plain mutable state owned by the controller layer.
//!
//! ## Form Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Form State Operations                            │
//! │                                                                     │
//! │  Frontend Action          Controller Call        State Change       │
//! │  ───────────────          ───────────────        ────────────       │
//! │                                                                     │
//! │  Click "Add Item" ───────► add_item() ─────────► items.push(fresh)  │
//! │                                                                     │
//! │  Edit qty/price field ───► set_item_*() ───────► item field = n     │
//! │                             (input coerced)                         │
//! │                                                                     │
//! │  Click Remove ───────────► remove_item(id) ────► items.retain(..)   │
//! │                                                                     │
//! │  Render preview ─────────► totals() ───────────► (derived, no       │
//! │                                                   stored state)     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are never stored: every read recomputes them from the item list
//! and tax rate, so the form can never display a stale total.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use faktur_core::totals::{compute_totals, Totals};
use faktur_core::types::{
    coerce_numeric_input, InvoiceDetails, LineItem, PaymentInfo, RecipientInfo, SenderInfo,
};
use faktur_core::Currency;

// =============================================================================
// Invoice Form
// =============================================================================

/// The whole invoice form as one mutable struct.
///
/// ## Invariants
/// - Items are unique by `id` (each "add item" mints a fresh UUID)
/// - Numeric field edits go through [`coerce_numeric_input`], so
///   `quantity`, `unit_price` and `tax_rate_percent` are never NaN after
///   a form edit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceForm {
    pub sender: SenderInfo,
    pub recipient: RecipientInfo,
    pub payment: PaymentInfo,
    pub details: InvoiceDetails,
    pub items: Vec<LineItem>,
    /// Tax rate percent, 0-100 by UI convention.
    pub tax_rate_percent: f64,
    pub currency: Currency,
}

impl InvoiceForm {
    /// Creates an empty form with today's dates, 10% tax and IDR.
    pub fn new() -> Self {
        let today = Utc::now().date_naive();
        InvoiceForm {
            sender: SenderInfo::default(),
            recipient: RecipientInfo::default(),
            payment: PaymentInfo {
                bank_name: String::new(),
                account_name: String::new(),
                account_number: String::new(),
                reference_code: String::new(),
                due_date: today,
                notes: String::new(),
            },
            details: InvoiceDetails {
                invoice_number: String::new(),
                invoice_date: today,
            },
            items: Vec::new(),
            tax_rate_percent: 10.0,
            currency: Currency::Idr,
        }
    }

    /// Adds a fresh zero-valued line item and returns its id.
    pub fn add_item(&mut self) -> Uuid {
        let item = LineItem::new();
        let id = item.id;
        self.items.push(item);
        debug!(item_id = %id, count = self.items.len(), "line item added");
        id
    }

    /// Removes a line item by id. Returns `false` if no item matched.
    pub fn remove_item(&mut self, id: Uuid) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != initial_len;
        if removed {
            debug!(item_id = %id, count = self.items.len(), "line item removed");
        }
        removed
    }

    /// Edits an item's description in place. Returns `false` on unknown id.
    pub fn set_item_description(&mut self, id: Uuid, description: &str) -> bool {
        match self.item_mut(id) {
            Some(item) => {
                item.description = description.to_string();
                true
            }
            None => false,
        }
    }

    /// Edits an item's quantity from raw form input (coerced).
    pub fn set_item_quantity(&mut self, id: Uuid, raw: &str) -> bool {
        let quantity = coerce_numeric_input(raw);
        match self.item_mut(id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Edits an item's unit price from raw form input (coerced).
    pub fn set_item_unit_price(&mut self, id: Uuid, raw: &str) -> bool {
        let unit_price = coerce_numeric_input(raw);
        match self.item_mut(id) {
            Some(item) => {
                item.unit_price = unit_price;
                true
            }
            None => false,
        }
    }

    /// Sets the tax rate from raw form input (coerced).
    pub fn set_tax_rate_input(&mut self, raw: &str) {
        self.tax_rate_percent = coerce_numeric_input(raw);
    }

    /// Running total for a single item row, if it exists.
    pub fn item_total(&self, id: Uuid) -> Option<f64> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(LineItem::line_total)
    }

    /// Derived invoice totals, recomputed on every call.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.items, self.tax_rate_percent)
    }

    fn item_mut(&mut self, id: Uuid) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

impl Default for InvoiceForm {
    fn default() -> Self {
        InvoiceForm::new()
    }
}

// =============================================================================
// Shared Form State
// =============================================================================

/// Shared form state for concurrent controller access.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<InvoiceForm>>`:
/// - `Arc`: shared ownership across controller threads
/// - `Mutex`: one writer at a time; form edits are quick
#[derive(Debug)]
pub struct FormState {
    form: Arc<Mutex<InvoiceForm>>,
}

impl FormState {
    /// Creates a fresh form state.
    pub fn new() -> Self {
        FormState {
            form: Arc::new(Mutex::new(InvoiceForm::new())),
        }
    }

    /// Executes a function with read access to the form.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = form_state.with_form(|form| form.totals());
    /// ```
    pub fn with_form<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InvoiceForm) -> R,
    {
        let form = self.form.lock().expect("Form mutex poisoned");
        f(&form)
    }

    /// Executes a function with write access to the form.
    pub fn with_form_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InvoiceForm) -> R,
    {
        let mut form = self.form.lock().expect("Form mutex poisoned");
        f(&mut form)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty_with_defaults() {
        let form = InvoiceForm::new();
        assert!(form.items.is_empty());
        assert_eq!(form.tax_rate_percent, 10.0);
        assert_eq!(form.currency, Currency::Idr);
    }

    #[test]
    fn test_add_item_creates_zeroed_row() {
        let mut form = InvoiceForm::new();
        let id = form.add_item();

        assert_eq!(form.items.len(), 1);
        assert_eq!(form.items[0].id, id);
        assert_eq!(form.items[0].quantity, 0.0);
        assert_eq!(form.items[0].unit_price, 0.0);
    }

    #[test]
    fn test_field_edits_mutate_in_place() {
        let mut form = InvoiceForm::new();
        let id = form.add_item();

        assert!(form.set_item_description(id, "Web Design Service"));
        assert!(form.set_item_quantity(id, "2"));
        assert!(form.set_item_unit_price(id, "10000000"));

        assert_eq!(form.items[0].description, "Web Design Service");
        assert_eq!(form.item_total(id), Some(20_000_000.0));
    }

    #[test]
    fn test_invalid_numeric_input_coerces_to_zero() {
        let mut form = InvoiceForm::new();
        let id = form.add_item();
        form.set_item_quantity(id, "3");
        form.set_item_unit_price(id, "100");

        form.set_item_quantity(id, "not a number");
        assert_eq!(form.items[0].quantity, 0.0);
        assert_eq!(form.item_total(id), Some(0.0));
    }

    #[test]
    fn test_remove_item_by_id() {
        let mut form = InvoiceForm::new();
        let first = form.add_item();
        let second = form.add_item();

        assert!(form.remove_item(first));
        assert_eq!(form.items.len(), 1);
        assert_eq!(form.items[0].id, second);

        // Removing again is a no-op
        assert!(!form.remove_item(first));
    }

    #[test]
    fn test_edits_on_unknown_id_are_rejected() {
        let mut form = InvoiceForm::new();
        form.add_item();
        assert!(!form.set_item_quantity(Uuid::new_v4(), "5"));
        assert!(form.item_total(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_totals_derived_on_every_read() {
        let mut form = InvoiceForm::new();
        let id = form.add_item();
        form.set_item_quantity(id, "1");
        form.set_item_unit_price(id, "1000");

        assert_eq!(form.totals().total, 1100.0);

        form.set_tax_rate_input("20");
        assert_eq!(form.totals().total, 1200.0);
    }

    #[test]
    fn test_form_state_closure_access() {
        let state = FormState::new();

        let id = state.with_form_mut(|form| {
            let id = form.add_item();
            form.set_item_quantity(id, "4");
            form.set_item_unit_price(id, "25");
            id
        });

        let (count, total) = state.with_form(|form| (form.items.len(), form.item_total(id)));
        assert_eq!(count, 1);
        assert_eq!(total, Some(100.0));
    }
}
