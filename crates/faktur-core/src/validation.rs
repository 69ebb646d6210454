//! # Validation Module
//!
//! Advisory field validation for the invoice form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Frontend form controls                                    │
//! │  ├── number inputs with min/max attributes                          │
//! │  └── immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE (advisory checks in the controller)           │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Core coercion (silent policy, never fails)                │
//! │  ├── non-numeric input → 0                                          │
//! │  └── unknown currency code → IDR                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The checks here mirror the form's UI conventions (tax rate 0-100,
//! non-negative quantities). They are advisory: the totals engine and
//! formatter stay total and accept anything.

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_DESCRIPTION_LEN, MAX_INVOICE_NUMBER_LEN, MAX_TAX_RATE_PERCENT};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a tax rate percentage against the UI convention (0-100).
pub fn validate_tax_rate_percent(rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "tax rate".to_string(),
        });
    }

    if !(0.0..=MAX_TAX_RATE_PERCENT).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            field: "tax rate".to_string(),
            min: 0.0,
            max: MAX_TAX_RATE_PERCENT,
        });
    }

    Ok(())
}

/// Validates a line-item quantity (finite, non-negative).
pub fn validate_quantity(quantity: f64) -> ValidationResult<()> {
    validate_non_negative("quantity", quantity)
}

/// Validates a unit price (finite, non-negative). Zero is allowed.
pub fn validate_unit_price(unit_price: f64) -> ValidationResult<()> {
    validate_non_negative("unit price", unit_price)
}

fn validate_non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a line-item description length. Empty is allowed (rows are
/// created blank and filled in afterwards).
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates an invoice number (non-empty, bounded length).
pub fn validate_invoice_number(invoice_number: &str) -> ValidationResult<()> {
    let invoice_number = invoice_number.trim();

    if invoice_number.is_empty() {
        return Err(ValidationError::Required {
            field: "invoice number".to_string(),
        });
    }

    if invoice_number.chars().count() > MAX_INVOICE_NUMBER_LEN {
        return Err(ValidationError::TooLong {
            field: "invoice number".to_string(),
            max: MAX_INVOICE_NUMBER_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tax_rate() {
        assert!(validate_tax_rate_percent(0.0).is_ok());
        assert!(validate_tax_rate_percent(10.0).is_ok());
        assert!(validate_tax_rate_percent(100.0).is_ok());

        assert!(validate_tax_rate_percent(-0.1).is_err());
        assert!(validate_tax_rate_percent(100.1).is_err());
        assert!(validate_tax_rate_percent(f64::NAN).is_err());
        assert!(validate_tax_rate_percent(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_quantity_and_price() {
        assert!(validate_quantity(0.0).is_ok());
        assert!(validate_quantity(999.0).is_ok());
        assert!(validate_quantity(-1.0).is_err());
        assert!(validate_quantity(f64::NAN).is_err());

        assert!(validate_unit_price(0.0).is_ok());
        assert!(validate_unit_price(10.99).is_ok());
        assert!(validate_unit_price(-0.01).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("").is_ok());
        assert!(validate_description("Mobile App Development").is_ok());
        assert!(validate_description(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_invoice_number() {
        assert!(validate_invoice_number("INV-001").is_ok());
        assert!(validate_invoice_number("").is_err());
        assert!(validate_invoice_number("   ").is_err());
        assert!(validate_invoice_number(&"9".repeat(51)).is_err());
    }
}
