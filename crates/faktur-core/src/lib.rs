//! # faktur-core: Pure Business Logic for the Invoice Builder
//!
//! This crate is the **heart** of the invoice builder. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Invoice Builder Architecture                   │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    Frontend (web form + preview)              │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                faktur-app (view-model + drivers)              │  │
//! │  │    InvoiceForm state, preview DTOs, export/print seams        │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │               ★ faktur-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │   ┌─────────┐  ┌─────────┐  ┌──────────┐  ┌────────────┐     │  │
//! │  │   │  types  │  │ totals  │  │ currency │  │  paginate  │     │  │
//! │  │   │LineItem │  │ Totals  │  │ Currency │  │ Placement  │     │  │
//! │  │   └─────────┘  └─────────┘  └──────────┘  └────────────┘     │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO ASYNC • NO SHARED STATE • PURE FUNCTIONS        │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, invoice metadata, input coercion)
//! - [`totals`] - Derived totals (subtotal, tax amount, grand total)
//! - [`currency`] - Multi-currency display formatting
//! - [`paginate`] - Page-tiling arithmetic for PDF export
//! - [`error`] - Validation error types
//! - [`validation`] - Advisory field validation for the UI layer
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic, reentrant, callable concurrently
//!    with no coordination
//! 2. **No I/O**: rasterization, PDF assembly and printing are external
//!    collaborators supplying plain data
//! 3. **Total Operations**: the three core operations never fail - invalid
//!    numeric input coerces to 0, unknown currency codes fall back to IDR
//!
//! ## Example Usage
//!
//! ```rust
//! use faktur_core::currency::{format_currency, Currency};
//! use faktur_core::totals::compute_totals;
//! use faktur_core::types::LineItem;
//!
//! let mut item = LineItem::new();
//! item.description = "Web Design Service".to_string();
//! item.quantity = 1.0;
//! item.unit_price = 10_000_000.0;
//!
//! let totals = compute_totals(&[item], 10.0);
//! assert_eq!(totals.total, 11_000_000.0);
//!
//! assert_eq!(
//!     format_currency(totals.total, Currency::Idr),
//!     "Rp 11.000.000,00"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod paginate;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use faktur_core::Currency` instead of
// `use faktur_core::currency::Currency`

pub use currency::{format_currency, Currency};
pub use error::ValidationError;
pub use paginate::{paginate, PageGeometry, PagePlacement, RenderedBitmap};
pub use totals::{compute_totals, Totals};
pub use types::{coerce_numeric_input, LineItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// A4 portrait page width in millimeters.
pub const A4_WIDTH_MM: f64 = 210.0;

/// A4 portrait page height in millimeters.
pub const A4_HEIGHT_MM: f64 = 297.0;

/// Maximum tax rate accepted by the advisory validator, in percent.
///
/// ## Note
/// This is a UI convention, not a hard invariant: [`totals::compute_totals`]
/// accepts any rate and lets it propagate arithmetically.
pub const MAX_TAX_RATE_PERCENT: f64 = 100.0;

/// Maximum length of a line-item description.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Maximum length of an invoice number.
pub const MAX_INVOICE_NUMBER_LEN: usize = 50;
