//! # faktur-app: View-Model and Driver Layer
//!
//! The orchestration layer between the frontend and [`faktur_core`].
//!
//! ## Responsibilities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         faktur-app                                  │
//! │                                                                     │
//! │  state    - InvoiceForm: plain mutable form state, derived totals   │
//! │             FormState: Arc<Mutex> wrapper for concurrent access     │
//! │  preview  - display DTOs with formatted currency strings            │
//! │  export   - PageSink/PrintSurface seams + driver functions          │
//! │                                                                     │
//! │  The frontend, rasterizer, PDF writer and print dialog all live     │
//! │  OUTSIDE this workspace and plug into the traits defined here.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod export;
pub mod preview;
pub mod state;

pub use export::{export_pages, run_print_job, PageSink, PrintSurface};
pub use preview::{InvoicePreview, LineItemView, TotalsView};
pub use state::{FormState, InvoiceForm};
