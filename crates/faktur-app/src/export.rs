//! # Export and Print Drivers
//!
//! Drives the external collaborators that turn the rendered preview into
//! output: a PDF page writer and the system print dialog. Both are
//! injected behind traits; this module only sequences calls.
//!
//! ## Export Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  rasterizer ──► RenderedBitmap dims ──► paginate() ──► placements   │
//! │                                                            │        │
//! │  for each placement:                                       ▼        │
//! │    page 0:   draw_full_image(offset 0)          ┌───────────────┐   │
//! │    page i>0: add_page(), then                   │   PageSink    │   │
//! │              draw_full_image(negative offset)   │ (PDF writer)  │   │
//! │                                                 └───────────────┘   │
//! │                                                                     │
//! │  The ENTIRE scaled image is drawn on every page; the page canvas    │
//! │  clips it. No per-page cropping.                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use faktur_core::paginate::{paginate, scaled_height_mm, PageGeometry, RenderedBitmap};

// =============================================================================
// PDF Page Sink
// =============================================================================

/// The PDF-page-assembly seam.
///
/// Implementations wrap whatever PDF facility the host application uses.
/// A sink starts with its first page already open; the driver calls
/// [`add_page`](PageSink::add_page) before each subsequent placement.
pub trait PageSink {
    type Error;

    /// Opens a new blank output page.
    fn add_page(&mut self) -> Result<(), Self::Error>;

    /// Draws the entire scaled image on the current page, with its top
    /// edge at `y_offset_mm` (0 or negative). Overflow outside the page
    /// canvas is clipped by the sink.
    fn draw_full_image(
        &mut self,
        y_offset_mm: f64,
        width_mm: f64,
        height_mm: f64,
    ) -> Result<(), Self::Error>;
}

/// Tiles the rendered bitmap across pages of `sink`.
///
/// Returns the number of pages written. Sink errors propagate unchanged.
pub fn export_pages<S: PageSink>(
    bitmap: RenderedBitmap,
    geometry: PageGeometry,
    sink: &mut S,
) -> Result<usize, S::Error> {
    let image_height_mm = scaled_height_mm(bitmap, geometry);
    let placements = paginate(bitmap, geometry);

    debug!(
        width_px = bitmap.width_px,
        height_px = bitmap.height_px,
        image_height_mm,
        pages = placements.len(),
        "exporting invoice pages"
    );

    for placement in &placements {
        if placement.page_index > 0 {
            sink.add_page()?;
        }
        sink.draw_full_image(placement.y_offset_mm, geometry.width_mm, image_height_mm)?;
    }

    Ok(placements.len())
}

// =============================================================================
// Print Surface
// =============================================================================

/// The injected print capability: a side-effecting host procedure the
/// core never touches.
///
/// Implementations own saving and restoring their prior state; the driver
/// only sequences the steps.
pub trait PrintSurface {
    /// Swaps the document title for the duration of the print job.
    fn set_document_title(&mut self, title: &str);

    /// Hides elements marked as not-for-print.
    fn hide_chrome(&mut self);

    /// Opens the system print dialog (blocking in most hosts).
    fn invoke_print(&mut self);

    /// Restores hidden elements and the original document title.
    fn restore_chrome(&mut self);
}

/// Runs a print job: title swap, hide chrome, print, restore.
pub fn run_print_job<S: PrintSurface>(surface: &mut S, invoice_number: &str) {
    let title = format!("Invoice {}", invoice_number);
    debug!(invoice_number, "running print job");

    surface.set_document_title(&title);
    surface.hide_chrome();
    surface.invoke_print();
    surface.restore_chrome();
}

// =============================================================================
// Unit Tests
// =============================================================================
