//! # Paginator
//!
//! Computes the page placements needed to tile one tall rendered bitmap
//! across fixed-size PDF pages.
//!
//! ## Tiling Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  The full scaled image is drawn on EVERY page, shifted upward by a  │
//! │  growing negative offset. The fixed page canvas clips the overflow, │
//! │  which is what produces the tiling:                                 │
//! │                                                                     │
//! │   page 0              page 1              page 2                    │
//! │  ┌────────┐          ┊░░░░░░░░┊          ┊░░░░░░░░┊ ← clipped       │
//! │  │ top    │          ┌────────┐          ┊░░░░░░░░┊                 │
//! │  │ of     │          │ middle │          ┌────────┐                 │
//! │  │ image  │          │ of     │          │ bottom │                 │
//! │  └────────┘          │ image  │          │ of     │                 │
//! │  ┊░░░░░░░░┊          └────────┘          │ image  │                 │
//! │  ┊░░░░░░░░┊          ┊░░░░░░░░┊          └────────┘                 │
//! │                                                                     │
//! │  y_offset:  0          -297                -594                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Redrawing the whole image per page (instead of cropping per-page
//! sub-images) is a deliberate simplicity trade-off inherited from the
//! export format: it avoids bitmap cropping arithmetic at the cost of
//! redundant draws, and the placement sequence must stay bit-for-bit
//! stable for output compatibility.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{A4_HEIGHT_MM, A4_WIDTH_MM};

// =============================================================================
// Geometry Types
// =============================================================================

/// Pixel dimensions of the rasterized invoice preview.
///
/// Produced by an external rasterizer; the core never touches pixel data,
/// only the dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RenderedBitmap {
    pub width_px: u32,
    pub height_px: u32,
}

/// Fixed output page size in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PageGeometry {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PageGeometry {
    /// A4 portrait: 210 × 297 mm.
    pub const fn a4() -> Self {
        PageGeometry {
            width_mm: A4_WIDTH_MM,
            height_mm: A4_HEIGHT_MM,
        }
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::a4()
    }
}

/// One "draw the full image at this vertical offset" instruction.
///
/// `y_offset_mm` is 0 on the first page and negative on later pages:
/// the same full image is shifted upward so a lower portion lands inside
/// the page canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PagePlacement {
    /// 0-based output page index.
    pub page_index: usize,
    pub y_offset_mm: f64,
}

// =============================================================================
// Pagination
// =============================================================================

/// Height of the bitmap after being scaled to exactly fill the page width.
///
/// `height_px × (page_width_mm / width_px)` - the image always fills the
/// full page width and its height follows proportionally.
pub fn scaled_height_mm(bitmap: RenderedBitmap, geometry: PageGeometry) -> f64 {
    bitmap.height_px as f64 * (geometry.width_mm / bitmap.width_px as f64)
}

/// Computes the ordered placement sequence tiling `bitmap` across pages.
///
/// Always emits at least one placement (`{0, 0.0}`). Each later page `i`
/// gets `y_offset_mm = remaining − scaled_height` where `remaining` is the
/// image height still below the previous page's bottom edge.
///
/// The loop bound is `remaining >= 0`, not `> 0`: when the scaled image
/// height is an exact multiple of the page height this emits one extra
/// trailing placement whose visible window is empty. Known quirk, kept
/// for output compatibility with existing exports.
///
/// A `width_px` of 0 is outside the documented input domain and is not
/// guarded; the rasterizer never produces zero-width bitmaps.
///
/// ## Example
/// ```rust
/// use faktur_core::paginate::{paginate, PageGeometry, RenderedBitmap};
///
/// // 1000×1000 px scales to 210 mm tall: fits on a single A4 page
/// let placements = paginate(
///     RenderedBitmap { width_px: 1000, height_px: 1000 },
///     PageGeometry::a4(),
/// );
/// assert_eq!(placements.len(), 1);
/// assert_eq!(placements[0].y_offset_mm, 0.0);
/// ```
pub fn paginate(bitmap: RenderedBitmap, geometry: PageGeometry) -> Vec<PagePlacement> {
    let scaled_height = scaled_height_mm(bitmap, geometry);

    let mut placements = vec![PagePlacement {
        page_index: 0,
        y_offset_mm: 0.0,
    }];

    let mut remaining = scaled_height - geometry.height_mm;
    let mut page_index = 0;

    while remaining >= 0.0 {
        page_index += 1;
        placements.push(PagePlacement {
            page_index,
            y_offset_mm: remaining - scaled_height,
        });
        remaining -= geometry.height_mm;
    }

    placements
}

// =============================================================================
// Unit Tests
// =============================================================================
