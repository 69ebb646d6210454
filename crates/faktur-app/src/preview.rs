//! # Preview DTOs
//!
//! Display-ready projections of the form for the invoice preview pane:
//! raw numeric totals plus strings already formatted in the selected
//! currency, so the frontend renders without duplicating format rules.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use faktur_core::currency::format_currency;
use faktur_core::types::{InvoiceDetails, PaymentInfo, RecipientInfo, SenderInfo};

use crate::state::InvoiceForm;

// =============================================================================
// View Rows
// =============================================================================

/// One preview table row with formatted money columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemView {
    pub id: Uuid,
    pub description: String,
    pub quantity: f64,
    /// Unit price formatted in the selected currency.
    pub unit_price_display: String,
    /// Line amount (quantity × unit price) formatted in the selected currency.
    pub amount_display: String,
}

/// Totals block: raw numbers for consumers that compute, formatted
/// strings for consumers that render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsView {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub tax_rate_percent: f64,
    pub subtotal_display: String,
    pub tax_amount_display: String,
    pub total_display: String,
}

/// The full invoice preview payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePreview {
    pub details: InvoiceDetails,
    pub sender: SenderInfo,
    pub recipient: RecipientInfo,
    pub payment: PaymentInfo,
    pub currency_code: String,
    pub items: Vec<LineItemView>,
    pub totals: TotalsView,
}

impl InvoicePreview {
    /// Projects the current form into a display-ready payload.
    pub fn from_form(form: &InvoiceForm) -> Self {
        let currency = form.currency;
        let totals = form.totals();

        let items = form
            .items
            .iter()
            .map(|item| LineItemView {
                id: item.id,
                description: item.description.clone(),
                quantity: item.quantity,
                unit_price_display: format_currency(item.unit_price, currency),
                amount_display: format_currency(item.line_total(), currency),
            })
            .collect();

        InvoicePreview {
            details: form.details.clone(),
            sender: form.sender.clone(),
            recipient: form.recipient.clone(),
            payment: form.payment.clone(),
            currency_code: currency.code().to_string(),
            items,
            totals: TotalsView {
                subtotal: totals.subtotal,
                tax_amount: totals.tax_amount,
                total: totals.total,
                tax_rate_percent: form.tax_rate_percent,
                subtotal_display: format_currency(totals.subtotal, currency),
                tax_amount_display: format_currency(totals.tax_amount, currency),
                total_display: format_currency(totals.total, currency),
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use faktur_core::Currency;

    fn sample_form() -> InvoiceForm {
        let mut form = InvoiceForm::new();
        form.details.invoice_number = "INV-001".to_string();
        let id = form.add_item();
        form.set_item_description(id, "Web Design Service");
        form.set_item_quantity(id, "1");
        form.set_item_unit_price(id, "10000000");
        form
    }

    #[test]
    fn test_preview_formats_in_selected_currency() {
        let form = sample_form();
        let preview = InvoicePreview::from_form(&form);

        assert_eq!(preview.currency_code, "IDR");
        assert_eq!(preview.items[0].unit_price_display, "Rp 10.000.000,00");
        assert_eq!(preview.items[0].amount_display, "Rp 10.000.000,00");
        assert_eq!(preview.totals.subtotal_display, "Rp 10.000.000,00");
        assert_eq!(preview.totals.tax_amount_display, "Rp 1.000.000,00");
        assert_eq!(preview.totals.total_display, "Rp 11.000.000,00");
    }

    #[test]
    fn test_preview_follows_currency_switch() {
        let mut form = sample_form();
        form.currency = Currency::Usd;
        let preview = InvoicePreview::from_form(&form);

        assert_eq!(preview.currency_code, "USD");
        assert_eq!(preview.totals.total_display, "$11,000,000.00");
    }

    #[test]
    fn test_preview_carries_raw_numbers() {
        let preview = InvoicePreview::from_form(&sample_form());
        assert_eq!(preview.totals.subtotal, 10_000_000.0);
        assert_eq!(preview.totals.tax_amount, 1_000_000.0);
        assert_eq!(preview.totals.total, 11_000_000.0);
        assert_eq!(preview.totals.tax_rate_percent, 10.0);
    }

    #[test]
    fn test_preview_serde_shape() {
        let preview = InvoicePreview::from_form(&sample_form());
        let json = serde_json::to_value(&preview).unwrap();
        assert_eq!(json["currencyCode"], "IDR");
        assert_eq!(json["totals"]["totalDisplay"], "Rp 11.000.000,00");
        assert_eq!(json["items"][0]["unitPriceDisplay"], "Rp 10.000.000,00");
        assert_eq!(json["details"]["invoiceNumber"], "INV-001");
    }
}
