//! # Currency Formatter
//!
//! Maps a currency selection to a locale/format rule set and renders
//! numeric amounts as localized currency strings.
//!
//! ## Rule Table
//! ```text
//! ┌──────┬───────────┬────────────────────────────────────────────┐
//! │ code │ locale    │ rendering of 1000000                       │
//! ├──────┼───────────┼────────────────────────────────────────────┤
//! │ IDR  │ id-ID     │ Rp 1.000.000,00                            │
//! │ USD  │ en-US     │ $1,000,000.00                              │
//! │ EUR  │ de-DE     │ 1.000.000,00 €                             │
//! │ JPY  │ ja-JP     │ ￥1,000,000          (0 decimals)          │
//! │ CNY  │ zh-CN     │ ¥1,000,000.00                              │
//! │ SAR  │ ar-SA     │ SAR 1,000,000.00    (Latin digits)         │
//! └──────┴───────────┴────────────────────────────────────────────┘
//! ```
//!
//! The table is exhaustive and total: unrecognized codes fall back to the
//! IDR/id-ID entry. Grouping, decimal separator and symbol placement are
//! fixed data per locale; there is no runtime locale lookup, so output is
//! deterministic for a given (amount, currency) pair. SAR is rendered with
//! Latin digits and the ISO code as prefix.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Currency Selection
// =============================================================================

/// The fixed set of selectable invoice currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum Currency {
    /// Indonesian Rupiah (id-ID).
    Idr,
    /// US Dollar (en-US).
    Usd,
    /// Euro (de-DE).
    Eur,
    /// Japanese Yen (ja-JP).
    Jpy,
    /// Chinese Yuan (zh-CN).
    Cny,
    /// Saudi Riyal (ar-SA).
    Sar,
}

impl Currency {
    /// Resolves an ISO currency code, falling back to IDR for anything
    /// unrecognized. Total by design: the UI never sees a formatting error.
    ///
    /// ## Example
    /// ```rust
    /// use faktur_core::currency::Currency;
    ///
    /// assert_eq!(Currency::from_code("USD"), Currency::Usd);
    /// assert_eq!(Currency::from_code("BTC"), Currency::Idr);
    /// ```
    pub fn from_code(code: &str) -> Self {
        match code {
            "IDR" => Currency::Idr,
            "USD" => Currency::Usd,
            "EUR" => Currency::Eur,
            "JPY" => Currency::Jpy,
            "CNY" => Currency::Cny,
            "SAR" => Currency::Sar,
            _ => Currency::Idr,
        }
    }

    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Idr => "IDR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
            Currency::Cny => "CNY",
            Currency::Sar => "SAR",
        }
    }

    /// BCP 47 locale tag the formatting rules were taken from.
    pub const fn locale(&self) -> &'static str {
        match self {
            Currency::Idr => "id-ID",
            Currency::Usd => "en-US",
            Currency::Eur => "de-DE",
            Currency::Jpy => "ja-JP",
            Currency::Cny => "zh-CN",
            Currency::Sar => "ar-SA",
        }
    }

    const fn rules(&self) -> LocaleRules {
        match self {
            Currency::Idr => LocaleRules {
                symbol: "Rp",
                placement: SymbolPlacement::PrefixSpaced,
                group_sep: '.',
                decimal_sep: ',',
                decimals: 2,
            },
            Currency::Usd => LocaleRules {
                symbol: "$",
                placement: SymbolPlacement::Prefix,
                group_sep: ',',
                decimal_sep: '.',
                decimals: 2,
            },
            Currency::Eur => LocaleRules {
                symbol: "€",
                placement: SymbolPlacement::SuffixSpaced,
                group_sep: '.',
                decimal_sep: ',',
                decimals: 2,
            },
            Currency::Jpy => LocaleRules {
                symbol: "￥",
                placement: SymbolPlacement::Prefix,
                group_sep: ',',
                decimal_sep: '.',
                decimals: 0,
            },
            Currency::Cny => LocaleRules {
                symbol: "¥",
                placement: SymbolPlacement::Prefix,
                group_sep: ',',
                decimal_sep: '.',
                decimals: 2,
            },
            Currency::Sar => LocaleRules {
                symbol: "SAR",
                placement: SymbolPlacement::PrefixSpaced,
                group_sep: ',',
                decimal_sep: '.',
                decimals: 2,
            },
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Idr
    }
}

// =============================================================================
// Locale Rules
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum SymbolPlacement {
    /// Symbol directly before the number ("$1,000.00").
    Prefix,
    /// Symbol before the number with a space ("Rp 1.000,00").
    PrefixSpaced,
    /// Symbol after the number with a space ("1.000,00 €").
    SuffixSpaced,
}

#[derive(Debug, Clone, Copy)]
struct LocaleRules {
    symbol: &'static str,
    placement: SymbolPlacement,
    group_sep: char,
    decimal_sep: char,
    decimals: usize,
}

// =============================================================================
// Formatting
// =============================================================================

/// Renders an amount as a localized currency string.
///
/// Deterministic for a given (amount, currency) pair. Rounds to the
/// locale's currency decimal precision (JPY: 0, all others: 2). Negative
/// amounts carry a leading minus sign before the whole rendering.
///
/// ## Example
/// ```rust
/// use faktur_core::currency::{format_currency, Currency};
///
/// assert_eq!(format_currency(1_000_000.0, Currency::Idr), "Rp 1.000.000,00");
/// assert_eq!(format_currency(1234.5, Currency::Usd), "$1,234.50");
/// assert_eq!(format_currency(1234.0, Currency::Jpy), "￥1,234");
/// ```
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let rules = currency.rules();

    // NaN compares false here, so it renders unsigned ("NaN" body)
    let negative = amount < 0.0;
    let magnitude = if negative { -amount } else { amount };

    let fixed = format!("{:.*}", rules.decimals, magnitude);
    let mut parts = fixed.splitn(2, '.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();

    let mut body = group_thousands(int_part, rules.group_sep);
    if rules.decimals > 0 {
        body.push(rules.decimal_sep);
        match frac_part {
            Some(frac) => body.push_str(frac),
            // Non-finite magnitudes have no fractional digits to carry
            None => body.push_str(&"0".repeat(rules.decimals)),
        }
    }

    let rendered = match rules.placement {
        SymbolPlacement::Prefix => format!("{}{}", rules.symbol, body),
        SymbolPlacement::PrefixSpaced => format!("{} {}", rules.symbol, body),
        SymbolPlacement::SuffixSpaced => format!("{} {}", body, rules.symbol),
    };

    if negative {
        format!("-{}", rendered)
    } else {
        rendered
    }
}

/// Inserts a grouping separator every three digits, right to left.
fn group_thousands(int_part: &str, sep: char) -> String {
    let chars: Vec<char> = int_part.chars().collect();
    let mut reversed = String::with_capacity(chars.len() + chars.len() / 3);
    let mut count = 0;
    for i in (0..chars.len()).rev() {
        if count == 3 {
            reversed.push(sep);
            count = 0;
        }
        reversed.push(chars[i]);
        count += 1;
    }
    reversed.chars().rev().collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idr_indonesian_grouping() {
        assert_eq!(format_currency(1_000_000.0, Currency::Idr), "Rp 1.000.000,00");
        assert_eq!(format_currency(0.0, Currency::Idr), "Rp 0,00");
        assert_eq!(format_currency(999.0, Currency::Idr), "Rp 999,00");
    }

    #[test]
    fn test_usd_grouping_and_symbol() {
        assert_eq!(format_currency(1_000_000.0, Currency::Usd), "$1,000,000.00");
        assert_eq!(format_currency(1234.5, Currency::Usd), "$1,234.50");
    }

    #[test]
    fn test_eur_symbol_suffix() {
        assert_eq!(format_currency(1_000_000.0, Currency::Eur), "1.000.000,00 €");
    }

    #[test]
    fn test_jpy_zero_decimals() {
        assert_eq!(format_currency(1_000_000.0, Currency::Jpy), "￥1,000,000");
        assert_eq!(format_currency(1234.0, Currency::Jpy), "￥1,234");
    }

    #[test]
    fn test_cny_and_sar() {
        assert_eq!(format_currency(1_000_000.0, Currency::Cny), "¥1,000,000.00");
        assert_eq!(format_currency(1_000_000.0, Currency::Sar), "SAR 1,000,000.00");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-5.5, Currency::Usd), "-$5.50");
        assert_eq!(format_currency(-1000.0, Currency::Eur), "-1.000,00 €");
    }

    #[test]
    fn test_rounds_to_locale_precision() {
        assert_eq!(format_currency(1234.567, Currency::Usd), "$1,234.57");
        assert_eq!(format_currency(0.4, Currency::Jpy), "￥0");
    }

    #[test]
    fn test_unknown_code_falls_back_to_idr() {
        for amount in [0.0, 1.0, 1234.56, 1_000_000.0, -42.0] {
            assert_eq!(
                format_currency(amount, Currency::from_code("UNKNOWN")),
                format_currency(amount, Currency::Idr),
            );
        }
    }

    #[test]
    fn test_from_code_known_values() {
        assert_eq!(Currency::from_code("IDR"), Currency::Idr);
        assert_eq!(Currency::from_code("USD"), Currency::Usd);
        assert_eq!(Currency::from_code("EUR"), Currency::Eur);
        assert_eq!(Currency::from_code("JPY"), Currency::Jpy);
        assert_eq!(Currency::from_code("CNY"), Currency::Cny);
        assert_eq!(Currency::from_code("SAR"), Currency::Sar);
    }

    #[test]
    fn test_idempotence() {
        let a = format_currency(98765.43, Currency::Idr);
        let b = format_currency(98765.43, Currency::Idr);
        assert_eq!(a, b);
    }

    #[test]
    fn test_locale_tags() {
        assert_eq!(Currency::Idr.locale(), "id-ID");
        assert_eq!(Currency::Sar.locale(), "ar-SA");
        assert_eq!(Currency::default(), Currency::Idr);
    }

    #[test]
    fn test_serde_uppercase_codes() {
        assert_eq!(serde_json::to_string(&Currency::Idr).unwrap(), "\"IDR\"");
        let parsed: Currency = serde_json::from_str("\"JPY\"").unwrap();
        assert_eq!(parsed, Currency::Jpy);
    }
}
