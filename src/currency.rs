//! Currency display formatting.
//!
//! Prices are always computed as `f64` and only turned into strings here,
//! at the presentation edge.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Locale rules for rendering a currency amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub group_separator: char,
    pub decimal_separator: char,
    /// Put a space between the symbol and the digits (`R$ 10,50`).
    pub symbol_spaced: bool,
}

impl CurrencyFormat {
    pub fn en_us() -> Self {
        Self {
            symbol: "$".to_string(),
            group_separator: ',',
            decimal_separator: '.',
            symbol_spaced: false,
        }
    }

    pub fn pt_br() -> Self {
        Self {
            symbol: "R$".to_string(),
            group_separator: '.',
            decimal_separator: ',',
            symbol_spaced: true,
        }
    }

    /// Look up a preset by locale tag (`en-US`, `pt-BR`, case-insensitive).
    pub fn from_locale(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Some(Self::en_us()),
            "pt-br" | "pt" => Some(Self::pt_br()),
            _ => None,
        }
    }

    /// Format `value` with grouping and exactly two fraction digits.
    pub fn format(&self, value: f64) -> String {
        let cents = to_cents(value);
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.unsigned_abs();
        let whole = group_digits(abs / 100, self.group_separator);
        let space = if self.symbol_spaced { " " } else { "" };
        format!(
            "{sign}{}{space}{whole}{}{:02}",
            self.symbol,
            self.decimal_separator,
            abs % 100
        )
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::en_us()
    }
}

/// Format with the default (en-US) rules: `10.5` -> `"$10.50"`.
pub fn format_currency(value: f64) -> String {
    CurrencyFormat::en_us().format(value)
}

/// Round to whole cents, half away from zero. Non-finite input counts as zero.
///
/// Rounding works on the shortest decimal form of `value` (`1.005` is a tie,
/// even though its binary form is slightly below it).
fn to_cents(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| (d * Decimal::ONE_HUNDRED).to_i64())
        // Beyond Decimal's range the cent digit is noise anyway.
        .unwrap_or_else(|| (value * 100.0).round() as i64)
}

fn group_digits(mut n: u64, separator: char) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(&separator.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_fraction_digits() {
        assert_eq!(format_currency(10.5), "$10.50");
        assert_eq!(format_currency(10.0), "$10.00");
        assert_eq!(format_currency(5.5), "$5.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(31.0), "$31.00");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_currency(-3.0), "-$3.00");
    }

    #[test]
    fn test_rounds_to_cents() {
        assert_eq!(format_currency(2.346), "$2.35");
        assert_eq!(format_currency(0.004), "$0.00");
    }

    #[test]
    fn test_decimal_ties_round_away_from_zero() {
        assert_eq!(format_currency(1.005), "$1.01");
        assert_eq!(format_currency(0.285), "$0.29");
        assert_eq!(format_currency(1.115), "$1.12");
        assert_eq!(format_currency(8.345), "$8.35");
        assert_eq!(format_currency(-1.005), "-$1.01");
        assert_eq!(format_currency(0.284), "$0.28");
    }

    #[test]
    fn test_huge_amount_still_formats() {
        assert_eq!(format_currency(1e15), "$1,000,000,000,000,000.00");
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(format_currency(f64::NAN), "$0.00");
        assert_eq!(format_currency(f64::INFINITY), "$0.00");
    }

    #[test]
    fn test_pt_br_preset() {
        assert_eq!(CurrencyFormat::pt_br().format(1234.5), "R$ 1.234,50");
        assert_eq!(CurrencyFormat::pt_br().format(19.9), "R$ 19,90");
    }

    #[test]
    fn test_from_locale() {
        assert_eq!(CurrencyFormat::from_locale("pt_BR"), Some(CurrencyFormat::pt_br()));
        assert_eq!(CurrencyFormat::from_locale(" EN-us "), Some(CurrencyFormat::en_us()));
        assert_eq!(CurrencyFormat::from_locale("de-DE"), None);
    }
}
