//! # Display Formatting
//!
//! String rendering for receipts and the terminal UI, plus the one
//! place where operator keystrokes become numbers.
//!
//! Formatting is lossy on purpose (trailing zeros go away); parsing
//! never fails (garbage coerces to zero). Both directions are plain
//! functions so the UI and the receipt printer render identically.

use crate::money::Money;
use crate::weight::{Weight, GRAMS_PER_KG};

/// Renders a weight in kilograms with trailing zeros stripped.
///
/// ```
/// use kilo_core::format::format_weight;
/// use kilo_core::weight::Weight;
///
/// assert_eq!(format_weight(Weight::from_grams(2500)), "2.5 kg");
/// assert_eq!(format_weight(Weight::from_grams(2000)), "2 kg");
/// assert_eq!(format_weight(Weight::from_grams(2)), "0.002 kg");
/// ```
pub fn format_weight(weight: Weight) -> String {
    let grams = weight.grams();
    let sign = if grams < 0 { "-" } else { "" };
    let grams = grams.abs();
    let whole = grams / GRAMS_PER_KG;
    let frac = grams % GRAMS_PER_KG;
    if frac == 0 {
        format!("{sign}{whole} kg")
    } else {
        let frac = format!("{frac:03}");
        format!("{sign}{whole}.{} kg", frac.trim_end_matches('0'))
    }
}

/// Renders money with an explicit currency code: `LKR 225.00`.
///
/// Always two decimal places; the sign sits between code and amount.
///
/// ```
/// use kilo_core::format::format_currency;
/// use kilo_core::money::Money;
///
/// assert_eq!(format_currency(Money::from_cents(22500), "LKR"), "LKR 225.00");
/// assert_eq!(format_currency(Money::from_cents(-550), "LKR"), "LKR -5.50");
/// ```
pub fn format_currency(amount: Money, code: &str) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!(
        "{code} {sign}{}.{:02}",
        amount.rupees().abs(),
        amount.cents_part()
    )
}

/// Coerces a raw keypad string into a weight number.
///
/// Blank, non-numeric, non-finite and negative entries all become
/// `0.0`; a cleared field means "nothing", never an error dialog.
///
/// ```
/// use kilo_core::format::parse_weight_input;
///
/// assert_eq!(parse_weight_input("2.5"), 2.5);
/// assert_eq!(parse_weight_input("  750 "), 750.0);
/// assert_eq!(parse_weight_input(""), 0.0);
/// assert_eq!(parse_weight_input("-3"), 0.0);
/// assert_eq!(parse_weight_input("abc"), 0.0);
/// ```
pub fn parse_weight_input(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}
