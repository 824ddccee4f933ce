//! # Weight Handling
//!
//! All weights are stored as **integer grams** (i64).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    WHY INTEGER GRAMS?                           │
//! │                                                                 │
//! │  Products are priced per kilogram but weighed to the gram.      │
//! │  Kilograms rounded to 3 decimal places ARE whole grams:         │
//! │                                                                 │
//! │     2.5 kg          =  2500 g  (exact)                          │
//! │     2 kg + 500 g    =  2500 g  (exact)                          │
//! │     0.333 kg        =   333 g  (exact)                          │
//! │                                                                 │
//! │  So kilogram math with half-up rounding at the 3rd decimal      │
//! │  collapses to exact integer arithmetic on grams.                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Floats appear only at the boundary: the scale display and the keypad
//! both produce `f64`, which [`Weight::from_split`] normalizes once.
//! Everything downstream is integer math.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Grams per kilogram, for conversions at the input/display boundary.
pub const GRAMS_PER_KG: i64 = 1000;

/// Largest gram value accepted in the "grams" half of a split entry.
const MAX_SPLIT_GRAMS: f64 = 999.0;

/// A weight in integer grams.
///
/// # Examples
///
/// ```
/// use kilo_core::weight::Weight;
///
/// let w = Weight::from_split(2.0, 500.0);
/// assert_eq!(w.grams(), 2500);
/// assert_eq!(w.to_string(), "2.5 kg");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Weight(i64);

impl Weight {
    /// Zero grams.
    pub const ZERO: Weight = Weight(0);

    /// Creates a weight from a raw gram count.
    pub fn from_grams(grams: i64) -> Self {
        Weight(grams)
    }

    /// Normalizes a split kilogram + gram entry into one canonical weight.
    ///
    /// Cashiers enter weight in two boxes (whole kilograms, loose grams),
    /// so the two halves are corrected independently:
    /// - the gram half is clamped into `0..=999`; a non-finite gram
    ///   entry contributes nothing rather than poisoning the total
    /// - the kilogram half floors at zero: a negative or NaN entry
    ///   contributes nothing, the same coercion the keypad parser
    ///   applies to a negative string
    /// - the combined value rounds half-up at the gram
    ///
    /// The floor matters for box entries: a split weight can never come
    /// out negative, so a tare can only ever reduce a net weight.
    ///
    /// ```
    /// use kilo_core::weight::Weight;
    ///
    /// assert_eq!(Weight::from_split(2.0, 500.0).grams(), 2500);
    /// assert_eq!(Weight::from_split(0.5, 1500.0).grams(), 1499); // grams capped at 999
    /// assert_eq!(Weight::from_split(1.0, -200.0).grams(), 1000); // negative grams ignored
    /// assert_eq!(Weight::from_split(-3.0, 250.0).grams(), 250);  // negative kilograms too
    /// ```
    pub fn from_split(kg: f64, grams: f64) -> Self {
        // f64::max sends a NaN kg half to the 0.0 arm
        let kg = kg.max(0.0);
        let grams = if grams.is_finite() {
            grams.clamp(0.0, MAX_SPLIT_GRAMS)
        } else {
            0.0
        };
        Weight((kg * GRAMS_PER_KG as f64 + grams).round() as i64)
    }

    /// Normalizes a plain kilogram reading, rounding half-up at the gram.
    pub fn from_kg(kg: f64) -> Self {
        Weight((kg * GRAMS_PER_KG as f64).round() as i64)
    }

    /// Raw gram count.
    pub fn grams(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Total weight of `count` identical units, e.g. tare of N boxes.
    /// Saturates instead of overflowing on absurd counts.
    pub fn multiply_count(&self, count: u32) -> Weight {
        Weight(self.0.saturating_mul(count as i64))
    }

    /// What remains after deducting packaging, floored at zero.
    ///
    /// A tare heavier than the gross reading yields zero, never a
    /// negative weight; the validator reports that case separately.
    pub fn less_tare(&self, tare: Weight) -> Weight {
        Weight(self.0.saturating_sub(tare.0).max(0))
    }

    /// Price of this weight at a per-kilogram rate, rounded half-up
    /// at the cent.
    ///
    /// ```
    /// use kilo_core::money::Money;
    /// use kilo_core::weight::Weight;
    ///
    /// let rate = Money::from_rupees(100, 0); // Rs. 100.00 per kg
    /// let net = Weight::from_grams(2500);
    /// assert_eq!(net.price_at(rate).cents(), 25000);
    /// ```
    pub fn price_at(&self, per_kg: Money) -> Money {
        let cents = (self.0 as i128 * per_kg.cents() as i128 + 500) / 1000;
        Money::from_cents(cents as i64)
    }
}

impl std::fmt::Display for Weight {
    /// Formats as kilograms with trailing zeros stripped: `2.5 kg`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::format_weight(*self))
    }
}
