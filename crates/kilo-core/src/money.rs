//! # Money Handling
//!
//! All monetary amounts are stored as **integer cents** (i64).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    WHY INTEGER CENTS?                           │
//! │                                                                 │
//! │  Floating point breaks money math:                              │
//! │     0.1 + 0.2 = 0.30000000000000004                             │
//! │                                                                 │
//! │  With integer cents:                                            │
//! │     Rs. 225.00  =  22500 cents (exact)                          │
//! │     Rs.   0.05  =      5 cents (exact)                          │
//! │                                                                 │
//! │  Range: ±92 quadrillion rupees. Enough for any grocery bill.    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Percentage application (discounts) rounds **half-up** at 2 decimal
//! places, matching what a cashier expects from a printed price:
//! 10% of Rs. 0.05 is 0.5 cents, which rounds to 1 cent.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::DiscountRate;

/// A monetary amount in integer cents.
///
/// Serializes transparently as the cent count, so a `Money` field on a
/// wire DTO is indistinguishable from a raw `..._cents: i64`.
///
/// # Examples
///
/// ```
/// use kilo_core::money::Money;
///
/// let price = Money::from_rupees(225, 0);
/// assert_eq!(price.cents(), 22500);
/// assert_eq!(price.to_string(), "LKR 225.00");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(0);

    /// Creates a Money value from cents.
    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole rupees and cents.
    ///
    /// The cent half follows the sign of the rupee half, so a refund
    /// of Rs. 5.50 is `from_rupees(-5, 50)`, not `(-5, -50)`.
    ///
    /// ```
    /// use kilo_core::money::Money;
    /// assert_eq!(Money::from_rupees(19, 99).cents(), 1999);
    /// assert_eq!(Money::from_rupees(-5, 50).cents(), -550);
    /// ```
    pub fn from_rupees(rupees: i64, cents: i64) -> Self {
        if rupees < 0 {
            Money(rupees * 100 - cents)
        } else {
            Money(rupees * 100 + cents)
        }
    }

    /// Raw cent count.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Whole-rupee part (truncated toward zero).
    pub fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Cent part within the rupee (always 0..=99).
    pub fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The discount amount produced by applying `rate` to this value.
    ///
    /// Rounds half-up at the cent. Widens to i128 internally so that
    /// `amount * bps` cannot overflow even at the extremes of i64.
    ///
    /// ```
    /// use kilo_core::money::Money;
    /// use kilo_core::types::DiscountRate;
    ///
    /// let base = Money::from_cents(25000);
    /// let ten_percent = DiscountRate::from_percent(10.0);
    /// assert_eq!(base.discount_amount(ten_percent).cents(), 2500);
    /// ```
    pub fn discount_amount(&self, rate: DiscountRate) -> Money {
        let amount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money(amount as i64)
    }

    /// What remains after taking [`discount_amount`](Self::discount_amount) off.
    pub fn less_discount(&self, rate: DiscountRate) -> Money {
        *self - self.discount_amount(rate)
    }
}

// ============================================================================
// Operators
// ============================================================================

impl std::ops::Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        Money(iter.map(|m| m.0).sum())
    }
}

impl std::fmt::Display for Money {
    /// Formats with the default currency code: `LKR 225.00`.
    ///
    /// Terminal code that honors a configured currency should call
    /// [`format_currency`](crate::format::format_currency) instead.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            crate::format::format_currency(*self, crate::DEFAULT_CURRENCY_CODE)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees_builds_cents() {
        assert_eq!(Money::from_rupees(0, 0).cents(), 0);
        assert_eq!(Money::from_rupees(1, 50).cents(), 150);
        assert_eq!(Money::from_rupees(225, 0).cents(), 22500);
        // The cent half follows the rupee sign
        assert_eq!(Money::from_rupees(-1, 50).cents(), -150);
        assert_eq!(Money::from_rupees(-5, 50).cents(), -550);
    }

    #[test]
    fn test_parts_split_cleanly() {
        let m = Money::from_cents(1999);
        assert_eq!(m.rupees(), 19);
        assert_eq!(m.cents_part(), 99);

        let neg = Money::from_cents(-550);
        assert_eq!(neg.rupees(), -5);
        assert_eq!(neg.cents_part(), 50);
    }

    #[test]
    fn test_discount_amount_rounds_half_up() {
        // 10% of 25000 cents = 2500 exactly
        let base = Money::from_cents(25000);
        assert_eq!(base.discount_amount(DiscountRate::from_bps(1000)).cents(), 2500);

        // 10% of 5 cents = 0.5 cents, rounds up to 1
        let tiny = Money::from_cents(5);
        assert_eq!(tiny.discount_amount(DiscountRate::from_bps(1000)).cents(), 1);

        // 15% of 999 cents = 149.85, rounds to 150
        let odd = Money::from_cents(999);
        assert_eq!(odd.discount_amount(DiscountRate::from_bps(1500)).cents(), 150);

        // 33.33% of 100 cents = 33.33, rounds down to 33
        let third = Money::from_cents(100);
        assert_eq!(third.discount_amount(DiscountRate::from_bps(3333)).cents(), 33);
    }

    #[test]
    fn test_zero_rate_discounts_nothing() {
        let base = Money::from_cents(12345);
        assert_eq!(base.discount_amount(DiscountRate::ZERO), Money::ZERO);
        assert_eq!(base.less_discount(DiscountRate::ZERO), base);
    }

    #[test]
    fn test_full_rate_discounts_everything() {
        let base = Money::from_cents(12345);
        assert_eq!(base.discount_amount(DiscountRate::from_bps(10000)), base);
        assert_eq!(base.less_discount(DiscountRate::from_bps(10000)), Money::ZERO);
    }

    #[test]
    fn test_no_overflow_at_large_amounts() {
        // A billion rupees at 99.99% does not overflow thanks to i128
        let huge = Money::from_cents(100_000_000_000);
        let rate = DiscountRate::from_bps(9999);
        assert_eq!(huge.discount_amount(rate).cents(), 99_990_000_000);
    }

    #[test]
    fn test_arithmetic_operators() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);
        assert_eq!((a + b).cents(), 1250);
        assert_eq!((a - b).cents(), 750);

        let mut acc = Money::ZERO;
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1250);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 1500);
    }

    #[test]
    fn test_display_uses_default_currency() {
        assert_eq!(Money::from_cents(22500).to_string(), "LKR 225.00");
        assert_eq!(Money::from_cents(5).to_string(), "LKR 0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "LKR -5.50");
    }
}
