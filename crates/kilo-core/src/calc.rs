//! # Cart Calculation Pipeline
//!
//! Pure functions that turn raw line entries into totals.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  PER-LINE PIPELINE (calculate_item_totals)      │
//! │                                                                 │
//! │   item_kg ─┬─► item weight ──────────────┐                      │
//! │   item_g ──┘   (grams)                   │                      │
//! │                                          ▼                      │
//! │   box_kg ──┬─► per-box ──► × box_count ─► net = item - tare     │
//! │   box_g ───┘   tare           (grams)    │   (floored at 0)     │
//! │                                          ▼                      │
//! │   unit_price_cents ────────────────► base total (cents)         │
//! │                                          │                      │
//! │   discount_bps ────────────────────► discount (cents)           │
//! │                                          ▼                      │
//! │                                     final total                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every stage rounds half-up on its own and hands an already-rounded
//! integer to the next stage. Receipts add up line by line on paper,
//! so the aggregate must be the exact sum of the printed lines, not a
//! recomputation from raw floats.
//!
//! These functions never fail and never panic on strange input; the
//! result carries `is_valid` / `exceeds_item_weight` flags instead,
//! and [`validate_cart_addition`](crate::validation::validate_cart_addition)
//! turns those into a cashier-facing verdict.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartItem, DiscountRate, LineInput};
use crate::weight::Weight;

// =============================================================================
// Calculation Result
// =============================================================================

/// Everything derived from one [`LineInput`].
///
/// Stored on the cart line and shipped to the UI as-is; the backend
/// treats these as advisory and recomputes from the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculationResult {
    /// Normalized gross item weight.
    pub item_weight_total_g: i64,

    /// Normalized tare of a single box.
    pub box_weight_per_box_g: i64,

    /// Tare of all boxes together.
    pub total_box_weight_g: i64,

    /// Billable weight after tare deduction, floored at zero.
    pub net_weight_g: i64,

    /// Net weight priced at the per-kilogram rate.
    pub base_total_cents: i64,

    /// Line discount taken off the base total.
    pub item_discount_cents: i64,

    /// What the customer pays for this line.
    pub final_total_cents: i64,

    /// Whether the line is sellable as-is: something was weighed and
    /// something is left after the tare comes off.
    pub is_valid: bool,

    /// Whether the declared tare outweighed the item. Kept separate
    /// from `is_valid` so the UI can highlight the box fields.
    pub exceeds_item_weight: bool,
}

impl CalculationResult {
    /// Gross item weight as a typed value.
    pub fn item_weight_total(&self) -> Weight {
        Weight::from_grams(self.item_weight_total_g)
    }

    /// Combined tare as a typed value.
    pub fn total_box_weight(&self) -> Weight {
        Weight::from_grams(self.total_box_weight_g)
    }

    /// Billable weight as a typed value.
    pub fn net_weight(&self) -> Weight {
        Weight::from_grams(self.net_weight_g)
    }

    /// Line total as typed money.
    pub fn final_total(&self) -> Money {
        Money::from_cents(self.final_total_cents)
    }
}

// =============================================================================
// Per-line calculation
// =============================================================================

/// Computes every derived value for one cart line.
///
/// Total function: any input produces a result, including zero and
/// nonsense weights. Callers branch on the embedded flags.
///
/// ```
/// use kilo_core::calc::calculate_item_totals;
/// use kilo_core::types::LineInput;
///
/// let line = LineInput {
///     item_kg: 2.0,
///     item_g: 500.0,
///     unit_price_cents: 10000, // Rs. 100.00 per kg
///     discount_bps: 1000,      // 10%
///     ..Default::default()
/// };
/// let totals = calculate_item_totals(&line);
/// assert_eq!(totals.net_weight_g, 2500);
/// assert_eq!(totals.final_total_cents, 22500);
/// assert!(totals.is_valid);
/// ```
pub fn calculate_item_totals(input: &LineInput) -> CalculationResult {
    let item_weight = input.item_weight();
    let per_box = input.box_weight_per_box();
    let total_box = per_box.multiply_count(input.box_count);
    let net = item_weight.less_tare(total_box);

    let base = net.price_at(input.unit_price());
    let discount = base.discount_amount(input.discount());
    let final_total = base - discount;

    CalculationResult {
        item_weight_total_g: item_weight.grams(),
        box_weight_per_box_g: per_box.grams(),
        total_box_weight_g: total_box.grams(),
        net_weight_g: net.grams(),
        base_total_cents: base.cents(),
        item_discount_cents: discount.cents(),
        final_total_cents: final_total.cents(),
        is_valid: net.is_positive() && item_weight.is_positive(),
        exceeds_item_weight: total_box > item_weight,
    }
}

// =============================================================================
// Order aggregation
// =============================================================================

/// Sum of line final totals. Integer addition of already-rounded
/// values, so line order cannot change the result.
pub fn calculate_order_subtotal(items: &[CartItem]) -> Money {
    Money::from_cents(items.iter().map(|i| i.totals.final_total_cents).sum())
}

/// Order-level discount taken off the subtotal, rounded half-up at
/// the cent.
pub fn calculate_order_discount(subtotal: Money, rate: DiscountRate) -> Money {
    subtotal.discount_amount(rate)
}

/// Amount due: subtotal minus the order discount.
pub fn calculate_order_total(items: &[CartItem], rate: DiscountRate) -> Money {
    let subtotal = calculate_order_subtotal(items);
    subtotal - calculate_order_discount(subtotal, rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuantityMode;

    fn item(input: LineInput) -> CartItem {
        CartItem::new(None, "Test", QuantityMode::Kg, input)
    }

    #[test]
    fn test_plain_line_with_discount() {
        // 2.5 kg at Rs. 100.00/kg with 10% off
        let totals = calculate_item_totals(&LineInput {
            item_kg: 2.0,
            item_g: 500.0,
            unit_price_cents: 10000,
            discount_bps: 1000,
            ..Default::default()
        });
        assert_eq!(totals.item_weight_total_g, 2500);
        assert_eq!(totals.total_box_weight_g, 0);
        assert_eq!(totals.net_weight_g, 2500);
        assert_eq!(totals.base_total_cents, 25000);
        assert_eq!(totals.item_discount_cents, 2500);
        assert_eq!(totals.final_total_cents, 22500);
        assert!(totals.is_valid);
        assert!(!totals.exceeds_item_weight);
    }

    #[test]
    fn test_boxed_line_deducts_tare() {
        // 5 kg gross in 4 boxes of 250 g, Rs. 75.00/kg, 5% off
        let totals = calculate_item_totals(&LineInput {
            item_kg: 5.0,
            box_g: 250.0,
            box_count: 4,
            unit_price_cents: 7500,
            discount_bps: 500,
            ..Default::default()
        });
        assert_eq!(totals.box_weight_per_box_g, 250);
        assert_eq!(totals.total_box_weight_g, 1000);
        assert_eq!(totals.net_weight_g, 4000);
        assert_eq!(totals.base_total_cents, 30000);
        assert_eq!(totals.item_discount_cents, 1500);
        assert_eq!(totals.final_total_cents, 28500);
        assert!(totals.is_valid);
    }

    #[test]
    fn test_tare_heavier_than_item_flags_and_zeroes() {
        let totals = calculate_item_totals(&LineInput {
            item_kg: 1.0,
            box_kg: 1.0,
            box_g: 500.0,
            box_count: 1,
            unit_price_cents: 10000,
            ..Default::default()
        });
        assert!(totals.exceeds_item_weight);
        assert!(!totals.is_valid);
        assert_eq!(totals.net_weight_g, 0);
        assert_eq!(totals.base_total_cents, 0);
        assert_eq!(totals.final_total_cents, 0);
    }

    #[test]
    fn test_tare_equal_to_item_is_zero_net_not_exceeding() {
        // 2 boxes of 500 g against a 1 kg gross: net 0, but the tare
        // did not *exceed* the item, so only the net check fires.
        let totals = calculate_item_totals(&LineInput {
            item_kg: 1.0,
            box_g: 500.0,
            box_count: 2,
            unit_price_cents: 10000,
            ..Default::default()
        });
        assert!(!totals.exceeds_item_weight);
        assert!(!totals.is_valid);
        assert_eq!(totals.net_weight_g, 0);
    }

    #[test]
    fn test_zero_entry_is_invalid_but_total() {
        let totals = calculate_item_totals(&LineInput::default());
        assert!(!totals.is_valid);
        assert!(!totals.exceeds_item_weight);
        assert_eq!(totals.final_total_cents, 0);
    }

    #[test]
    fn test_base_total_rounds_half_up_at_the_cent() {
        // 333 g at Rs. 99.99/kg = 3329.667 cents -> 3330
        let totals = calculate_item_totals(&LineInput {
            item_g: 333.0,
            unit_price_cents: 9999,
            ..Default::default()
        });
        assert_eq!(totals.base_total_cents, 3330);
        // 150 g at Rs. 0.10/kg = 1.5 cents -> 2
        let totals = calculate_item_totals(&LineInput {
            item_g: 150.0,
            unit_price_cents: 10,
            ..Default::default()
        });
        assert_eq!(totals.base_total_cents, 2);
    }

    #[test]
    fn test_each_stage_rounds_independently() {
        // Two lines, each base 25 cents with 10% off: the discount
        // rounds per line (2.5 -> 3), so finals are 22 + 22 = 44.
        // Discounting the combined 50 cents would have given 45.
        let line = LineInput {
            item_g: 250.0,
            unit_price_cents: 100,
            discount_bps: 1000,
            ..Default::default()
        };
        let totals = calculate_item_totals(&line);
        assert_eq!(totals.base_total_cents, 25);
        assert_eq!(totals.item_discount_cents, 3);
        assert_eq!(totals.final_total_cents, 22);

        let items = vec![item(line), item(line)];
        assert_eq!(calculate_order_subtotal(&items).cents(), 44);
    }

    #[test]
    fn test_order_rollup_matches_receipt_arithmetic() {
        // Finals 22500 + 7500 = 30000; 10% off = 3000; due 27000.
        let a = LineInput {
            item_kg: 2.0,
            item_g: 500.0,
            unit_price_cents: 10000,
            discount_bps: 1000,
            ..Default::default()
        };
        let b = LineInput {
            item_kg: 1.0,
            unit_price_cents: 7500,
            ..Default::default()
        };
        let items = vec![item(a), item(b)];
        let rate = DiscountRate::from_percent(10.0);

        let subtotal = calculate_order_subtotal(&items);
        assert_eq!(subtotal.cents(), 30000);
        assert_eq!(calculate_order_discount(subtotal, rate).cents(), 3000);
        assert_eq!(calculate_order_total(&items, rate).cents(), 27000);
    }

    #[test]
    fn test_subtotal_ignores_line_order() {
        let a = item(LineInput {
            item_g: 333.0,
            unit_price_cents: 9999,
            discount_bps: 700,
            ..Default::default()
        });
        let b = item(LineInput {
            item_kg: 4.0,
            unit_price_cents: 12345,
            ..Default::default()
        });
        let forward = vec![a.clone(), b.clone()];
        let backward = vec![b, a];
        assert_eq!(
            calculate_order_subtotal(&forward),
            calculate_order_subtotal(&backward)
        );
    }

    #[test]
    fn test_empty_order_is_all_zero() {
        assert_eq!(calculate_order_subtotal(&[]), Money::ZERO);
        assert_eq!(
            calculate_order_total(&[], DiscountRate::from_percent(10.0)),
            Money::ZERO
        );
    }

    #[test]
    fn test_full_order_discount_zeroes_the_total() {
        let items = vec![item(LineInput {
            item_kg: 1.0,
            unit_price_cents: 9999,
            ..Default::default()
        })];
        assert_eq!(
            calculate_order_total(&items, DiscountRate::from_bps(10000)),
            Money::ZERO
        );
    }
}
