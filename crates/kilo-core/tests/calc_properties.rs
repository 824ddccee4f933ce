//! Property tests for the cart calculation pipeline.
//!
//! The pipeline promises to be total, deterministic and monotone in
//! the directions a cashier expects (more weight never costs less,
//! more boxes never cost more). These properties hold for arbitrary
//! input, including values a well-behaved front end never sends
//! (negative halves, grams past the clamp), not just the happy-path
//! vectors in the unit tests.

use kilo_core::calc::{calculate_item_totals, calculate_order_subtotal};
use kilo_core::format::{format_weight, parse_weight_input};
use kilo_core::types::{CartItem, LineInput, QuantityMode};
use kilo_core::weight::Weight;
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = LineInput> {
    (
        -5.0f64..100.0,    // item_kg, negative entries clamp to zero
        -500.0f64..2000.0, // item_g, sometimes past the 999 clamp
        -2.0f64..2.0,      // box_kg, negative entries clamp to zero
        -500.0f64..2000.0, // box_g, sometimes past the clamp
        0u32..20,          // box_count
        0i64..1_000_000,   // unit_price_cents, up to Rs. 10,000/kg
        0u32..=10_000,     // discount_bps
    )
        .prop_map(
            |(item_kg, item_g, box_kg, box_g, box_count, unit_price_cents, discount_bps)| {
                LineInput {
                    item_kg,
                    item_g,
                    box_kg,
                    box_g,
                    box_count,
                    unit_price_cents,
                    discount_bps,
                }
            },
        )
}

proptest! {
    #[test]
    fn calculation_is_deterministic(line in line_strategy()) {
        prop_assert_eq!(calculate_item_totals(&line), calculate_item_totals(&line));
    }

    #[test]
    fn pipeline_stages_stay_consistent(line in line_strategy()) {
        let totals = calculate_item_totals(&line);

        // Tare accounting
        prop_assert_eq!(
            totals.total_box_weight_g,
            totals.box_weight_per_box_g * line.box_count as i64
        );

        // Net weight is the floored difference
        prop_assert!(totals.net_weight_g >= 0);
        prop_assert!(totals.net_weight_g <= totals.item_weight_total_g.max(0));

        // Money stages chain exactly
        prop_assert_eq!(
            totals.final_total_cents,
            totals.base_total_cents - totals.item_discount_cents
        );
        prop_assert!(totals.item_discount_cents >= 0);
        prop_assert!(totals.item_discount_cents <= totals.base_total_cents);

        // Flags mean what they say
        prop_assert_eq!(
            totals.is_valid,
            totals.net_weight_g > 0 && totals.item_weight_total_g > 0
        );
        prop_assert_eq!(
            totals.exceeds_item_weight,
            totals.total_box_weight_g > totals.item_weight_total_g
        );
    }

    #[test]
    fn more_item_weight_never_weighs_less(line in line_strategy(), extra_kg in 0.0f64..50.0) {
        let heavier = LineInput { item_kg: line.item_kg + extra_kg, ..line };

        let before = calculate_item_totals(&line);
        let after = calculate_item_totals(&heavier);

        prop_assert!(after.item_weight_total_g >= before.item_weight_total_g);
        prop_assert!(after.net_weight_g >= before.net_weight_g);
        prop_assert!(after.final_total_cents >= before.final_total_cents);
    }

    #[test]
    fn more_loose_grams_never_weigh_less(line in line_strategy(), extra_g in 0.0f64..3000.0) {
        let heavier = LineInput { item_g: line.item_g + extra_g, ..line };

        let before = calculate_item_totals(&line);
        let after = calculate_item_totals(&heavier);

        prop_assert!(after.item_weight_total_g >= before.item_weight_total_g);
        prop_assert!(after.net_weight_g >= before.net_weight_g);
        prop_assert!(after.final_total_cents >= before.final_total_cents);
    }

    #[test]
    fn more_boxes_never_cost_more(line in line_strategy(), extra_boxes in 1u32..10) {
        let more_tare = LineInput { box_count: line.box_count + extra_boxes, ..line };

        let before = calculate_item_totals(&line);
        let after = calculate_item_totals(&more_tare);

        prop_assert!(after.total_box_weight_g >= before.total_box_weight_g);
        prop_assert!(after.net_weight_g <= before.net_weight_g);
        prop_assert!(after.final_total_cents <= before.final_total_cents);
    }

    #[test]
    fn heavier_box_weight_never_raises_the_bill(line in line_strategy(), extra_kg in 0.0f64..3.0) {
        // The base box_kg ranges over negative values, so this leg
        // crosses the clamp boundary as well as ordinary tares.
        let heavier_box = LineInput { box_kg: line.box_kg + extra_kg, ..line };

        let before = calculate_item_totals(&line);
        let after = calculate_item_totals(&heavier_box);

        prop_assert!(after.total_box_weight_g >= before.total_box_weight_g);
        prop_assert!(after.net_weight_g <= before.net_weight_g);
        prop_assert!(after.final_total_cents <= before.final_total_cents);
    }

    #[test]
    fn box_gram_half_never_raises_the_bill(line in line_strategy(), extra_g in 0.0f64..2000.0) {
        let heavier_box = LineInput { box_g: line.box_g + extra_g, ..line };

        let before = calculate_item_totals(&line);
        let after = calculate_item_totals(&heavier_box);

        prop_assert!(after.total_box_weight_g >= before.total_box_weight_g);
        prop_assert!(after.net_weight_g <= before.net_weight_g);
        prop_assert!(after.final_total_cents <= before.final_total_cents);
    }

    #[test]
    fn gram_half_stays_within_one_kilogram(kg in 0.0f64..100.0, g in -5000.0f64..5000.0) {
        let low = Weight::from_split(kg, 0.0);
        let high = Weight::from_split(kg, 999.0);
        let actual = Weight::from_split(kg, g);
        prop_assert!(actual >= low);
        prop_assert!(actual <= high);
    }

    #[test]
    fn subtotal_ignores_line_order(lines in proptest::collection::vec(line_strategy(), 0..12)) {
        let forward: Vec<CartItem> = lines
            .iter()
            .map(|l| CartItem::new(None, "Line", QuantityMode::Kg, *l))
            .collect();
        let mut backward = forward.clone();
        backward.reverse();

        prop_assert_eq!(
            calculate_order_subtotal(&forward),
            calculate_order_subtotal(&backward)
        );
    }

    #[test]
    fn stored_totals_track_every_edit(first in line_strategy(), second in line_strategy()) {
        let mut item = CartItem::new(None, "Line", QuantityMode::Gram, first);
        prop_assert!(item.is_consistent());

        item.set_input(second);
        prop_assert!(item.is_consistent());
        prop_assert_eq!(item.totals, calculate_item_totals(&second));
    }

    #[test]
    fn formatted_weight_never_shows_trailing_zeros(grams in 0i64..10_000_000) {
        let rendered = format_weight(Weight::from_grams(grams));
        let number = rendered.strip_suffix(" kg").expect("kg suffix");
        if number.contains('.') {
            prop_assert!(!number.ends_with('0'));
            prop_assert!(!number.ends_with('.'));
        }
    }

    #[test]
    fn keypad_round_trip_is_exact(value in 0.0f64..10_000.0) {
        // Rust float display is shortest-round-trip, so parsing what
        // the UI echoes back must reproduce the same number.
        prop_assert_eq!(parse_weight_input(&value.to_string()), value);
    }
}
