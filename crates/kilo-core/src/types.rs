//! # Core Domain Types
//!
//! Shared type definitions for the weighed-goods cart.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      TYPE HIERARCHY                             │
//! │                                                                 │
//! │   OrderTab ──────┬── CartItem ──┬── LineInput   (raw entry)     │
//! │   (one open      │   (one       │                               │
//! │    order)        │    weighed   └── CalculationResult           │
//! │                  │    line)         (derived, see calc.rs)      │
//! │                  │                                              │
//! │                  └── DiscountRate (order-level, basis points)   │
//! │                                                                 │
//! │   OrderTotals = aggregated view of one OrderTab                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Wire convention: weights cross serialization boundaries as integer
//! grams (`_g` suffix) and money as integer cents (`_cents` suffix).
//! Only [`LineInput`] carries floats, because that is literally what
//! the keypad produced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::calc::{self, CalculationResult};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::weight::Weight;
use crate::MAX_TAB_ITEMS;

// =============================================================================
// Discount Rate
// =============================================================================

/// A discount rate in basis points (1/100th of a percent).
///
/// Stored as an integer so rates survive serialization exactly:
/// 1 basis point = 0.01%, so 10% = 1000 bps and 8.25% = 825 bps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// No discount.
    pub const ZERO: DiscountRate = DiscountRate(0);

    /// 100% expressed in basis points.
    pub const MAX_BPS: u32 = 10_000;

    /// Creates a rate from basis points.
    pub fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a rate from a percentage, rounding to the nearest
    /// basis point. Negative or non-finite input degrades to zero
    /// via the saturating float cast.
    pub fn from_percent(percent: f64) -> Self {
        DiscountRate((percent * 100.0).round() as u32)
    }

    /// The rate in basis points.
    pub fn bps(&self) -> u32 {
        self.0
    }

    /// The rate as a percentage (e.g. 1000 bps -> 10.0).
    pub fn percent(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Quantity Mode
// =============================================================================

/// How the cashier entered the quantity for a line.
///
/// Purely presentational: whichever entry mode was used, the line is
/// normalized to grams before any math happens. The terminal keeps it
/// so an edited line reopens in the same mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum QuantityMode {
    /// Decimal kilograms from the scale display.
    #[default]
    Kg,
    /// Split kilogram + gram keypad entry.
    #[serde(rename = "g")]
    Gram,
    /// Count of uniform pre-packed boxes.
    Box,
}

// =============================================================================
// Line Input
// =============================================================================

/// The raw values behind one cart line, exactly as entered.
///
/// Kept verbatim so a line can be reopened for editing and so the
/// backend can recompute totals from first principles. The typed
/// accessors normalize on the way out; the stored floats are never
/// trusted directly by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct LineInput {
    /// Whole-kilogram half of the item weight entry.
    pub item_kg: f64,
    /// Loose-gram half of the item weight entry (0..=999 after
    /// normalization).
    pub item_g: f64,
    /// Whole-kilogram half of the per-box tare.
    pub box_kg: f64,
    /// Loose-gram half of the per-box tare.
    pub box_g: f64,
    /// Number of boxes whose tare is deducted.
    pub box_count: u32,
    /// Product price per kilogram, in cents.
    pub unit_price_cents: i64,
    /// Line-level discount in basis points.
    pub discount_bps: u32,
}

impl LineInput {
    /// Normalized gross item weight.
    pub fn item_weight(&self) -> Weight {
        Weight::from_split(self.item_kg, self.item_g)
    }

    /// Normalized tare of a single box.
    pub fn box_weight_per_box(&self) -> Weight {
        Weight::from_split(self.box_kg, self.box_g)
    }

    /// Price per kilogram as typed money.
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line discount as a typed rate.
    pub fn discount(&self) -> DiscountRate {
        DiscountRate::from_bps(self.discount_bps)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// One weighed line in an open order.
///
/// Carries both the raw [`LineInput`] and the [`CalculationResult`]
/// derived from it. The pair must stay consistent: every mutation
/// goes through [`set_input`](Self::set_input), which recomputes the
/// totals in the same step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Unique line identifier (UUID v4). Two lines of the same product
    /// are distinct entries, e.g. two separately weighed bags.
    pub id: String,

    /// Catalog reference, if the line came from a product lookup.
    /// Manual lines (custom weights priced on the spot) have none.
    pub product_id: Option<String>,

    /// Display name frozen at entry time.
    pub name: String,

    /// Which entry mode produced the input.
    pub quantity_mode: QuantityMode,

    /// The raw entry, kept for editing and backend recomputation.
    pub input: LineInput,

    /// Totals derived from `input`.
    pub totals: CalculationResult,

    /// When the line was added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a line and computes its totals in one step.
    pub fn new(
        product_id: Option<String>,
        name: impl Into<String>,
        quantity_mode: QuantityMode,
        input: LineInput,
    ) -> Self {
        CartItem {
            id: Uuid::new_v4().to_string(),
            product_id,
            name: name.into(),
            quantity_mode,
            totals: calc::calculate_item_totals(&input),
            input,
            added_at: Utc::now(),
        }
    }

    /// Replaces the raw entry and recomputes totals.
    pub fn set_input(&mut self, input: LineInput) {
        self.input = input;
        self.totals = calc::calculate_item_totals(&self.input);
    }

    /// True when the stored totals match a fresh calculation.
    pub fn is_consistent(&self) -> bool {
        self.totals == calc::calculate_item_totals(&self.input)
    }
}

// =============================================================================
// Order Tab
// =============================================================================

/// One open order at the counter.
///
/// A terminal keeps several tabs at once so a cashier can park one
/// customer's order and serve the next. Tabs live in memory only;
/// submitting a tab hands its raw lines to the backend and drops it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderTab {
    /// Unique tab identifier (UUID v4).
    pub id: String,

    /// Cashier-facing label, e.g. "Counter 1" or a customer name.
    pub label: String,

    /// Lines in entry order.
    pub items: Vec<CartItem>,

    /// Order-level discount in basis points, applied to the subtotal.
    pub order_discount_bps: u32,

    /// Optional customer reference for loyalty lookups.
    pub customer_id: Option<String>,

    /// When the tab was opened.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl OrderTab {
    /// Opens an empty tab.
    pub fn new(label: impl Into<String>) -> Self {
        OrderTab {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
            items: Vec::new(),
            order_discount_bps: 0,
            customer_id: None,
            created_at: Utc::now(),
        }
    }

    /// Appends a line, refusing once the tab holds [`MAX_TAB_ITEMS`].
    pub fn add_item(&mut self, item: CartItem) -> CoreResult<()> {
        if self.items.len() >= MAX_TAB_ITEMS {
            return Err(CoreError::TabFull {
                max: MAX_TAB_ITEMS,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Replaces the raw entry of an existing line and recomputes it.
    pub fn update_item(&mut self, item_id: &str, input: LineInput) -> CoreResult<()> {
        match self.items.iter_mut().find(|i| i.id == item_id) {
            Some(item) => {
                item.set_input(input);
                Ok(())
            }
            None => Err(CoreError::ItemNotFound {
                id: item_id.to_string(),
            }),
        }
    }

    /// Removes a line by id.
    pub fn remove_item(&mut self, item_id: &str) -> CoreResult<()> {
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        if self.items.len() == before {
            return Err(CoreError::ItemNotFound {
                id: item_id.to_string(),
            });
        }
        Ok(())
    }

    /// Looks up a line by id.
    pub fn item(&self, item_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Sets the order-level discount.
    pub fn set_order_discount(&mut self, rate: DiscountRate) {
        self.order_discount_bps = rate.bps();
    }

    /// The order-level discount as a typed rate.
    pub fn order_discount(&self) -> DiscountRate {
        DiscountRate::from_bps(self.order_discount_bps)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every line and clears the order discount.
    pub fn clear(&mut self) {
        self.items.clear();
        self.order_discount_bps = 0;
    }

    /// Sum of line final totals, before the order discount.
    pub fn subtotal_cents(&self) -> i64 {
        calc::calculate_order_subtotal(&self.items).cents()
    }

    /// Order discount taken off the subtotal.
    pub fn discount_cents(&self) -> i64 {
        calc::calculate_order_discount(
            calc::calculate_order_subtotal(&self.items),
            self.order_discount(),
        )
        .cents()
    }

    /// Amount due after the order discount.
    pub fn total_cents(&self) -> i64 {
        calc::calculate_order_total(&self.items, self.order_discount()).cents()
    }

    /// Aggregated view for display.
    pub fn totals(&self) -> OrderTotals {
        OrderTotals::from(self)
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// Aggregated totals for one tab, recomputed from lines on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderTotals {
    /// Number of lines in the tab.
    pub item_count: usize,

    /// Sum of line net weights, for the receipt footer.
    pub net_weight_g: i64,

    /// Sum of line final totals.
    pub subtotal_cents: i64,

    /// Order-level discount amount.
    pub discount_cents: i64,

    /// Amount due.
    pub total_cents: i64,
}

impl From<&OrderTab> for OrderTotals {
    fn from(tab: &OrderTab) -> Self {
        OrderTotals {
            item_count: tab.items.len(),
            net_weight_g: tab.items.iter().map(|i| i.totals.net_weight_g).sum(),
            subtotal_cents: tab.subtotal_cents(),
            discount_cents: tab.discount_cents(),
            total_cents: tab.total_cents(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mango_line() -> LineInput {
        LineInput {
            item_kg: 2.0,
            item_g: 500.0,
            box_count: 1,
            unit_price_cents: 10000,
            discount_bps: 1000,
            ..Default::default()
        }
    }

    #[test]
    fn test_discount_rate_conversions() {
        assert_eq!(DiscountRate::from_percent(10.0).bps(), 1000);
        assert_eq!(DiscountRate::from_percent(8.25).bps(), 825);
        assert_eq!(DiscountRate::from_percent(0.0), DiscountRate::ZERO);
        assert_eq!(DiscountRate::from_bps(1000).percent(), 10.0);
        // Garbage degrades to zero rather than panicking
        assert_eq!(DiscountRate::from_percent(-5.0).bps(), 0);
        assert_eq!(DiscountRate::from_percent(f64::NAN).bps(), 0);
    }

    #[test]
    fn test_quantity_mode_wire_names() {
        assert_eq!(serde_json::to_string(&QuantityMode::Kg).unwrap(), "\"kg\"");
        assert_eq!(serde_json::to_string(&QuantityMode::Gram).unwrap(), "\"g\"");
        assert_eq!(serde_json::to_string(&QuantityMode::Box).unwrap(), "\"box\"");
        let parsed: QuantityMode = serde_json::from_str("\"g\"").unwrap();
        assert_eq!(parsed, QuantityMode::Gram);
    }

    #[test]
    fn test_line_input_accessors_normalize() {
        let input = mango_line();
        assert_eq!(input.item_weight().grams(), 2500);
        assert_eq!(input.unit_price().cents(), 10000);
        assert_eq!(input.discount().bps(), 1000);
    }

    #[test]
    fn test_line_input_deserializes_with_defaults() {
        let input: LineInput = serde_json::from_str(r#"{"item_kg": 1.5}"#).unwrap();
        assert_eq!(input.item_kg, 1.5);
        assert_eq!(input.box_count, 0);
        assert_eq!(input.unit_price_cents, 0);
    }

    #[test]
    fn test_new_item_is_consistent() {
        let item = CartItem::new(None, "Mango", QuantityMode::Gram, mango_line());
        assert!(item.is_consistent());
        assert_eq!(item.totals.net_weight_g, 2500);
        assert_eq!(item.totals.final_total_cents, 22500);
    }

    #[test]
    fn test_set_input_recomputes_totals() {
        let mut item = CartItem::new(None, "Mango", QuantityMode::Gram, mango_line());
        let mut input = item.input;
        input.item_kg = 1.0;
        input.item_g = 0.0;
        item.set_input(input);
        assert!(item.is_consistent());
        assert_eq!(item.totals.net_weight_g, 1000);
        assert_eq!(item.totals.final_total_cents, 9000);
    }

    #[test]
    fn test_tab_refuses_lines_past_the_cap() {
        let mut tab = OrderTab::new("Counter 1");
        for _ in 0..MAX_TAB_ITEMS {
            tab.add_item(CartItem::new(None, "Mango", QuantityMode::Kg, mango_line()))
                .unwrap();
        }
        let overflow = tab.add_item(CartItem::new(None, "Mango", QuantityMode::Kg, mango_line()));
        assert!(matches!(overflow, Err(CoreError::TabFull { max }) if max == MAX_TAB_ITEMS));
        assert_eq!(tab.item_count(), MAX_TAB_ITEMS);
    }

    #[test]
    fn test_update_and_remove_by_id() {
        let mut tab = OrderTab::new("Counter 1");
        let item = CartItem::new(None, "Mango", QuantityMode::Kg, mango_line());
        let id = item.id.clone();
        tab.add_item(item).unwrap();

        let mut input = mango_line();
        input.discount_bps = 0;
        tab.update_item(&id, input).unwrap();
        assert_eq!(tab.item(&id).unwrap().totals.final_total_cents, 25000);

        tab.remove_item(&id).unwrap();
        assert!(tab.is_empty());
        assert!(matches!(
            tab.remove_item(&id),
            Err(CoreError::ItemNotFound { .. })
        ));
    }

    #[test]
    fn test_tab_totals_roll_up() {
        let mut tab = OrderTab::new("Counter 1");
        let mut a = mango_line();
        a.discount_bps = 0;
        let b = LineInput {
            item_kg: 1.0,
            unit_price_cents: 5000,
            ..Default::default()
        };
        tab.add_item(CartItem::new(None, "Mango", QuantityMode::Kg, a))
            .unwrap();
        tab.add_item(CartItem::new(None, "Red Rice", QuantityMode::Kg, b))
            .unwrap();
        tab.set_order_discount(DiscountRate::from_percent(10.0));

        let totals = tab.totals();
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.net_weight_g, 3500);
        assert_eq!(totals.subtotal_cents, 30000);
        assert_eq!(totals.discount_cents, 3000);
        assert_eq!(totals.total_cents, 27000);
    }

    #[test]
    fn test_cart_item_serializes_snake_case() {
        let item = CartItem::new(Some("p-1".into()), "Mango", QuantityMode::Gram, mango_line());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["quantity_mode"], "g");
        assert_eq!(json["input"]["item_kg"], 2.0);
        assert_eq!(json["totals"]["net_weight_g"], 2500);
        assert_eq!(json["totals"]["final_total_cents"], 22500);
    }
}
