//! # kilo-core: Pure Business Logic for Kilo POS
//!
//! This crate is the **heart** of Kilo POS, a point-of-sale for goods
//! sold by weight. It contains all cart math as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kilo POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Terminal UI (web front end)                 │   │
//! │  │    Product search ──► Weigh & add ──► Tabs ──► Submit order     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 kilo-terminal (session layer)                   │   │
//! │  │     open_tab, add_line, set_order_discount, submit_tab          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kilo-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  weight  │ │  money   │ │   calc   │ │    validation    │  │   │
//! │  │   │  Weight  │ │  Money   │ │ pipeline │ │  cart gate +     │  │   │
//! │  │   │  grams   │ │  cents   │ │ + totals │ │  range checks    │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                      Backend (order intake)                     │   │
//! │  │        receives raw line inputs, recomputes authoritatively     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`weight`] - Weight type in integer grams (no floating point!)
//! - [`money`] - Money type with integer cent arithmetic
//! - [`types`] - Domain types (LineInput, CartItem, OrderTab, etc.)
//! - [`calc`] - The per-line pipeline and order aggregation
//! - [`validation`] - The cart addition gate and range checks
//! - [`format`] - Receipt/UI string rendering and keypad parsing
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Arithmetic**: Weights are grams (i64), money is cents (i64);
//!    floats exist only at the keypad boundary
//! 4. **Total Calculation**: The pipeline never fails; bad input yields
//!    flagged results the validator turns into cashier-facing messages
//!
//! ## Example Usage
//!
//! ```rust
//! use kilo_core::calc::calculate_item_totals;
//! use kilo_core::types::LineInput;
//!
//! // 2 kg 500 g of mangoes at Rs. 100.00/kg with 10% off
//! let line = LineInput {
//!     item_kg: 2.0,
//!     item_g: 500.0,
//!     unit_price_cents: 10000,
//!     discount_bps: 1000,
//!     ..Default::default()
//! };
//!
//! let totals = calculate_item_totals(&line);
//! assert_eq!(totals.net_weight_g, 2500);
//! assert_eq!(totals.base_total_cents, 25000);
//! assert_eq!(totals.final_total_cents, 22500);
//! assert!(totals.is_valid);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calc;
pub mod error;
pub mod format;
pub mod money;
pub mod types;
pub mod validation;
pub mod weight;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kilo_core::Money` instead of
// `use kilo_core::money::Money`

pub use calc::{
    calculate_item_totals, calculate_order_discount, calculate_order_subtotal,
    calculate_order_total, CalculationResult,
};
pub use error::{CartRejection, CoreError, CoreResult, ValidationError};
pub use format::{format_currency, format_weight, parse_weight_input};
pub use money::Money;
pub use types::*;
pub use validation::validate_cart_addition;
pub use weight::Weight;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines allowed in a single order tab
///
/// ## Business Reason
/// Prevents runaway orders and keeps receipts printable. Can be made
/// configurable per store in future versions.
pub const MAX_TAB_ITEMS: usize = 100;

/// Maximum order tabs open at once on one terminal
///
/// ## Business Reason
/// A cashier parks at most a handful of orders; a runaway tab count
/// means the UI lost track of state.
pub const MAX_SESSION_TABS: usize = 16;

/// Maximum box count on a single line
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g., typing 1000 instead of 10).
pub const MAX_BOX_COUNT: u32 = 999;

/// Currency code used when no store configuration is in scope.
///
/// The terminal injects its configured code for display; this default
/// exists so `Money` values print sensibly on their own.
pub const DEFAULT_CURRENCY_CODE: &str = "LKR";
