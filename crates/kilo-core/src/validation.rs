//! # Validation Module
//!
//! Input validation and the cart addition gate.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Keypad entry                                                  │
//! │  ├── Silent correction (gram clamp, empty -> 0)                         │
//! │  └── Handled by Weight::from_split / parse_weight_input                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Terminal operation (Rust)                                     │
//! │  ├── Range checks on typed values (THIS MODULE)                         │
//! │  └── Business gate before a line enters a tab (THIS MODULE)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend submission                                            │
//! │  └── Authoritative recomputation from raw inputs                        │
//! │                                                                         │
//! │  Defense in depth: each layer catches different mistakes                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::calc::CalculationResult;
use crate::error::{CartRejection, ValidationError};
use crate::types::DiscountRate;
use crate::weight::Weight;
use crate::MAX_BOX_COUNT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Cart Addition Gate
// =============================================================================

/// Decides whether a calculated line may enter an order tab.
///
/// ## Checks, in order (first failure wins)
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cashier taps "Add"                                                     │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  1. item weight > 0?        ── no ─► ZeroItemWeight                     │
/// │       │ yes                                                             │
/// │  2. tare <= item weight?    ── no ─► BoxExceedsItemWeight               │
/// │       │ yes                                                             │
/// │  3. net weight > 0?         ── no ─► ZeroNetWeight                      │
/// │       │ yes                                                             │
/// │  4. stock covers net?       ── no ─► InsufficientStock                  │
/// │       │ yes                                                             │
/// │       ▼                                                                 │
/// │  Line joins the tab                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// The order is fixed so the cashier always sees the most upstream
/// problem: a line with no weight at all reports the weight, not the
/// box, even when the box entry is also nonsense.
///
/// `stock_available` is `None` for untracked products and manual
/// lines, which skips check 4 entirely.
///
/// Rejection is a regular value, not an error to propagate: the
/// terminal renders the message and the cashier fixes the entry.
pub fn validate_cart_addition(
    totals: &CalculationResult,
    stock_available: Option<Weight>,
    product_name: &str,
) -> Result<(), CartRejection> {
    if !totals.item_weight_total().is_positive() {
        return Err(CartRejection::ZeroItemWeight);
    }

    if totals.exceeds_item_weight {
        return Err(CartRejection::BoxExceedsItemWeight {
            box_weight: totals.total_box_weight(),
            item_weight: totals.item_weight_total(),
        });
    }

    if !totals.net_weight().is_positive() {
        return Err(CartRejection::ZeroNetWeight);
    }

    if let Some(available) = stock_available {
        if available < totals.net_weight() {
            return Err(CartRejection::InsufficientStock {
                product: product_name.to_string(),
                available,
                requested: totals.net_weight(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a box count.
///
/// ## Rules
/// - Zero is allowed (loose goods, no packaging)
/// - Must not exceed MAX_BOX_COUNT (999)
pub fn validate_box_count(count: u32) -> ValidationResult<()> {
    if count > MAX_BOX_COUNT {
        return Err(ValidationError::OutOfRange {
            field: "box count".to_string(),
            min: 0,
            max: MAX_BOX_COUNT as i64,
        });
    }

    Ok(())
}

/// Validates a discount rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > DiscountRate::MAX_BPS {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: DiscountRate::MAX_BPS as i64,
        });
    }

    Ok(())
}

/// Validates a per-kilogram price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (giveaway lines)
///
/// ## Example
/// ```rust
/// use kilo_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(22500).is_ok()); // Rs. 225.00/kg
/// assert!(validate_price_cents(0).is_ok());     // Giveaway
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates an order tab label.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 50 characters
pub fn validate_tab_label(label: &str) -> ValidationResult<()> {
    let label = label.trim();

    if label.is_empty() {
        return Err(ValidationError::Required {
            field: "label".to_string(),
        });
    }

    if label.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "label".to_string(),
            max: 50,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
