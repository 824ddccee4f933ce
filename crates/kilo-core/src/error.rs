//! # Error Types
//!
//! Domain errors for the Kilo POS core.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     ERROR PHILOSOPHY                            │
//! │                                                                 │
//! │  1. Errors are enum variants, never String                      │
//! │  2. Recoverable input problems get silently corrected where     │
//! │     the cashier flow demands it (see weight normalization)      │
//! │  3. Business rule failures are values the caller branches on:   │
//! │     a rejected cart addition is NOT a panic, it is data         │
//! │  4. Panics only for programmer errors (poisoned mutex, etc.)    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Three tiers:
//! - [`CartRejection`] - a cart addition failed a business rule. The
//!   terminal shows the message and keeps running.
//! - [`ValidationError`] - a raw input was out of range before any
//!   business rule applied.
//! - [`CoreError`] - umbrella type for operations that can fail in
//!   more than one way.

use thiserror::Error;

use crate::weight::Weight;

/// Convenience alias for core results.
pub type CoreResult<T> = Result<T, CoreError>;

// ============================================================================
// Cart rejection
// ============================================================================

/// Why a calculated cart line may not be added to an order tab.
///
/// Produced by [`validate_cart_addition`](crate::validation::validate_cart_addition).
/// The checks run in a fixed order and the first failure wins, so a line
/// with zero weight AND excessive box weight reports only the weight.
///
/// Messages are cashier-facing: they are rendered verbatim in the
/// terminal UI next to the rejected line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartRejection {
    /// The scale (or manual entry) produced no item weight at all.
    #[error("weight must be greater than 0")]
    ZeroItemWeight,

    /// Declared packaging outweighs the gross reading - almost always a
    /// mis-keyed box count or a box preset applied to the wrong product.
    #[error("box weight {box_weight} exceeds item weight {item_weight}")]
    BoxExceedsItemWeight {
        box_weight: Weight,
        item_weight: Weight,
    },

    /// Gross weight and tare cancel out exactly.
    #[error("net weight must be greater than 0 after deducting box weight")]
    ZeroNetWeight,

    /// Not enough tracked stock to cover the net weight.
    #[error("insufficient stock for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: Weight,
        requested: Weight,
    },
}

// ============================================================================
// Input validation
// ============================================================================

/// A raw input failed a range or format check.
///
/// These fire before any cart math runs, typically at the terminal
/// boundary where operator-typed values arrive.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must not exceed {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    #[error("{field} is invalid: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// ============================================================================
// Umbrella error
// ============================================================================

/// Top-level error for fallible core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An order tab refused another line.
    #[error("order tab cannot hold more than {max} items")]
    TabFull { max: usize },

    /// A line id did not match anything in the tab.
    #[error("cart item {id} not found in this tab")]
    ItemNotFound { id: String },

    /// A business rule rejected the cart addition.
    #[error(transparent)]
    Rejected(#[from] CartRejection),

    /// A raw input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages_are_cashier_facing() {
        assert_eq!(
            CartRejection::ZeroItemWeight.to_string(),
            "weight must be greater than 0"
        );
        assert_eq!(
            CartRejection::ZeroNetWeight.to_string(),
            "net weight must be greater than 0 after deducting box weight"
        );
    }

    #[test]
    fn test_box_exceeds_message_names_both_weights() {
        let rejection = CartRejection::BoxExceedsItemWeight {
            box_weight: Weight::from_grams(1500),
            item_weight: Weight::from_grams(1000),
        };
        assert_eq!(
            rejection.to_string(),
            "box weight 1.5 kg exceeds item weight 1 kg"
        );
    }

    #[test]
    fn test_insufficient_stock_names_product_and_quantities() {
        let rejection = CartRejection::InsufficientStock {
            product: "Red Rice".to_string(),
            available: Weight::from_grams(3000),
            requested: Weight::from_grams(5250),
        };
        assert_eq!(
            rejection.to_string(),
            "insufficient stock for Red Rice: available 3 kg, requested 5.25 kg"
        );
    }

    #[test]
    fn test_core_error_wraps_rejections() {
        let err: CoreError = CartRejection::ZeroItemWeight.into();
        assert!(matches!(err, CoreError::Rejected(_)));
        assert_eq!(err.to_string(), "weight must be greater than 0");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "box count".to_string(),
            min: 0,
            max: 999,
        };
        assert_eq!(err.to_string(), "box count must be between 0 and 999");
    }
}
