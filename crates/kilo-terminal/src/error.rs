//! # Terminal Error Type
//!
//! Unified error type for terminal operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Kilo POS                               │
//! │                                                                         │
//! │  Front end                   Session layer                              │
//! │  ─────────                   ─────────────                              │
//! │                                                                         │
//! │  ops::add_line(...)                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Operation                                                       │  │
//! │  │  Result<LineResponse, TerminalError>                             │  │
//! │  │         │                                                        │  │
//! │  │         ├── unknown tab/line? ──────► code: NOT_FOUND            │  │
//! │  │         ├── input out of range? ────► code: VALIDATION_ERROR     │  │
//! │  │         ├── tab at capacity? ───────► code: CART_ERROR           │  │
//! │  │         └── business rejection? ────► NOT an error: the          │  │
//! │  │                                       response carries a tagged  │  │
//! │  │                                       outcome instead            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The split matters: a rejected cart addition is part of normal
//! cashier flow and travels inside a successful response. Errors are
//! for calls that could not be carried out at all.

use serde::Serialize;

use kilo_core::{CoreError, ValidationError};

/// Error returned from terminal operations.
///
/// ## Serialization
/// This is what the front end receives when an operation fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Order tab not found: 7f3a..."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for terminal responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (tab, line)
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart/tab operation failed
    CartError,

    /// Too many tabs open at once
    SessionFull,
}

impl TerminalError {
    /// Creates a new terminal error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        TerminalError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        TerminalError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        TerminalError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        TerminalError::new(ErrorCode::CartError, message)
    }

    /// Creates a session-full error.
    pub fn session_full(max: usize) -> Self {
        TerminalError::new(
            ErrorCode::SessionFull,
            format!("cannot open more than {} tabs", max),
        )
    }
}

/// Converts core errors to terminal errors.
impl From<CoreError> for TerminalError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::TabFull { max } => TerminalError::cart(format!(
                "order tab cannot hold more than {} items",
                max
            )),
            CoreError::ItemNotFound { id } => TerminalError::not_found("Cart item", &id),
            CoreError::Rejected(rejection) => TerminalError::cart(rejection.to_string()),
            CoreError::Validation(e) => TerminalError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors to terminal errors.
impl From<ValidationError> for TerminalError {
    fn from(err: ValidationError) -> Self {
        TerminalError::validation(err.to_string())
    }
}

impl std::fmt::Display for TerminalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for TerminalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: TerminalError = CoreError::TabFull { max: 100 }.into();
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(err.message, "order tab cannot hold more than 100 items");

        let err: TerminalError = CoreError::ItemNotFound { id: "abc".into() }.into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Cart item not found: abc");
    }

    #[test]
    fn test_serializes_with_screaming_code() {
        let err = TerminalError::not_found("Order tab", "t-1");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Order tab not found: t-1");
    }
}
