//! # Terminal Configuration
//!
//! Store-level settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`KILO_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! Operations that need it take `&TerminalConfig`; nothing reaches for
//! globals.

use serde::{Deserialize, Serialize};

use kilo_core::error::ValidationError;
use kilo_core::format::format_currency;
use kilo_core::money::Money;
use kilo_core::DEFAULT_CURRENCY_CODE;

/// Terminal configuration.
///
/// Most fields have sensible defaults for development. Production
/// deployments configure these through the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalConfig {
    /// Store name (shown on tab summaries)
    pub store_name: String,

    /// Currency code prefixed to every formatted amount (ISO 4217)
    pub currency_code: String,
}

impl Default for TerminalConfig {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        TerminalConfig {
            store_name: "Kilo POS Dev Store".to_string(),
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
        }
    }
}

impl TerminalConfig {
    /// Creates a TerminalConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `KILO_STORE_NAME`: Override store name
    /// - `KILO_CURRENCY_CODE`: Override currency code (e.g. "LKR")
    pub fn from_env() -> Self {
        let mut config = TerminalConfig::default();

        if let Ok(store_name) = std::env::var("KILO_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(currency_code) = std::env::var("KILO_CURRENCY_CODE") {
            config.currency_code = currency_code;
        }

        config
    }

    /// Checks the configuration is usable before the terminal starts.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.store_name.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "store name".to_string(),
            });
        }

        let code = self.currency_code.trim();
        if code.is_empty() {
            return Err(ValidationError::Required {
                field: "currency code".to_string(),
            });
        }
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidFormat {
                field: "currency code".to_string(),
                reason: "must be 3 uppercase letters (ISO 4217)".to_string(),
            });
        }

        Ok(())
    }

    /// Formats a cent amount with the configured currency code.
    ///
    /// ## Example
    /// ```rust
    /// use kilo_terminal::config::TerminalConfig;
    ///
    /// let config = TerminalConfig::default();
    /// assert_eq!(config.format_currency(22500), "LKR 225.00");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        format_currency(Money::from_cents(cents), &self.currency_code)
    }
}
