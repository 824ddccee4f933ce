//! # Kilo Terminal Library
//!
//! The session layer of a Kilo POS terminal. It owns the open order
//! tabs for one counter and exposes the operations a front end calls;
//! every price and weight is computed by `kilo-core`.
//!
//! ## Module Organization
//! ```text
//! kilo_terminal/
//! ├── lib.rs          ◄─── You are here (exports & logging setup)
//! ├── session.rs      ◄─── Session + thread-safe SessionState
//! ├── ops.rs          ◄─── Terminal operations (tabs, lines, submit)
//! ├── config.rs       ◄─── Terminal configuration
//! └── error.rs        ◄─── Terminal error type with wire codes
//! ```
//!
//! ## Where State Lives
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      One Terminal Session                       │
//! │                                                                 │
//! │  ┌──────────────────┐          ┌──────────────────────────┐    │
//! │  │   SessionState   │          │     TerminalConfig       │    │
//! │  │                  │          │                          │    │
//! │  │  • Open tabs     │          │  • Store name            │    │
//! │  │  • Active tab    │          │  • Currency code         │    │
//! │  │  (Arc<Mutex>)    │          │  (read-only after boot)  │    │
//! │  └──────────────────┘          └──────────────────────────┘    │
//! │                                                                 │
//! │  Tabs are memory-only. Submission produces an OrderDraft the   │
//! │  backend recomputes from raw lines; nothing is persisted here. │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod ops;
pub mod session;

pub use config::TerminalConfig;
pub use error::{ErrorCode, TerminalError};
pub use session::{Session, SessionState};

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=kilo=trace` - Show trace for kilo crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,kilo=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
