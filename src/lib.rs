//! # jtag-client
//!
//! Client for a JTAG-to-Avalon-MM register server:
//! - Single 32-bit register read or write per invocation
//! - Line-oriented ASCII protocol over TCP
//! - One connection per transaction, always closed before returning
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         CLI                                  │
//! │              (--read / --write / --data)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Command Builder                             │
//! │        (validate → Transaction → jtag_read/jtag_write)       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                Transaction Executor                          │
//! │   resolve → connect → send → (receive → decode) → close      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │  JTAG server  │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{JtagError, Result, TransactionError, ValidationError};
pub use config::Config;
pub use network::{Executor, TransactionState};
pub use protocol::{Operation, OperationKind, Outcome, Transaction};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of jtag-client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
