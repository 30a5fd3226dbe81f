//! Error types for jtag-client
//!
//! Validation failures are kept apart from transaction failures so they can
//! be reported before any socket is opened.

use std::net::SocketAddrV4;

use thiserror::Error;

/// Result type alias using JtagError
pub type Result<T> = std::result::Result<T, JtagError>;

/// Any failure while executing a transaction
pub type TransactionError = JtagError;

/// Rejected inputs. Raised before any network activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a valid address must be supplied")]
    MissingAddress,

    #[error("the address must be 32-bit aligned (got 0x{0:08X})")]
    MisalignedAddress(u32),

    #[error("valid write data must be supplied")]
    MissingWriteData,
}

/// Unified error type for jtag-client operations
#[derive(Debug, Error)]
pub enum JtagError {
    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("invalid arguments: {0}")]
    Validation(#[from] ValidationError),

    // -------------------------------------------------------------------------
    // Resolution Errors
    // -------------------------------------------------------------------------
    #[error("failed to find the IP of the server '{0}'")]
    HostNotFound(String),

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("socket connect to {addr} failed: {source}")]
    ConnectFailed {
        addr: SocketAddrV4,
        #[source]
        source: std::io::Error,
    },

    #[error("connection closed by server")]
    ConnectionClosed,

    #[error("socket write failed: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("socket read failed: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("timed out waiting for the server")]
    TimedOut,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    // -------------------------------------------------------------------------
    // Socket setup
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JtagError {
    /// Operator hint printed under the error message, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            JtagError::ConnectFailed { .. } => {
                Some("Please check that the JTAG server is running.")
            }
            JtagError::Validation(_) => Some("Use --help to see the correct usage."),
            _ => None,
        }
    }
}
