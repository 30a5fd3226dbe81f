//! Command definitions
//!
//! Turns user-supplied numbers into a validated transaction.

use crate::error::ValidationError;

/// Which operation the user asked for, before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Read,
    Write,
}

/// A validated operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Read one 32-bit word
    Read,

    /// Write one 32-bit word
    Write { data: u32 },
}

/// A single validated request. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    address: u32,
    operation: Operation,
}

impl Transaction {
    /// Build a read transaction
    pub fn read(address: u32) -> std::result::Result<Self, ValidationError> {
        validate(Some(address), OperationKind::Read, None)
    }

    /// Build a write transaction
    pub fn write(address: u32, data: u32) -> std::result::Result<Self, ValidationError> {
        validate(Some(address), OperationKind::Write, Some(data))
    }

    /// Target byte address (always 32-bit aligned)
    pub fn address(&self) -> u32 {
        self.address
    }

    /// The operation to perform
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Whether the server will send a response
    pub fn expects_response(&self) -> bool {
        matches!(self.operation, Operation::Read)
    }
}

/// Validate parsed inputs into a Transaction
///
/// Checks, in order: address present, address aligned, write data present.
/// Data supplied alongside a read is ignored.
pub fn validate(
    address: Option<u32>,
    kind: OperationKind,
    data: Option<u32>,
) -> std::result::Result<Transaction, ValidationError> {
    let address = address.ok_or(ValidationError::MissingAddress)?;

    if address & 0x3 != 0 {
        return Err(ValidationError::MisalignedAddress(address));
    }

    let operation = match kind {
        OperationKind::Read => Operation::Read,
        OperationKind::Write => Operation::Write {
            data: data.ok_or(ValidationError::MissingWriteData)?,
        },
    };

    Ok(Transaction { address, operation })
}

/// Parse a numeric literal: `0x`/`0X` prefix is hex, anything else decimal
///
/// Returns None for anything that does not parse, which callers treat the
/// same as a missing value.
pub fn parse_literal(text: &str) -> Option<u32> {
    let text = text.trim();
    let (digits, radix) = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (text, 10),
    };

    // Digits only: no sign, no separators
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        tracing::warn!("Ignoring unparsable numeric literal {:?}", text);
        return None;
    }

    match u32::from_str_radix(digits, radix) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring out-of-range numeric literal {:?}: {}", text, e);
            None
        }
    }
}

/// Parse a port number using the same literal rules
pub fn parse_port(text: &str) -> Option<u16> {
    parse_literal(text).and_then(|value| u16::try_from(value).ok())
}
