//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request (Command) Format
//! ```text
//! ┌────────────┬────────────┬────────────┬────┐
//! │ jtag_read  │ 0xAAAAAAAA │            │ \n │
//! ├────────────┼────────────┼────────────┼────┤
//! │ jtag_write │ 0xAAAAAAAA │ 0xDDDDDDDD │ \n │
//! └────────────┴────────────┴────────────┴────┘
//! ```
//! Fields are separated by a single space.
//!
//! ### Response Format (read only)
//! ```text
//! ┌─────────────────────────────┐
//! │ 10 ASCII hex chars (no \n)  │
//! └─────────────────────────────┘
//! ```

use std::io::{ErrorKind, Read, Write};

use crate::error::{JtagError, Result};
use super::{Operation, Transaction, RESPONSE_LEN};

// =============================================================================
// Command Encoding
// =============================================================================

/// Encode a transaction as its command line
pub fn encode_command(transaction: &Transaction) -> String {
    match transaction.operation() {
        Operation::Read => format!("jtag_read 0x{:08X}\n", transaction.address()),
        Operation::Write { data } => {
            format!("jtag_write 0x{:08X} 0x{:08X}\n", transaction.address(), data)
        }
    }
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a read value the way the server sends it
pub fn encode_response(value: u32) -> String {
    format!("0x{:08X}", value)
}

/// Decode a read response into its value
///
/// Accepts surrounding whitespace, trailing NUL padding and one optional
/// `0x`/`0X` prefix. The remaining digits must all be hex and fit in 32 bits.
pub fn decode_response(bytes: &[u8]) -> Result<u32> {
    let text = std::str::from_utf8(bytes).map_err(|_| {
        JtagError::MalformedResponse(format!("non-ASCII response {:02X?}", bytes))
    })?;

    let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\0');
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(JtagError::MalformedResponse(format!(
            "expected hexadecimal, got {:?}",
            text
        )));
    }

    u32::from_str_radix(digits, 16).map_err(|e| {
        JtagError::MalformedResponse(format!("{:?} is not a 32-bit value: {}", text, e))
    })
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Write a complete command to a stream
///
/// Keeps writing until every byte is out; short writes are resumed.
pub fn write_command<W: Write>(writer: &mut W, command: &str) -> Result<()> {
    let mut remaining = command.as_bytes();

    while !remaining.is_empty() {
        match writer.write(remaining) {
            Ok(0) => return Err(JtagError::ConnectionClosed),
            Ok(n) => {
                tracing::trace!("Wrote {} of {} command bytes", n, remaining.len());
                remaining = &remaining[n..];
            }
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(map_io_error(e, JtagError::WriteFailed)),
        }
    }

    writer
        .flush()
        .map_err(|e| map_io_error(e, JtagError::WriteFailed))
}

/// Read a complete response from a stream
///
/// Blocks until all `RESPONSE_LEN` bytes are received or the peer goes away.
pub fn read_response<R: Read>(reader: &mut R) -> Result<[u8; RESPONSE_LEN]> {
    let mut buffer = [0u8; RESPONSE_LEN];
    let mut filled = 0;

    while filled < RESPONSE_LEN {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) if filled == 0 => return Err(JtagError::ConnectionClosed),
            Ok(0) => {
                return Err(JtagError::MalformedResponse(format!(
                    "truncated response: got {} of {} bytes",
                    filled, RESPONSE_LEN
                )))
            }
            Ok(n) => {
                tracing::trace!("Read {} response bytes", n);
                filled += n;
            }
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(map_io_error(e, JtagError::ReadFailed)),
        }
    }

    Ok(buffer)
}

/// Classify a socket error: timeouts and peer disconnects get their own kinds
fn map_io_error(e: std::io::Error, other: fn(std::io::Error) -> JtagError) -> JtagError {
    match e.kind() {
        // Unix reports an expired SO_RCVTIMEO/SO_SNDTIMEO as WouldBlock
        ErrorKind::TimedOut | ErrorKind::WouldBlock => JtagError::TimedOut,
        ErrorKind::ConnectionReset
        | ErrorKind::ConnectionAborted
        | ErrorKind::BrokenPipe
        | ErrorKind::WriteZero
        | ErrorKind::UnexpectedEof => JtagError::ConnectionClosed,
        _ => other(e),
    }
}
