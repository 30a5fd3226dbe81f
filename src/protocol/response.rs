//! Response definitions
//!
//! What a finished transaction hands back to the caller.

/// Size of a read response on the wire: `0x` + 8 hex digits
pub const RESPONSE_LEN: usize = 10;

/// Result of a successful transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Value read from the register
    ReadResult(u32),

    /// Write was sent (the protocol has no acknowledgment)
    WriteAcknowledged,
}

impl Outcome {
    /// The value read, if this was a read
    pub fn value(&self) -> Option<u32> {
        match self {
            Outcome::ReadResult(value) => Some(*value),
            Outcome::WriteAcknowledged => None,
        }
    }
}
