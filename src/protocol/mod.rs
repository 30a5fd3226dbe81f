//! Protocol Module
//!
//! Defines the wire protocol spoken with the JTAG server.
//!
//! ## Protocol Format (ASCII, newline-terminated requests)
//!
//! ### Requests
//! ```text
//! jtag_read 0xAAAAAAAA\n
//! jtag_write 0xAAAAAAAA 0xDDDDDDDD\n
//! ```
//! `A`/`D` are 8 uppercase hex digits. Addresses are byte-based and must be
//! 32-bit aligned.
//!
//! ### Responses
//! - read:  10 ASCII characters holding the hex value (`0xDDDDDDDD`)
//! - write: none

mod command;
mod response;
mod codec;

pub use command::{parse_literal, parse_port, validate, Operation, OperationKind, Transaction};
pub use response::{Outcome, RESPONSE_LEN};
pub use codec::{
    decode_response, encode_command, encode_response, read_response, write_command,
};
