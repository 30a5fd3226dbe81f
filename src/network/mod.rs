//! Network Module
//!
//! TCP client side of a transaction.
//!
//! ## Architecture
//! - Resolver turns the host string into an IPv4 address
//! - Connection owns the stream for one transaction
//! - Executor runs the transaction state machine

mod resolver;
mod connection;
mod executor;

pub use resolver::resolve;
pub use connection::Connection;
pub use executor::{Executor, TransactionState};
