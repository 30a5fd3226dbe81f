//! Transaction Executor
//!
//! Drives one request/response cycle over a freshly opened connection.
//!
//! ## State Machine
//! ```text
//! Idle → Resolving → Connecting → Connected → Sending ─┬──────────────────────→ Closed
//!                                                      └→ Receiving → Decoding → Closed
//! ```
//! Any failure jumps straight to `Closed`. Nothing is retried.

use std::net::SocketAddrV4;

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{decode_response, encode_command, Outcome, Transaction};

use super::{resolve, Connection};

/// Where a transaction is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    Idle,
    Resolving,
    Connecting,
    Connected,
    Sending,
    Receiving,
    Decoding,
    Closed,
}

/// Executes transactions against the configured server
///
/// Every call to [`Executor::execute`] opens its own connection and closes it
/// before returning.
pub struct Executor {
    /// Server address and timeouts
    config: Config,

    /// Last state reached
    state: TransactionState,
}

impl Executor {
    /// Create an executor for the given config
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: TransactionState::Idle,
        }
    }

    /// Run one transaction to completion
    ///
    /// On return the connection (if one was opened) is closed and the state
    /// is `Closed`, whether the transaction succeeded or not.
    pub fn execute(&mut self, transaction: &Transaction) -> Result<Outcome> {
        self.state = TransactionState::Idle;

        let result = self.run(transaction);
        if let Err(ref e) = result {
            tracing::debug!("Transaction failed while {:?}: {}", self.state, e);
        }

        self.transition(TransactionState::Closed);
        result
    }

    /// Last state reached
    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Get the config
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn run(&mut self, transaction: &Transaction) -> Result<Outcome> {
        self.transition(TransactionState::Resolving);
        let ip = resolve(self.config.host.as_deref())?;

        self.transition(TransactionState::Connecting);
        let addr = SocketAddrV4::new(ip, self.config.port);
        let mut connection = Connection::open(addr, &self.config)?;
        self.transition(TransactionState::Connected);
        tracing::debug!(
            "Executing {:?} on {}",
            transaction.operation(),
            connection.peer_addr()
        );

        let result = self.exchange(&mut connection, transaction);
        connection.close();
        result
    }

    fn exchange(
        &mut self,
        connection: &mut Connection,
        transaction: &Transaction,
    ) -> Result<Outcome> {
        self.transition(TransactionState::Sending);
        connection.send(&encode_command(transaction))?;

        if !transaction.expects_response() {
            return Ok(Outcome::WriteAcknowledged);
        }

        self.transition(TransactionState::Receiving);
        let bytes = connection.receive()?;

        self.transition(TransactionState::Decoding);
        let value = decode_response(&bytes)?;

        Ok(Outcome::ReadResult(value))
    }

    fn transition(&mut self, next: TransactionState) {
        tracing::trace!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
