//! Connection Handler
//!
//! Owns the TCP stream for exactly one transaction.

use std::io::ErrorKind;
use std::net::{Shutdown, SocketAddr, SocketAddrV4, TcpStream};

use crate::config::Config;
use crate::error::{JtagError, Result};
use crate::protocol::{read_response, write_command, RESPONSE_LEN};

/// A single client connection to the JTAG server
///
/// The socket is released when the connection is closed or dropped,
/// whichever comes first.
pub struct Connection {
    /// TCP stream to the server
    stream: TcpStream,

    /// Peer address for logging
    peer_addr: SocketAddrV4,
}

impl Connection {
    /// Connect to the server
    ///
    /// Applies the configured connect timeout, then the read/write timeouts
    /// on the established stream.
    pub fn open(addr: SocketAddrV4, config: &Config) -> Result<Self> {
        let target = SocketAddr::V4(addr);

        let stream = match config.connect_timeout() {
            Some(timeout) => TcpStream::connect_timeout(&target, timeout),
            None => TcpStream::connect(target),
        }
        .map_err(|e| match e.kind() {
            ErrorKind::TimedOut | ErrorKind::WouldBlock => JtagError::TimedOut,
            _ => JtagError::ConnectFailed { addr, source: e },
        })?;

        // Commands are tiny, don't let Nagle hold them back
        stream.set_nodelay(true)?;
        stream.set_read_timeout(config.read_timeout())?;
        stream.set_write_timeout(config.write_timeout())?;

        tracing::debug!("Connected to server {}", addr);

        Ok(Self {
            stream,
            peer_addr: addr,
        })
    }

    /// Send a full command line
    pub fn send(&mut self, command: &str) -> Result<()> {
        tracing::trace!("Sending to {}: {:?}", self.peer_addr, command);
        write_command(&mut self.stream, command)
    }

    /// Receive one fixed-size read response
    pub fn receive(&mut self) -> Result<[u8; RESPONSE_LEN]> {
        let bytes = read_response(&mut self.stream)?;
        tracing::trace!(
            "Received from {}: {:?}",
            self.peer_addr,
            String::from_utf8_lossy(&bytes)
        );
        Ok(bytes)
    }

    /// Close the connection
    ///
    /// A shutdown error (peer already gone) is not a failure; the socket is
    /// released either way.
    pub fn close(self) {
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => tracing::debug!("Closed connection to {}", self.peer_addr),
            Err(e) => tracing::debug!(
                "Connection to {} already shut down: {}",
                self.peer_addr,
                e
            ),
        }
    }

    /// Get the peer address
    pub fn peer_addr(&self) -> SocketAddrV4 {
        self.peer_addr
    }
}
