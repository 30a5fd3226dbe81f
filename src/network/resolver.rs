//! Host Resolution
//!
//! Maps the user's host string to the IPv4 address to connect to.

use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs};

use crate::error::{JtagError, Result};

/// Resolve a hostname or dotted-decimal literal to an IPv4 address
///
/// - `None` resolves to the loopback address
/// - IPv4 literals are used as-is, no lookup
/// - Anything else goes through the system resolver; the first IPv4 result wins
pub fn resolve(host: Option<&str>) -> Result<Ipv4Addr> {
    let host = match host {
        Some(host) => host.trim(),
        None => return Ok(Ipv4Addr::LOCALHOST),
    };

    if let Ok(addr) = host.parse::<Ipv4Addr>() {
        return Ok(addr);
    }

    let candidates = (host, 0u16).to_socket_addrs().map_err(|e| {
        tracing::debug!("Lookup of {} failed: {}", host, e);
        JtagError::HostNotFound(host.to_string())
    })?;

    candidates
        .filter_map(|addr| match addr {
            SocketAddr::V4(v4) => Some(*v4.ip()),
            SocketAddr::V6(_) => None,
        })
        .next()
        .ok_or_else(|| JtagError::HostNotFound(host.to_string()))
}
