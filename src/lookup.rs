//! System name resolution.

use std::net::{IpAddr, ToSocketAddrs};

/// Resolves `name` through the system resolver and returns the first
/// address of the returned sequence.
///
/// The order of the result set is whatever the resolver produced; this
/// function does not reorder it. Every failure mode — unresolvable name,
/// empty result set, resolver error — collapses to `None`.
///
/// A trailing dot (`"kube-dns.kube-system.svc.cluster.local."`) is accepted
/// as equivalent to the undotted form.
#[must_use]
pub fn first_address(name: &str) -> Option<IpAddr> {
    let host = name.strip_suffix('.').unwrap_or(name);
    if host.is_empty() {
        return None;
    }

    match (host, 0u16).to_socket_addrs() {
        Ok(mut addrs) => addrs.next().map(|addr| addr.ip()),
        Err(e) => {
            tracing::debug!(name = %host, error = %e, "name resolution failed");
            None
        }
    }
}
