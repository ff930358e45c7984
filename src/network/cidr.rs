//! IPv4 network arithmetic used by topology validation.
//!
//! All helpers operate on the address *range* of a network, so a CIDR
//! written with host bits set (e.g. `10.4.3.0/16`) behaves exactly like
//! its truncated form (`10.4.0.0/16`).

use std::net::Ipv4Addr;

use ipnet::Ipv4Net;

/// Returns `true` if every address of `inner` lies within `outer`.
///
/// Equal networks contain each other.
///
/// # Examples
///
/// ```
/// use cluster_netcheck::network::cidr::contains;
///
/// let vpc = "10.4.0.0/16".parse().unwrap();
/// let instances = "10.4.3.0/24".parse().unwrap();
///
/// assert!(contains(&vpc, &instances));
/// assert!(!contains(&instances, &vpc));
/// ```
#[must_use]
pub fn contains(outer: &Ipv4Net, inner: &Ipv4Net) -> bool {
    outer.contains(inner)
}

/// Returns `true` if `address` lies within `net`.
#[must_use]
pub fn contains_addr(net: &Ipv4Net, address: Ipv4Addr) -> bool {
    net.contains(&address)
}

/// Returns `true` if the two networks share at least one address.
///
/// Detects partial overlap across differing prefix lengths as well as
/// full containment in either direction.
///
/// # Examples
///
/// ```
/// use cluster_netcheck::network::cidr::overlaps;
///
/// let vpc = "10.4.2.0/23".parse().unwrap();
/// let pods = "10.4.0.0/16".parse().unwrap();
/// let services = "10.5.0.0/16".parse().unwrap();
///
/// assert!(overlaps(&vpc, &pods));
/// assert!(!overlaps(&pods, &services));
/// ```
#[must_use]
pub fn overlaps(a: &Ipv4Net, b: &Ipv4Net) -> bool {
    a.network() <= b.broadcast() && b.network() <= a.broadcast()
}

/// Returns the first address after the network base of `net`.
///
/// This is the address the cluster reserves for the Kubernetes API service
/// (`172.5.10.10/22` → `172.5.8.1`). A `/32` has no room above its base,
/// so the result lies outside `net` (and wraps to `0.0.0.0` for
/// `255.255.255.255/32`); callers must check it with [`contains_addr`].
#[must_use]
pub fn first_host(net: &Ipv4Net) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(net.network()).wrapping_add(1))
}

#[cfg(test)]
#[path = "cidr_tests.rs"]
mod tests;
