//! Default values for descriptor fields.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.
//! The network defaults are mutually consistent: a descriptor that sets no
//! network field at all always validates.

use std::net::Ipv4Addr;

use ipnet::Ipv4Net;

use crate::release::ReleaseChannel;

/// Default VPC address range.
pub const VPC_CIDR: Ipv4Net = Ipv4Net::new_assert(Ipv4Addr::new(10, 0, 0, 0), 16);

/// Default instance range, used by the implicit subnet and by subnet
/// entries that omit `instanceCIDR`.
pub const INSTANCE_CIDR: Ipv4Net = Ipv4Net::new_assert(Ipv4Addr::new(10, 0, 0, 0), 24);

/// Default controller address (inside [`INSTANCE_CIDR`]).
pub const CONTROLLER_IP: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 50);

/// Default pod network.
pub const POD_CIDR: Ipv4Net = Ipv4Net::new_assert(Ipv4Addr::new(10, 2, 0, 0), 16);

/// Default service network.
pub const SERVICE_CIDR: Ipv4Net = Ipv4Net::new_assert(Ipv4Addr::new(10, 3, 0, 0), 24);

/// Default cluster DNS address (inside [`SERVICE_CIDR`]).
pub const DNS_SERVICE_IP: Ipv4Addr = Ipv4Addr::new(10, 3, 0, 10);

/// Default TTL in seconds for the API endpoint record set.
pub const RECORD_SET_TTL: i64 = 300;

/// Default release channel.
pub const RELEASE_CHANNEL: ReleaseChannel = ReleaseChannel::Alpha;
