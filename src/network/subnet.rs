//! Availability-zone placement of cluster instances.

use std::fmt;

use ipnet::Ipv4Net;
use serde::Serialize;

/// One availability-zone placement with its own instance address range.
///
/// A resolved topology is an ordered, non-empty list of subnets. The
/// first subnet hosts the controller.
///
/// # Equality
///
/// Two subnets are equal if they name the same zone and the same CIDR
/// exactly as written (host bits included).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Subnet {
    /// Availability zone name (e.g. `ap-northeast-1a`).
    ///
    /// Empty only for the implicit single subnet when no zone was pinned.
    #[serde(rename = "availabilityZone")]
    pub availability_zone: String,
    /// Address range for instances launched in this subnet.
    #[serde(rename = "instanceCIDR")]
    pub instance_cidr: Ipv4Net,
}

impl Subnet {
    /// Creates a subnet.
    #[must_use]
    pub fn new(availability_zone: impl Into<String>, instance_cidr: Ipv4Net) -> Self {
        Self {
            availability_zone: availability_zone.into(),
            instance_cidr,
        }
    }

    /// Returns true if the subnet is pinned to an availability zone.
    #[must_use]
    pub fn has_zone(&self) -> bool {
        !self.availability_zone.is_empty()
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_zone() {
            write!(f, "{} ({})", self.instance_cidr, self.availability_zone)
        } else {
            write!(f, "{} (any zone)", self.instance_cidr)
        }
    }
}
