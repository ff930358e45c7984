//! Availability-zone layout resolution.
//!
//! A descriptor can express its layout in three ways: a top-level
//! `availabilityZone`/`instanceCIDR` pair, an explicit `subnets` list, or
//! nothing at all. [`TopologySpec::classify`] decides which one was meant
//! and [`TopologySpec::resolve`] turns it into the canonical ordered subnet
//! list. Nothing downstream looks at the raw topology fields again.

use ipnet::Ipv4Net;

use crate::network::Subnet;

use super::defaults;
use super::error::{ConfigError, field};
use super::raw::{RawDescriptor, RawSubnet};
use super::validated::parse_cidr;

/// The layout a descriptor expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologySpec<'a> {
    /// One implicit subnet built from the top-level fields.
    ///
    /// An empty zone means no zone pinning; a missing CIDR falls back to
    /// the default instance range.
    Single {
        /// Top-level availability zone (may be empty)
        availability_zone: &'a str,
        /// Top-level instance CIDR, if given
        instance_cidr: Option<&'a str>,
    },
    /// An explicit, non-empty subnet list, order preserved.
    Multi(&'a [RawSubnet]),
}

impl<'a> TopologySpec<'a> {
    /// Decides which layout `raw` expresses.
    ///
    /// Blank strings count as unset. An empty `subnets` list is the same
    /// as no list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConflictingTopology`] if a non-empty subnet
    /// list is combined with a top-level zone or instance CIDR.
    pub fn classify(raw: &'a RawDescriptor) -> Result<Self, ConfigError> {
        let availability_zone = non_blank(raw.availability_zone.as_deref());
        let instance_cidr = non_blank(raw.instance_cidr.as_deref());

        match raw.subnets.as_deref() {
            Some(subnets) if !subnets.is_empty() => {
                if availability_zone.is_some() {
                    return Err(ConfigError::ConflictingTopology {
                        field: field::AVAILABILITY_ZONE,
                    });
                }
                if instance_cidr.is_some() {
                    return Err(ConfigError::ConflictingTopology {
                        field: field::INSTANCE_CIDR,
                    });
                }
                Ok(Self::Multi(subnets))
            }
            _ => Ok(Self::Single {
                availability_zone: availability_zone.unwrap_or_default(),
                instance_cidr,
            }),
        }
    }

    /// Short name of the layout, for logging.
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        match self {
            Self::Single { .. } => "single",
            Self::Multi(_) => "multi",
        }
    }

    /// Produces the ordered, fully populated subnet list.
    ///
    /// The result is never empty.
    ///
    /// # Errors
    ///
    /// Returns an error if a subnet entry lacks an availability zone or
    /// any instance CIDR fails to parse.
    pub fn resolve(&self) -> Result<Vec<Subnet>, ConfigError> {
        match *self {
            Self::Single {
                availability_zone,
                instance_cidr,
            } => {
                let cidr = cidr_or_default(field::INSTANCE_CIDR, instance_cidr)?;
                Ok(vec![Subnet::new(availability_zone, cidr)])
            }
            Self::Multi(entries) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| resolve_entry(index, entry))
                .collect(),
        }
    }
}

fn resolve_entry(index: usize, entry: &RawSubnet) -> Result<Subnet, ConfigError> {
    let availability_zone = non_blank(entry.availability_zone.as_deref())
        .ok_or(ConfigError::MissingAvailabilityZone { index })?;

    let cidr = cidr_or_default(
        &format!("subnets[{index}].{}", field::INSTANCE_CIDR),
        non_blank(entry.instance_cidr.as_deref()),
    )?;

    Ok(Subnet::new(availability_zone, cidr))
}

fn cidr_or_default(field_name: &str, value: Option<&str>) -> Result<Ipv4Net, ConfigError> {
    value.map_or(Ok(defaults::INSTANCE_CIDR), |v| parse_cidr(field_name, v))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
