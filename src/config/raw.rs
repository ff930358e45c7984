//! YAML descriptor parsing.
//!
//! Defines the untyped shape of a cluster descriptor with serde. Every
//! field is optional here; presence rules are enforced by
//! [`ClusterConfig`](super::ClusterConfig).

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;
use super::defaults;

/// Network portion of a cluster descriptor as written by the operator.
///
/// A full descriptor carries many more sections (worker pools, instance
/// types, TLS assets); keys not listed here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDescriptor {
    /// DNS name of the API endpoint
    #[serde(rename = "externalDNSName")]
    pub external_dns_name: Option<String>,

    /// SSH key pair name
    pub key_name: Option<String>,

    /// Cloud region
    pub region: Option<String>,

    /// Cluster name
    pub cluster_name: Option<String>,

    /// Key-management key ARN
    pub kms_key_arn: Option<String>,

    /// Single-subnet availability zone
    pub availability_zone: Option<String>,

    /// Single-subnet instance range
    #[serde(rename = "instanceCIDR")]
    pub instance_cidr: Option<String>,

    /// Controller address
    #[serde(rename = "controllerIP")]
    pub controller_ip: Option<String>,

    /// VPC address range
    #[serde(rename = "vpcCIDR")]
    pub vpc_cidr: Option<String>,

    /// Existing VPC to deploy into
    pub vpc_id: Option<String>,

    /// Existing route table (requires `vpcId`)
    pub route_table_id: Option<String>,

    /// Pod network
    #[serde(rename = "podCIDR")]
    pub pod_cidr: Option<String>,

    /// Service network
    #[serde(rename = "serviceCIDR")]
    pub service_cidr: Option<String>,

    /// Cluster DNS address
    #[serde(rename = "dnsServiceIP")]
    pub dns_service_ip: Option<String>,

    /// Whether to create the API endpoint record set
    pub create_record_set: Option<bool>,

    /// Hosted zone receiving the record set
    pub hosted_zone: Option<String>,

    /// Record set TTL in seconds
    #[serde(rename = "recordSetTTL")]
    pub record_set_ttl: Option<i64>,

    /// Release channel name
    pub release_channel: Option<String>,

    /// Multi-AZ subnet list
    pub subnets: Option<Vec<RawSubnet>>,
}

/// One entry of the `subnets` list.
///
/// Entries are closed: an unknown key here is almost always a misspelled
/// `availabilityZone` or `instanceCIDR`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct RawSubnet {
    /// Availability zone (required)
    pub availability_zone: Option<String>,

    /// Instance range (defaults to the built-in instance CIDR)
    #[serde(rename = "instanceCIDR")]
    pub instance_cidr: Option<String>,
}

impl RawDescriptor {
    /// Loads a descriptor from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses a descriptor from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid, a field has the wrong type,
    /// or a subnet entry contains an unknown key.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(ConfigError::from)
    }

    /// Fills every unset network scalar with its built-in default.
    ///
    /// Explicitly set fields are never overwritten. The topology fields
    /// (`availabilityZone`, `instanceCIDR`, `subnets`) are left untouched:
    /// whether they were set decides which layout the descriptor expresses,
    /// and the resolver applies the instance CIDR default itself.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        self.vpc_cidr.get_or_insert_with(|| defaults::VPC_CIDR.to_string());
        self.controller_ip.get_or_insert_with(|| defaults::CONTROLLER_IP.to_string());
        self.pod_cidr.get_or_insert_with(|| defaults::POD_CIDR.to_string());
        self.service_cidr.get_or_insert_with(|| defaults::SERVICE_CIDR.to_string());
        self.dns_service_ip.get_or_insert_with(|| defaults::DNS_SERVICE_IP.to_string());
        self.release_channel.get_or_insert_with(|| defaults::RELEASE_CHANNEL.as_str().to_string());
        self.record_set_ttl.get_or_insert(defaults::RECORD_SET_TTL);
        self.create_record_set.get_or_insert(false);
        self
    }
}
