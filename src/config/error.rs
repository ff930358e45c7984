//! Error types for descriptor parsing and validation.

use std::net::Ipv4Addr;
use std::path::PathBuf;

use ipnet::Ipv4Net;
use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from loading, parsing and validating a cluster
/// descriptor. Validation stops at the first violated rule, so exactly
/// one of these is reported per call.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the descriptor file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the descriptor
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the YAML descriptor.
    #[error("Failed to parse YAML config: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Failed to write a descriptor file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the descriptor
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Refused to replace an existing file.
    #[error("Config file '{}' already exists", path.display())]
    FileExists {
        /// Path that already exists
        path: PathBuf,
    },

    /// Descriptor template could not be rendered.
    #[error("Invalid descriptor template: {reason}")]
    InvalidTemplate {
        /// Reason for invalidity
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// A field is present but does not have the expected shape.
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidFormat {
        /// Name of the field
        field: &'static str,
        /// The offending value
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Unparsable CIDR.
    #[error("Invalid CIDR for {field} '{value}': {source}")]
    InvalidCidr {
        /// Name of the field
        field: String,
        /// The offending value
        value: String,
        /// Underlying parse error
        #[source]
        source: ipnet::AddrParseError,
    },

    /// Unparsable IPv4 address.
    #[error("Invalid IP address for {field} '{value}': {source}")]
    InvalidIp {
        /// Name of the field
        field: &'static str,
        /// The offending value
        value: String,
        /// Underlying parse error
        #[source]
        source: std::net::AddrParseError,
    },

    /// Both a subnet list and a top-level topology field were given.
    #[error(
        "Conflicting topology: '{field}' cannot be combined with a non-empty 'subnets' list; \
         use either the top-level single-subnet fields or 'subnets'"
    )]
    ConflictingTopology {
        /// The top-level field that conflicts with `subnets`
        field: &'static str,
    },

    /// A subnet entry lacks its availability zone.
    #[error("Subnet #{index} is missing availabilityZone")]
    MissingAvailabilityZone {
        /// Zero-based position in `subnets`
        index: usize,
    },

    /// A network that must lie inside another does not.
    #[error("{name} ({cidr}) is not contained in {container} ({container_cidr})")]
    CidrNotContained {
        /// Description of the inner network
        name: String,
        /// The inner network
        cidr: Ipv4Net,
        /// Description of the outer network
        container: String,
        /// The outer network
        container_cidr: Ipv4Net,
    },

    /// An address that must lie inside a network does not.
    #[error("{name} ({address}) is not contained in {container} ({container_cidr})")]
    AddressNotContained {
        /// Description of the address
        name: &'static str,
        /// The address
        address: Ipv4Addr,
        /// Description of the network
        container: String,
        /// The network
        container_cidr: Ipv4Net,
    },

    /// Two networks that must be disjoint intersect.
    #[error("{first} ({first_cidr}) overlaps with {second} ({second_cidr})")]
    Overlap {
        /// Description of the first network
        first: String,
        /// The first network
        first_cidr: Ipv4Net,
        /// Description of the second network
        second: String,
        /// The second network
        second_cidr: Ipv4Net,
    },

    /// The DNS service address collides with the inferred API service address.
    #[error(
        "dnsServiceIP ({address}) conflicts with the Kubernetes service IP inferred from serviceCIDR ({service_cidr})"
    )]
    DnsServiceIpConflict {
        /// The colliding address
        address: Ipv4Addr,
        /// The service network it was inferred from
        service_cidr: Ipv4Net,
    },

    /// `routeTableId` only makes sense inside an existing VPC.
    #[error("routeTableId ({route_table_id}) requires vpcId to be set")]
    RouteTableWithoutVpc {
        /// The route table that was given
        route_table_id: String,
    },

    /// Record TTL is not a positive number of seconds.
    #[error("Invalid recordSetTTL {ttl}: must be at least 1 second")]
    InvalidRecordSetTtl {
        /// The offending TTL
        ttl: i64,
    },

    /// Record TTL changed although no record set will be created.
    #[error("recordSetTTL ({ttl}) must not be set when createRecordSet is false")]
    RecordSetTtlWithoutRecordSet {
        /// The configured TTL
        ttl: i64,
    },

    /// Record creation was requested without a hosted zone.
    #[error("hostedZone must be set when createRecordSet is true")]
    MissingHostedZone,

    /// The hosted zone is not an ancestor of the external DNS name.
    #[error("externalDNSName ({external_dns_name}) is not a subdomain of hostedZone ({hosted_zone})")]
    HostedZoneMismatch {
        /// The configured hosted zone
        hosted_zone: String,
        /// The configured external DNS name
        external_dns_name: String,
    },

    /// Release channel outside the supported set.
    #[error("Unsupported release channel '{value}': expected one of {supported}")]
    UnsupportedReleaseChannel {
        /// The offending channel
        value: String,
        /// Supported channel names
        supported: String,
    },
}

/// Failure classes a caller can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Reading or writing a file failed.
    Io,
    /// The document or one of its fields has invalid syntax.
    Malformed,
    /// A required field is absent.
    Missing,
    /// The availability-zone layout is ambiguous or incomplete.
    TopologyConflict,
    /// Something that must lie inside a network does not.
    Containment,
    /// Networks that must be disjoint intersect, or addresses collide.
    Overlap,
    /// Hosted zone or record TTL settings are inconsistent.
    RecordSet,
    /// A value outside a closed enumeration.
    Unsupported,
}

/// Well-known field names for error reporting.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The external DNS name of the API endpoint.
    pub const EXTERNAL_DNS_NAME: &str = "externalDNSName";
    /// The SSH key pair name.
    pub const KEY_NAME: &str = "keyName";
    /// The cloud region.
    pub const REGION: &str = "region";
    /// The cluster name.
    pub const CLUSTER_NAME: &str = "clusterName";
    /// The key-management ARN.
    pub const KMS_KEY_ARN: &str = "kmsKeyArn";
    /// The top-level availability zone.
    pub const AVAILABILITY_ZONE: &str = "availabilityZone";
    /// The top-level instance CIDR.
    pub const INSTANCE_CIDR: &str = "instanceCIDR";
    /// The VPC CIDR.
    pub const VPC_CIDR: &str = "vpcCIDR";
    /// The controller address.
    pub const CONTROLLER_IP: &str = "controllerIP";
    /// The pod CIDR.
    pub const POD_CIDR: &str = "podCIDR";
    /// The service CIDR.
    pub const SERVICE_CIDR: &str = "serviceCIDR";
    /// The cluster DNS address.
    pub const DNS_SERVICE_IP: &str = "dnsServiceIP";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }

    /// Classifies this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::FileExists { .. } => {
                ErrorCategory::Io
            }
            Self::YamlParse(_)
            | Self::InvalidTemplate { .. }
            | Self::InvalidFormat { .. }
            | Self::InvalidCidr { .. }
            | Self::InvalidIp { .. } => ErrorCategory::Malformed,
            Self::MissingRequired { .. } | Self::RouteTableWithoutVpc { .. } => {
                ErrorCategory::Missing
            }
            Self::ConflictingTopology { .. } | Self::MissingAvailabilityZone { .. } => {
                ErrorCategory::TopologyConflict
            }
            Self::CidrNotContained { .. } | Self::AddressNotContained { .. } => {
                ErrorCategory::Containment
            }
            Self::Overlap { .. } | Self::DnsServiceIpConflict { .. } => ErrorCategory::Overlap,
            Self::InvalidRecordSetTtl { .. }
            | Self::RecordSetTtlWithoutRecordSet { .. }
            | Self::MissingHostedZone
            | Self::HostedZoneMismatch { .. } => ErrorCategory::RecordSet,
            Self::UnsupportedReleaseChannel { .. } => ErrorCategory::Unsupported,
        }
    }
}
