//! Validated cluster configuration.
//!
//! This module contains the final, validated configuration handed to
//! provisioning. All validation is performed during construction, in a
//! fixed order, and stops at the first violated rule.

use std::fmt;
use std::net::Ipv4Addr;
use std::path::Path;
use std::sync::LazyLock;

use ipnet::Ipv4Net;
use regex::Regex;
use serde::Serialize;

use crate::network::cidr::{contains, contains_addr, first_host, overlaps};
use crate::network::dns::is_subdomain;
use crate::network::Subnet;
use crate::release::ReleaseChannel;

use super::defaults;
use super::error::{ConfigError, field};
use super::raw::RawDescriptor;
use super::topology::TopologySpec;

/// Names usable as a cloud stack name.
static CLUSTER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][-a-zA-Z0-9]*$").expect("valid cluster name regex"));

/// Key or alias ARNs of the key-management service.
static KMS_KEY_ARN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^arn:[a-z-]+:kms:[^:]*:[^:]*:(key|alias)/.+$").expect("valid KMS ARN regex")
});

/// Name of the derived API service address in error messages.
const KUBERNETES_SERVICE_IP: &str = "kubernetesServiceIP";

/// Fully validated cluster configuration ready for provisioning.
///
/// Every network field is populated, the subnet list is resolved and
/// non-empty, and all address-space invariants hold.
///
/// # Construction
///
/// Use [`ClusterConfig::from_raw`] (or [`parse`](Self::parse) /
/// [`load`](Self::load)) to build one from a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    /// DNS name of the API endpoint
    #[serde(rename = "externalDNSName")]
    pub external_dns_name: String,

    /// SSH key pair name
    pub key_name: String,

    /// Cloud region
    pub region: String,

    /// Cluster name
    pub cluster_name: String,

    /// Key-management key ARN
    pub kms_key_arn: String,

    /// VPC address range
    #[serde(rename = "vpcCIDR")]
    pub vpc_cidr: Ipv4Net,

    /// Existing VPC to deploy into
    pub vpc_id: Option<String>,

    /// Existing route table inside `vpc_id`
    pub route_table_id: Option<String>,

    /// Controller address, inside the first subnet
    #[serde(rename = "controllerIP")]
    pub controller_ip: Ipv4Addr,

    /// Pod network
    #[serde(rename = "podCIDR")]
    pub pod_cidr: Ipv4Net,

    /// Service network
    #[serde(rename = "serviceCIDR")]
    pub service_cidr: Ipv4Net,

    /// Cluster DNS address, inside `service_cidr`
    #[serde(rename = "dnsServiceIP")]
    pub dns_service_ip: Ipv4Addr,

    /// API service address inferred from `service_cidr`
    #[serde(rename = "kubernetesServiceIP")]
    pub kubernetes_service_ip: Ipv4Addr,

    /// Whether the API endpoint record set is created
    pub create_record_set: bool,

    /// Hosted zone receiving the record set
    pub hosted_zone: Option<String>,

    /// Record set TTL in seconds
    #[serde(rename = "recordSetTTL")]
    pub record_set_ttl: i64,

    /// Release channel
    pub release_channel: ReleaseChannel,

    /// Resolved subnets; the first one hosts the controller
    pub subnets: Vec<Subnet>,
}

/// Parsed network scalars, before any cross-field rule is applied.
#[derive(Debug, Clone, Copy)]
struct NetworkScalars {
    vpc_cidr: Ipv4Net,
    controller_ip: Ipv4Addr,
    pod_cidr: Ipv4Net,
    service_cidr: Ipv4Net,
    dns_service_ip: Ipv4Addr,
}

/// Identity and metadata fields, checked for presence and shape only.
#[derive(Debug)]
struct Identity {
    external_dns_name: String,
    key_name: String,
    region: String,
    cluster_name: String,
    kms_key_arn: String,
}

impl fmt::Display for ClusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zones = self
            .subnets
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "Cluster {{ name: {}, region: {}, vpc: {}, subnets: [{}], controller: {}, \
             pods: {}, services: {}, dns: {}, record_set: {}, channel: {} }}",
            self.cluster_name,
            self.region,
            self.vpc_cidr,
            zones,
            self.controller_ip,
            self.pod_cidr,
            self.service_cidr,
            self.dns_service_ip,
            self.create_record_set,
            self.release_channel,
        )
    }
}

impl ClusterConfig {
    /// Validates a raw descriptor and builds the configuration.
    ///
    /// Pipeline: identity fields, defaulting, parsing, topology
    /// resolution, address-space rules, existing-VPC rule, record-set
    /// rules, release channel.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, e.g.:
    /// - Required identity fields are missing or malformed
    /// - A CIDR or IP address does not parse
    /// - The topology is ambiguous or a subnet lacks its zone
    /// - Networks are not contained where required, or overlap
    /// - Record-set settings are inconsistent
    /// - The release channel is not supported
    pub fn from_raw(raw: RawDescriptor) -> Result<Self, ConfigError> {
        let identity = Identity::resolve(&raw)?;

        let raw = raw.with_defaults();
        tracing::debug!("Applied built-in defaults to unset network fields");

        let scalars = NetworkScalars::parse(&raw)?;

        let topology = TopologySpec::classify(&raw)?;
        let subnets = topology.resolve()?;
        tracing::debug!(
            "Resolved {} topology into {} subnet(s)",
            topology.mode(),
            subnets.len()
        );

        let kubernetes_service_ip = scalars.validate(&subnets)?;
        validate_vpc_reference(&raw)?;

        let (create_record_set, record_set_ttl) =
            resolve_record_set(&raw, &identity.external_dns_name)?;
        let release_channel = resolve_release_channel(raw.release_channel.as_deref())?;

        Ok(Self {
            external_dns_name: identity.external_dns_name,
            key_name: identity.key_name,
            region: identity.region,
            cluster_name: identity.cluster_name,
            kms_key_arn: identity.kms_key_arn,
            vpc_cidr: scalars.vpc_cidr,
            vpc_id: raw.vpc_id,
            route_table_id: raw.route_table_id,
            controller_ip: scalars.controller_ip,
            pod_cidr: scalars.pod_cidr,
            service_cidr: scalars.service_cidr,
            dns_service_ip: scalars.dns_service_ip,
            kubernetes_service_ip,
            create_record_set,
            hosted_zone: raw.hosted_zone,
            record_set_ttl,
            release_channel,
            subnets,
        })
    }

    /// Parses and validates a YAML descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or the descriptor fails validation.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::from_raw(RawDescriptor::parse(content)?)
    }

    /// Loads and validates a YAML descriptor file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read or parsed
    /// - The descriptor fails validation
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!("Loading cluster descriptor from {}", path.display());
        Self::from_raw(RawDescriptor::load(path)?)
    }

    /// The subnet hosting the controller.
    #[must_use]
    pub fn controller_subnet(&self) -> Option<&Subnet> {
        self.subnets.first()
    }
}

impl Identity {
    fn resolve(raw: &RawDescriptor) -> Result<Self, ConfigError> {
        let external_dns_name = require(
            raw.external_dns_name.as_deref(),
            field::EXTERNAL_DNS_NAME,
            "Set externalDNSName to the DNS name of the API endpoint",
        )?;
        let key_name = require(
            raw.key_name.as_deref(),
            field::KEY_NAME,
            "Set keyName to an existing SSH key pair",
        )?;
        let region = require(
            raw.region.as_deref(),
            field::REGION,
            "Set region to the target cloud region",
        )?;
        let cluster_name = require(
            raw.cluster_name.as_deref(),
            field::CLUSTER_NAME,
            "Set clusterName to a unique name for this cluster",
        )?;
        let kms_key_arn = require(
            raw.kms_key_arn.as_deref(),
            field::KMS_KEY_ARN,
            "Set kmsKeyArn to the ARN of the key used to encrypt assets",
        )?;

        if !CLUSTER_NAME.is_match(&cluster_name) {
            return Err(ConfigError::InvalidFormat {
                field: field::CLUSTER_NAME,
                value: cluster_name,
                reason: "must start with a letter and contain only letters, digits and '-'"
                    .to_string(),
            });
        }

        if !KMS_KEY_ARN.is_match(&kms_key_arn) {
            return Err(ConfigError::InvalidFormat {
                field: field::KMS_KEY_ARN,
                value: kms_key_arn,
                reason: "expected 'arn:<partition>:kms:<region>:<account>:key/<id>'".to_string(),
            });
        }

        Ok(Self {
            external_dns_name,
            key_name,
            region,
            cluster_name,
            kms_key_arn,
        })
    }
}

impl NetworkScalars {
    fn parse(raw: &RawDescriptor) -> Result<Self, ConfigError> {
        let hint = "Remove the empty value to use the built-in default";
        Ok(Self {
            vpc_cidr: parse_cidr(
                field::VPC_CIDR,
                &require(raw.vpc_cidr.as_deref(), field::VPC_CIDR, hint)?,
            )?,
            controller_ip: parse_ip(
                field::CONTROLLER_IP,
                &require(raw.controller_ip.as_deref(), field::CONTROLLER_IP, hint)?,
            )?,
            pod_cidr: parse_cidr(
                field::POD_CIDR,
                &require(raw.pod_cidr.as_deref(), field::POD_CIDR, hint)?,
            )?,
            service_cidr: parse_cidr(
                field::SERVICE_CIDR,
                &require(raw.service_cidr.as_deref(), field::SERVICE_CIDR, hint)?,
            )?,
            dns_service_ip: parse_ip(
                field::DNS_SERVICE_IP,
                &require(raw.dns_service_ip.as_deref(), field::DNS_SERVICE_IP, hint)?,
            )?,
        })
    }

    /// Applies the address-space rules and returns the inferred
    /// Kubernetes service address.
    fn validate(&self, subnets: &[Subnet]) -> Result<Ipv4Addr, ConfigError> {
        self.validate_subnets(subnets)?;
        self.validate_cluster_networks()?;
        let kubernetes_service_ip = self.validate_dns_service_ip()?;
        self.validate_controller_ip(subnets)?;
        Ok(kubernetes_service_ip)
    }

    fn validate_subnets(&self, subnets: &[Subnet]) -> Result<(), ConfigError> {
        for (index, subnet) in subnets.iter().enumerate() {
            if !contains(&self.vpc_cidr, &subnet.instance_cidr) {
                return Err(ConfigError::CidrNotContained {
                    name: subnet_label(index),
                    cidr: subnet.instance_cidr,
                    container: field::VPC_CIDR.to_string(),
                    container_cidr: self.vpc_cidr,
                });
            }
        }

        for (i, first) in subnets.iter().enumerate() {
            for (j, second) in subnets.iter().enumerate().skip(i + 1) {
                if overlaps(&first.instance_cidr, &second.instance_cidr) {
                    return Err(ConfigError::Overlap {
                        first: subnet_label(i),
                        first_cidr: first.instance_cidr,
                        second: subnet_label(j),
                        second_cidr: second.instance_cidr,
                    });
                }
            }
        }

        Ok(())
    }

    fn validate_cluster_networks(&self) -> Result<(), ConfigError> {
        let pairs = [
            (field::VPC_CIDR, self.vpc_cidr, field::POD_CIDR, self.pod_cidr),
            (field::VPC_CIDR, self.vpc_cidr, field::SERVICE_CIDR, self.service_cidr),
            (field::POD_CIDR, self.pod_cidr, field::SERVICE_CIDR, self.service_cidr),
        ];

        for (first, first_cidr, second, second_cidr) in pairs {
            if overlaps(&first_cidr, &second_cidr) {
                return Err(ConfigError::Overlap {
                    first: first.to_string(),
                    first_cidr,
                    second: second.to_string(),
                    second_cidr,
                });
            }
        }

        Ok(())
    }

    fn validate_dns_service_ip(&self) -> Result<Ipv4Addr, ConfigError> {
        if !contains_addr(&self.service_cidr, self.dns_service_ip) {
            return Err(ConfigError::AddressNotContained {
                name: field::DNS_SERVICE_IP,
                address: self.dns_service_ip,
                container: field::SERVICE_CIDR.to_string(),
                container_cidr: self.service_cidr,
            });
        }

        let kubernetes_service_ip = first_host(&self.service_cidr);
        if !contains_addr(&self.service_cidr, kubernetes_service_ip) {
            return Err(ConfigError::AddressNotContained {
                name: KUBERNETES_SERVICE_IP,
                address: kubernetes_service_ip,
                container: field::SERVICE_CIDR.to_string(),
                container_cidr: self.service_cidr,
            });
        }

        if kubernetes_service_ip == self.dns_service_ip {
            return Err(ConfigError::DnsServiceIpConflict {
                address: self.dns_service_ip,
                service_cidr: self.service_cidr,
            });
        }

        Ok(kubernetes_service_ip)
    }

    fn validate_controller_ip(&self, subnets: &[Subnet]) -> Result<(), ConfigError> {
        let misplaced = subnets
            .first()
            .filter(|subnet| !contains_addr(&subnet.instance_cidr, self.controller_ip));

        if let Some(controller_subnet) = misplaced {
            return Err(ConfigError::AddressNotContained {
                name: field::CONTROLLER_IP,
                address: self.controller_ip,
                container: subnet_label(0),
                container_cidr: controller_subnet.instance_cidr,
            });
        }

        Ok(())
    }
}

fn validate_vpc_reference(raw: &RawDescriptor) -> Result<(), ConfigError> {
    let vpc_id = raw.vpc_id.as_deref().filter(|v| !v.trim().is_empty());
    let route_table_id = raw.route_table_id.as_deref().filter(|v| !v.trim().is_empty());

    match (vpc_id, route_table_id) {
        (None, Some(route_table_id)) => Err(ConfigError::RouteTableWithoutVpc {
            route_table_id: route_table_id.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Returns `(create_record_set, record_set_ttl)`.
fn resolve_record_set(
    raw: &RawDescriptor,
    external_dns_name: &str,
) -> Result<(bool, i64), ConfigError> {
    let ttl = raw.record_set_ttl.unwrap_or(defaults::RECORD_SET_TTL);
    let create = raw.create_record_set.unwrap_or(false);

    if ttl < 1 {
        return Err(ConfigError::InvalidRecordSetTtl { ttl });
    }

    if !create {
        if ttl != defaults::RECORD_SET_TTL {
            return Err(ConfigError::RecordSetTtlWithoutRecordSet { ttl });
        }
        return Ok((false, ttl));
    }

    let hosted_zone = raw
        .hosted_zone
        .as_deref()
        .filter(|zone| !zone.trim().is_empty())
        .ok_or(ConfigError::MissingHostedZone)?;

    if !is_subdomain(external_dns_name, hosted_zone) {
        return Err(ConfigError::HostedZoneMismatch {
            hosted_zone: hosted_zone.to_string(),
            external_dns_name: external_dns_name.to_string(),
        });
    }

    Ok((true, ttl))
}

fn resolve_release_channel(value: Option<&str>) -> Result<ReleaseChannel, ConfigError> {
    let Some(name) = value else {
        return Ok(defaults::RELEASE_CHANNEL);
    };

    ReleaseChannel::lookup(name).ok_or_else(|| ConfigError::UnsupportedReleaseChannel {
        value: name.to_string(),
        supported: ReleaseChannel::supported_names(),
    })
}

// Helper functions

fn require(
    value: Option<&str>,
    field: &'static str,
    hint: &'static str,
) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| ConfigError::missing(field, hint))
}

fn subnet_label(index: usize) -> String {
    format!("instanceCIDR of subnet #{index}")
}

pub(super) fn parse_cidr(field: &str, value: &str) -> Result<Ipv4Net, ConfigError> {
    value
        .parse::<Ipv4Net>()
        .map_err(|e| ConfigError::InvalidCidr {
            field: field.to_string(),
            value: value.to_string(),
            source: e,
        })
}

fn parse_ip(field: &'static str, value: &str) -> Result<Ipv4Addr, ConfigError> {
    value
        .parse::<Ipv4Addr>()
        .map_err(|e| ConfigError::InvalidIp {
            field,
            value: value.to_string(),
            source: e,
        })
}
