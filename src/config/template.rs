//! Descriptor template for the `init` command.
//!
//! The template is rendered with Handlebars. Operator-supplied values are
//! JSON-encoded before rendering, and a JSON string is a valid YAML
//! double-quoted scalar, so arbitrary input cannot break the document
//! structure.

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;

use super::ClusterConfig;
use super::ConfigError;
use super::defaults;

const TEMPLATE: &str = r#"# Cluster descriptor
# Validate with: cluster-netcheck validate --config <this file>

# DNS name routable to the controller (required)
externalDNSName: {{external_dns_name}}

# Name of an existing SSH key pair (required)
keyName: {{key_name}}

# Cloud region (required)
region: {{region}}

# Unique cluster name (required)
clusterName: {{cluster_name}}

# ARN of the key used to encrypt cluster assets (required)
kmsKeyArn: {{kms_key_arn}}

# Single-subnet layout. Leave unset when using 'subnets' below.
{{#if availability_zone}}
availabilityZone: {{availability_zone}}
{{else}}
# availabilityZone: us-west-1c
{{/if}}
# instanceCIDR: "{{instance_cidr}}"

# Multi-AZ layout (cannot be combined with availabilityZone/instanceCIDR)
# subnets:
#   - availabilityZone: us-west-1a
#     instanceCIDR: "10.0.0.0/24"
#   - availabilityZone: us-west-1b
#     instanceCIDR: "10.0.1.0/24"

# Release channel: {{channels}} (default: {{release_channel}})
# releaseChannel: {{release_channel}}

# Create a record set for externalDNSName inside hostedZone
# createRecordSet: false
# hostedZone: ""
# recordSetTTL: {{record_set_ttl}}

# Deploy into an existing VPC (routeTableId requires vpcId)
# vpcId: vpc-xxxxxxxx
# routeTableId: rtb-xxxxxxxx

# Network ranges (defaults shown)
# vpcCIDR: "{{vpc_cidr}}"
# controllerIP: {{controller_ip}}
# podCIDR: "{{pod_cidr}}"
# serviceCIDR: "{{service_cidr}}"
# dnsServiceIP: {{dns_service_ip}}
"#;

/// Operator-supplied values for a new descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorParams {
    /// DNS name of the API endpoint
    pub external_dns_name: String,
    /// SSH key pair name
    pub key_name: String,
    /// Cloud region
    pub region: String,
    /// Cluster name
    pub cluster_name: String,
    /// Key-management key ARN
    pub kms_key_arn: String,
    /// Optional single availability zone
    pub availability_zone: Option<String>,
}

/// Values as seen by the template: quoted operator input plus defaults.
#[derive(Debug, Serialize)]
struct TemplateContext {
    external_dns_name: String,
    key_name: String,
    region: String,
    cluster_name: String,
    kms_key_arn: String,
    availability_zone: Option<String>,
    instance_cidr: String,
    vpc_cidr: String,
    controller_ip: String,
    pod_cidr: String,
    service_cidr: String,
    dns_service_ip: String,
    record_set_ttl: i64,
    release_channel: &'static str,
    channels: String,
}

impl TemplateContext {
    fn new(params: &DescriptorParams) -> Self {
        Self {
            external_dns_name: quote(&params.external_dns_name),
            key_name: quote(&params.key_name),
            region: quote(&params.region),
            cluster_name: quote(&params.cluster_name),
            kms_key_arn: quote(&params.kms_key_arn),
            availability_zone: params
                .availability_zone
                .as_deref()
                .filter(|zone| !zone.trim().is_empty())
                .map(quote),
            instance_cidr: defaults::INSTANCE_CIDR.to_string(),
            vpc_cidr: defaults::VPC_CIDR.to_string(),
            controller_ip: defaults::CONTROLLER_IP.to_string(),
            pod_cidr: defaults::POD_CIDR.to_string(),
            service_cidr: defaults::SERVICE_CIDR.to_string(),
            dns_service_ip: defaults::DNS_SERVICE_IP.to_string(),
            record_set_ttl: defaults::RECORD_SET_TTL,
            release_channel: defaults::RELEASE_CHANNEL.as_str(),
            channels: crate::release::ReleaseChannel::supported_names(),
        }
    }
}

/// Renders a descriptor for `params`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidTemplate`] if rendering fails.
pub fn render_descriptor(params: &DescriptorParams) -> Result<String, ConfigError> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs.register_escape_fn(handlebars::no_escape);

    hbs.render_template(TEMPLATE, &TemplateContext::new(params))
        .map_err(|e| ConfigError::InvalidTemplate {
            reason: e.to_string(),
        })
}

/// Renders, validates and writes a new descriptor to `path`.
///
/// The rendered document goes through the same validation as any
/// operator-written descriptor, so a bad cluster name or ARN is reported
/// before anything touches the filesystem.
///
/// # Errors
///
/// Returns an error if:
/// - The rendered descriptor fails validation
/// - `path` exists and `force` is false
/// - The file cannot be written
pub fn write_descriptor(
    path: &Path,
    params: &DescriptorParams,
    force: bool,
) -> Result<ClusterConfig, ConfigError> {
    let content = render_descriptor(params)?;
    let config = ClusterConfig::parse(&content)?;

    if !force && path.exists() {
        return Err(ConfigError::FileExists {
            path: path.to_path_buf(),
        });
    }

    std::fs::write(path, content).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("Wrote cluster descriptor to {}", path.display());
    Ok(config)
}

fn quote(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
