//! Configuration layer for cluster-netcheck.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - YAML descriptor parsing ([`RawDescriptor`])
//! - Default values ([`defaults`])
//! - Topology resolution ([`TopologySpec`])
//! - Validated configuration ([`ClusterConfig`])
//! - Descriptor generation ([`write_descriptor`])
//!
//! # Pipeline
//!
//! A descriptor flows strictly in one direction:
//!
//! 1. **Parse** - YAML into [`RawDescriptor`]; every field optional, non-network keys ignored
//! 2. **Default** - unset network scalars receive built-in values; explicit values are kept
//! 3. **Resolve** - the top-level zone/CIDR or the `subnets` list becomes one ordered subnet list
//! 4. **Validate** - containment, overlap, address, record-set and channel rules
//!
//! Validation stops at the first violated rule and reports it as a single
//! [`ConfigError`].
//!
//! # Topology
//!
//! Exactly one layout may be expressed:
//! - `subnets` (non-empty): each entry needs `availabilityZone`; `instanceCIDR`
//!   defaults per entry. The top-level `availabilityZone` and `instanceCIDR`
//!   must then be absent.
//! - otherwise: one implicit subnet from the top-level fields, where an
//!   absent zone means no zone pinning.
//!
//! The first resolved subnet hosts the controller.
//!
//! # Record Sets
//!
//! `recordSetTTL` must be positive. With `createRecordSet: false` it must
//! stay at its default; with `createRecordSet: true`, `hostedZone` must be
//! set and be `externalDNSName` or one of its ancestors.

mod cli;
pub mod defaults;
mod error;
mod raw;
mod template;
mod topology;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod raw_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, InitArgs, OutputFormat};
pub use error::{ConfigError, ErrorCategory, field};
pub use raw::{RawDescriptor, RawSubnet};
pub use template::{DescriptorParams, render_descriptor, write_descriptor};
pub use topology::TopologySpec;
pub use validated::ClusterConfig;
