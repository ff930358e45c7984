//! Address-space primitives for cluster network layouts.
//!
//! This module provides:
//! - IPv4 network containment, overlap and first-host inference ([`cidr`])
//! - Hosted-zone subdomain matching ([`dns`])
//! - The availability-zone placement entity ([`Subnet`])
//!
//! Everything here is pure and allocation-light; the validation policy
//! that combines these helpers lives in [`crate::config`].

pub mod cidr;
pub mod dns;
mod subnet;

pub use subnet::Subnet;
