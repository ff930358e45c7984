//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::template::DescriptorParams;

/// Cluster network topology checker
///
/// Validates the network layout of a cluster descriptor (CIDRs, subnets,
/// DNS record settings, release channel) before anything is provisioned.
#[derive(Debug, Parser)]
#[command(name = "cluster-netcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for cluster-netcheck
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a cluster descriptor and print the resolved configuration
    Validate {
        /// Path to the cluster descriptor
        #[arg(long, short, default_value = "cluster.yaml")]
        config: PathBuf,

        /// Output format for the validated configuration
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Generate a new cluster descriptor
    Init(InitArgs),
}

/// Arguments for the `init` subcommand.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Output path for the descriptor
    #[arg(long, short, default_value = "cluster.yaml")]
    pub output: PathBuf,

    /// Cluster name
    #[arg(long = "cluster-name")]
    pub cluster_name: String,

    /// DNS name of the API endpoint
    #[arg(long = "external-dns-name")]
    pub external_dns_name: String,

    /// Name of an existing SSH key pair
    #[arg(long = "key-name")]
    pub key_name: String,

    /// Cloud region
    #[arg(long)]
    pub region: String,

    /// ARN of the key used to encrypt cluster assets
    #[arg(long = "kms-key-arn")]
    pub kms_key_arn: String,

    /// Pin the single default subnet to this availability zone
    #[arg(long = "availability-zone")]
    pub availability_zone: Option<String>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Output format for `validate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One-line human-readable summary
    Text,
    /// Full validated configuration as JSON
    Json,
}

impl From<&InitArgs> for DescriptorParams {
    fn from(args: &InitArgs) -> Self {
        Self {
            external_dns_name: args.external_dns_name.clone(),
            key_name: args.key_name.clone(),
            region: args.region.clone(),
            cluster_name: args.cluster_name.clone(),
            kms_key_arn: args.kms_key_arn.clone(),
            availability_zone: args.availability_zone.clone(),
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Like [`Self::parse_from_iter`], but returns the clap error instead of exiting.
    ///
    /// # Errors
    ///
    /// Returns a [`clap::Error`] for missing or malformed arguments.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init(_))
    }
}
