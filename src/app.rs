//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, output rendering and
//! error hints that support the main entry point.

use cluster_netcheck::config::{ClusterConfig, ConfigError, ErrorCategory, OutputFormat};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - the descriptor is invalid.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// I/O error (exit code 2) - a file could not be read or written.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn io_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error.category() {
        ErrorCategory::Io | ErrorCategory::Missing => {
            eprintln!("\nRun 'cluster-netcheck init --help' to generate a descriptor template.");
        }
        ErrorCategory::TopologyConflict => {
            eprintln!(
                "\nUse either the top-level availabilityZone/instanceCIDR (single subnet) \
                 or a 'subnets' list (multiple availability zones), not both."
            );
        }
        ErrorCategory::Containment | ErrorCategory::Overlap => {
            eprintln!(
                "\nInstance CIDRs must lie inside vpcCIDR and be disjoint; \
                 podCIDR and serviceCIDR must not overlap vpcCIDR or each other."
            );
        }
        _ => {}
    }
}

/// Renders a validated configuration for stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(config: &ClusterConfig, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(config.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(config),
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so that stdout only carries the rendered configuration.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
