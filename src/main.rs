//! Cluster network topology checker
//!
//! Entry point for the cluster-netcheck application.

use std::path::Path;
use std::process::ExitCode;

use cluster_netcheck::config::{
    Cli, ClusterConfig, Command, ConfigError, DescriptorParams, ErrorCategory, InitArgs,
    OutputFormat, write_descriptor,
};

mod app;

use app::{exit_code, print_config_hint, render, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    match &cli.command {
        Command::Validate { config, format } => handle_validate(config, *format),
        Command::Init(args) => handle_init(args),
    }
}

/// Handles the `validate` subcommand.
fn handle_validate(path: &Path, format: OutputFormat) -> ExitCode {
    let config = match ClusterConfig::load(path) {
        Ok(config) => config,
        Err(e) => return report(&e),
    };

    tracing::info!(
        "Descriptor '{}' is valid ({} subnet(s))",
        path.display(),
        config.subnets.len()
    );

    match render(&config, format) {
        Ok(output) => {
            println!("{output}");
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to render configuration: {e}");
            exit_code::io_error()
        }
    }
}

/// Handles the `init` subcommand.
fn handle_init(args: &InitArgs) -> ExitCode {
    match write_descriptor(&args.output, &DescriptorParams::from(args), args.force) {
        Ok(config) => {
            println!(
                "Cluster descriptor for '{}' written to: {}",
                config.cluster_name,
                args.output.display()
            );
            exit_code::SUCCESS
        }
        Err(e) => report(&e),
    }
}

fn report(error: &ConfigError) -> ExitCode {
    eprintln!("Configuration error: {error}");
    print_config_hint(error);

    if error.category() == ErrorCategory::Io {
        exit_code::io_error()
    } else {
        exit_code::CONFIG_ERROR
    }
}
