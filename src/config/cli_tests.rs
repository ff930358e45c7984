//! Tests for CLI argument parsing.

use std::path::Path;

use super::cli::{Cli, Command, OutputFormat};
use super::template::DescriptorParams;

mod validate {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from_iter(["cluster-netcheck", "validate"]);

        match cli.command {
            Command::Validate { config, format } => {
                assert_eq!(config, Path::new("cluster.yaml"));
                assert_eq!(format, OutputFormat::Text);
            }
            Command::Init(_) => panic!("expected validate"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn config_path_and_json_format() {
        let cli = Cli::parse_from_iter([
            "cluster-netcheck",
            "validate",
            "--config",
            "prod.yaml",
            "--format",
            "json",
        ]);

        assert!(matches!(
            cli.command,
            Command::Validate { ref config, format: OutputFormat::Json } if config == Path::new("prod.yaml")
        ));
    }

    #[test]
    fn short_config_flag() {
        let cli = Cli::parse_from_iter(["cluster-netcheck", "validate", "-c", "a.yaml"]);

        assert!(matches!(
            cli.command,
            Command::Validate { ref config, .. } if config == Path::new("a.yaml")
        ));
    }

    #[test]
    fn verbose_is_global() {
        let before = Cli::parse_from_iter(["cluster-netcheck", "-v", "validate"]);
        let after = Cli::parse_from_iter(["cluster-netcheck", "validate", "--verbose"]);

        assert!(before.verbose);
        assert!(after.verbose);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let result = Cli::try_parse_from_iter(["cluster-netcheck", "validate", "--format", "xml"]);

        assert!(result.is_err());
    }
}

mod init {
    use super::*;

    const REQUIRED: [&str; 12] = [
        "cluster-netcheck",
        "init",
        "--cluster-name",
        "prod",
        "--external-dns-name",
        "kube.example.com",
        "--key-name",
        "ops-key",
        "--region",
        "us-west-1",
        "--kms-key-arn",
        "arn:aws:kms:us-west-1:123456789012:key/abcd",
    ];

    #[test]
    fn required_args() {
        let cli = Cli::parse_from_iter(REQUIRED);

        assert!(cli.is_init());
        let Command::Init(args) = cli.command else {
            panic!("expected init");
        };
        assert_eq!(args.output, Path::new("cluster.yaml"));
        assert_eq!(args.cluster_name, "prod");
        assert!(args.availability_zone.is_none());
        assert!(!args.force);
    }

    #[test]
    fn optional_args() {
        let mut argv = REQUIRED.to_vec();
        argv.extend(["--availability-zone", "us-west-1c", "--force", "-o", "out.yaml"]);

        let Command::Init(args) = Cli::parse_from_iter(argv).command else {
            panic!("expected init");
        };

        assert_eq!(args.availability_zone.as_deref(), Some("us-west-1c"));
        assert!(args.force);
        assert_eq!(args.output, Path::new("out.yaml"));
    }

    #[test]
    fn converts_to_descriptor_params() {
        let Command::Init(args) = Cli::parse_from_iter(REQUIRED).command else {
            panic!("expected init");
        };

        let params = DescriptorParams::from(&args);

        assert_eq!(params.external_dns_name, "kube.example.com");
        assert_eq!(params.key_name, "ops-key");
        assert_eq!(params.region, "us-west-1");
        assert_eq!(params.kms_key_arn, "arn:aws:kms:us-west-1:123456789012:key/abcd");
    }

    #[test]
    fn missing_required_arg_is_rejected() {
        let result = Cli::try_parse_from_iter(REQUIRED[..10].iter().copied());

        assert!(result.is_err());
    }
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from_iter(["cluster-netcheck"]).is_err());
}
