//! Tests for validated configuration.

use super::ConfigError;
use super::ErrorCategory;
use super::validated::ClusterConfig;

/// Identity fields every descriptor needs.
const MINIMAL: &str = r#"externalDNSName: test.staging.core-os.net
keyName: test-key-name
region: us-west-1
clusterName: test-cluster-name
kmsKeyArn: "arn:aws:kms:us-west-1:xxxxxxxxx:key/xxxxxxxxxxxxxxxxxxx"
"#;

/// Helper to validate the minimal descriptor plus `extra`
fn minimal(extra: &str) -> Result<ClusterConfig, ConfigError> {
    ClusterConfig::parse(&format!("{MINIMAL}{extra}"))
}

/// Helper to validate the minimal single-AZ descriptor plus `extra`
fn single_az(extra: &str) -> Result<ClusterConfig, ConfigError> {
    minimal(&format!("availabilityZone: us-west-1c\n{extra}"))
}

/// Helper asserting that validation failed with the given category
fn assert_rejected(result: Result<ClusterConfig, ConfigError>, category: ErrorCategory) {
    match result {
        Ok(config) => panic!("expected {category:?} error, got valid config: {config}"),
        Err(e) => assert_eq!(e.category(), category, "unexpected error: {e}"),
    }
}
