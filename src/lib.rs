//! Cluster network topology checker
//!
//! A library for validating and normalizing the network layout of a
//! cluster deployment descriptor before any cloud resource is provisioned.
//!
//! ```
//! use cluster_netcheck::config::ClusterConfig;
//!
//! let config = ClusterConfig::parse(
//!     r#"
//! externalDNSName: test.staging.core-os.net
//! keyName: test-key-name
//! region: us-west-1
//! clusterName: test-cluster-name
//! kmsKeyArn: "arn:aws:kms:us-west-1:xxxxxxxxx:key/xxxxxxxxxxxxxxxxxxx"
//! availabilityZone: us-west-1c
//! "#,
//! )?;
//!
//! assert_eq!(config.subnets.len(), 1);
//! assert_eq!(config.kubernetes_service_ip.to_string(), "10.3.0.1");
//! # Ok::<(), cluster_netcheck::config::ConfigError>(())
//! ```

pub mod config;
pub mod network;
pub mod release;
