//! Tests for YAML descriptor parsing and defaulting.

use super::raw::{RawDescriptor, RawSubnet};

mod parsing {
    use super::*;

    #[test]
    fn parse_identity_fields() {
        let raw = RawDescriptor::parse(
            r#"externalDNSName: test.staging.core-os.net
keyName: test-key-name
region: us-west-1
clusterName: test-cluster-name
kmsKeyArn: "arn:aws:kms:us-west-1:xxxxxxxxx:key/xxxxxxxxxxxxxxxxxxx"
"#,
        )
        .unwrap();

        assert_eq!(
            raw.external_dns_name.as_deref(),
            Some("test.staging.core-os.net")
        );
        assert_eq!(raw.key_name.as_deref(), Some("test-key-name"));
        assert_eq!(raw.region.as_deref(), Some("us-west-1"));
        assert_eq!(raw.cluster_name.as_deref(), Some("test-cluster-name"));
        assert!(raw.kms_key_arn.is_some());
    }

    #[test]
    fn parse_network_fields_as_text() {
        let raw = RawDescriptor::parse(
            "vpcCIDR: 10.4.3.0/24
instanceCIDR: 10.4.3.0/24
controllerIP: 10.4.3.5
podCIDR: 172.4.0.0/16 # trailing comment
serviceCIDR: 172.5.0.0/16
dnsServiceIP: 172.5.100.101
vpcId: vpc-xxxxx
routeTableId: rtb-xxxxxx
",
        )
        .unwrap();

        assert_eq!(raw.vpc_cidr.as_deref(), Some("10.4.3.0/24"));
        assert_eq!(raw.instance_cidr.as_deref(), Some("10.4.3.0/24"));
        assert_eq!(raw.controller_ip.as_deref(), Some("10.4.3.5"));
        assert_eq!(raw.pod_cidr.as_deref(), Some("172.4.0.0/16"));
        assert_eq!(raw.service_cidr.as_deref(), Some("172.5.0.0/16"));
        assert_eq!(raw.dns_service_ip.as_deref(), Some("172.5.100.101"));
        assert_eq!(raw.vpc_id.as_deref(), Some("vpc-xxxxx"));
        assert_eq!(raw.route_table_id.as_deref(), Some("rtb-xxxxxx"));
    }

    #[test]
    fn parse_record_set_fields() {
        let raw = RawDescriptor::parse(
            "createRecordSet: true
recordSetTTL: 400
hostedZone: core-os.net
releaseChannel: beta
",
        )
        .unwrap();

        assert_eq!(raw.create_record_set, Some(true));
        assert_eq!(raw.record_set_ttl, Some(400));
        assert_eq!(raw.hosted_zone.as_deref(), Some("core-os.net"));
        assert_eq!(raw.release_channel.as_deref(), Some("beta"));
    }

    #[test]
    fn parse_subnet_list() {
        let raw = RawDescriptor::parse(
            "subnets:
  - availabilityZone: ap-northeast-1a
    instanceCIDR: 10.4.3.0/24
  - availabilityZone: ap-northeast-1c
",
        )
        .unwrap();

        assert_eq!(
            raw.subnets,
            Some(vec![
                RawSubnet {
                    availability_zone: Some("ap-northeast-1a".to_string()),
                    instance_cidr: Some("10.4.3.0/24".to_string()),
                },
                RawSubnet {
                    availability_zone: Some("ap-northeast-1c".to_string()),
                    instance_cidr: None,
                },
            ])
        );
    }

    #[test]
    fn empty_subnet_list_is_distinct_from_absent() {
        let empty = RawDescriptor::parse("subnets: []\n").unwrap();
        let absent = RawDescriptor::parse("region: us-west-1\n").unwrap();

        assert_eq!(empty.subnets, Some(vec![]));
        assert_eq!(absent.subnets, None);
    }

    #[test]
    fn non_network_sections_are_ignored() {
        let raw = RawDescriptor::parse(
            "region: us-west-1
workerCount: 2
controllerInstanceType: m3.medium
tls:
  caCert: ca.pem
",
        )
        .unwrap();

        assert_eq!(
            raw,
            RawDescriptor {
                region: Some("us-west-1".to_string()),
                ..RawDescriptor::default()
            }
        );
    }

    #[test]
    fn unknown_subnet_key_is_rejected() {
        assert!(RawDescriptor::parse("subnets:\n- zone: us-west-1a\n").is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(RawDescriptor::parse("recordSetTTL: soon\n").is_err());
        assert!(RawDescriptor::parse("createRecordSet: maybe\n").is_err());
    }
}

mod defaulting {
    use super::*;

    #[test]
    fn fills_unset_network_scalars() {
        let raw = RawDescriptor::default().with_defaults();

        assert_eq!(raw.vpc_cidr.as_deref(), Some("10.0.0.0/16"));
        assert_eq!(raw.controller_ip.as_deref(), Some("10.0.0.50"));
        assert_eq!(raw.pod_cidr.as_deref(), Some("10.2.0.0/16"));
        assert_eq!(raw.service_cidr.as_deref(), Some("10.3.0.0/24"));
        assert_eq!(raw.dns_service_ip.as_deref(), Some("10.3.0.10"));
        assert_eq!(raw.record_set_ttl, Some(300));
        assert_eq!(raw.create_record_set, Some(false));
        assert_eq!(raw.release_channel.as_deref(), Some("alpha"));
    }

    #[test]
    fn never_overwrites_explicit_values() {
        let raw = RawDescriptor {
            vpc_cidr: Some("10.4.0.0/16".to_string()),
            dns_service_ip: Some("10.3.0.53".to_string()),
            record_set_ttl: Some(60),
            create_record_set: Some(true),
            release_channel: Some("beta".to_string()),
            ..RawDescriptor::default()
        }
        .with_defaults();

        assert_eq!(raw.vpc_cidr.as_deref(), Some("10.4.0.0/16"));
        assert_eq!(raw.dns_service_ip.as_deref(), Some("10.3.0.53"));
        assert_eq!(raw.record_set_ttl, Some(60));
        assert_eq!(raw.create_record_set, Some(true));
        assert_eq!(raw.release_channel.as_deref(), Some("beta"));
    }

    #[test]
    fn leaves_topology_fields_untouched() {
        let raw = RawDescriptor::default().with_defaults();

        assert_eq!(raw.availability_zone, None);
        assert_eq!(raw.instance_cidr, None);
        assert_eq!(raw.subnets, None);
    }

    #[test]
    fn leaves_identity_fields_untouched() {
        let raw = RawDescriptor::default().with_defaults();

        assert_eq!(raw.external_dns_name, None);
        assert_eq!(raw.hosted_zone, None);
        assert_eq!(raw.vpc_id, None);
    }

    #[test]
    fn is_idempotent() {
        let once = RawDescriptor::default().with_defaults();
        let twice = once.clone().with_defaults();

        assert_eq!(once, twice);
    }
}
