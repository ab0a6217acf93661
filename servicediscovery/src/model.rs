/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Structures and enumerations shared by Cloud Map inputs and outputs

use smithy_types::{map_entries, shape, wire_enum, Instant};
use std::collections::BTreeMap;

wire_enum! {
    /// Health status reported for an instance that uses a custom health check
    pub enum CustomHealthStatus {
        Healthy => "HEALTHY",
        Unhealthy => "UNHEALTHY",
    }
}

wire_enum! {
    pub enum FilterCondition {
        Eq => "EQ",
        In => "IN",
        Between => "BETWEEN",
    }
}

wire_enum! {
    /// Protocol Route 53 uses to check the health of an endpoint
    pub enum HealthCheckType {
        Http => "HTTP",
        Https => "HTTPS",
        Tcp => "TCP",
    }
}

wire_enum! {
    /// `UnknownValue` is the service's own `UNKNOWN` literal; `Unknown(_)` holds unrecognized ones
    pub enum HealthStatus {
        Healthy => "HEALTHY",
        Unhealthy => "UNHEALTHY",
        UnknownValue => "UNKNOWN",
    }
}

wire_enum! {
    /// Which instances `DiscoverInstances` returns, by health
    pub enum HealthStatusFilter {
        Healthy => "HEALTHY",
        Unhealthy => "UNHEALTHY",
        All => "ALL",
    }
}

wire_enum! {
    pub enum NamespaceFilterName {
        Type => "TYPE",
    }
}

wire_enum! {
    pub enum NamespaceType {
        DnsPublic => "DNS_PUBLIC",
        DnsPrivate => "DNS_PRIVATE",
        Http => "HTTP",
    }
}

wire_enum! {
    pub enum OperationFilterName {
        NamespaceId => "NAMESPACE_ID",
        ServiceId => "SERVICE_ID",
        Status => "STATUS",
        Type => "TYPE",
        UpdateDate => "UPDATE_DATE",
    }
}

wire_enum! {
    pub enum OperationStatus {
        Submitted => "SUBMITTED",
        Pending => "PENDING",
        Success => "SUCCESS",
        Fail => "FAIL",
    }
}

wire_enum! {
    /// The kind of resource an asynchronous operation acted on
    pub enum OperationTargetType {
        Namespace => "NAMESPACE",
        Service => "SERVICE",
        Instance => "INSTANCE",
    }
}

wire_enum! {
    pub enum OperationType {
        CreateNamespace => "CREATE_NAMESPACE",
        DeleteNamespace => "DELETE_NAMESPACE",
        UpdateService => "UPDATE_SERVICE",
        RegisterInstance => "REGISTER_INSTANCE",
        DeregisterInstance => "DEREGISTER_INSTANCE",
    }
}

wire_enum! {
    /// DNS record type created for each registered instance
    pub enum RecordType {
        Srv => "SRV",
        A => "A",
        Aaaa => "AAAA",
        Cname => "CNAME",
    }
}

wire_enum! {
    pub enum RoutingPolicy {
        Multivalue => "MULTIVALUE",
        Weighted => "WEIGHTED",
    }
}

wire_enum! {
    pub enum ServiceFilterName {
        NamespaceId => "NAMESPACE_ID",
    }
}

shape! {
    /// A custom key-value pair associated with a resource
    #[serde(rename_all = "PascalCase")]
    pub struct Tag in tag {
        key, set_key: String;
        value, set_value: String;
    }
}

shape! {
    /// A DNS record Route 53 creates when an instance is registered
    #[serde(rename_all = "PascalCase")]
    pub struct DnsRecord in dns_record {
        #[serde(rename = "Type")]
        r#type, set_type: RecordType;
        #[serde(rename = "TTL")]
        ttl, set_ttl: i64;
    }
}

shape! {
    /// The records and routing policy Route 53 uses for a service's instances
    #[serde(rename_all = "PascalCase")]
    pub struct DnsConfig in dns_config {
        namespace_id, set_namespace_id: String;
        routing_policy, set_routing_policy: RoutingPolicy;
        dns_records, set_dns_records: Vec<DnsRecord>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct DnsConfigChange in dns_config_change {
        dns_records, set_dns_records: Vec<DnsRecord>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct DnsProperties in dns_properties {
        hosted_zone_id, set_hosted_zone_id: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct HttpProperties in http_properties {
        http_name, set_http_name: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct NamespaceProperties in namespace_properties {
        dns_properties, set_dns_properties: DnsProperties;
        http_properties, set_http_properties: HttpProperties;
    }
}

shape! {
    /// Settings for an optional Route 53 health check
    #[serde(rename_all = "PascalCase")]
    pub struct HealthCheckConfig in health_check_config {
        #[serde(rename = "Type")]
        r#type, set_type: HealthCheckType;
        resource_path, set_resource_path: String;
        failure_threshold, set_failure_threshold: i32;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct HealthCheckCustomConfig in health_check_custom_config {
        failure_threshold, set_failure_threshold: i32;
    }
}

shape! {
    /// Instance information returned by `DiscoverInstances`
    #[serde(rename_all = "PascalCase")]
    pub struct HttpInstanceSummary in http_instance_summary {
        instance_id, set_instance_id: String;
        namespace_name, set_namespace_name: String;
        service_name, set_service_name: String;
        health_status, set_health_status: HealthStatus;
        attributes, set_attributes: BTreeMap<String, String>;
    }
}

shape! {
    /// An instance registered with a service
    #[serde(rename_all = "PascalCase")]
    pub struct Instance in instance {
        id, set_id: String;
        creator_request_id, set_creator_request_id: String;
        attributes, set_attributes: BTreeMap<String, String>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct InstanceSummary in instance_summary {
        id, set_id: String;
        attributes, set_attributes: BTreeMap<String, String>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct Namespace in namespace {
        id, set_id: String;
        arn, set_arn: String;
        name, set_name: String;
        #[serde(rename = "Type")]
        r#type, set_type: NamespaceType;
        description, set_description: String;
        service_count, set_service_count: i32;
        properties, set_properties: NamespaceProperties;
        create_date, set_create_date: Instant;
        creator_request_id, set_creator_request_id: String;
    }
}

shape! {
    /// Filters `ListNamespaces` to namespaces of the given types
    #[serde(rename_all = "PascalCase")]
    pub struct NamespaceFilter in namespace_filter {
        name, set_name: NamespaceFilterName;
        values, set_values: Vec<String>;
        condition, set_condition: FilterCondition;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct NamespaceSummary in namespace_summary {
        id, set_id: String;
        arn, set_arn: String;
        name, set_name: String;
        #[serde(rename = "Type")]
        r#type, set_type: NamespaceType;
        description, set_description: String;
        service_count, set_service_count: i32;
        properties, set_properties: NamespaceProperties;
        create_date, set_create_date: Instant;
    }
}

shape! {
    /// An asynchronous operation started by a namespace, service or instance change
    #[serde(rename_all = "PascalCase")]
    pub struct Operation in operation {
        id, set_id: String;
        #[serde(rename = "Type")]
        r#type, set_type: OperationType;
        status, set_status: OperationStatus;
        error_message, set_error_message: String;
        error_code, set_error_code: String;
        create_date, set_create_date: Instant;
        update_date, set_update_date: Instant;
        targets, set_targets: BTreeMap<OperationTargetType, String>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct OperationFilter in operation_filter {
        name, set_name: OperationFilterName;
        values, set_values: Vec<String>;
        condition, set_condition: FilterCondition;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct OperationSummary in operation_summary {
        id, set_id: String;
        status, set_status: OperationStatus;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct Service in service {
        id, set_id: String;
        arn, set_arn: String;
        name, set_name: String;
        namespace_id, set_namespace_id: String;
        description, set_description: String;
        instance_count, set_instance_count: i32;
        dns_config, set_dns_config: DnsConfig;
        health_check_config, set_health_check_config: HealthCheckConfig;
        health_check_custom_config, set_health_check_custom_config: HealthCheckCustomConfig;
        create_date, set_create_date: Instant;
        creator_request_id, set_creator_request_id: String;
    }
}

shape! {
    /// The changes `UpdateService` applies to a service
    #[serde(rename_all = "PascalCase")]
    pub struct ServiceChange in service_change {
        description, set_description: String;
        dns_config, set_dns_config: DnsConfigChange;
        health_check_config, set_health_check_config: HealthCheckConfig;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct ServiceFilter in service_filter {
        name, set_name: ServiceFilterName;
        values, set_values: Vec<String>;
        condition, set_condition: FilterCondition;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct ServiceSummary in service_summary {
        id, set_id: String;
        arn, set_arn: String;
        name, set_name: String;
        description, set_description: String;
        instance_count, set_instance_count: i32;
        dns_config, set_dns_config: DnsConfig;
        health_check_config, set_health_check_config: HealthCheckConfig;
        health_check_custom_config, set_health_check_custom_config: HealthCheckCustomConfig;
        create_date, set_create_date: Instant;
    }
}

map_entries! {
    http_instance_summary::Builder {
        attributes: String => String, add_attributes_entry, clear_attributes_entries;
    }
}

map_entries! {
    instance::Builder {
        attributes: String => String, add_attributes_entry, clear_attributes_entries;
    }
}

map_entries! {
    instance_summary::Builder {
        attributes: String => String, add_attributes_entry, clear_attributes_entries;
    }
}

map_entries! {
    operation::Builder {
        targets: OperationTargetType => String, add_targets_entry, clear_targets_entries;
    }
}

#[cfg(test)]
mod test {
    use crate::model::{
        DnsConfig, DnsRecord, HealthStatus, Operation, OperationTargetType, OperationType,
        RecordType, RoutingPolicy, ServiceSummary,
    };
    use pretty_assertions::assert_eq;
    use smithy_types::Instant;

    #[test]
    fn dns_config_serializes_with_wire_names() {
        let config = DnsConfig::builder()
            .routing_policy(RoutingPolicy::Multivalue)
            .dns_records(vec![DnsRecord::builder()
                .r#type(RecordType::Srv)
                .ttl(60)
                .build()])
            .build();
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            serde_json::json!({
                "RoutingPolicy": "MULTIVALUE",
                "DnsRecords": [{ "Type": "SRV", "TTL": 60 }]
            })
        );
    }

    #[test]
    fn operation_targets_use_enum_keys() {
        let body = r#"{
            "Id": "op-1",
            "Type": "REGISTER_INSTANCE",
            "Status": "SUCCESS",
            "CreateDate": 1.5e9,
            "Targets": { "INSTANCE": "i-1", "SERVICE": "srv-1" }
        }"#;
        let operation: Operation = serde_json::from_str(body).unwrap();
        assert_eq!(operation.r#type(), Some(&OperationType::RegisterInstance));
        assert_eq!(
            operation.create_date(),
            Some(&Instant::from_epoch_seconds(1_500_000_000))
        );
        assert_eq!(
            operation
                .targets()
                .and_then(|targets| targets.get(&OperationTargetType::Instance)),
            Some(&"i-1".to_string())
        );
    }

    #[test]
    fn duplicate_target_keys_are_rejected() {
        let builder = Operation::builder()
            .add_targets_entry(OperationTargetType::Service, "srv-1")
            .unwrap();
        assert!(builder
            .add_targets_entry(OperationTargetType::Service, "srv-2")
            .is_err());
    }

    #[test]
    fn display_lists_only_set_members() {
        let record = DnsRecord::builder().ttl(300).build();
        assert_eq!(record.to_string(), "{ttl: 300}");
    }

    #[test]
    fn display_expands_nested_shapes() {
        let summary = ServiceSummary::builder()
            .id("srv-1")
            .dns_config(
                DnsConfig::builder()
                    .routing_policy(RoutingPolicy::Weighted)
                    .dns_records(vec![DnsRecord::builder()
                        .r#type(RecordType::A)
                        .ttl(60)
                        .build()])
                    .build(),
            )
            .build();
        assert_eq!(
            summary.to_string(),
            r#"{id: "srv-1", dns_config: {routing_policy: WEIGHTED, dns_records: [{type: A, ttl: 60}]}}"#
        );
    }

    #[test]
    fn service_unknown_health_is_a_known_literal() {
        assert_eq!(
            HealthStatus::from_value("UNKNOWN"),
            Ok(HealthStatus::UnknownValue)
        );
        assert_eq!(HealthStatus::from("UNKNOWN"), HealthStatus::UnknownValue);
        assert_eq!(HealthStatus::UnknownValue.as_str(), "UNKNOWN");
        assert_eq!(
            HealthStatus::from("DEGRADED"),
            HealthStatus::Unknown("DEGRADED".to_string())
        );
        assert!(HealthStatus::from_value("DEGRADED").is_err());
        let parsed: HealthStatus = serde_json::from_str("\"UNKNOWN\"").unwrap();
        assert_eq!(parsed, HealthStatus::UnknownValue);
    }

    proptest::proptest! {
        #[test]
        fn unrecognized_literals_are_kept(value in "[A-Z_]{1,24}") {
            let status = crate::model::HealthStatus::from(value.as_str());
            proptest::prop_assert_eq!(status.as_str(), value.as_str());
        }
    }
}
