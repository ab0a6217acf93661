/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Requests accepted by Cloud Map operations
//!
//! Every input implements [`OperationInput`], which turns it into an
//! [`Operation`](smithy_http::operation::Operation) ready to be sent by
//! [`aws_hyper::Client`](https://docs.rs/aws-hyper).

use crate::config::Config;
use crate::error::Error;
use crate::model::{
    CustomHealthStatus, DnsConfig, HealthCheckConfig, HealthCheckCustomConfig,
    HealthStatusFilter, NamespaceFilter, OperationFilter, ServiceChange, ServiceFilter, Tag,
};
use crate::{operation, output, protocol};
use smithy_http::endpoint::EndpointPrefix;
use smithy_http::operation::{BuildError, Operation};
use smithy_http::response::ParseStrictResponse;
use smithy_types::{map_entries, shape};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// An operation input that knows how to build its own request
pub trait OperationInput: Clone {
    type Output;
    type Handler: ParseStrictResponse<Output = Result<Self::Output, Error>>
        + Send
        + Sync
        + 'static;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError>;
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct CreateHttpNamespaceInput in create_http_namespace_input {
        name, set_name: String;
        creator_request_id, set_creator_request_id: String;
        description, set_description: String;
        tags, set_tags: Vec<Tag>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct CreatePrivateDnsNamespaceInput in create_private_dns_namespace_input {
        name, set_name: String;
        creator_request_id, set_creator_request_id: String;
        description, set_description: String;
        vpc, set_vpc: String;
        tags, set_tags: Vec<Tag>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct CreatePublicDnsNamespaceInput in create_public_dns_namespace_input {
        name, set_name: String;
        creator_request_id, set_creator_request_id: String;
        description, set_description: String;
        tags, set_tags: Vec<Tag>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct CreateServiceInput in create_service_input {
        name, set_name: String;
        namespace_id, set_namespace_id: String;
        creator_request_id, set_creator_request_id: String;
        description, set_description: String;
        dns_config, set_dns_config: DnsConfig;
        health_check_config, set_health_check_config: HealthCheckConfig;
        health_check_custom_config, set_health_check_custom_config: HealthCheckCustomConfig;
        tags, set_tags: Vec<Tag>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct DeleteNamespaceInput in delete_namespace_input {
        id, set_id: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct DeleteServiceInput in delete_service_input {
        id, set_id: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct DeregisterInstanceInput in deregister_instance_input {
        service_id, set_service_id: String;
        instance_id, set_instance_id: String;
    }
}

shape! {
    /// Query for the instances of one service
    ///
    /// `QueryParameters` only matches instances whose attributes contain every listed pair.
    #[serde(rename_all = "PascalCase")]
    pub struct DiscoverInstancesInput in discover_instances_input {
        namespace_name, set_namespace_name: String;
        service_name, set_service_name: String;
        max_results, set_max_results: i32;
        query_parameters, set_query_parameters: BTreeMap<String, String>;
        health_status, set_health_status: HealthStatusFilter;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct GetInstanceInput in get_instance_input {
        service_id, set_service_id: String;
        instance_id, set_instance_id: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct GetInstancesHealthStatusInput in get_instances_health_status_input {
        service_id, set_service_id: String;
        instances, set_instances: Vec<String>;
        max_results, set_max_results: i32;
        next_token, set_next_token: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct GetNamespaceInput in get_namespace_input {
        id, set_id: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct GetOperationInput in get_operation_input {
        operation_id, set_operation_id: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct GetServiceInput in get_service_input {
        id, set_id: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct ListInstancesInput in list_instances_input {
        service_id, set_service_id: String;
        next_token, set_next_token: String;
        max_results, set_max_results: i32;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct ListNamespacesInput in list_namespaces_input {
        next_token, set_next_token: String;
        max_results, set_max_results: i32;
        filters, set_filters: Vec<NamespaceFilter>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct ListOperationsInput in list_operations_input {
        next_token, set_next_token: String;
        max_results, set_max_results: i32;
        filters, set_filters: Vec<OperationFilter>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct ListServicesInput in list_services_input {
        next_token, set_next_token: String;
        max_results, set_max_results: i32;
        filters, set_filters: Vec<ServiceFilter>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct ListTagsForResourceInput in list_tags_for_resource_input {
        #[serde(rename = "ResourceARN")]
        resource_arn, set_resource_arn: String;
    }
}

shape! {
    /// Registers an instance, or replaces the attributes of an existing one
    #[serde(rename_all = "PascalCase")]
    pub struct RegisterInstanceInput in register_instance_input {
        service_id, set_service_id: String;
        instance_id, set_instance_id: String;
        creator_request_id, set_creator_request_id: String;
        attributes, set_attributes: BTreeMap<String, String>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct TagResourceInput in tag_resource_input {
        #[serde(rename = "ResourceARN")]
        resource_arn, set_resource_arn: String;
        tags, set_tags: Vec<Tag>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct UntagResourceInput in untag_resource_input {
        #[serde(rename = "ResourceARN")]
        resource_arn, set_resource_arn: String;
        tag_keys, set_tag_keys: Vec<String>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct UpdateInstanceCustomHealthStatusInput in update_instance_custom_health_status_input {
        service_id, set_service_id: String;
        instance_id, set_instance_id: String;
        status, set_status: CustomHealthStatus;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct UpdateServiceInput in update_service_input {
        id, set_id: String;
        service, set_service: ServiceChange;
    }
}

map_entries! {
    discover_instances_input::Builder {
        query_parameters: String => String, add_query_parameters_entry, clear_query_parameters_entries;
    }
}

map_entries! {
    register_instance_input::Builder {
        attributes: String => String, add_attributes_entry, clear_attributes_entries;
    }
}

// `$token` names a member filled from the configured idempotency token provider when unset
macro_rules! json_inputs {
    ($( $input:ident => $op:ident($output:ident) $(, $token:ident)?; )+) => {
        $(
            impl OperationInput for $input {
                type Output = output::$output;
                type Handler = operation::$op;

                fn make_operation(
                    &self,
                    conf: &Config,
                ) -> Result<Operation<Self::Handler>, BuildError> {
                    #[allow(unused_mut)]
                    let mut input = Cow::Borrowed(self);
                    $(
                        if self.$token.is_none() {
                            input.to_mut().$token = Some(conf.make_token());
                        }
                    )?
                    protocol::json_operation(
                        &*input,
                        stringify!($op),
                        operation::$op::new(),
                        conf,
                    )
                }
            }
        )+
    };
}

json_inputs! {
    CreateHttpNamespaceInput => CreateHttpNamespace(CreateHttpNamespaceOutput), creator_request_id;
    CreatePrivateDnsNamespaceInput => CreatePrivateDnsNamespace(CreatePrivateDnsNamespaceOutput), creator_request_id;
    CreatePublicDnsNamespaceInput => CreatePublicDnsNamespace(CreatePublicDnsNamespaceOutput), creator_request_id;
    CreateServiceInput => CreateService(CreateServiceOutput), creator_request_id;
    DeleteNamespaceInput => DeleteNamespace(DeleteNamespaceOutput);
    DeleteServiceInput => DeleteService(DeleteServiceOutput);
    DeregisterInstanceInput => DeregisterInstance(DeregisterInstanceOutput);
    GetInstanceInput => GetInstance(GetInstanceOutput);
    GetInstancesHealthStatusInput => GetInstancesHealthStatus(GetInstancesHealthStatusOutput);
    GetNamespaceInput => GetNamespace(GetNamespaceOutput);
    GetOperationInput => GetOperation(GetOperationOutput);
    GetServiceInput => GetService(GetServiceOutput);
    ListInstancesInput => ListInstances(ListInstancesOutput);
    ListNamespacesInput => ListNamespaces(ListNamespacesOutput);
    ListOperationsInput => ListOperations(ListOperationsOutput);
    ListServicesInput => ListServices(ListServicesOutput);
    ListTagsForResourceInput => ListTagsForResource(ListTagsForResourceOutput);
    RegisterInstanceInput => RegisterInstance(RegisterInstanceOutput), creator_request_id;
    TagResourceInput => TagResource(TagResourceOutput);
    UntagResourceInput => UntagResource(UntagResourceOutput);
    UpdateInstanceCustomHealthStatusInput => UpdateInstanceCustomHealthStatus(UpdateInstanceCustomHealthStatusOutput);
    UpdateServiceInput => UpdateService(UpdateServiceOutput);
}

impl OperationInput for DiscoverInstancesInput {
    type Output = output::DiscoverInstancesOutput;
    type Handler = operation::DiscoverInstances;

    fn make_operation(&self, conf: &Config) -> Result<Operation<Self::Handler>, BuildError> {
        let mut op = protocol::json_operation(
            self,
            "DiscoverInstances",
            operation::DiscoverInstances::new(),
            conf,
        )?;
        op.properties_mut().insert(EndpointPrefix::new("data-")?);
        Ok(op)
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::input::{
        CreateServiceInput, DiscoverInstancesInput, OperationInput, RegisterInstanceInput,
    };
    use aws_types::region::Region;
    use pretty_assertions::assert_eq;
    use smithy_http::endpoint::EndpointPrefix;

    fn conf() -> Config {
        Config::builder()
            .region(Region::new("us-east-1"))
            .idempotency_token_provider("00000000-0000-4000-8000-000000000000")
            .build()
    }

    fn body(bytes: Option<&[u8]>) -> serde_json::Value {
        serde_json::from_slice(bytes.expect("body is in memory")).expect("body is JSON")
    }

    #[test]
    fn missing_creator_request_id_is_generated() {
        let input = CreateServiceInput::builder()
            .name("web")
            .namespace_id("ns-1")
            .build();
        let op = input.make_operation(&conf()).expect("valid input");
        assert_eq!(
            body(op.request().http().body().bytes()),
            serde_json::json!({
                "Name": "web",
                "NamespaceId": "ns-1",
                "CreatorRequestId": "00000000-0000-4000-8000-000000000000"
            })
        );
        assert_eq!(input.creator_request_id(), None);
    }

    #[test]
    fn explicit_creator_request_id_is_kept() {
        let input = RegisterInstanceInput::builder()
            .service_id("srv-1")
            .instance_id("i-1")
            .creator_request_id("retry-me")
            .add_attributes_entry("AWS_INSTANCE_IPV4", "10.0.0.1")
            .unwrap()
            .build();
        let op = input.make_operation(&conf()).expect("valid input");
        assert_eq!(
            body(op.request().http().body().bytes()),
            serde_json::json!({
                "ServiceId": "srv-1",
                "InstanceId": "i-1",
                "CreatorRequestId": "retry-me",
                "Attributes": { "AWS_INSTANCE_IPV4": "10.0.0.1" }
            })
        );
    }

    #[test]
    fn random_tokens_differ_between_requests() {
        let conf = Config::builder().region(Region::new("us-east-1")).build();
        let input = CreateServiceInput::builder().name("web").build();
        let first = body(
            input
                .make_operation(&conf)
                .unwrap()
                .request()
                .http()
                .body()
                .bytes(),
        );
        let second = body(
            input
                .make_operation(&conf)
                .unwrap()
                .request()
                .http()
                .body()
                .bytes(),
        );
        assert_ne!(first["CreatorRequestId"], second["CreatorRequestId"]);
    }

    #[test]
    fn discover_instances_uses_the_data_prefix() {
        let op = DiscoverInstancesInput::builder()
            .namespace_name("example.local")
            .service_name("web")
            .build()
            .make_operation(&conf())
            .expect("valid input");
        assert_eq!(
            op.properties().get::<EndpointPrefix>(),
            Some(&EndpointPrefix::new("data-").unwrap())
        );
    }
}
