/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Results returned by Cloud Map operations

use crate::model::{
    HealthStatus, HttpInstanceSummary, Instance, InstanceSummary, Namespace, NamespaceSummary,
    Operation, OperationSummary, Service, ServiceSummary, Tag,
};
use smithy_types::shape;
use std::collections::BTreeMap;

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct CreateHttpNamespaceOutput in create_http_namespace_output {
        operation_id, set_operation_id: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct CreatePrivateDnsNamespaceOutput in create_private_dns_namespace_output {
        operation_id, set_operation_id: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct CreatePublicDnsNamespaceOutput in create_public_dns_namespace_output {
        operation_id, set_operation_id: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct CreateServiceOutput in create_service_output {
        service, set_service: Service;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct DeleteNamespaceOutput in delete_namespace_output {
        operation_id, set_operation_id: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct DeleteServiceOutput in delete_service_output {}
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct DeregisterInstanceOutput in deregister_instance_output {
        operation_id, set_operation_id: String;
    }
}

shape! {
    /// Instances that matched a `DiscoverInstances` query
    #[serde(rename_all = "PascalCase")]
    pub struct DiscoverInstancesOutput in discover_instances_output {
        instances, set_instances: Vec<HttpInstanceSummary>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct GetInstanceOutput in get_instance_output {
        instance, set_instance: Instance;
    }
}

shape! {
    /// Health of each requested instance, keyed by instance id
    #[serde(rename_all = "PascalCase")]
    pub struct GetInstancesHealthStatusOutput in get_instances_health_status_output {
        status, set_status: BTreeMap<String, HealthStatus>;
        next_token, set_next_token: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct GetNamespaceOutput in get_namespace_output {
        namespace, set_namespace: Namespace;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct GetOperationOutput in get_operation_output {
        operation, set_operation: Operation;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct GetServiceOutput in get_service_output {
        service, set_service: Service;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct ListInstancesOutput in list_instances_output {
        instances, set_instances: Vec<InstanceSummary>;
        next_token, set_next_token: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct ListNamespacesOutput in list_namespaces_output {
        namespaces, set_namespaces: Vec<NamespaceSummary>;
        next_token, set_next_token: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct ListOperationsOutput in list_operations_output {
        operations, set_operations: Vec<OperationSummary>;
        next_token, set_next_token: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct ListServicesOutput in list_services_output {
        services, set_services: Vec<ServiceSummary>;
        next_token, set_next_token: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct ListTagsForResourceOutput in list_tags_for_resource_output {
        tags, set_tags: Vec<Tag>;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct RegisterInstanceOutput in register_instance_output {
        operation_id, set_operation_id: String;
    }
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct TagResourceOutput in tag_resource_output {}
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct UntagResourceOutput in untag_resource_output {}
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct UpdateInstanceCustomHealthStatusOutput in update_instance_custom_health_status_output {}
}

shape! {
    #[serde(rename_all = "PascalCase")]
    pub struct UpdateServiceOutput in update_service_output {
        operation_id, set_operation_id: String;
    }
}
