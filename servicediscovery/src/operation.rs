/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response handlers, one per Cloud Map operation

use crate::output;
use bytes::Bytes;
use smithy_http::response::ParseStrictResponse;

macro_rules! operations {
    ($( $(#[$doc:meta])* $name:ident => $output:ty; )+) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Debug, Default)]
            pub struct $name {
                _private: (),
            }

            impl $name {
                pub fn new() -> Self {
                    Self { _private: () }
                }
            }

            impl ParseStrictResponse for $name {
                type Output = Result<$output, crate::error::Error>;

                fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
                    crate::protocol::parse_response(response)
                }
            }
        )+
    };
}

operations! {
    /// Creates an HTTP namespace, discoverable only through `DiscoverInstances`
    CreateHttpNamespace => output::CreateHttpNamespaceOutput;
    /// Creates a namespace backed by a private Route 53 hosted zone in a VPC
    CreatePrivateDnsNamespace => output::CreatePrivateDnsNamespaceOutput;
    /// Creates a namespace backed by a public Route 53 hosted zone
    CreatePublicDnsNamespace => output::CreatePublicDnsNamespaceOutput;
    CreateService => output::CreateServiceOutput;
    DeleteNamespace => output::DeleteNamespaceOutput;
    DeleteService => output::DeleteServiceOutput;
    DeregisterInstance => output::DeregisterInstanceOutput;
    /// Finds the instances of a service by namespace and service name, optionally filtered by
    /// custom attributes and health
    DiscoverInstances => output::DiscoverInstancesOutput;
    GetInstance => output::GetInstanceOutput;
    GetInstancesHealthStatus => output::GetInstancesHealthStatusOutput;
    GetNamespace => output::GetNamespaceOutput;
    /// Gets the status of an asynchronous operation such as `CreateHttpNamespace`
    GetOperation => output::GetOperationOutput;
    GetService => output::GetServiceOutput;
    ListInstances => output::ListInstancesOutput;
    ListNamespaces => output::ListNamespacesOutput;
    ListOperations => output::ListOperationsOutput;
    ListServices => output::ListServicesOutput;
    ListTagsForResource => output::ListTagsForResourceOutput;
    /// Creates or updates an instance and the DNS records and health check it needs
    RegisterInstance => output::RegisterInstanceOutput;
    TagResource => output::TagResourceOutput;
    UntagResource => output::UntagResourceOutput;
    /// Reports the health of an instance whose service uses a custom health check
    UpdateInstanceCustomHealthStatus => output::UpdateInstanceCustomHealthStatusOutput;
    UpdateService => output::UpdateServiceOutput;
}

#[cfg(test)]
mod test {
    use crate::error::ErrorKind;
    use crate::model::HealthStatus;
    use crate::operation::{GetInstancesHealthStatus, UpdateInstanceCustomHealthStatus};
    use bytes::Bytes;
    use smithy_http::response::ParseStrictResponse;

    #[test]
    fn health_status_map_is_parsed() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                br#"{"Status": {"i-1": "HEALTHY", "i-2": "UNKNOWN"}, "NextToken": "t"}"#,
            ))
            .unwrap();
        let output = GetInstancesHealthStatus::new()
            .parse(&response)
            .expect("valid response");
        let status = output.status().expect("status is set");
        assert_eq!(status.get("i-1"), Some(&HealthStatus::Healthy));
        assert_eq!(status.get("i-2"), Some(&HealthStatus::UnknownValue));
        assert_eq!(output.next_token(), Some("t"));
    }

    #[test]
    fn empty_outputs_accept_empty_bodies() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::new())
            .unwrap();
        assert!(UpdateInstanceCustomHealthStatus::new()
            .parse(&response)
            .is_ok());
    }

    #[test]
    fn error_responses_use_the_error_table() {
        let response = http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "CustomHealthNotFound:http://internal.amazon.com/")
            .body(Bytes::from_static(br#"{"Message": "no custom config"}"#))
            .unwrap();
        let err = UpdateInstanceCustomHealthStatus::new()
            .parse(&response)
            .expect_err("status is 400");
        assert!(matches!(err.kind(), ErrorKind::CustomHealthNotFound(_)));
        assert_eq!(err.message(), Some("no custom config"));
    }
}
