/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use crate::input::*;
use crate::output::*;
use crate::paginator::Paginator;
use crate::Error;
use aws_hyper::BoxError;
use smithy_http::body::SdkBody;
use smithy_http::result::SdkError;
use std::sync::Arc;
use tower::Service;

#[derive(Debug)]
pub(crate) struct Handle<C> {
    client: aws_hyper::Client<C>,
    conf: Config,
}

/// Client for AWS Cloud Map
///
/// Cloning a `Client` is cheap: clones share the same connector and configuration.
///
/// ```rust,no_run
/// use servicediscovery::input::ListNamespacesInput;
/// use servicediscovery::{Client, Config, Region};
///
/// # async fn docs() -> Result<(), Box<dyn std::error::Error>> {
/// let conf = Config::builder().region(Region::new("us-east-1")).build();
/// let client = Client::from_conf(conf);
/// let namespaces = client
///     .list_namespaces(ListNamespacesInput::builder().max_results(10).build())
///     .await?;
/// println!("{:?}", namespaces.namespaces());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<C = aws_hyper::conn::Standard> {
    handle: Arc<Handle<C>>,
}

impl<C> Clone for Client<C> {
    fn clone(&self) -> Self {
        Client {
            handle: self.handle.clone(),
        }
    }
}

impl Client {
    /// Construct a client that sends requests over HTTPS
    pub fn from_conf(conf: Config) -> Self {
        Self::from_conf_conn(conf, aws_hyper::conn::Standard::https())
    }
}

impl<C> Client<C> {
    /// Construct a client that dispatches requests on `conn`
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        Client {
            handle: Arc::new(Handle {
                client: aws_hyper::Client::new(conn),
                conf,
            }),
        }
    }

    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }
}

macro_rules! operation_methods {
    ($( $(#[$doc:meta])* $method:ident($input:ident) -> $output:ident; )+) => {
        $(
            $(#[$doc])*
            pub async fn $method(&self, input: $input) -> Result<$output, SdkError<Error>> {
                self.send(input).await
            }
        )+
    };
}

macro_rules! paginator_methods {
    ($( $method:ident($input:ident); )+) => {
        $(
            pub fn $method(&self, input: $input) -> Paginator<C, $input> {
                Paginator::new(self.clone(), input)
            }
        )+
    };
}

impl<C> Client<C>
where
    C: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
        + Send
        + Clone
        + 'static,
    C::Error: Into<BoxError> + Send + Sync + 'static,
    C::Future: Send + 'static,
{
    /// Send any Cloud Map input
    pub async fn send<I>(&self, input: I) -> Result<I::Output, SdkError<Error>>
    where
        I: OperationInput,
    {
        let op = input
            .make_operation(&self.handle.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.handle.client.call(op).await
    }

    operation_methods! {
        /// Creates an HTTP namespace. The returned operation id can be polled with `get_operation`.
        create_http_namespace(CreateHttpNamespaceInput) -> CreateHttpNamespaceOutput;
        create_private_dns_namespace(CreatePrivateDnsNamespaceInput) -> CreatePrivateDnsNamespaceOutput;
        create_public_dns_namespace(CreatePublicDnsNamespaceInput) -> CreatePublicDnsNamespaceOutput;
        create_service(CreateServiceInput) -> CreateServiceOutput;
        delete_namespace(DeleteNamespaceInput) -> DeleteNamespaceOutput;
        delete_service(DeleteServiceInput) -> DeleteServiceOutput;
        deregister_instance(DeregisterInstanceInput) -> DeregisterInstanceOutput;
        /// Finds instances of a service. Requests go to the `data-` prefixed host.
        discover_instances(DiscoverInstancesInput) -> DiscoverInstancesOutput;
        get_instance(GetInstanceInput) -> GetInstanceOutput;
        get_instances_health_status(GetInstancesHealthStatusInput) -> GetInstancesHealthStatusOutput;
        get_namespace(GetNamespaceInput) -> GetNamespaceOutput;
        get_operation(GetOperationInput) -> GetOperationOutput;
        get_service(GetServiceInput) -> GetServiceOutput;
        list_instances(ListInstancesInput) -> ListInstancesOutput;
        list_namespaces(ListNamespacesInput) -> ListNamespacesOutput;
        list_operations(ListOperationsInput) -> ListOperationsOutput;
        list_services(ListServicesInput) -> ListServicesOutput;
        list_tags_for_resource(ListTagsForResourceInput) -> ListTagsForResourceOutput;
        register_instance(RegisterInstanceInput) -> RegisterInstanceOutput;
        tag_resource(TagResourceInput) -> TagResourceOutput;
        untag_resource(UntagResourceInput) -> UntagResourceOutput;
        update_instance_custom_health_status(UpdateInstanceCustomHealthStatusInput) -> UpdateInstanceCustomHealthStatusOutput;
        update_service(UpdateServiceInput) -> UpdateServiceOutput;
    }

    paginator_methods! {
        get_instances_health_status_paginator(GetInstancesHealthStatusInput);
        list_instances_paginator(ListInstancesInput);
        list_namespaces_paginator(ListNamespacesInput);
        list_operations_paginator(ListOperationsInput);
        list_services_paginator(ListServicesInput);
    }
}
