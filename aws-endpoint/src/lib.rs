/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Endpoint resolution for AWS services
//!
//! A client configuration puts an endpoint resolver and a [`Region`] in each operation's property
//! bag. [`AwsEndpointStage`] combines them into the request URI and records the signing scope.

mod definition;

use aws_types::region::{Region, SigningRegion};
use aws_types::SigningService;
use smithy_http::endpoint::{Endpoint, EndpointPrefix, InvalidEndpoint};
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::sync::Arc;
use thiserror::Error;

pub use definition::{Definition, Protocol};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A resolved endpoint and the scope requests to it are signed with
#[derive(Clone, Debug)]
pub struct AwsEndpoint {
    endpoint: Endpoint,
    credential_scope: CredentialScope,
}

impl AwsEndpoint {
    pub fn new(endpoint: Endpoint, credential_scope: CredentialScope) -> Self {
        AwsEndpoint {
            endpoint,
            credential_scope,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn credential_scope(&self) -> &CredentialScope {
        &self.credential_scope
    }

    pub fn set_endpoint(
        &self,
        uri: &mut http::Uri,
        endpoint_prefix: Option<&EndpointPrefix>,
    ) -> Result<(), InvalidEndpoint> {
        self.endpoint.set_endpoint(uri, endpoint_prefix)
    }
}

/// The region and service a request is signed for, when they differ from the request's own
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct CredentialScope {
    region: Option<SigningRegion>,
    service: Option<SigningService>,
}

impl CredentialScope {
    pub fn builder() -> credential_scope::Builder {
        credential_scope::Builder::default()
    }

    pub fn region(&self) -> Option<&SigningRegion> {
        self.region.as_ref()
    }

    pub fn service(&self) -> Option<&SigningService> {
        self.service.as_ref()
    }
}

pub mod credential_scope {
    use crate::CredentialScope;
    use aws_types::region::SigningRegion;
    use aws_types::SigningService;

    #[derive(Default)]
    pub struct Builder {
        region: Option<SigningRegion>,
        service: Option<SigningService>,
    }

    impl Builder {
        pub fn region(mut self, region: impl Into<SigningRegion>) -> Self {
            self.region = Some(region.into());
            self
        }

        pub fn service(mut self, service: impl Into<SigningService>) -> Self {
            self.service = Some(service.into());
            self
        }

        pub fn build(self) -> CredentialScope {
            CredentialScope {
                region: self.region,
                service: self.service,
            }
        }
    }
}

/// Maps a region to an endpoint
///
/// [`Definition`] covers the regional `amazonaws.com` hosts. A fixed [`Endpoint`] resolves to
/// itself for every region, which is how endpoint overrides are plugged in.
pub trait ResolveAwsEndpoint: Send + Sync {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError>;
}

impl ResolveAwsEndpoint for Endpoint {
    fn resolve_endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
        Ok(AwsEndpoint {
            endpoint: self.clone(),
            credential_scope: Default::default(),
        })
    }
}

/// Parse a user-supplied endpoint override
///
/// Accepts either a full URL (`http://localhost:4566`) or a bare hostname
/// (`servicediscovery.eu-west-1.amazonaws.com`), which is assumed to use HTTPS. The result is
/// immutable: host prefixes are not applied to overrides.
pub fn endpoint_override(endpoint: &str) -> Result<Endpoint, BoxError> {
    let uri = if endpoint.contains("://") {
        endpoint.parse::<http::Uri>()?
    } else {
        format!("https://{}", endpoint).parse::<http::Uri>()?
    };
    if uri.authority().is_none() {
        return Err(format!("endpoint `{}` does not contain a host", endpoint).into());
    }
    Ok(Endpoint::immutable(uri))
}

type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;

pub fn get_endpoint_resolver(properties: &PropertyBag) -> Option<&AwsEndpointResolver> {
    properties.get()
}

pub fn set_endpoint_resolver(properties: &mut PropertyBag, provider: AwsEndpointResolver) {
    properties.insert(provider);
}

/// Points a request at its endpoint
///
/// Reads the resolver and [`Region`] from the property bag and rewrites the URI, applying any
/// [`EndpointPrefix`]. The [`SigningRegion`] and, when known, the [`SigningService`] are left in
/// the bag for signing stages.
#[derive(Clone, Debug)]
pub struct AwsEndpointStage;

#[derive(Debug, Error)]
pub enum AwsEndpointStageError {
    #[error("no endpoint resolver was configured")]
    NoEndpointResolver,
    #[error("no region was configured; set one on the config or in AWS_REGION")]
    NoRegion,
    #[error("failed to resolve endpoint: {0}")]
    EndpointResolutionError(#[source] BoxError),
    #[error(transparent)]
    InvalidEndpoint(InvalidEndpoint),
}

impl MapRequest for AwsEndpointStage {
    type Error = AwsEndpointStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, props| {
            let provider = get_endpoint_resolver(props)
                .cloned()
                .ok_or(AwsEndpointStageError::NoEndpointResolver)?;
            let region = props
                .get::<Region>()
                .cloned()
                .ok_or(AwsEndpointStageError::NoRegion)?;
            let endpoint = provider
                .resolve_endpoint(&region)
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            endpoint
                .set_endpoint(http_req.uri_mut(), props.get::<EndpointPrefix>())
                .map_err(AwsEndpointStageError::InvalidEndpoint)?;
            tracing::debug!(uri = %http_req.uri(), region = %region, "resolved endpoint");
            let scope = endpoint.credential_scope();
            let signing_region = match scope.region() {
                Some(fixed) => fixed.clone(),
                None => SigningRegion::from(region),
            };
            let signing_service = scope.service().cloned();
            props.insert(signing_region);
            if let Some(signing_service) = signing_service {
                props.insert(signing_service);
            }
            Ok(http_req)
        })
    }
}
