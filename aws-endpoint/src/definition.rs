/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Region-templated endpoints

use crate::{AwsEndpoint, BoxError, CredentialScope, ResolveAwsEndpoint};
use aws_types::region::{Region, SigningRegion};
use aws_types::SigningService;
use smithy_http::endpoint::Endpoint;
use std::borrow::Cow;

/// How to build a service's endpoint for any region of the `aws` partition
#[derive(Debug, Clone)]
pub struct Definition {
    /// Host, with `{region}` standing in for the region name
    pub uri_template: Cow<'static, str>,
    pub protocol: Protocol,
    /// Fixed signing scope; a missing region means "sign for the request's region"
    pub credential_scope: CredentialScope,
}

impl Definition {
    /// `https://{service}.{region}.amazonaws.com`, signed for `service`
    pub fn for_service(service: &'static str) -> Self {
        Definition {
            uri_template: Cow::Owned(format!("{}.{{region}}.amazonaws.com", service)),
            protocol: Protocol::Https,
            credential_scope: CredentialScope::builder()
                .service(SigningService::from_static(service))
                .build(),
        }
    }

    fn host(&self, region: &Region) -> String {
        self.uri_template.replace("{region}", region.as_ref())
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Protocol {
    Http,
    Https,
}

impl ResolveAwsEndpoint for Definition {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let scheme = match self.protocol {
            Protocol::Http => "http",
            Protocol::Https => "https",
        };
        let uri: http::Uri = format!("{}://{}", scheme, self.host(region)).parse()?;
        let signing_region = match self.credential_scope.region() {
            Some(fixed) => fixed.clone(),
            None => SigningRegion::from(region.clone()),
        };
        let mut scope = CredentialScope::builder().region(signing_region);
        if let Some(service) = self.credential_scope.service() {
            scope = scope.service(service.clone());
        }
        Ok(AwsEndpoint::new(Endpoint::mutable(uri), scope.build()))
    }
}

#[cfg(test)]
mod test {
    use crate::definition::{Definition, Protocol};
    use crate::{CredentialScope, ResolveAwsEndpoint};
    use aws_types::region::{Region, SigningRegion};
    use aws_types::SigningService;

    #[test]
    fn region_is_substituted_into_the_host() {
        let endpoint = Definition::for_service("iotevents")
            .resolve_endpoint(&Region::new("ap-northeast-1"))
            .expect("valid endpoint");
        assert_eq!(
            endpoint.endpoint().uri().to_string(),
            "https://iotevents.ap-northeast-1.amazonaws.com/"
        );
        assert_eq!(
            endpoint.credential_scope().region(),
            Some(&SigningRegion::from_static("ap-northeast-1"))
        );
        assert_eq!(
            endpoint.credential_scope().service(),
            Some(&SigningService::from_static("iotevents"))
        );
    }

    #[test]
    fn plain_http_templates_for_local_stacks() {
        let definition = Definition {
            uri_template: "localhost.{region}.test:4566".into(),
            protocol: Protocol::Http,
            credential_scope: CredentialScope::default(),
        };
        let endpoint = definition
            .resolve_endpoint(&Region::new("us-east-1"))
            .expect("valid endpoint");
        assert_eq!(
            endpoint.endpoint().uri().to_string(),
            "http://localhost.us-east-1.test:4566/"
        );
        assert_eq!(endpoint.credential_scope().service(), None);
    }
}
