/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::{set_endpoint_resolver, BoxError, Definition, ResolveAwsEndpoint};
use aws_http::user_agent::{ApiMetadata, AppName, AwsUserAgent};
use aws_types::credentials::{
    EnvironmentCredentials, ProvideCredentials, SharedCredentialsProvider,
};
use aws_types::os_shim_internal::Env;
use aws_types::region::{ProvideRegion, Region};
use aws_types::SigningService;
use smithy_http::middleware::{shared_stage, MapRequest, RequestStages, SharedStage};
use smithy_http::property_bag::PropertyBag;
use std::fmt;
use std::sync::Arc;

pub(crate) const SERVICE_NAME: &str = "iotevents";

/// Service configuration for IoT Events
///
/// A `Config` is immutable once built and shared by every request a [`Client`](crate::Client)
/// sends.
pub struct Config {
    pub(crate) endpoint_resolver: Arc<dyn ResolveAwsEndpoint>,
    pub(crate) region: Option<Region>,
    pub(crate) credentials_provider: SharedCredentialsProvider,
    pub(crate) app_name: Option<AppName>,
    pub(crate) stages: RequestStages,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("credentials_provider", &self.credentials_provider)
            .field("app_name", &self.app_name)
            .field("stages", &self.stages)
            .finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn app_name(&self) -> Option<&AppName> {
        self.app_name.as_ref()
    }

    /// Load everything the request stages read into an operation's property bag
    pub(crate) fn apply_to(&self, props: &mut PropertyBag) {
        if let Some(region) = &self.region {
            props.insert(region.clone());
        }
        set_endpoint_resolver(props, self.endpoint_resolver.clone());
        props.insert(SigningService::from_static(SERVICE_NAME));
        let mut user_agent = AwsUserAgent::new_from_environment(
            Env::real(),
            ApiMetadata::new(SERVICE_NAME, crate::PKG_VERSION),
        );
        if let Some(app_name) = &self.app_name {
            user_agent = user_agent.with_app_name(app_name.clone());
        }
        props.insert(user_agent);
        props.insert(self.credentials_provider.clone());
        if !self.stages.is_empty() {
            props.insert(self.stages.clone());
        }
    }
}

#[derive(Default)]
pub struct Builder {
    endpoint_resolver: Option<Arc<dyn ResolveAwsEndpoint>>,
    region: Option<Region>,
    credentials_provider: Option<SharedCredentialsProvider>,
    app_name: Option<AppName>,
    stages: Vec<SharedStage>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the endpoint resolver, e.g. with a fixed [`Endpoint`](smithy_http::endpoint::Endpoint)
    pub fn endpoint_resolver(mut self, endpoint_resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(endpoint_resolver));
        self
    }

    /// Send every request to `endpoint`, a hostname or a full URL such as `http://localhost:4566`
    pub fn endpoint(self, endpoint: &str) -> Result<Self, BoxError> {
        let endpoint = aws_endpoint::endpoint_override(endpoint)?;
        Ok(self.endpoint_resolver(endpoint))
    }

    /// Set the region from any region provider
    ///
    /// Without one, `build` falls back to `AWS_REGION` and then `AWS_DEFAULT_REGION`.
    pub fn region(mut self, region_provider: impl ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    /// Defaults to `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY` from the environment
    pub fn credentials_provider(
        mut self,
        credentials_provider: impl ProvideCredentials + 'static,
    ) -> Self {
        self.credentials_provider = Some(SharedCredentialsProvider::new(credentials_provider));
        self
    }

    /// Identify the calling application in the `x-amz-user-agent` header
    pub fn app_name(mut self, app_name: AppName) -> Self {
        self.app_name = Some(app_name);
        self
    }

    /// Add a stage that runs after the endpoint and user agent are set, such as a request signer
    pub fn request_stage(mut self, stage: impl MapRequest + Send + Sync + 'static) -> Self {
        self.stages.push(shared_stage(stage));
        self
    }

    pub fn build(self) -> Config {
        Config {
            endpoint_resolver: self
                .endpoint_resolver
                .unwrap_or_else(|| Arc::new(Definition::for_service(SERVICE_NAME))),
            region: self
                .region
                .or_else(|| aws_types::region::default_provider().region()),
            credentials_provider: self.credentials_provider.unwrap_or_else(|| {
                SharedCredentialsProvider::new(EnvironmentCredentials::new())
            }),
            app_name: self.app_name,
            stages: RequestStages::new(self.stages),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use aws_http::user_agent::{AppName, AwsUserAgent};
    use aws_types::credentials::{Credentials, ProvideCredentials, SharedCredentialsProvider};
    use aws_types::region::Region;
    use aws_types::SigningService;
    use smithy_http::property_bag::PropertyBag;

    #[test]
    fn full_urls_are_valid_endpoints() {
        assert!(Config::builder().endpoint("http://localhost:4566").is_ok());
        assert!(Config::builder().endpoint("https://").is_err());
    }

    #[test]
    fn configured_values_reach_the_property_bag() {
        let conf = Config::builder()
            .region(Region::from_static("ap-southeast-2"))
            .app_name(AppName::new("fleet-monitor").unwrap())
            .build();
        let mut props = PropertyBag::new();
        conf.apply_to(&mut props);
        assert_eq!(props.get::<Region>(), Some(&Region::from_static("ap-southeast-2")));
        assert_eq!(
            props.get::<SigningService>(),
            Some(&SigningService::from_static("iotevents"))
        );
        let user_agent = props.get::<AwsUserAgent>().expect("user agent is set");
        assert!(user_agent.aws_ua_header().ends_with("app/fleet-monitor"));
    }

    #[test]
    fn credentials_provider_is_always_in_the_property_bag() {
        let mut props = PropertyBag::new();
        Config::builder().build().apply_to(&mut props);
        assert!(props.get::<SharedCredentialsProvider>().is_some());

        let conf = Config::builder()
            .credentials_provider(Credentials::from_keys("AKIDCONFIG", "secret", None))
            .build();
        let mut props = PropertyBag::new();
        conf.apply_to(&mut props);
        let provider = props
            .get::<SharedCredentialsProvider>()
            .expect("provider is set");
        assert_eq!(
            provider
                .provide_credentials()
                .expect("static credentials")
                .access_key_id(),
            "AKIDCONFIG"
        );
    }
}
