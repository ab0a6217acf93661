/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The `User-Agent` and `x-amz-user-agent` headers
//!
//! Service configurations put an [`AwsUserAgent`] in each operation's property bag and
//! [`UserAgentStage`] turns it into headers just before dispatch.

use aws_types::build_metadata::{OsFamily, BUILD_METADATA};
use aws_types::os_shim_internal::Env;
use http::header::{HeaderName, InvalidHeaderValue, USER_AGENT};
use http::HeaderValue;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;
use thiserror::Error;

/// Everything the user agent headers report about this client and where it runs
#[derive(Clone, Debug)]
pub struct AwsUserAgent {
    sdk_version: &'static str,
    api: ApiMetadata,
    os_family: &'static OsFamily,
    os_version: Option<String>,
    rust_version: &'static str,
    exec_env: Option<String>,
    app_name: Option<AppName>,
}

impl AwsUserAgent {
    /// Build metadata comes from [`BUILD_METADATA`]; `AWS_EXECUTION_ENV` is read from `env`
    pub fn new_from_environment(env: Env, api: ApiMetadata) -> Self {
        AwsUserAgent {
            sdk_version: BUILD_METADATA.core_pkg_version,
            api,
            os_family: &BUILD_METADATA.os_family,
            os_version: None,
            rust_version: BUILD_METADATA.rust_version,
            exec_env: env.get("AWS_EXECUTION_ENV").ok(),
            app_name: None,
        }
    }

    /// A user agent that renders the same on every platform
    pub fn for_tests() -> Self {
        AwsUserAgent {
            sdk_version: "0.123.test",
            api: ApiMetadata::new("test-service", "0.123"),
            os_family: &OsFamily::Windows,
            os_version: Some("XPSP3".to_string()),
            rust_version: "1.50.0",
            exec_env: None,
            app_name: None,
        }
    }

    pub fn with_app_name(mut self, app_name: AppName) -> Self {
        self.app_name = Some(app_name);
        self
    }

    fn write_platform(&self, out: &mut String) {
        out.push_str(" os/");
        out.push_str(self.os_family.as_str());
        if let Some(version) = &self.os_version {
            out.push('/');
            out.push_str(version);
        }
        out.push_str(" lang/rust/");
        out.push_str(self.rust_version);
    }

    /// Value of `x-amz-user-agent`: SDK, service, platform, then the optional execution
    /// environment and application name
    pub fn aws_ua_header(&self) -> String {
        let mut out = format!("aws-sdk-rust/{} {}", self.sdk_version, self.api);
        self.write_platform(&mut out);
        if let Some(exec_env) = &self.exec_env {
            out.push_str(" exec-env/");
            out.push_str(exec_env);
        }
        if let Some(app_name) = &self.app_name {
            out.push_str(" app/");
            out.push_str(&app_name.0);
        }
        out
    }

    /// Value of the classic `User-Agent` header: SDK and platform only
    pub fn ua_header(&self) -> String {
        let mut out = format!("aws-sdk-rust/{}", self.sdk_version);
        self.write_platform(&mut out);
        out
    }
}

/// Service identity reported in the user agent, e.g. `api/servicediscovery/0.1.0`
#[derive(Clone, Debug)]
pub struct ApiMetadata {
    service_id: Cow<'static, str>,
    version: &'static str,
}

impl ApiMetadata {
    pub const fn new(service_id: &'static str, version: &'static str) -> Self {
        ApiMetadata {
            service_id: Cow::Borrowed(service_id),
            version,
        }
    }
}

impl fmt::Display for ApiMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "api/{}/{}", self.service_id, self.version)
    }
}

/// An application name appended to the user agent as `app/<name>`
///
/// Only user agent token characters are accepted, and the name is limited to 50 characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppName(Cow<'static, str>);

#[derive(Debug, Error)]
#[error("app name `{0}` must be 1-50 user agent token characters")]
pub struct InvalidAppName(String);

impl AppName {
    pub fn new(app_name: impl Into<Cow<'static, str>>) -> Result<Self, InvalidAppName> {
        let app_name = app_name.into();
        let valid = !app_name.is_empty()
            && app_name.len() <= 50
            && app_name.chars().all(is_token_char);
        if valid {
            Ok(AppName(app_name))
        } else {
            Err(InvalidAppName(app_name.into_owned()))
        }
    }
}

// tchar from RFC 7230
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sets both user agent headers from the [`AwsUserAgent`] in the property bag
#[non_exhaustive]
#[derive(Default, Clone, Debug)]
pub struct UserAgentStage;

impl UserAgentStage {
    pub fn new() -> Self {
        UserAgentStage
    }
}

#[derive(Debug, Error)]
pub enum UserAgentStageError {
    #[error("no AwsUserAgent in the property bag")]
    UserAgentMissing,
    #[error("user agent is not a valid header value")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

fn x_amz_user_agent() -> HeaderName {
    HeaderName::from_static("x-amz-user-agent")
}

impl MapRequest for UserAgentStage {
    type Error = UserAgentStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut req, props| {
            let user_agent = props
                .get::<AwsUserAgent>()
                .ok_or(UserAgentStageError::UserAgentMissing)?;
            let classic = HeaderValue::try_from(user_agent.ua_header())?;
            let aws = HeaderValue::try_from(user_agent.aws_ua_header())?;
            let headers = req.headers_mut();
            headers.insert(USER_AGENT, classic);
            headers.insert(x_amz_user_agent(), aws);
            Ok(req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::user_agent::{
        x_amz_user_agent, ApiMetadata, AppName, AwsUserAgent, UserAgentStage, UserAgentStageError,
    };
    use aws_types::build_metadata::OsFamily;
    use aws_types::os_shim_internal::Env;
    use http::header::USER_AGENT;
    use pretty_assertions::assert_eq;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    fn pinned(env: &[(&str, &str)], service: &'static str) -> AwsUserAgent {
        let mut user_agent =
            AwsUserAgent::new_from_environment(Env::from_slice(env), ApiMetadata::new(service, "123"));
        user_agent.sdk_version = "0.1";
        user_agent.rust_version = "1.50.0";
        user_agent.os_family = &OsFamily::Macos;
        user_agent.os_version = Some("1.15".to_string());
        user_agent
    }

    #[test]
    fn headers_list_sdk_service_and_platform() {
        let user_agent = pinned(&[], "servicediscovery");
        assert_eq!(
            user_agent.aws_ua_header(),
            "aws-sdk-rust/0.1 api/servicediscovery/123 os/macos/1.15 lang/rust/1.50.0"
        );
        assert_eq!(
            user_agent.ua_header(),
            "aws-sdk-rust/0.1 os/macos/1.15 lang/rust/1.50.0"
        );
    }

    #[test]
    fn execution_env_and_app_name_come_last() {
        let user_agent = pinned(&[("AWS_EXECUTION_ENV", "lambda")], "iotevents")
            .with_app_name(AppName::new("fleet-monitor").expect("valid app name"));
        assert_eq!(
            user_agent.aws_ua_header(),
            "aws-sdk-rust/0.1 api/iotevents/123 os/macos/1.15 lang/rust/1.50.0 exec-env/lambda app/fleet-monitor"
        );
    }

    #[test]
    fn app_names_are_validated() {
        assert!(AppName::new("my_app-1.0").is_ok());
        assert!(AppName::new("").is_err());
        assert!(AppName::new("has space").is_err());
        assert!(AppName::new("x".repeat(51)).is_err());
    }

    #[test]
    fn stage_requires_a_user_agent() {
        let request = operation::Request::new(http::Request::new(SdkBody::from("{}")));
        match UserAgentStage::new().apply(request) {
            Err(UserAgentStageError::UserAgentMissing) => {}
            other => panic!("expected a missing user agent, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn stage_sets_both_headers() {
        let mut request = operation::Request::new(http::Request::new(SdkBody::from("{}")));
        request.properties_mut().insert(AwsUserAgent::for_tests());
        let (request, _) = UserAgentStage::new()
            .apply(request)
            .expect("user agent is set")
            .into_parts();
        assert_eq!(
            request.headers()[USER_AGENT],
            "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0"
        );
        assert_eq!(
            request.headers()[x_amz_user_agent()],
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0"
        );
    }
}
