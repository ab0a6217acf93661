/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Where requests are sent
//!
//! Operation inputs build request URIs holding only a path and query. The endpoint stage
//! later fills in the scheme and authority from an [`Endpoint`], optionally prepending a host
//! prefix modeled on the operation.

use crate::operation::BuildError;
use http::uri::{Authority, InvalidUri, PathAndQuery, Uri};
use std::convert::TryFrom;
use thiserror::Error;

/// A base URI for requests, plus whether operations may add a host prefix to it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: Uri,
    accepts_prefix: bool,
}

/// A host prefix modeled on an operation, e.g. `data-` for Cloud Map's `DiscoverInstances`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EndpointPrefix(String);

impl EndpointPrefix {
    /// The prefix must be usable as the start of a host name
    pub fn new(prefix: impl Into<String>) -> Result<Self, BuildError> {
        let prefix = prefix.into();
        if let Err(err) = Authority::try_from(prefix.as_str()) {
            return Err(BuildError::InvalidUri {
                uri: prefix,
                err,
                message: "invalid prefix".into(),
            });
        }
        Ok(EndpointPrefix(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InvalidEndpoint {
    #[error("endpoint `{0}` has no authority")]
    MissingAuthority(Uri),
    #[error("endpoint `{0}` has no scheme")]
    MissingScheme(Uri),
    #[error("prefixed authority is invalid: {0}")]
    Authority(#[from] InvalidUri),
    #[error("failed to assemble the request uri: {0}")]
    Uri(#[from] http::Error),
}

impl Endpoint {
    /// An endpoint that operations may prefix, such as a regional AWS endpoint
    pub fn mutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            accepts_prefix: true,
        }
    }

    /// An endpoint used exactly as given
    ///
    /// Use this for local emulators and proxies, where `data-localhost` would not resolve:
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// use http::Uri;
    /// let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:4566"));
    /// ```
    pub fn immutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            accepts_prefix: false,
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Rewrite `uri` to point at this endpoint
    ///
    /// The scheme and authority come from the endpoint. A base path on the endpoint is joined
    /// with the request's path, and the request's query is kept.
    pub fn set_endpoint(
        &self,
        uri: &mut Uri,
        prefix: Option<&EndpointPrefix>,
    ) -> Result<(), InvalidEndpoint> {
        let scheme = match self.uri.scheme() {
            Some(scheme) => scheme.clone(),
            None => return Err(InvalidEndpoint::MissingScheme(self.uri.clone())),
        };
        let authority = self.authority(prefix)?;
        let path_and_query = join_path(&self.uri, uri);
        *uri = Uri::builder()
            .scheme(scheme)
            .authority(authority)
            .path_and_query(path_and_query.as_str())
            .build()?;
        Ok(())
    }

    fn authority(&self, prefix: Option<&EndpointPrefix>) -> Result<Authority, InvalidEndpoint> {
        let authority = match self.uri.authority() {
            Some(authority) => authority,
            None => return Err(InvalidEndpoint::MissingAuthority(self.uri.clone())),
        };
        match prefix {
            Some(prefix) if self.accepts_prefix && !prefix.0.is_empty() => {
                Ok(Authority::try_from(format!("{}{}", prefix.0, authority).as_str())?)
            }
            _ => Ok(authority.clone()),
        }
    }
}

fn join_path(endpoint: &Uri, request: &Uri) -> String {
    if let Some(query) = endpoint.query() {
        tracing::warn!(query = %query, "ignoring the query string of a configured endpoint");
    }
    let request = request
        .path_and_query()
        .map(PathAndQuery::as_str)
        .unwrap_or("");
    let base = endpoint.path().trim_end_matches('/');
    if base.is_empty() {
        return request.to_string();
    }
    format!("{}/{}", base, request.trim_start_matches('/'))
}

#[cfg(test)]
mod test {
    use crate::endpoint::{Endpoint, EndpointPrefix, InvalidEndpoint};
    use http::Uri;

    fn resolve(endpoint: &Endpoint, path: &'static str, prefix: Option<&str>) -> Uri {
        let prefix = prefix.map(|prefix| EndpointPrefix::new(prefix).expect("valid prefix"));
        let mut uri = Uri::from_static(path);
        endpoint
            .set_endpoint(&mut uri, prefix.as_ref())
            .expect("valid endpoint");
        uri
    }

    #[test]
    fn regional_endpoints_take_the_prefix() {
        let endpoint = Endpoint::mutable(Uri::from_static(
            "https://servicediscovery.us-east-1.amazonaws.com",
        ));
        assert_eq!(
            resolve(&endpoint, "/", Some("data-")),
            Uri::from_static("https://data-servicediscovery.us-east-1.amazonaws.com/")
        );
    }

    #[test]
    fn ports_and_queries_survive_the_prefix() {
        let endpoint = Endpoint::mutable(Uri::from_static(
            "https://iotevents.us-east-1.amazonaws.com:6443",
        ));
        assert_eq!(
            resolve(&endpoint, "/inputs?maxResults=10", Some("subregion.")),
            Uri::from_static(
                "https://subregion.iotevents.us-east-1.amazonaws.com:6443/inputs?maxResults=10"
            )
        );
    }

    #[test]
    fn immutable_endpoints_ignore_the_prefix() {
        let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:4566"));
        assert_eq!(
            resolve(&endpoint, "/", Some("data-")),
            Uri::from_static("http://localhost:4566/")
        );
    }

    #[test]
    fn base_paths_are_joined_once() {
        for base in &[
            "https://proxy.example.com/iotevents",
            "https://proxy.example.com/iotevents/",
        ] {
            let endpoint = Endpoint::immutable(Uri::from_static(base));
            assert_eq!(
                resolve(&endpoint, "/detector-models?maxResults=5", None),
                Uri::from_static("https://proxy.example.com/iotevents/detector-models?maxResults=5")
            );
        }
    }

    #[test]
    fn relative_endpoints_are_rejected() {
        let endpoint = Endpoint::immutable(Uri::from_static("/just/a/path"));
        let mut uri = Uri::from_static("/");
        assert!(matches!(
            endpoint.set_endpoint(&mut uri, None),
            Err(InvalidEndpoint::MissingScheme(_))
        ));
    }

    #[test]
    fn prefixes_must_be_host_safe() {
        assert!(EndpointPrefix::new("data-").is_ok());
        assert!(EndpointPrefix::new("bad prefix/").is_err());
    }
}
