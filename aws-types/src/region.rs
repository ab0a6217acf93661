/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Regions, region providers and the region used for request signing

use crate::os_shim_internal::Env;
use std::borrow::Cow;
use std::fmt;

/// An AWS region such as `us-east-1`
///
/// The region picks the endpoint a client sends to: Cloud Map in `eu-west-1` is
/// `servicediscovery.eu-west-1.amazonaws.com`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(Cow<'static, str>);

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Region(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Region(Cow::Borrowed(region))
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything a client configuration can take its region from
///
/// A plain [`Region`] and `Option<Region>` are providers too, so
/// `Config::builder().region(Region::new("us-east-1"))` needs no wrapper.
pub trait ProvideRegion: Send + Sync {
    fn region(&self) -> Option<Region>;
}

impl ProvideRegion for Region {
    fn region(&self) -> Option<Region> {
        Some(self.clone())
    }
}

impl ProvideRegion for &Region {
    fn region(&self) -> Option<Region> {
        Some(Region::clone(self))
    }
}

impl ProvideRegion for Option<Region> {
    fn region(&self) -> Option<Region> {
        self.clone()
    }
}

/// The provider used when a configuration names no region: the process environment
pub fn default_provider() -> impl ProvideRegion {
    EnvironmentProvider::new()
}

/// Reads `AWS_REGION`, then `AWS_DEFAULT_REGION`; empty values count as unset
#[derive(Debug, Default)]
pub struct EnvironmentProvider {
    env: Env,
}

impl EnvironmentProvider {
    pub fn new() -> Self {
        Self::with_env(Env::real())
    }

    pub fn with_env(env: Env) -> Self {
        EnvironmentProvider { env }
    }

    fn var(&self, name: &str) -> Option<String> {
        self.env.get(name).ok().filter(|value| !value.is_empty())
    }
}

impl ProvideRegion for EnvironmentProvider {
    fn region(&self) -> Option<Region> {
        let region = self
            .var("AWS_REGION")
            .or_else(|| self.var("AWS_DEFAULT_REGION"))
            .map(Region::new);
        tracing::trace!(region = ?region, "loaded region from the environment");
        region
    }
}

/// The region a request is signed for
///
/// Usually equal to the request's [`Region`], but an endpoint may be signed for another one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningRegion(Cow<'static, str>);

impl SigningRegion {
    pub const fn from_static(region: &'static str) -> Self {
        SigningRegion(Cow::Borrowed(region))
    }
}

impl AsRef<str> for SigningRegion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Region> for SigningRegion {
    fn from(region: Region) -> Self {
        SigningRegion(region.0)
    }
}
