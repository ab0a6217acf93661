/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::PropertyBag;
use std::borrow::Cow;
use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

type BoxError = Box<dyn Error + Send + Sync>;

/// Names an operation and its service for logging
#[derive(Clone, Debug)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }

    /// The operation name, e.g. `DiscoverInstances`
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

/// Everything about an operation besides the request itself
#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H> {
    pub handler: H,
    pub metadata: Option<Metadata>,
}

/// A request ready to send, paired with the handler `H` that parses its response
#[derive(Debug)]
pub struct Operation<H> {
    request: Request,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn new(request: Request, handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                handler,
                metadata: None,
            },
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn properties(&self) -> MutexGuard<'_, PropertyBag> {
        self.request.properties()
    }

    pub fn properties_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        self.request.properties_mut()
    }

    pub fn into_parts(self) -> (Request, Parts<H>) {
        (self.request, self.parts)
    }
}

/// Failures that occur while turning an input into an HTTP request.
///
/// None of these ever reach the network.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{field} was missing. {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },

    #[error("invalid field in input: {field} (Details: {details})")]
    InvalidField { field: &'static str, details: String },

    #[error("failed to serialize input: {0}")]
    SerializationError(BoxError),

    #[error("error constructing the HTTP request: {0}")]
    HttpError(#[from] http::Error),

    #[error("invalid uri `{uri}`: {message}")]
    InvalidUri {
        uri: String,
        #[source]
        err: http::uri::InvalidUri,
        message: Cow<'static, str>,
    },
}

/// An HTTP request plus the property bag that request stages read their configuration from
///
/// The bag is shared: [`Request::into_parts`] hands it back after dispatch.
#[derive(Debug)]
pub struct Request {
    inner: http::Request<SdkBody>,
    properties: Arc<Mutex<PropertyBag>>,
}

impl Request {
    pub fn new(inner: http::Request<SdkBody>) -> Self {
        Request {
            inner,
            properties: Default::default(),
        }
    }

    /// Rebuild the HTTP request with `f`, which may also read and write the property bag
    pub fn augment<E>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, E>,
    ) -> Result<Request, E> {
        let inner = f(self.inner, &mut lock(&self.properties))?;
        Ok(Request {
            inner,
            properties: self.properties,
        })
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn properties(&self) -> MutexGuard<'_, PropertyBag> {
        lock(&self.properties)
    }

    pub fn properties_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        lock(&self.properties)
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, Arc<Mutex<PropertyBag>>) {
        (self.inner, self.properties)
    }
}

// A stage that panicked while holding the lock leaves the bag in a usable state: every write is a
// single `insert`.
fn lock(properties: &Mutex<PropertyBag>) -> MutexGuard<'_, PropertyBag> {
    properties
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
