/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client that sends service operations over HTTP
//!
//! Every operation is driven through the same pipeline:
//! 1. [`AwsEndpointStage`] resolves the endpoint and records the signing scope
//! 2. [`UserAgentStage`] sets the user agent headers
//! 3. Any [`RequestStages`] the operation carries in its property bag (a request signer, for example)
//! 4. The request is dispatched on the connector
//! 5. The response body is loaded and handed to the operation's response handler

pub mod conn;
#[cfg(any(test, feature = "test-util"))]
pub mod test_connection;

use aws_endpoint::AwsEndpointStage;
use aws_http::user_agent::UserAgentStage;
use smithy_http::body::SdkBody;
use smithy_http::middleware::{load_response, MapRequest, RequestStages};
use smithy_http::operation;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
use smithy_http::result::{SdkError, SdkSuccess};
use std::error::Error;
use std::fmt::Debug;
use tower::{Service, ServiceExt};
use tracing::Instrument;

pub type BoxError = Box<dyn Error + Send + Sync>;

/// Sends operations over a connector
///
/// [`Client::https`] is the usual choice. [`Client::new`] accepts any cloneable tower service
/// from `http::Request<SdkBody>` to `http::Response<SdkBody>` whose errors convert into
/// [`BoxError`], such as a [`TestConnection`](crate::test_connection::TestConnection).
#[derive(Debug, Clone)]
pub struct Client<S = conn::Standard> {
    inner: S,
}

impl<S> Client<S> {
    pub fn new(connector: S) -> Self {
        Client { inner: connector }
    }
}

impl Client<conn::Standard> {
    /// A client with its own TLS connection pool
    pub fn https() -> Self {
        Client {
            inner: conn::Standard::https(),
        }
    }
}

fn apply_stages(request: operation::Request) -> Result<operation::Request, BoxError> {
    let request = AwsEndpointStage.apply(request)?;
    let request = UserAgentStage::new().apply(request)?;
    let extra_stages = request.properties().get::<RequestStages>().cloned();
    match extra_stages {
        Some(stages) => stages.apply(request),
        None => Ok(request),
    }
}

impl<S> Client<S>
where
    S: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
        + Send
        + Clone
        + 'static,
    S::Error: Into<BoxError> + Send + Sync + 'static,
    S::Future: Send + 'static,
{
    /// Send `input` and return the parsed output
    ///
    /// Use [`call_raw`](Client::call_raw) to keep the raw response of a successful call.
    pub async fn call<O, T, E>(&self, input: Operation<O>) -> Result<T, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, E>>,
        E: Debug,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Send `input`, keeping the raw HTTP response next to the parsed output
    pub async fn call_raw<O, T, E>(
        &self,
        input: Operation<O>,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseHttpResponse<SdkBody, Output = Result<T, E>>,
        E: Debug,
    {
        let (request, parts) = input.into_parts();
        let span = match &parts.metadata {
            Some(metadata) => tracing::debug_span!(
                "send_operation",
                operation = metadata.name(),
                service = metadata.service()
            ),
            None => tracing::debug_span!("send_operation"),
        };
        let handler = parts.handler;
        let mut inner = self.inner.clone();
        async move {
            let request = apply_stages(request).map_err(SdkError::ConstructionFailure)?;
            let (request, _properties) = request.into_parts();
            tracing::debug!(method = %request.method(), uri = %request.uri(), "dispatching request");
            let svc = inner
                .ready()
                .await
                .map_err(|err| SdkError::DispatchFailure(err.into()))?;
            let response = svc
                .call(request)
                .await
                .map_err(|err| SdkError::DispatchFailure(err.into()))?;
            tracing::debug!(status = %response.status(), "received response");
            let result = load_response(response, &handler).await;
            if let Err(err) = &result {
                tracing::debug!(error = ?err, "operation failed");
            }
            result
        }
        .instrument(span)
        .await
    }
}
