/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request stages and response loading shared by every client
//!
//! A request passes through a fixed list of [`MapRequest`] stages before dispatch. After
//! dispatch, [`load_response`] reads the body and hands it to the operation's handler.

use crate::body::SdkBody;
use crate::operation;
use crate::response::ParseHttpResponse;
use crate::result::{SdkError, SdkSuccess};
use bytes::{Buf, Bytes, BytesMut};
use http_body::Body;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

type BoxError = Box<dyn Error + Send + Sync>;

/// One synchronous step that rewrites an outgoing [`operation::Request`]
///
/// Stages read what they need from the property bag, such as the resolved endpoint or the
/// user agent, and edit the `http::Request` through
/// [`Request::augment`](crate::operation::Request::augment):
///
/// ```rust
/// # use smithy_http::middleware::MapRequest;
/// # use smithy_http::operation;
/// # use std::convert::Infallible;
/// use http::HeaderValue;
///
/// /// Present in the bag when the caller wants a trace id header
/// struct TraceId(&'static str);
///
/// struct TraceIdStage;
///
/// impl MapRequest for TraceIdStage {
///     type Error = Infallible;
///
///     fn apply(&self, request: operation::Request) -> Result<operation::Request, Infallible> {
///         request.augment(|mut request, properties| {
///             if let Some(TraceId(id)) = properties.get::<TraceId>() {
///                 request
///                     .headers_mut()
///                     .insert("x-amzn-trace-id", HeaderValue::from_static(*id));
///             }
///             Ok(request)
///         })
///     }
/// }
/// ```
pub trait MapRequest {
    /// Use [`Infallible`](std::convert::Infallible) for stages that cannot fail
    type Error: Into<BoxError>;

    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error>;
}

/// A type-erased [`MapRequest`] that can be shared between requests.
pub type SharedStage = Arc<dyn MapRequest<Error = BoxError> + Send + Sync>;

struct BoxedStage<S>(S);

impl<S> MapRequest for BoxedStage<S>
where
    S: MapRequest,
{
    type Error = BoxError;

    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
        self.0.apply(request).map_err(|err| err.into())
    }
}

/// Erase the error type of `stage` so it can be stored in [`RequestStages`].
pub fn shared_stage(stage: impl MapRequest + Send + Sync + 'static) -> SharedStage {
    Arc::new(BoxedStage(stage))
}

/// Additional stages applied to a request after the endpoint and user agent are set.
///
/// Operations insert `RequestStages` into the property bag; this is where a request signer is
/// plugged in. Stages run in insertion order.
#[derive(Clone, Default)]
pub struct RequestStages(Vec<SharedStage>);

impl RequestStages {
    pub fn new(stages: Vec<SharedStage>) -> Self {
        RequestStages(stages)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for RequestStages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RequestStages").field(&self.0.len()).finish()
    }
}

impl MapRequest for RequestStages {
    type Error = BoxError;

    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
        self.0
            .iter()
            .try_fold(request, |request, stage| stage.apply(request))
    }
}

/// Read `response` and parse it with `handler`
///
/// The handler may claim the response before its body is read. Otherwise the whole body is
/// buffered first. A parse failure keeps the raw response in [`SdkError::ServiceError`].
pub async fn load_response<T, E, O>(
    mut response: http::Response<SdkBody>,
    handler: &O,
) -> Result<SdkSuccess<T>, SdkError<E>>
where
    O: ParseHttpResponse<SdkBody, Output = Result<T, E>>,
{
    if let Some(parsed) = handler.parse_unloaded(&mut response) {
        return into_result(parsed, response);
    }
    let body = std::mem::replace(response.body_mut(), SdkBody::taken());
    let loaded = match collect(body).await {
        Ok(loaded) => response.map(|_| loaded),
        Err(err) => return Err(SdkError::ResponseError { raw: response, err }),
    };
    if !loaded.status().is_success() {
        tracing::trace!(
            status = %loaded.status(),
            body = %String::from_utf8_lossy(loaded.body()),
            "error response"
        );
    }
    let parsed = handler.parse_loaded(&loaded);
    into_result(parsed, loaded.map(SdkBody::from))
}

async fn collect(mut body: SdkBody) -> Result<Bytes, BoxError> {
    let mut buffered = BytesMut::new();
    while let Some(chunk) = body.data().await {
        let mut chunk = chunk?;
        while chunk.has_remaining() {
            let len = chunk.chunk().len();
            buffered.extend_from_slice(chunk.chunk());
            chunk.advance(len);
        }
    }
    Ok(buffered.freeze())
}

fn into_result<T, E>(
    parsed: Result<T, E>,
    raw: http::Response<SdkBody>,
) -> Result<SdkSuccess<T>, SdkError<E>> {
    match parsed {
        Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
        Err(err) => Err(SdkError::ServiceError { raw, err }),
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::middleware::{load_response, shared_stage, MapRequest, RequestStages};
    use crate::operation;
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;
    use std::convert::Infallible;

    struct AppendHeader(&'static str);

    impl MapRequest for AppendHeader {
        type Error = Infallible;

        fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
            request.augment(|mut req, _| {
                req.headers_mut()
                    .append("x-stage", http::HeaderValue::from_static(self.0));
                Ok(req)
            })
        }
    }

    #[test]
    fn stages_run_in_order() {
        let stages = RequestStages::new(vec![
            shared_stage(AppendHeader("first")),
            shared_stage(AppendHeader("second")),
        ]);
        let request = operation::Request::new(http::Request::new(SdkBody::empty()));
        let (request, _) = stages.apply(request).expect("infallible").into_parts();
        let values: Vec<_> = request.headers().get_all("x-stage").iter().collect();
        assert_eq!(values, vec!["first", "second"]);
    }

    struct StatusParser;

    impl ParseStrictResponse for StatusParser {
        type Output = Result<String, String>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            let body = String::from_utf8_lossy(response.body()).to_string();
            if response.status().is_success() {
                Ok(body)
            } else {
                Err(body)
            }
        }
    }

    #[tokio::test]
    async fn loads_streaming_bodies_before_parsing() {
        let response = http::Response::builder()
            .status(200)
            .body(SdkBody::from(hyper::Body::from("hello")))
            .unwrap();
        let success = load_response(response, &StatusParser).await.unwrap();
        assert_eq!(success.parsed, "hello");
        assert_eq!(success.raw.body().bytes(), Some(&b"hello"[..]));
    }

    #[tokio::test]
    async fn error_responses_become_service_errors() {
        let response = http::Response::builder()
            .status(400)
            .body(SdkBody::from("bad"))
            .unwrap();
        match load_response(response, &StatusParser).await {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(err, "bad");
                assert_eq!(raw.status(), 400);
            }
            other => panic!("unexpected result: {:?}", other.map(|s| s.parsed)),
        }
    }
}
