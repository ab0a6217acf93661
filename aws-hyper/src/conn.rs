/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The default connector: hyper over TLS, or any boxed tower service

use crate::BoxError;
use hyper::client::{HttpConnector, ResponseFuture};
use hyper_tls::HttpsConnector;
use smithy_http::body::SdkBody;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

type BoxFuture = Pin<Box<dyn Future<Output = Result<http::Response<SdkBody>, BoxError>> + Send>>;

type HyperClient = hyper::Client<HttpsConnector<HttpConnector>, SdkBody>;

/// The connector clients use unless told otherwise
///
/// [`Standard::https`] talks to real endpoints. [`Standard::new`] hides any other connector,
/// such as a [`TestConnection`](crate::test_connection::TestConnection), behind the same type
/// so that `Client<Standard>` can be named without generics.
#[derive(Clone)]
pub struct Standard(Connector);

#[derive(Clone)]
enum Connector {
    Hyper(HyperClient),
    Boxed(Box<dyn DynConnector>),
}

impl Standard {
    /// HTTP/1.1 and HTTP/2 over TLS, using the platform's TLS implementation
    pub fn https() -> Self {
        let client = hyper::Client::builder().build::<_, SdkBody>(HttpsConnector::new());
        Standard(Connector::Hyper(client))
    }

    pub fn new<C>(connector: C) -> Self
    where
        C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
            + Send
            + Sync
            + Clone
            + 'static,
        C::Error: Into<BoxError>,
        C::Future: Send + 'static,
    {
        Standard(Connector::Boxed(Box::new(connector)))
    }
}

impl fmt::Debug for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.0 {
            Connector::Hyper(_) => "hyper",
            Connector::Boxed(_) => "boxed",
        };
        f.debug_tuple("Standard").field(&kind).finish()
    }
}

/// Object-safe view of a cloneable connector
trait DynConnector: Send + Sync {
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), BoxError>>;
    fn call(&mut self, request: http::Request<SdkBody>) -> BoxFuture;
    fn boxed_clone(&self) -> Box<dyn DynConnector>;
}

impl Clone for Box<dyn DynConnector> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

impl<C> DynConnector for C
where
    C: tower::Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
        + Send
        + Sync
        + Clone
        + 'static,
    C::Error: Into<BoxError>,
    C::Future: Send + 'static,
{
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), BoxError>> {
        tower::Service::poll_ready(self, cx).map_err(Into::into)
    }

    fn call(&mut self, request: http::Request<SdkBody>) -> BoxFuture {
        let response = tower::Service::call(self, request);
        Box::pin(async move { response.await.map_err(Into::into) })
    }

    fn boxed_clone(&self) -> Box<dyn DynConnector> {
        Box::new(self.clone())
    }
}

impl tower::Service<http::Request<SdkBody>> for Standard {
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = ConnectorFuture;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        match &mut self.0 {
            Connector::Hyper(client) => tower::Service::poll_ready(client, cx).map_err(Into::into),
            Connector::Boxed(connector) => connector.poll_ready(cx),
        }
    }

    fn call(&mut self, request: http::Request<SdkBody>) -> Self::Future {
        let inner = match &mut self.0 {
            Connector::Hyper(client) => Pending::Hyper(tower::Service::call(client, request)),
            Connector::Boxed(connector) => Pending::Boxed(connector.call(request)),
        };
        ConnectorFuture { inner }
    }
}

/// Response future of [`Standard`]
#[pin_project::pin_project]
pub struct ConnectorFuture {
    #[pin]
    inner: Pending,
}

#[pin_project::pin_project(project = PendingProj)]
enum Pending {
    Hyper(#[pin] ResponseFuture),
    Boxed(#[pin] BoxFuture),
}

impl Future for ConnectorFuture {
    type Output = Result<http::Response<SdkBody>, BoxError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project().inner.project() {
            PendingProj::Hyper(response) => match response.poll(cx) {
                Poll::Ready(Ok(response)) => Poll::Ready(Ok(response.map(SdkBody::from))),
                Poll::Ready(Err(err)) => Poll::Ready(Err(err.into())),
                Poll::Pending => Poll::Pending,
            },
            PendingProj::Boxed(response) => response.poll(cx),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::conn::Standard;
    use crate::test_connection::TestConnection;
    use crate::BoxError;
    use smithy_http::body::SdkBody;
    use tower::ServiceExt;

    #[test]
    fn standard_is_a_shareable_connector() {
        fn check() -> impl tower::Service<
            http::Request<SdkBody>,
            Response = http::Response<SdkBody>,
            Error = BoxError,
            Future = impl Send,
        > + Clone
               + Send
               + Sync {
            Standard::new(TestConnection::<String>::new(vec![]))
        }
        let _ = check();
    }

    #[tokio::test]
    async fn boxed_connectors_receive_the_request() {
        let conn = TestConnection::new(vec![(
            http::Request::new(SdkBody::from("ping")),
            http::Response::builder().status(202).body("pong").unwrap(),
        )]);
        let response = Standard::new(conn.clone())
            .oneshot(http::Request::new(SdkBody::from("ping")))
            .await
            .expect("response is canned");
        assert_eq!(response.status(), 202);
        assert_eq!(response.body().bytes(), Some(&b"pong"[..]));
        assert_eq!(conn.requests().len(), 1);
        assert_eq!(format!("{:?}", Standard::new(conn)), "Standard(\"boxed\")");
    }
}
