/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A canned connector for client tests

use http::header::HeaderName;
use smithy_http::body::SdkBody;
use std::collections::VecDeque;
use std::future::Ready;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard};
use std::task::{Context, Poll};
use tower::BoxError;

type Exchange<B> = (http::Request<SdkBody>, http::Response<B>);

/// A request the client sent, next to the one the test expected at that position
#[derive(Debug)]
pub struct ValidateRequest {
    pub expected: http::Request<SdkBody>,
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Panics unless `actual` has the expected method, URI, headers and body
    ///
    /// Only headers present on the expected request are checked, minus `ignore_headers`.
    /// JSON bodies are compared as values, so key order and whitespace do not matter.
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        let (expected, actual) = (&self.expected, &self.actual);
        assert_eq!(actual.method(), expected.method(), "method mismatch");
        assert_eq!(actual.uri(), expected.uri(), "uri mismatch");
        for (name, value) in expected
            .headers()
            .iter()
            .filter(|(name, _)| !ignore_headers.contains(*name))
        {
            match actual.headers().get(name) {
                Some(actual_value) => {
                    assert_eq!(actual_value, value, "Header mismatch for {:?}", name)
                }
                None => panic!("Header {:?} missing", name),
            }
        }
        assert_bodies_match(
            expected.body().bytes().unwrap_or_default(),
            actual.body().bytes().unwrap_or_default(),
        );
    }
}

fn assert_bodies_match(expected: &[u8], actual: &[u8]) {
    let as_json = |body: &[u8]| serde_json::from_slice::<serde_json::Value>(body).ok();
    if let (Some(expected), Some(actual)) = (as_json(expected), as_json(actual)) {
        assert_eq!(actual, expected, "JSON body mismatch");
        return;
    }
    assert_eq!(
        String::from_utf8_lossy(actual),
        String::from_utf8_lossy(expected),
        "body mismatch"
    );
}

/// Answers each request with the next canned response and records what was sent
///
/// Clones share the same queue, so a test can keep one clone for assertions after handing
/// another to a client:
///
/// ```rust
/// use aws_hyper::test_connection::TestConnection;
/// use smithy_http::body::SdkBody;
/// let conn = TestConnection::new(vec![(
///     http::Request::new(SdkBody::from("{}")),
///     http::Response::builder().status(200).body("{}").unwrap(),
/// )]);
/// let client = aws_hyper::Client::new(conn.clone());
/// ```
#[derive(Debug)]
pub struct TestConnection<B> {
    pending: Arc<Mutex<VecDeque<Exchange<B>>>>,
    sent: Arc<Mutex<Vec<ValidateRequest>>>,
}

impl<B> Clone for TestConnection<B> {
    fn clone(&self) -> Self {
        TestConnection {
            pending: Arc::clone(&self.pending),
            sent: Arc::clone(&self.sent),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<B> TestConnection<B> {
    /// Exchanges are played back in order
    pub fn new(exchanges: Vec<Exchange<B>>) -> Self {
        TestConnection {
            pending: Arc::new(Mutex::new(exchanges.into())),
            sent: Default::default(),
        }
    }

    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        lock(&self.sent)
    }

    /// Checks every sent request, then that no canned response was left over
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        self.requests()
            .iter()
            .for_each(|request| request.assert_matches(ignore_headers));
        let unused = lock(&self.pending).len();
        assert_eq!(unused, 0, "{} canned responses were never used", unused);
    }
}

impl<B: Into<SdkBody>> tower::Service<http::Request<SdkBody>> for TestConnection<B> {
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, actual: http::Request<SdkBody>) -> Self::Future {
        let next = lock(&self.pending).pop_front();
        let result: Result<Self::Response, BoxError> = match next {
            Some((expected, response)) => {
                lock(&self.sent).push(ValidateRequest { expected, actual });
                Ok(response.map(Into::into))
            }
            None => Err(format!("no canned response for {} {}", actual.method(), actual.uri()).into()),
        };
        std::future::ready(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_connection::{TestConnection, ValidateRequest};
    use http::header::HeaderName;
    use smithy_http::body::SdkBody;
    use tower::{BoxError, Service};

    #[test]
    fn usable_as_a_client_connector() {
        fn check() -> impl tower::Service<
            http::Request<SdkBody>,
            Response = http::Response<SdkBody>,
            Error = BoxError,
            Future = impl Send,
        > + Clone {
            TestConnection::<String>::new(vec![])
        }
        let _ = check();
    }

    #[tokio::test]
    async fn responses_are_played_back_in_order() {
        let mut conn = TestConnection::new(vec![
            (http::Request::new(SdkBody::empty()), http::Response::new("first")),
            (http::Request::new(SdkBody::empty()), http::Response::new("second")),
        ]);
        for expected in &["first", "second"] {
            let response = conn
                .call(http::Request::new(SdkBody::empty()))
                .await
                .expect("canned response");
            assert_eq!(response.body().bytes(), Some(expected.as_bytes()));
        }
        assert!(conn.call(http::Request::new(SdkBody::empty())).await.is_err());
        assert_eq!(conn.requests().len(), 2);
    }

    fn validate(expected: &'static str, actual: &'static str) -> ValidateRequest {
        let request = |date: &str, body: &'static str| {
            http::Request::builder()
                .header("content-type", "application/json")
                .header("x-amz-date", date)
                .uri("https://iotevents.us-east-1.amazonaws.com/inputs")
                .body(SdkBody::from(body))
                .unwrap()
        };
        ValidateRequest {
            expected: request("20210215T184017Z", expected),
            actual: request("20240101T000000Z", actual),
        }
    }

    #[test]
    fn json_bodies_ignore_field_order() {
        validate(r#"{"a": 1, "b": [true]}"#, r#"{"b":[true],"a":1}"#)
            .assert_matches(&[HeaderName::from_static("x-amz-date")]);
    }

    #[test]
    #[should_panic(expected = "JSON body mismatch")]
    fn json_bodies_compare_values() {
        validate(r#"{"a": 1}"#, r#"{"a": 2}"#)
            .assert_matches(&[HeaderName::from_static("x-amz-date")]);
    }

    #[test]
    #[should_panic(expected = "Header mismatch")]
    fn headers_are_compared_unless_ignored() {
        validate("{}", "{}").assert_matches(&[]);
    }
}
