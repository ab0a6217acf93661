/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::{set_endpoint_resolver, Definition};
use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::Client;
use aws_types::region::{Region, SigningRegion};
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue, USER_AGENT};
use http::{Response, Uri};
use smithy_http::body::SdkBody;
use smithy_http::middleware::{shared_stage, MapRequest, RequestStages};
use smithy_http::operation;
use smithy_http::operation::{Metadata, Operation};
use smithy_http::response::ParseStrictResponse;
use smithy_http::result::SdkError;
use std::convert::Infallible;
use std::sync::Arc;

/// Returns the body as a string, as the output on success and as the error otherwise
#[derive(Clone)]
struct EchoBody;

impl ParseStrictResponse for EchoBody {
    type Output = Result<String, String>;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output {
        let body = String::from_utf8_lossy(response.body()).into_owned();
        match response.status().is_success() {
            true => Ok(body),
            false => Err(body),
        }
    }
}

/// Stand-in for a request signer: copies the signing region into a header
struct RegionHeaderStage;

impl MapRequest for RegionHeaderStage {
    type Error = Infallible;

    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
        request.augment(|mut req, props| {
            if let Some(region) = props.get::<SigningRegion>() {
                let value = HeaderValue::from_str(region.as_ref()).expect("valid region");
                req.headers_mut()
                    .insert(HeaderName::from_static("x-test-signing-region"), value);
            }
            Ok(req)
        })
    }
}

fn test_operation(region: Option<&'static str>) -> Operation<EchoBody> {
    let mut request = operation::Request::new(
        http::Request::post("/")
            .body(SdkBody::from("request body"))
            .unwrap(),
    );
    {
        let mut props = request.properties_mut();
        set_endpoint_resolver(&mut props, Arc::new(Definition::for_service("test-service")));
        if let Some(region) = region {
            props.insert(Region::new(region));
        }
        props.insert(AwsUserAgent::for_tests());
        props.insert(RequestStages::new(vec![shared_stage(RegionHeaderStage)]));
    }
    Operation::new(request, EchoBody).with_metadata(Metadata::new("TestOperation", "test-service"))
}

#[tokio::test]
async fn request_passes_every_stage() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let conn = TestConnection::new(vec![(
        http::Request::post(Uri::from_static(
            "https://test-service.test-region.amazonaws.com/",
        ))
        .header(
            USER_AGENT,
            "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0",
        )
        .header(
            "x-amz-user-agent",
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0",
        )
        .header("x-test-signing-region", "test-region")
        .body(SdkBody::from("request body"))
        .unwrap(),
        http::Response::new("response body"),
    )]);
    let output = Client::new(conn.clone())
        .call(test_operation(Some("test-region")))
        .await
        .expect("successful operation");
    assert_eq!(output, "response body");
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn service_errors_keep_the_raw_response() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::empty()),
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "abc-123")
            .body("bad request")
            .unwrap(),
    )]);
    let client = Client::new(conn);
    match client.call_raw(test_operation(Some("us-east-1"))).await {
        Err(SdkError::ServiceError { raw, err }) => {
            assert_eq!(err, "bad request");
            assert_eq!(raw.status(), 400);
            assert_eq!(raw.headers()["x-amzn-requestid"], "abc-123");
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_region_fails_construction() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::new(conn.clone());
    let err = client
        .call(test_operation(None))
        .await
        .expect_err("no region is configured");
    assert!(
        matches!(err, SdkError::ConstructionFailure(_)),
        "unexpected error: {:?}",
        err
    );
    assert_eq!(conn.requests().len(), 0);
}

#[tokio::test]
async fn connector_errors_are_dispatch_failures() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::new(conn);
    let err = client
        .call(test_operation(Some("us-west-2")))
        .await
        .expect_err("no responses are loaded");
    assert!(matches!(err, SdkError::DispatchFailure(_)), "{:?}", err);
}
