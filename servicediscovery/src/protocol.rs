/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS JSON 1.1 request serialization and response parsing

use crate::config::{Config, SERVICE_NAME};
use crate::error::{parse_error, Error};
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use smithy_http::body::SdkBody;
use smithy_http::operation::{self, BuildError, Metadata, Operation};

const TARGET_PREFIX: &str = "Route53AutoNaming_v20170314";
const CONTENT_TYPE_JSON_1_1: &str = "application/x-amz-json-1.1";

/// Build a `POST /` operation whose body is the JSON form of `input`
pub(crate) fn json_operation<T, H>(
    input: &T,
    operation_name: &'static str,
    handler: H,
    conf: &Config,
) -> Result<Operation<H>, BuildError>
where
    T: Serialize,
{
    let body =
        serde_json::to_vec(input).map_err(|err| BuildError::SerializationError(err.into()))?;
    let request = http::Request::builder()
        .method("POST")
        .uri("/")
        .header(CONTENT_TYPE, CONTENT_TYPE_JSON_1_1)
        .header("x-amz-target", format!("{}.{}", TARGET_PREFIX, operation_name))
        .header(CONTENT_LENGTH, body.len())
        .body(SdkBody::from(body))?;
    let mut request = operation::Request::new(request);
    conf.apply_to(&mut request.properties_mut());
    Ok(Operation::new(request, handler)
        .with_metadata(Metadata::new(operation_name, SERVICE_NAME)))
}

/// Parse a successful response into `O` or map an error response onto [`Error`]
///
/// A successful response with an empty body parses as `{}`.
pub(crate) fn parse_response<O>(response: &http::Response<Bytes>) -> Result<O, Error>
where
    O: DeserializeOwned,
{
    if !response.status().is_success() {
        return Err(parse_error(response));
    }
    let body: &[u8] = if response.body().iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        response.body()
    };
    serde_json::from_slice(body).map_err(Error::unhandled)
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::protocol::{json_operation, parse_response};
    use aws_types::region::Region;
    use bytes::Bytes;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
    #[serde(rename_all = "PascalCase")]
    struct Sample {
        #[serde(skip_serializing_if = "Option::is_none")]
        service_id: Option<String>,
    }

    #[test]
    fn requests_carry_the_target_header() {
        let conf = Config::builder().region(Region::new("us-east-1")).build();
        let op = json_operation(
            &Sample {
                service_id: Some("srv-1".into()),
            },
            "GetService",
            (),
            &conf,
        )
        .expect("valid operation");
        let request = op.request().http();
        assert_eq!(request.method(), "POST");
        assert_eq!(request.uri(), "/");
        assert_eq!(
            request.headers()["x-amz-target"],
            "Route53AutoNaming_v20170314.GetService"
        );
        assert_eq!(
            request.headers()["content-type"],
            "application/x-amz-json-1.1"
        );
        assert_eq!(request.body().bytes(), Some(&br#"{"ServiceId":"srv-1"}"#[..]));
        assert_eq!(op.metadata().map(|m| m.name()), Some("GetService"));
    }

    #[test]
    fn empty_success_bodies_parse_as_empty_objects() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::new())
            .unwrap();
        let parsed: Sample = parse_response(&response).expect("empty body is valid");
        assert_eq!(parsed, Sample::default());
    }

    #[test]
    fn malformed_success_bodies_are_unhandled() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(b"{not json"))
            .unwrap();
        let err = parse_response::<Sample>(&response).expect_err("body is malformed");
        assert!(matches!(err.kind(), crate::error::ErrorKind::Unhandled(_)));
    }
}
