/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error metadata for the AWS JSON and REST-JSON protocols
//!
//! The error code is read, in order, from the `x-amzn-errortype` header, the body's `code` field
//! and the body's `__type` field. Codes may carry a namespace (`aws.protocoltests#FooError`) or a
//! URI suffix (`FooError:http://internal.amazon.com/...`); both are stripped.

use crate::request_id::extract_request_id;
use bytes::Bytes;
use http::header::ToStrError;
use serde_json::{Map, Value};
use smithy_types::Error as GenericError;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// Strip the namespace and URI suffix from an error discriminator
pub fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn error_type_from_header(response: &http::Response<Bytes>) -> Result<Option<&str>, ToStrError> {
    response
        .headers()
        .get(ERROR_TYPE_HEADER)
        .map(|v| v.to_str())
        .transpose()
}

fn string_field<'a>(body: &'a Map<String, Value>, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .find_map(|name| body.get(*name).and_then(Value::as_str))
}

/// Parse the code, message and request id out of an error response
///
/// Parsing never fails: a body that is empty or not a JSON object contributes no fields.
pub fn parse_generic_error(response: &http::Response<Bytes>) -> GenericError {
    let body = if response.body().is_empty() {
        Map::new()
    } else {
        match serde_json::from_slice::<Value>(response.body()) {
            Ok(Value::Object(map)) => map,
            Ok(_) => Map::new(),
            Err(err) => {
                tracing::debug!(err = %err, "error response body was not valid JSON");
                Map::new()
            }
        }
    };

    let header_code = error_type_from_header(response).ok().flatten();
    let code = header_code.or_else(|| string_field(&body, &["code", "__type"]));

    let mut err_builder = GenericError::builder();
    if let Some(code) = code {
        err_builder.code(sanitize_error_code(code));
    }
    if let Some(message) = string_field(&body, &["message", "Message", "errorMessage"]) {
        err_builder.message(message);
    }
    if let Some(request_id) = extract_request_id(response.headers()) {
        err_builder.request_id(request_id);
    }
    err_builder.build()
}

#[cfg(test)]
mod test {
    use crate::json_errors::{parse_generic_error, sanitize_error_code};
    use bytes::Bytes;
    use smithy_types::Error;

    fn response(body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .header("x-amzn-requestid", "1234")
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn generic_error() {
        let response = response(r#"{ "__type": "FooError", "message": "Go to foo" }"#);
        assert_eq!(
            parse_generic_error(&response),
            Error::builder()
                .code("FooError")
                .message("Go to foo")
                .request_id("1234")
                .build()
        )
    }

    #[test]
    fn error_type_header_takes_precedence() {
        let response = http::Response::builder()
            .header(
                "X-Amzn-Errortype",
                "ResourceNotFoundException:http://internal.amazon.com/coral/com.amazon.iotevents/",
            )
            .body(Bytes::from_static(
                br#"{"__type": "InvalidRequestException", "message": "no detector model"}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
        assert_eq!(err.message(), Some("no detector model"));
        assert_eq!(err.request_id(), None);
    }

    #[test]
    fn code_field_precedes_type_field() {
        let response = response(r#"{"code": "NamespaceNotFound", "__type": "Other"}"#);
        assert_eq!(
            parse_generic_error(&response).code(),
            Some("NamespaceNotFound")
        );
    }

    #[test]
    fn alternate_message_fields() {
        let capital = response(r#"{"__type": "InvalidInput", "Message": "bad"}"#);
        assert_eq!(parse_generic_error(&capital).message(), Some("bad"));
        let error_message = response(r#"{"__type": "InvalidInput", "errorMessage": "worse"}"#);
        assert_eq!(parse_generic_error(&error_message).message(), Some("worse"));
    }

    #[test]
    fn empty_or_invalid_bodies_yield_an_empty_error() {
        let empty = http::Response::new(Bytes::new());
        assert_eq!(parse_generic_error(&empty), Error::builder().build());
        let garbage = response("<html>");
        assert_eq!(
            parse_generic_error(&garbage),
            Error::builder().request_id("1234").build()
        );
    }

    #[test]
    fn sanitize_namespace_and_url() {
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(
            sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(sanitize_error_code("Throttling"), "Throttling");
    }
}
