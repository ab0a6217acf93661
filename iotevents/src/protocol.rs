/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! REST-JSON request serialization and response parsing

use crate::config::{Config, SERVICE_NAME};
use crate::error::{parse_error, Error};
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use smithy_http::body::SdkBody;
use smithy_http::label;
use smithy_http::operation::{self, BuildError, Metadata, Operation};

pub(crate) fn required<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, BuildError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(BuildError::MissingField {
            field,
            details: "cannot be empty or unset",
        }),
    }
}

/// Percent-encode a required path label
pub(crate) fn label(value: Option<&str>, field: &'static str) -> Result<String, BuildError> {
    required(value, field).map(|value| label::fmt_string(value, false))
}

/// Serialize `input` as a JSON object, leaving out the members bound to the path or query
pub(crate) fn body<T>(input: &T, bound: &[&str]) -> Result<Vec<u8>, BuildError>
where
    T: Serialize,
{
    let mut value =
        serde_json::to_value(input).map_err(|err| BuildError::SerializationError(err.into()))?;
    if let Some(members) = value.as_object_mut() {
        for member in bound {
            members.remove(*member);
        }
    }
    serde_json::to_vec(&value).map_err(|err| BuildError::SerializationError(err.into()))
}

pub(crate) fn rest_operation<H>(
    method: Method,
    uri: String,
    body: Option<Vec<u8>>,
    operation_name: &'static str,
    handler: H,
    conf: &Config,
) -> Result<Operation<H>, BuildError> {
    let mut builder = http::Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .header(CONTENT_LENGTH, body.len());
            SdkBody::from(body)
        }
        None => SdkBody::empty(),
    };
    let mut request = operation::Request::new(builder.body(body)?);
    conf.apply_to(&mut request.properties_mut());
    Ok(Operation::new(request, handler)
        .with_metadata(Metadata::new(operation_name, SERVICE_NAME)))
}

/// Parse a successful response into `O` or map an error response onto [`Error`]
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
    use crate::protocol::{body, label};
    use serde::Serialize;
    use smithy_http::operation::BuildError;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        input_name: Option<String>,
        input_description: Option<String>,
    }

    #[test]
    fn labels_are_encoded() {
        assert_eq!(label(Some("motor input"), "input_name").unwrap(), "motor%20input");
        assert_eq!(label(Some("a/b"), "input_name").unwrap(), "a%2Fb");
    }

    #[test]
    fn empty_labels_fail() {
        for value in &[None, Some("")] {
            match label(*value, "input_name") {
                Err(BuildError::MissingField { field, .. }) => assert_eq!(field, "input_name"),
                other => panic!("expected MissingField, got {:?}", other),
            }
        }
    }

    #[test]
    fn bound_members_are_not_in_the_body() {
        let sample = Sample {
            input_name: Some("motor".into()),
            input_description: Some("pressure".into()),
        };
        let bytes = body(&sample, &["inputName"]).unwrap();
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&bytes).unwrap(),
            serde_json::json!({"inputDescription": "pressure"})
        );
    }

    proptest::proptest! {
        #[test]
        fn labels_stay_in_one_segment(value in "\\PC{1,32}") {
            let encoded = label(Some(&value), "input_name").unwrap();
            proptest::prop_assert!(!encoded.contains('/'));
            proptest::prop_assert!(!encoded.contains('?'));
        }
    }
}
