/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::{HeaderMap, HeaderValue};
use smithy_http::result::SdkError;
use smithy_types::Error as GenericError;

/// Implementers return the AWS request ID of the exchange that produced them
pub trait RequestId {
    fn request_id(&self) -> Option<&str>;
}

impl RequestId for GenericError {
    fn request_id(&self) -> Option<&str> {
        GenericError::request_id(self)
    }
}

impl<B> RequestId for http::Response<B> {
    fn request_id(&self) -> Option<&str> {
        extract_request_id(self.headers())
    }
}

impl<E> RequestId for SdkError<E> {
    fn request_id(&self) -> Option<&str> {
        self.raw_response()
            .and_then(|raw| extract_request_id(raw.headers()))
    }
}

/// Extracts a request ID from HTTP response headers
pub fn extract_request_id(headers: &HeaderMap<HeaderValue>) -> Option<&str> {
    headers
        .get("x-amzn-requestid")
        .or_else(|| headers.get("x-amz-request-id"))
        .and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod test {
    use crate::request_id::RequestId;
    use smithy_http::body::SdkBody;
    use smithy_http::result::SdkError;

    #[test]
    fn request_id_from_either_header() {
        let amzn = http::Response::builder()
            .header("x-amzn-requestid", "some-request-id")
            .body(())
            .unwrap();
        assert_eq!(amzn.request_id(), Some("some-request-id"));
        let amz = http::Response::builder()
            .header("x-amz-request-id", "other-request-id")
            .body(())
            .unwrap();
        assert_eq!(amz.request_id(), Some("other-request-id"));
        assert_eq!(http::Response::new(()).request_id(), None);
    }

    #[test]
    fn sdk_errors_expose_the_request_id() {
        let raw = http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "abc")
            .body(SdkBody::empty())
            .unwrap();
        let err: SdkError<std::io::Error> = SdkError::ResponseError {
            raw,
            err: "malformed".into(),
        };
        assert_eq!(err.request_id(), Some("abc"));
        let err: SdkError<std::io::Error> = SdkError::DispatchFailure("timeout".into());
        assert_eq!(err.request_id(), None);
    }
}
