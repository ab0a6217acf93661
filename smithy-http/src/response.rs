/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Turning HTTP responses into operation outputs

use bytes::Bytes;
use http::Response;

/// Parses an operation's output, or its error, out of an HTTP response
///
/// Parsing happens in two steps. The client first offers the response with its body still
/// unread to `parse_unloaded`. When that returns `None` the client reads the whole body and
/// calls `parse_loaded`. Both steps are synchronous, so parsers can be tested without a runtime.
pub trait ParseHttpResponse<B> {
    /// Usually `Result<SomeOutput, SomeServiceError>`
    type Output;

    /// Parse without the body, or return `None` to have the body loaded first
    fn parse_unloaded(&self, response: &mut Response<B>) -> Option<Self::Output>;

    fn parse_loaded(&self, response: &Response<Bytes>) -> Self::Output;
}

/// A parser that always needs the complete body
///
/// JSON protocols never stream, so their handlers implement this and get
/// [`ParseHttpResponse`] for free.
pub trait ParseStrictResponse {
    type Output;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

impl<B, T: ParseStrictResponse> ParseHttpResponse<B> for T {
    type Output = T::Output;

    fn parse_unloaded(&self, _: &mut Response<B>) -> Option<Self::Output> {
        None
    }

    fn parse_loaded(&self, response: &Response<Bytes>) -> Self::Output {
        self.parse(response)
    }
}
