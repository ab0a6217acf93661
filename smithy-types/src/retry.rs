/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Classifying failures by whether sending the request again could help
//!
//! Clients never retry on their own; these classifications let callers decide.

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// The connection failed, e.g. a timeout or a TLS handshake error
    TransientError,

    /// The service asked the caller to slow down
    ThrottlingError,

    /// The service failed in a way that a later attempt may not hit
    ServerError,

    /// The request itself was at fault
    ClientError,
}

/// Implemented by errors that know their own error code and retry class
pub trait ProvideErrorKind {
    /// `None` when the error carries no retry classification
    fn retryable_error_kind(&self) -> Option<ErrorKind>;

    fn code(&self) -> Option<&str>;
}
