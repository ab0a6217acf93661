/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! What a client call returns
//!
//! Both outcomes keep the raw HTTP response when one arrived, so callers can read headers
//! such as `x-amzn-requestid` alongside the parsed value.

use crate::body::SdkBody;
use std::error::Error;
use std::fmt;

type BoxError = Box<dyn Error + Send + Sync>;

/// A parsed output together with the response it came from
#[derive(Debug)]
pub struct SdkSuccess<O> {
    pub raw: http::Response<SdkBody>,
    pub parsed: O,
}

/// Where a call failed, from request construction through to parsing
#[derive(Debug)]
pub enum SdkError<E> {
    /// Never sent: the input could not become a request
    ConstructionFailure(BoxError),

    /// No response arrived. The request may still have reached the service.
    DispatchFailure(BoxError),

    /// A response arrived but its body could not be read
    ResponseError {
        raw: http::Response<SdkBody>,
        err: BoxError,
    },

    /// The service answered with an error, or with a body the handler rejected
    ServiceError {
        raw: http::Response<SdkBody>,
        err: E,
    },
}

impl<E> SdkError<E> {
    pub fn service_error(&self) -> Option<&E> {
        if let SdkError::ServiceError { err, .. } = self {
            Some(err)
        } else {
            None
        }
    }

    /// Take the service error out, giving `self` back for every other failure
    pub fn into_service_error(self) -> Result<E, Self> {
        match self {
            SdkError::ServiceError { err, .. } => Ok(err),
            other => Err(other),
        }
    }

    pub fn raw_response(&self) -> Option<&http::Response<SdkBody>> {
        match self {
            SdkError::ResponseError { raw, .. } => Some(raw),
            SdkError::ServiceError { raw, .. } => Some(raw),
            SdkError::ConstructionFailure(_) | SdkError::DispatchFailure(_) => None,
        }
    }
}

impl<E: Error> fmt::Display for SdkError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "request could not be built: {}", err),
            SdkError::DispatchFailure(err) => write!(f, "request could not be sent: {}", err),
            SdkError::ResponseError { err, .. } => write!(f, "response could not be read: {}", err),
            SdkError::ServiceError { err, .. } => write!(f, "service returned an error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for SdkError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err) | SdkError::DispatchFailure(err) => Some(err.as_ref()),
            SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}
