/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic error metadata and local argument validation errors

use crate::retry::{ErrorKind, ProvideErrorKind};
use std::borrow::Cow;
use std::fmt;

/// What every error response carries, modeled or not
///
/// Service errors wrap one of these next to their typed kind. When the code matches no modeled
/// error it is the only information available.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

/// Fills in an [`Error`] field by field as the response is parsed
#[derive(Debug, Default)]
pub struct Builder {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

impl Builder {
    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.code = Some(code.into());
        self
    }

    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = Some(message.into());
        self
    }

    pub fn request_id(&mut self, request_id: impl Into<String>) -> &mut Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Leaves the builder empty
    pub fn build(&mut self) -> Error {
        Error {
            code: self.code.take(),
            message: self.message.take(),
            request_id: self.request_id.take(),
        }
    }
}

impl Error {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The sanitized error code, e.g. `NamespaceNotFound`
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Taken from `x-amzn-requestid`
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

/// `Code: message (request id: ...)`, leaving out whatever is missing
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().unwrap_or("unknown error"))?;
        if let Some(message) = self.message() {
            write!(f, ": {}", message)?;
        }
        if let Some(request_id) = self.request_id() {
            write!(f, " (request id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

/// A caller-supplied value was rejected before any request was built.
///
/// Raised when parsing an unknown enumeration literal or when a map entry is added twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument {
    message: Cow<'static, str>,
}

impl InvalidArgument {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        InvalidArgument {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid argument: {}", self.message)
    }
}

impl std::error::Error for InvalidArgument {}

#[cfg(test)]
mod test {
    use crate::error::{Error, InvalidArgument};

    #[test]
    fn display_skips_missing_fields() {
        let err = Error::builder()
            .code("InvalidInput")
            .message("Namespace name is required")
            .build();
        assert_eq!(err.to_string(), "InvalidInput: Namespace name is required");
        assert_eq!(err.request_id(), None);

        let err = Error::builder().request_id("a1b2").build();
        assert_eq!(err.to_string(), "unknown error (request id: a1b2)");
    }

    #[test]
    fn build_resets_the_builder() {
        let mut builder = Error::builder();
        builder.code("ThrottlingException");
        assert_eq!(builder.build().code(), Some("ThrottlingException"));
        assert_eq!(builder.build(), Error::default());
    }

    #[test]
    fn invalid_arguments_describe_themselves() {
        let err = InvalidArgument::new("duplicate attribute key `AWS_INSTANCE_IPV4`");
        assert_eq!(
            err.to_string(),
            "invalid argument: duplicate attribute key `AWS_INSTANCE_IPV4`"
        );
    }
}
