/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors returned by Cloud Map
//!
//! Every operation fails with the same [`Error`]; match on [`Error::kind`] to handle a specific
//! server error.

use aws_http::json_errors::parse_generic_error;
use bytes::Bytes;
use smithy_types::retry::{ErrorKind as RetryKind, ProvideErrorKind};
use std::fmt;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

macro_rules! typed_errors {
    (
        $(
            $(#[$doc:meta])*
            $name:ident, $is:ident {
                $( $field:ident ),*
            }
        )+
    ) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
            #[serde(rename_all = "PascalCase")]
            pub struct $name {
                #[serde(default, rename = "Message", alias = "message")]
                pub(crate) message: Option<String>,
                $(
                    #[serde(default)]
                    pub(crate) $field: Option<String>,
                )*
            }

            impl $name {
                /// The error code the service sends for this error
                pub const CODE: &'static str = stringify!($name);

                pub fn message(&self) -> Option<&str> {
                    self.message.as_deref()
                }

                $(
                    pub fn $field(&self) -> Option<&str> {
                        self.$field.as_deref()
                    }
                )*
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(stringify!($name))?;
                    if let Some(message) = &self.message {
                        write!(f, ": {}", message)?;
                    }
                    Ok(())
                }
            }

            impl std::error::Error for $name {}
        )+

        #[non_exhaustive]
        #[derive(Debug)]
        pub enum ErrorKind {
            $( $name($name), )+
            /// An unexpected error, e.g. an error code this client does not model
            Unhandled(BoxError),
        }

        impl fmt::Display for ErrorKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( ErrorKind::$name(inner) => fmt::Display::fmt(inner, f), )+
                    ErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
                }
            }
        }

        impl Error {
            $(
                pub fn $is(&self) -> bool {
                    matches!(&self.kind, ErrorKind::$name(_))
                }
            )+
        }

        /// Match `code` against the error table in order
        fn typed_kind(code: &str, body: &[u8]) -> Option<Result<ErrorKind, serde_json::Error>> {
            match code {
                $( stringify!($name) => Some(parse_body::<$name>(body).map(ErrorKind::$name)), )+
                _ => None,
            }
        }
    };
}

typed_errors! {
    /// No custom health check is configured for the service
    CustomHealthNotFound, is_custom_health_not_found {}

    /// The operation is already in progress
    DuplicateRequest, is_duplicate_request { duplicate_operation_id }

    InstanceNotFound, is_instance_not_found {}

    /// One or more specified values aren't valid, e.g. a required value is missing
    InvalidInput, is_invalid_input {}

    NamespaceAlreadyExists, is_namespace_already_exists { creator_request_id, namespace_id }

    NamespaceNotFound, is_namespace_not_found {}

    OperationNotFound, is_operation_not_found {}

    /// The request was rejected because the account exceeded its request rate
    RequestLimitExceeded, is_request_limit_exceeded {}

    /// The resource can't be deleted because it contains other resources
    ResourceInUse, is_resource_in_use {}

    ResourceLimitExceeded, is_resource_limit_exceeded {}

    ResourceNotFoundException, is_resource_not_found_exception {}

    ServiceAlreadyExists, is_service_already_exists { creator_request_id, service_id }

    ServiceNotFound, is_service_not_found {}

    /// Tagging would exceed the number of tags allowed for the resource
    TooManyTagsException, is_too_many_tags_exception { resource_name }
}

/// The error type shared by every Cloud Map operation
#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub(crate) meta: smithy_types::Error,
}

impl Error {
    pub fn new(kind: ErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<BoxError>) -> Self {
        Self {
            kind: ErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ErrorKind::Unhandled(err.into()),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Code, message and request id as sent by the service
    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<RetryKind> {
        match &self.kind {
            ErrorKind::RequestLimitExceeded(_) => Some(RetryKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Unhandled(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

fn parse_body<T: serde::de::DeserializeOwned + Default>(
    body: &[u8],
) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
}

/// Map a non-2xx response onto the error table, falling back to a generic error
pub(crate) fn parse_error(response: &http::Response<Bytes>) -> Error {
    let generic = parse_generic_error(response);
    let code = match generic.code() {
        Some(code) => code,
        None => return Error::generic(generic),
    };
    match typed_kind(code, response.body()) {
        Some(Ok(kind)) => Error::new(kind, generic),
        Some(Err(err)) => Error::new(ErrorKind::Unhandled(err.into()), generic),
        None => Error::generic(generic),
    }
}
