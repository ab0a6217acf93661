/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS IoT Events
//!
//! Manage detector models, which describe device behavior as states and transitions, and the
//! inputs that feed them. Requests use the REST-JSON protocol.

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;
#[cfg(feature = "client")]
pub mod paginator;
mod protocol;

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "client")]
pub use client::Client;
pub use config::Config;
pub use error::{Error, ErrorKind};

pub use aws_types::region::Region;
pub use aws_types::Credentials;
pub use smithy_http::endpoint::Endpoint;
pub use smithy_http::result::SdkError;
