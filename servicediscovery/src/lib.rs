/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Cloud Map
//!
//! Cloud Map lets applications register their resources, such as service instances, under
//! friendly names and discover them through DNS queries or the `DiscoverInstances` API.
//! Requests use the AWS JSON 1.1 protocol.

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
