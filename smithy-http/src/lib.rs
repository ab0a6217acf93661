/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic HTTP plumbing for service clients
//!
//! An input becomes an [`operation::Operation`]: an `http::Request` plus a type-keyed
//! [`property_bag::PropertyBag`] of configuration. [`middleware`] stages rewrite it before
//! dispatch and [`response`] handlers parse what comes back.

pub mod body;
pub mod endpoint;
pub mod idempotency_token;
pub mod label;
pub mod middleware;
pub mod operation;
pub mod property_bag;
pub mod query;
pub mod response;
pub mod result;
