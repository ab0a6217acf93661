/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS-specific HTTP behavior shared by the JSON service clients

pub mod json_errors;
pub mod request_id;
pub mod user_agent;
