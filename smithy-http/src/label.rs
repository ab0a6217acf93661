/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Percent-encoding for values bound into the request path

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything but the RFC 3986 unreserved characters (`A-Z a-z 0-9 - . _ ~`)
pub(crate) const BASE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Greedy labels may span several segments, so `/` is left alone
const GREEDY: &AsciiSet = &BASE_SET.remove(b'/');

/// Encode `value` for a path label
///
/// A non-greedy label always stays inside one path segment.
pub fn fmt_string<T: AsRef<str>>(value: T, greedy: bool) -> String {
    let set = match greedy {
        true => GREEDY,
        false => BASE_SET,
    };
    utf8_percent_encode(value.as_ref(), set).to_string()
}
