/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values into the query string as specified in
//! [httpQuery](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httpquery-trait)

use crate::label::BASE_SET;
use percent_encoding::utf8_percent_encode;
use std::fmt::Display;

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), BASE_SET).to_string()
}

/// Simple abstraction to enable appending params to a string as query params
///
/// ```rust
/// use smithy_http::query::Writer;
/// let mut s = String::from("/inputs");
/// let mut writer = Writer::new(&mut s);
/// writer.push_kv("maxResults", &25);
/// writer.push_kv("nextToken", "a b");
/// assert_eq!(s, "/inputs?maxResults=25&nextToken=a%20b");
/// ```
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        let prefix = if out.contains('?') { '&' } else { '?' };
        Writer { out, prefix }
    }

    /// Append `k=v`, encoding `v` as a query value. `k` must already be a valid query key.
    pub fn push_kv(&mut self, k: &str, v: impl Display) {
        self.out.push(self.prefix);
        self.out.push_str(k);
        self.out.push('=');
        self.out.push_str(&fmt_string(v.to_string()));
        self.prefix = '&';
    }
}

#[cfg(test)]
mod test {
    use crate::query::{fmt_string, Writer};

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("arn:aws:iotevents:us-east-1:123456789012:input/x").as_str(), "arn%3Aaws%3Aiotevents%3Aus-east-1%3A123456789012%3Ainput%2Fx");
        assert_eq!(fmt_string("a=b&c").as_str(), "a%3Db%26c");
    }

    #[test]
    fn repeated_keys_are_appended() {
        let mut out = String::from("/tags?resourceArn=r");
        let mut writer = Writer::new(&mut out);
        writer.push_kv("tagKeys", "env");
        writer.push_kv("tagKeys", "team");
        assert_eq!(out, "/tags?resourceArn=r&tagKeys=env&tagKeys=team");
    }
}
