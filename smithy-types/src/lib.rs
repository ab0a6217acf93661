/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Value types shared by every service client: timestamps, generic error metadata, retry
//! classification and the macros that generate model shapes and string enumerations.

pub mod error;
pub mod instant;
mod macros;
pub mod retry;

pub use crate::error::{Error, InvalidArgument};
pub use crate::instant::Instant;

#[doc(hidden)]
pub use serde as __serde;

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Borrowed view of a shape member, used by generated getters.
///
/// Owned containers borrow as their natural slice type (`String` as `str`, `Vec<T>` as `[T]`);
/// every other member type borrows as itself.
pub trait MemberRef {
    type Target: ?Sized;

    fn member_ref(&self) -> &Self::Target;
}

impl MemberRef for String {
    type Target = str;

    fn member_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> MemberRef for Vec<T> {
    type Target = [T];

    fn member_ref(&self) -> &[T] {
        self.as_slice()
    }
}

macro_rules! member_ref_self {
    ($($ty:ty),*) => {
        $(
            impl MemberRef for $ty {
                type Target = $ty;

                fn member_ref(&self) -> &$ty {
                    self
                }
            }
        )*
    };
}

member_ref_self!(bool, i32, i64, f64, Instant);

impl<K, V> MemberRef for BTreeMap<K, V> {
    type Target = BTreeMap<K, V>;

    fn member_ref(&self) -> &Self::Target {
        self
    }
}

impl<K, V> MemberRef for HashMap<K, V> {
    type Target = HashMap<K, V>;

    fn member_ref(&self) -> &Self::Target {
        self
    }
}

/// How a member value appears in a shape's `Display` output.
///
/// Strings are quoted, enums print their wire literal and nested shapes, lists and maps print
/// their own members the same way.
pub trait DisplayMember {
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl DisplayMember for String {
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

macro_rules! display_member_plain {
    ($($ty:ty),*) => {
        $(
            impl DisplayMember for $ty {
                fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

display_member_plain!(bool, i32, i64, f64, Instant);

impl<T: DisplayMember> DisplayMember for Vec<T> {
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.fmt_member(f)?;
        }
        f.write_str("]")
    }
}

impl<K: DisplayMember, V: DisplayMember> DisplayMember for BTreeMap<K, V> {
    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            key.fmt_member(f)?;
            f.write_str(": ")?;
            value.fmt_member(f)?;
        }
        f.write_str("}")
    }
}

#[doc(hidden)]
pub fn __member_name(name: &str) -> &str {
    name.trim_start_matches("r#")
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::{DisplayMember, Instant};
    use std::collections::BTreeMap;
    use std::fmt;

    struct Shown<'a, T>(&'a T);

    impl<T: DisplayMember> fmt::Display for Shown<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fmt_member(f)
        }
    }

    #[test]
    fn members_display_as_values() {
        assert_eq!(Shown(&"say \"hi\"".to_string()).to_string(), r#""say \"hi\"""#);
        assert_eq!(Shown(&60i64).to_string(), "60");
        assert_eq!(Shown(&true).to_string(), "true");
        assert_eq!(
            Shown(&vec!["x".to_string(), "y".to_string()]).to_string(),
            r#"["x", "y"]"#
        );
        let mut map = BTreeMap::new();
        map.insert("i-1".to_string(), 3i32);
        map.insert("i-2".to_string(), 4i32);
        assert_eq!(Shown(&map).to_string(), r#"{"i-1": 3, "i-2": 4}"#);
        let epoch = Instant::from_epoch_seconds(0);
        assert_eq!(Shown(&epoch).to_string(), epoch.to_string());
    }

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }
}
