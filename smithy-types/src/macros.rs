/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Macros that generate model shapes and string enumerations for service crates.

/// Define a model shape: a struct whose members are all optional, getters, and a builder.
///
/// The builder lives in its own module and offers `member(value)` plus
/// `set_member(Option<value>)` for every member. `to_builder` gives the "copy with one member
/// changed" operation. `Display` lists only the members that are set, with strings quoted,
/// enums as their wire literal and nested shapes expanded.
///
/// Shapes derive `serde::Serialize`/`serde::Deserialize`, so the calling crate must depend on
/// `serde` with the `derive` feature. Unset members are omitted when serialized.
///
/// ```rust
/// smithy_types::shape! {
///     /// A key/value pair
///     #[serde(rename_all = "PascalCase")]
///     pub struct Tag in tag {
///         key, set_key: String;
///         value, set_value: String;
///     }
/// }
///
/// fn main() {
///     let tag = Tag::builder().key("team").value("platform").build();
///     assert_eq!(tag.key(), Some("team"));
///     assert_eq!(tag.to_string(), r#"{key: "team", value: "platform"}"#);
/// }
/// ```
#[macro_export]
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident in $builder_mod:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident, $setter:ident: $ty:ty;
            )*
        }
    ) => {
        #[derive(
            ::std::clone::Clone,
            ::std::cmp::PartialEq,
            ::std::default::Default,
            ::std::fmt::Debug,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        $(#[$meta])*
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub(crate) $field: ::std::option::Option<$ty>,
            )*
        }

        impl $name {
            #[doc = concat!("Creates a new builder-style object to manufacture [`", stringify!($name), "`]")]
            pub fn builder() -> $builder_mod::Builder {
                ::std::default::Default::default()
            }

            /// Returns a builder seeded with every member of this value
            pub fn to_builder(&self) -> $builder_mod::Builder {
                self.clone().into_builder()
            }

            pub fn into_builder(self) -> $builder_mod::Builder {
                $builder_mod::Builder {
                    $( $field: self.$field, )*
                }
            }

            $(
                pub fn $field(&self) -> ::std::option::Option<&<$ty as $crate::MemberRef>::Target> {
                    self.$field.as_ref().map($crate::MemberRef::member_ref)
                }
            )*
        }

        impl $crate::MemberRef for $name {
            type Target = $name;

            fn member_ref(&self) -> &$name {
                self
            }
        }

        impl ::std::fmt::Display for $name {
            #[allow(unused_mut, unused_assignments, unused_variables)]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str("{")?;
                let mut first = true;
                $(
                    if let ::std::option::Option::Some(value) = &self.$field {
                        if !first {
                            f.write_str(", ")?;
                        }
                        first = false;
                        write!(f, "{}: ", $crate::__member_name(stringify!($field)))?;
                        $crate::DisplayMember::fmt_member(value, f)?;
                    }
                )*
                f.write_str("}")
            }
        }

        impl $crate::DisplayMember for $name {
            fn fmt_member(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }

        #[doc = concat!("See [`", stringify!($name), "`]")]
        pub mod $builder_mod {
            #[allow(unused_imports)]
            use super::*;

            #[doc = concat!("A builder for [`", stringify!($name), "`](super::", stringify!($name), ")")]
            #[derive(
                ::std::clone::Clone,
                ::std::cmp::PartialEq,
                ::std::default::Default,
                ::std::fmt::Debug
            )]
            pub struct Builder {
                $( pub(crate) $field: ::std::option::Option<$ty>, )*
            }

            impl Builder {
                $(
                    pub fn $field(mut self, input: impl ::std::convert::Into<$ty>) -> Self {
                        self.$field = ::std::option::Option::Some(input.into());
                        self
                    }

                    pub fn $setter(mut self, input: ::std::option::Option<$ty>) -> Self {
                        self.$field = input;
                        self
                    }
                )*

                #[doc = concat!("Consumes the builder and constructs a [`", stringify!($name), "`](super::", stringify!($name), ")")]
                pub fn build(self) -> super::$name {
                    super::$name {
                        $( $field: self.$field, )*
                    }
                }
            }
        }
    };
}

/// Add `add_<member>_entry` / `clear_<member>_entries` helpers for map members of a builder.
///
/// Adding a key that is already present fails with [`InvalidArgument`](crate::InvalidArgument)
/// and leaves the builder untouched. Clearing resets the member to unset.
#[macro_export]
macro_rules! map_entries {
    (
        $builder:ty {
            $( $field:ident: $key:ty => $value:ty, $add:ident, $clear:ident; )+
        }
    ) => {
        impl $builder {
            $(
                pub fn $add(
                    mut self,
                    key: impl ::std::convert::Into<$key>,
                    value: impl ::std::convert::Into<$value>,
                ) -> ::std::result::Result<Self, $crate::InvalidArgument> {
                    let key = key.into();
                    let entries = self.$field.get_or_insert_with(::std::default::Default::default);
                    if entries.contains_key(&key) {
                        return ::std::result::Result::Err($crate::InvalidArgument::new(format!(
                            "Duplicated keys ({}) are provided.",
                            key
                        )));
                    }
                    entries.insert(key, value.into());
                    ::std::result::Result::Ok(self)
                }

                pub fn $clear(mut self) -> Self {
                    self.$field = ::std::option::Option::None;
                    self
                }
            )+
        }
    };
}

/// Define a string enumeration with an `Unknown` variant for values this client does not know.
///
/// `from_value` is strict and rejects missing, empty and unrecognized values, while the
/// `From<&str>` conversion is lenient so that new server-side values still deserialize.
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(
            ::std::clone::Clone,
            ::std::cmp::Eq,
            ::std::cmp::Ord,
            ::std::cmp::PartialEq,
            ::std::cmp::PartialOrd,
            ::std::fmt::Debug,
            ::std::hash::Hash
        )]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+
            /// A value this version of the client does not recognize
            Unknown(::std::string::String),
        }

        impl $name {
            /// Parse a wire literal, rejecting missing, empty or unknown values
            pub fn from_value<'a>(
                value: impl ::std::convert::Into<::std::option::Option<&'a str>>,
            ) -> ::std::result::Result<Self, $crate::InvalidArgument> {
                match value.into() {
                    ::std::option::Option::None => ::std::result::Result::Err(
                        $crate::InvalidArgument::new(concat!("Value for ", stringify!($name), " cannot be null")),
                    ),
                    ::std::option::Option::Some("") => ::std::result::Result::Err(
                        $crate::InvalidArgument::new(concat!("Value for ", stringify!($name), " cannot be empty")),
                    ),
                    $( ::std::option::Option::Some($value) => ::std::result::Result::Ok($name::$variant), )+
                    ::std::option::Option::Some(other) => ::std::result::Result::Err(
                        $crate::InvalidArgument::new(format!("Cannot create enum {} from value {}", stringify!($name), other)),
                    ),
                }
            }

            /// The exact literal sent on the wire
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $value, )+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            /// Every literal this client knows about
            pub fn values() -> &'static [&'static str] {
                &[$( $value, )+]
            }
        }

        impl<'a> ::std::convert::From<&'a str> for $name {
            fn from(value: &'a str) -> Self {
                match value {
                    $( $value => $name::$variant, )+
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                $name::from(value.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::InvalidArgument;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $name::from_value(s)
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::MemberRef for $name {
            type Target = $name;

            fn member_ref(&self) -> &$name {
                self
            }
        }

        impl $crate::DisplayMember for $name {
            fn fmt_member(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let value = <::std::string::String as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                ::std::result::Result::Ok($name::from(value))
            }
        }
    };
}
