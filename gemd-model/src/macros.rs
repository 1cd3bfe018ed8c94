//! Declarative record definitions.
//!
//! Every built-in record is a plain struct whose fields implement
//! [`gemd_types::FieldValue`]. The macros below generate the struct, its type
//! tag, and the [`gemd_types::Serializable`] / [`gemd_types::FromFields`]
//! impls, so field names on the wire always match the Rust field names.

use gemd_types::Fields;
use tracing::debug;

/// Logs fields that a record's constructor did not consume.
pub(crate) fn note_unknown_fields(type_tag: &str, leftover: &Fields) {
    if !leftover.is_empty() {
        let names: Vec<&str> = leftover.keys().map(String::as_str).collect();
        debug!(type_tag, ignored = ?names, "Ignoring unknown fields");
    }
}

/// Reads one field in `from_fields`. With a default, a missing or null value
/// falls back to it instead of failing.
macro_rules! take_or_default {
    ($fields:ident, $tag:literal, $field:ident) => {
        ::gemd_types::take_field(&mut $fields, $tag, stringify!($field))?
    };
    ($fields:ident, $tag:literal, $field:ident, $default:expr) => {
        ::gemd_types::take_field::<Option<_>>(&mut $fields, $tag, stringify!($field))?
            .unwrap_or_else(|| ::std::convert::Into::into($default))
    };
}

/// Defines an entity: a record with `uids` and `tags` in addition to the
/// listed fields. A field written `pub name: Ty = expr` decodes to `expr`
/// when absent.
macro_rules! gemd_entity {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $tag:literal {
            $( $(#[$fmeta:meta])* pub $field:ident : $ty:ty $(= $default:expr)? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            /// Identifiers keyed by scope.
            pub uids: ::gemd_types::Uids,
            /// Free-form labels for searching and grouping.
            pub tags: Vec<String>,
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl $name {
            pub const TYPE_TAG: &'static str = $tag;
        }

        impl ::gemd_types::Serializable for $name {
            fn type_tag(&self) -> &str {
                $tag
            }

            fn fields(&self) -> ::gemd_types::Fields {
                use ::gemd_types::FieldValue as _;
                let mut fields = ::gemd_types::Fields::new();
                fields.insert("uids".to_string(), self.uids.to_value());
                fields.insert("tags".to_string(), self.tags.to_value());
                $( fields.insert(stringify!($field).to_string(), self.$field.to_value()); )*
                fields
            }

            fn uids(&self) -> Option<&::gemd_types::Uids> {
                Some(&self.uids)
            }

            fn uids_mut(&mut self) -> Option<&mut ::gemd_types::Uids> {
                Some(&mut self.uids)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }

        impl ::gemd_types::FromFields for $name {
            fn from_fields(mut fields: ::gemd_types::Fields) -> ::gemd_types::Result<Self> {
                let record = Self {
                    uids: ::gemd_types::take_field(&mut fields, $tag, "uids")?,
                    tags: ::gemd_types::take_field(&mut fields, $tag, "tags")?,
                    $( $field: take_or_default!(fields, $tag, $field $(, $default)?), )*
                };
                $crate::macros::note_unknown_fields($tag, &fields);
                Ok(record)
            }
        }

        impl From<$name> for ::gemd_types::Obj {
            fn from(record: $name) -> Self {
                ::gemd_types::Obj::new(record)
            }
        }
    };
}

/// Defines a record without identity: serialized in place, never linked.
macro_rules! gemd_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $tag:literal {
            $( $(#[$fmeta:meta])* pub $field:ident : $ty:ty $(= $default:expr)? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl $name {
            pub const TYPE_TAG: &'static str = $tag;
        }

        impl ::gemd_types::Serializable for $name {
            fn type_tag(&self) -> &str {
                $tag
            }

            #[allow(unused_mut)]
            fn fields(&self) -> ::gemd_types::Fields {
                #[allow(unused_imports)]
                use ::gemd_types::FieldValue as _;
                let mut fields = ::gemd_types::Fields::new();
                $( fields.insert(stringify!($field).to_string(), self.$field.to_value()); )*
                fields
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }

        impl ::gemd_types::FromFields for $name {
            #[allow(unused_mut)]
            fn from_fields(mut fields: ::gemd_types::Fields) -> ::gemd_types::Result<Self> {
                let record = Self {
                    $( $field: take_or_default!(fields, $tag, $field $(, $default)?), )*
                };
                $crate::macros::note_unknown_fields($tag, &fields);
                Ok(record)
            }
        }

        impl From<$name> for ::gemd_types::Obj {
            fn from(record: $name) -> Self {
                ::gemd_types::Obj::new(record)
            }
        }
    };
}
