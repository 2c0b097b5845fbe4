//! Declarative macros that tabulate the wire schema.
//!
//! The contract has well over a hundred record shapes, almost all of them
//! flat. Writing each reader by hand would be long and easy to get subtly
//! wrong, so every shape is declared once through one of these macros and
//! the reading, writing, and registry code is generated from that single
//! declaration:
//!
//! - [`wire_record!`]: a fixed-shape struct read field by field.
//! - [`wire_family!`]: a closed tagged-variant family and its registry.
//! - [`wire_enum!`]: a closed set of integer constants.
//! - [`wire_id!`]: an opaque integer identifier newtype.
//!
//! Crates invoking these macros must depend on `serde` (with `derive`).

/// Declares a record struct and its field-by-field reader.
///
/// Generates the struct (deriving `Debug`, `Clone`, `PartialEq`, and
/// `serde::Serialize`) plus [`WireRecord`](crate::WireRecord) and
/// [`FromWire`](crate::FromWire) impls. Field names double as wire keys.
///
/// ```rust
/// use skybot_protocol::{wire_record, FromWire};
///
/// wire_record! {
///     /// A point on the ground.
///     pub struct Point {
///         pub x: f64,
///         pub y: f64,
///     }
/// }
///
/// let p = Point::from_wire(&serde_json::json!({ "x": 1.0, "y": 2.0 })).unwrap();
/// assert_eq!(p, Point { x: 1.0, y: 2.0 });
/// ```
#[macro_export]
macro_rules! wire_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::WireRecord for $name {
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

            #[allow(unused_variables)]
            fn from_fields(fields: &$crate::Fields) -> ::std::result::Result<Self, $crate::CodecError> {
                ::std::result::Result::Ok(Self {
                    $( $field: $crate::wire::field(fields, stringify!($field))?, )*
                })
            }
        }

        impl $crate::FromWire for $name {
            fn from_wire(value: &$crate::Value) -> ::std::result::Result<Self, $crate::CodecError> {
                $crate::wire::record(value)
            }
        }
    };
}

/// Declares a closed variant family: the enum, its registry, and its tags.
///
/// Each variant wraps a payload record declared with [`wire_record!`]; the
/// variant's name is its wire tag. Marker variants wrap an empty record
/// (`pub struct Surrender {}`), which encodes as `{ "Surrender": {} }`.
///
/// The registry is built once, on first use, behind a `LazyLock`, and is
/// read-only from then on.
#[macro_export]
macro_rules! wire_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $family:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($payload:ty)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($payload),
            )*
        }

        impl $crate::VariantFamily for $name {
            const FAMILY: &'static str = $family;

            fn registry() -> &'static $crate::VariantRegistry<Self> {
                static REGISTRY: ::std::sync::LazyLock<$crate::VariantRegistry<$name>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::VariantRegistry::new(
                            $family,
                            &[
                                $(
                                    (
                                        stringify!($variant),
                                        (|fields: &$crate::Fields| {
                                            <$payload as $crate::WireRecord>::from_fields(fields)
                                                .map($name::$variant)
                                        }) as $crate::VariantDecoder<$name>,
                                    ),
                                )*
                            ],
                        )
                    });
                &REGISTRY
            }

            fn tag(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => stringify!($variant), )*
                }
            }
        }

        impl $crate::FromWire for $name {
            fn from_wire(value: &$crate::Value) -> ::std::result::Result<Self, $crate::CodecError> {
                $crate::decode_variant(value)
            }
        }

        $(
            impl ::std::convert::From<$payload> for $name {
                fn from(payload: $payload) -> Self {
                    $name::$variant(payload)
                }
            }
        )*
    };
}

/// Declares a closed set of integer constants.
///
/// On the wire the value is the bare integer. Reading an integer that isn't
/// one of the listed values is a field mismatch.
///
/// ```rust
/// use skybot_protocol::{wire_enum, FromWire};
///
/// wire_enum! {
///     pub enum Ping: u8 {
///         Attention = 0,
///         Attack = 1,
///     }
/// }
///
/// assert_eq!(Ping::from_wire(&serde_json::json!(1)).unwrap(), Ping::Attack);
/// assert!(Ping::from_wire(&serde_json::json!(9)).is_err());
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// The integer sent on the wire.
            pub fn value(self) -> $repr {
                match self {
                    $( Self::$variant => $value, )*
                }
            }

            /// Looks up the constant for a wire integer.
            pub fn from_value(value: $repr) -> ::std::option::Option<Self> {
                Self::ALL.iter().copied().find(|v| v.value() == value)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                ::serde::Serialize::serialize(&self.value(), serializer)
            }
        }

        impl $crate::FromWire for $name {
            fn from_wire(value: &$crate::Value) -> ::std::result::Result<Self, $crate::CodecError> {
                let raw = <$repr as $crate::FromWire>::from_wire(value)?;
                Self::from_value(raw).ok_or_else(|| {
                    $crate::CodecError::mismatch(format!(
                        "{raw} is not a known {} value",
                        stringify!($name)
                    ))
                })
            }
        }
    };
}

/// Declares an opaque integer identifier.
///
/// The newtype is `#[serde(transparent)]`, so `EntityId(42)` is just `42`
/// on the wire. `Display` prints the value after a short prefix, which keeps
/// log lines like `squad E-17 attacking E-4` readable.
#[macro_export]
macro_rules! wire_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($repr:ty) => $prefix:literal;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize)]
        #[serde(transparent)]
        $vis struct $name(pub $repr);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }

        impl ::std::convert::From<$repr> for $name {
            fn from(raw: $repr) -> Self {
                Self(raw)
            }
        }

        impl $crate::FromWire for $name {
            fn from_wire(value: &$crate::Value) -> ::std::result::Result<Self, $crate::CodecError> {
                <$repr as $crate::FromWire>::from_wire(value).map(Self)
            }
        }
    };
}
