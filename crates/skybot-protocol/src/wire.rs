//! Structural decoding of wire documents into typed values.
//!
//! Decoding is driven by the *shape of the Rust type*: a record reads its
//! declared fields one by one from a mapping, a `Vec<T>` reads every element
//! of a sequence as `T`, and a variant family hands its position to
//! [`decode_variant`](crate::decode_variant). Errors raised deep inside a
//! document gain a path segment at every level on the way out (see
//! [`DocPath`](crate::DocPath)).
//!
//! Encoding doesn't need a counterpart trait: every wire type derives
//! `serde::Serialize`, which already emits the exact shapes decoded here.

use serde_json::Value;

use crate::{CodecError, Fields};

/// A type that can be read from a node of a wire document.
pub trait FromWire: Sized {
    /// Reads `Self` from `value`, failing on any shape mismatch.
    fn from_wire(value: &Value) -> Result<Self, CodecError>;

    /// The value a record field of this type takes when its key is absent.
    ///
    /// `None` means the field is required. Only `Option<T>` overrides this.
    fn absent() -> Option<Self> {
        None
    }
}

/// A fixed-shape record read from a mapping, field by field.
///
/// Implemented by [`wire_record!`](crate::wire_record). Variant payloads
/// are records, which is how a family reader turns the inner mapping of
/// `{ "Tag": { ... } }` into a typed value.
pub trait WireRecord: Sized {
    /// Declared field names, in order.
    const FIELDS: &'static [&'static str];

    /// Reads the record from its field mapping. Unknown keys are ignored.
    fn from_fields(fields: &Fields) -> Result<Self, CodecError>;
}

/// Reads a record from a node that must be a mapping.
pub fn record<T: WireRecord>(value: &Value) -> Result<T, CodecError> {
    match value {
        Value::Object(fields) => T::from_fields(fields),
        other => Err(CodecError::expected("mapping", other)),
    }
}

/// Reads the field `name` of a record.
///
/// A missing key is only accepted when the field type has an
/// [`absent`](FromWire::absent) value.
pub fn field<T: FromWire>(fields: &Fields, name: &str) -> Result<T, CodecError> {
    match fields.get(name) {
        Some(value) => T::from_wire(value).map_err(|e| e.at_field(name)),
        None => T::absent().ok_or_else(|| {
            CodecError::mismatch("missing required field").at_field(name)
        }),
    }
}

/// Decodes a whole document into `T`.
pub fn from_document<T: FromWire>(value: &Value) -> Result<T, CodecError> {
    T::from_wire(value)
}

/// Encodes any serializable wire value into a document tree.
pub fn to_document<T: serde::Serialize>(value: &T) -> Result<Value, CodecError> {
    serde_json::to_value(value).map_err(CodecError::Encode)
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

impl FromWire for bool {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        value
            .as_bool()
            .ok_or_else(|| CodecError::expected("boolean", value))
    }
}

impl FromWire for f64 {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        // Integers are accepted: `50` is a perfectly good float on the wire.
        value
            .as_f64()
            .ok_or_else(|| CodecError::expected("number", value))
    }
}

impl FromWire for String {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| CodecError::expected("string", value))
    }
}

/// Integer readers reject fractions and out-of-range values instead of
/// truncating them.
macro_rules! unsigned_from_wire {
    ($($ty:ty),*) => {
        $(
            impl FromWire for $ty {
                fn from_wire(value: &Value) -> Result<Self, CodecError> {
                    let raw = value
                        .as_u64()
                        .ok_or_else(|| CodecError::expected("unsigned integer", value))?;
                    <$ty>::try_from(raw).map_err(|_| {
                        CodecError::mismatch(format!(
                            "{raw} is out of range for {}",
                            stringify!($ty)
                        ))
                    })
                }
            }
        )*
    };
}

unsigned_from_wire!(u8, u32, u64);

impl FromWire for i64 {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        value
            .as_i64()
            .ok_or_else(|| CodecError::expected("integer", value))
    }
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

impl<T: FromWire> FromWire for Vec<T> {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        let items = value
            .as_array()
            .ok_or_else(|| CodecError::expected("sequence", value))?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_wire(item).map_err(|e| e.at_index(index)))
            .collect()
    }
}

impl<T: FromWire> FromWire for Option<T> {
    fn from_wire(value: &Value) -> Result<Self, CodecError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_wire(other).map(Some),
        }
    }

    fn absent() -> Option<Self> {
        Some(None)
    }
}
