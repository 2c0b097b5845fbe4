//! Tagged-variant codec and the byte-level [`Codec`] trait.
//!
//! Two layers live here:
//!
//! - **Variant codec** ([`decode_variant`], [`encode_variant`]): maps
//!   between the wire shape `{ "Tag": { ...fields } }` and a typed
//!   [`VariantFamily`] value. This is the one piece of polymorphism in the
//!   whole contract; records call into it wherever a field is variant-typed.
//! - **Byte codec** ([`Codec`], [`JsonCodec`]): turns raw request bodies
//!   into document trees and typed values, and typed values back into bytes.
//!
//! Both are pure functions of their input. The only shared state is the
//! per-family registries, which are read-only after their first use.

use serde::Serialize;
use serde_json::Value;

use crate::error::kind_of;
use crate::wire::FromWire;
use crate::{CodecError, DocPath, VariantFamily};

// ---------------------------------------------------------------------------
// Variant codec
// ---------------------------------------------------------------------------

/// Decodes a tagged document into a value of family `F`.
///
/// The steps are strict, in this order:
///
/// 1. `doc` must be a mapping with exactly one entry, otherwise
///    [`CodecError::MalformedVariant`].
/// 2. The key must be registered in `F`, otherwise
///    [`CodecError::UnknownVariant`].
/// 3. The value must be a mapping of the variant's fields; a missing or
///    mis-shaped field is a [`CodecError::FieldMismatch`]. Extra keys are
///    ignored, so newer servers may add payload fields freely.
///
/// ```rust
/// # use skybot_protocol::{wire_family, wire_record, decode_variant};
/// wire_record! {
///     pub struct Health { pub current_hp: f64 }
/// }
/// wire_record! {
///     pub struct Combat {}
/// }
/// wire_family! {
///     pub enum Aspect in "aspect" {
///         Health(Health),
///         Combat(Combat),
///     }
/// }
///
/// let doc = serde_json::json!({ "Health": { "current_hp": 10.0 } });
/// let aspect: Aspect = decode_variant(&doc).unwrap();
/// assert_eq!(aspect, Aspect::Health(Health { current_hp: 10.0 }));
/// ```
pub fn decode_variant<F: VariantFamily>(doc: &Value) -> Result<F, CodecError> {
    let Value::Object(entries) = doc else {
        return Err(malformed::<F>(kind_of(doc).to_string()));
    };

    // Pulling two entries tells apart "exactly one" from "none" and "many"
    // without indexing.
    let mut iter = entries.iter();
    let (tag, fields) = match (iter.next(), iter.next()) {
        (Some(entry), None) => entry,
        (None, _) => return Err(malformed::<F>("empty mapping".to_string())),
        (Some(_), Some(_)) => {
            return Err(malformed::<F>(format!(
                "mapping with {} entries",
                entries.len()
            )));
        }
    };

    let Some(decoder) = F::registry().resolve(tag) else {
        tracing::debug!(family = F::FAMILY, %tag, "rejecting unregistered variant tag");
        return Err(CodecError::UnknownVariant {
            family: F::FAMILY,
            tag: tag.clone(),
            path: DocPath::root(),
        });
    };

    let Value::Object(fields) = fields else {
        return Err(CodecError::expected("mapping of variant fields", fields).at_field(tag));
    };

    decoder(fields).map_err(|e| e.at_field(tag))
}

/// Encodes a family value into its tagged document `{ "Tag": { ... } }`.
///
/// Fields appear in declaration order. Encoding can't produce an unknown
/// tag: family values only exist as variants of their closed enum.
pub fn encode_variant<F: VariantFamily>(value: &F) -> Result<Value, CodecError> {
    let doc = serde_json::to_value(value).map_err(CodecError::Encode)?;
    debug_assert!(
        doc.as_object()
            .is_some_and(|m| m.len() == 1 && m.contains_key(value.tag())),
        "{} family must serialize as a single-entry mapping",
        F::FAMILY
    );
    Ok(doc)
}

fn malformed<F: VariantFamily>(found: String) -> CodecError {
    tracing::debug!(family = F::FAMILY, %found, "malformed variant position");
    CodecError::MalformedVariant {
        family: F::FAMILY,
        found,
        path: DocPath::root(),
    }
}

// ---------------------------------------------------------------------------
// Byte codec
// ---------------------------------------------------------------------------

/// Converts request and response bodies to and from typed wire values.
///
/// ## Trait bounds explained
///
/// - `Send + Sync` → one codec can serve calls from any thread.
/// - `'static` → the codec owns everything it needs, so it can be stored
///   in long-lived adapters.
///
/// Decoding goes through [`FromWire`] rather than `serde::Deserialize` so
/// that variant positions fail with the codec's own error kinds instead of
/// a flattened serde message.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns [`CodecError::Encode`] if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    /// Parses bytes into a document tree.
    ///
    /// # Errors
    /// Returns [`CodecError::Syntax`] if the bytes aren't a document.
    fn parse(&self, data: &[u8]) -> Result<Value, CodecError>;

    /// Parses bytes and decodes the document into `T`.
    ///
    /// # Errors
    /// Any [`CodecError`]; decode errors carry the failing path.
    fn decode<T: FromWire>(&self, data: &[u8]) -> Result<T, CodecError> {
        let doc = self.parse(data)?;
        T::from_wire(&doc)
    }
}

/// A [`Codec`] that uses JSON (via `serde_json`), the format the match
/// server speaks.
///
/// ## Example
///
/// ```rust
/// use skybot_protocol::{Codec, JsonCodec};
///
/// let codec = JsonCodec;
/// let bytes = codec.encode(&vec![1u32, 2, 3]).unwrap();
/// let decoded: Vec<u32> = codec.decode(&bytes).unwrap();
/// assert_eq!(decoded, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(CodecError::Encode)
    }

    fn parse(&self, data: &[u8]) -> Result<Value, CodecError> {
        serde_json::from_slice(data).map_err(CodecError::Syntax)
    }
}
