//! Tagged-variant wire protocol for skybot.
//!
//! A bot and a match server exchange JSON documents whose polymorphic
//! positions all share one shape: a single-entry mapping
//! `{ "Tag": { ...fields } }`. This crate holds the machinery for that shape:
//!
//! - **Registry** ([`VariantRegistry`], [`VariantFamily`]): one closed
//!   tag table per family, built once and read-only afterwards.
//! - **Codec** ([`decode_variant`], [`encode_variant`], [`Codec`],
//!   [`JsonCodec`]): strict decoding of tagged positions and byte-level
//!   encode/decode of whole documents.
//! - **Wire decoding** ([`FromWire`], [`WireRecord`]): structural reading of
//!   records, sequences, and scalars, with path-annotated errors.
//! - **Macros** ([`wire_record!`], [`wire_family!`], [`wire_enum!`],
//!   [`wire_id!`]): declare schema shapes once, generate the rest.
//! - **Errors** ([`CodecError`]): what can go wrong, and where.
//!
//! # Architecture
//!
//! The protocol layer knows nothing about the game. The schema crate
//! declares the actual records on top of it, and the boundary crate moves
//! documents between bytes and the bot.
//!
//! ```text
//! Boundary (bytes) → Schema (records) → Protocol (variants, fields)
//! ```

mod codec;
mod error;
mod macros;
mod registry;
pub mod wire;

pub use codec::{Codec, JsonCodec, decode_variant, encode_variant};
pub use error::{CodecError, DocPath, kind_of};
pub use registry::{VariantDecoder, VariantFamily, VariantRegistry};
pub use wire::{FromWire, WireRecord};

/// A node of a wire document.
pub use serde_json::Value;

/// The field mapping of a record or variant payload.
pub type Fields = serde_json::Map<String, Value>;
