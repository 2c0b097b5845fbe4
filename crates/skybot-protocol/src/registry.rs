//! Closed, per-family tables of variant readers.
//!
//! A *family* is a closed set of variants sharing one tag namespace (entity
//! aspects, player commands, rejection reasons, ...). Each family owns one
//! [`VariantRegistry`] that maps a tag string to the function reading that
//! variant's payload. The table is built once from the family's declaration
//! and never changes afterwards, so lookups need no locking.
//!
//! Tags are scoped to their family: `ModeChange` is an aspect and also a
//! command, and the two never collide because each family resolves against
//! its own table.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::{CodecError, Fields};

/// Reads one variant's payload fields and wraps them in the family enum.
pub type VariantDecoder<F> = fn(&Fields) -> Result<F, CodecError>;

/// The tag → reader table for one variant family.
pub struct VariantRegistry<F> {
    family: &'static str,
    /// Tags in declaration order.
    tags: Vec<&'static str>,
    decoders: HashMap<&'static str, VariantDecoder<F>>,
}

impl<F> VariantRegistry<F> {
    /// Builds a registry from a family's full variant list.
    ///
    /// # Panics
    /// If the same tag is listed twice. Families are declared in code, so a
    /// duplicate is a programming error caught the first time the family is
    /// used.
    pub fn new(family: &'static str, entries: &[(&'static str, VariantDecoder<F>)]) -> Self {
        let mut tags = Vec::with_capacity(entries.len());
        let mut decoders = HashMap::with_capacity(entries.len());

        for &(tag, decoder) in entries {
            let previous = decoders.insert(tag, decoder);
            assert!(
                previous.is_none(),
                "duplicate tag `{tag}` in variant family `{family}`"
            );
            tags.push(tag);
        }

        Self {
            family,
            tags,
            decoders,
        }
    }

    /// Looks up the reader registered for `tag`.
    pub fn resolve(&self, tag: &str) -> Option<VariantDecoder<F>> {
        self.decoders.get(tag).copied()
    }

    /// Returns `true` if `tag` is registered in this family.
    pub fn contains(&self, tag: &str) -> bool {
        self.decoders.contains_key(tag)
    }

    /// The family's name, as used in error messages.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// All registered tags, in declaration order.
    pub fn tags(&self) -> &[&'static str] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<F> fmt::Debug for VariantRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantRegistry")
            .field("family", &self.family)
            .field("tags", &self.tags)
            .finish()
    }
}

/// A Rust enum whose variants form a closed, tagged wire family.
///
/// Implemented by [`wire_family!`](crate::wire_family); the
/// macro generates the enum, its registry, and its [`tag`](Self::tag)
/// accessor from a single variant list, so the three can't drift apart.
///
/// `Serialize` must produce the externally tagged shape
/// `{ "Tag": { ...fields } }`, which is serde's default for enums with
/// newtype variants wrapping braced structs.
pub trait VariantFamily: Sized + Serialize + 'static {
    /// Name of the family, e.g. `"aspect"`.
    const FAMILY: &'static str;

    /// The family's registry, built on first access.
    fn registry() -> &'static VariantRegistry<Self>;

    /// The wire tag of this value's variant.
    fn tag(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Shape {
        Dot,
        Line,
    }

    fn dot(_: &Fields) -> Result<Shape, CodecError> {
        Ok(Shape::Dot)
    }

    fn line(_: &Fields) -> Result<Shape, CodecError> {
        Ok(Shape::Line)
    }

    #[test]
    fn test_resolve_known_tag() {
        let registry = VariantRegistry::new("shape", &[("Dot", dot), ("Line", line)]);
        let decoder = registry.resolve("Line").expect("Line is registered");
        assert_eq!(decoder(&Fields::new()).unwrap(), Shape::Line);
    }

    #[test]
    fn test_resolve_unknown_tag() {
        let registry = VariantRegistry::new("shape", &[("Dot", dot)]);
        assert!(registry.resolve("Circle").is_none());
        assert!(!registry.contains("Circle"));
    }

    #[test]
    fn test_tags_keep_declaration_order() {
        let registry = VariantRegistry::new("shape", &[("Line", line), ("Dot", dot)]);
        assert_eq!(registry.tags(), &["Line", "Dot"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.family(), "shape");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = VariantRegistry::new("shape", &[("Dot", dot)]);
        assert!(registry.resolve("dot").is_none());
    }

    #[test]
    #[should_panic(expected = "duplicate tag `Dot`")]
    fn test_duplicate_tag_panics() {
        let _ = VariantRegistry::new("shape", &[("Dot", dot), ("Dot", line)]);
    }
}
