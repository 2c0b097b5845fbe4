//! Error types for the protocol layer.
//!
//! Every decode failure is fatal for the document being decoded: the codec
//! never substitutes a default or skips an entry it cannot read. To make a
//! failure inside a large tick snapshot easy to find, each decode error
//! carries the [`DocPath`] of the position that failed, e.g.
//! `$.entities[3].aspects[0].Health.current_hp`.

use std::fmt;

/// Location of a value inside a wire document.
///
/// Paths are built from the inside out: the innermost reader reports an
/// error with an empty path, and every enclosing record or sequence
/// prepends its own segment while the error propagates upward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocPath(String);

impl DocPath {
    /// The document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Prepends a mapping key (`name.rest`).
    fn prepend_field(&mut self, name: &str) {
        self.0 = if self.0.is_empty() {
            name.to_string()
        } else if self.0.starts_with('[') {
            format!("{name}{}", self.0)
        } else {
            format!("{name}.{}", self.0)
        };
    }

    /// Prepends a sequence index (`[index].rest`).
    fn prepend_index(&mut self, index: usize) {
        self.0 = if self.0.is_empty() || self.0.starts_with('[') {
            format!("[{index}]{}", self.0)
        } else {
            format!("[{index}].{}", self.0)
        };
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() || self.0.starts_with('[') {
            write!(f, "${}", self.0)
        } else {
            write!(f, "$.{}", self.0)
        }
    }
}

/// Errors that can occur while decoding or encoding wire documents.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A variant position is not a mapping with exactly one entry.
    ///
    /// `found` describes what was there instead ("empty mapping",
    /// "mapping with 2 entries", "sequence", ...).
    #[error("malformed {family} variant at {path}: expected a single-entry mapping, found {found}")]
    MalformedVariant {
        family: &'static str,
        found: String,
        path: DocPath,
    },

    /// The tag is not registered in the family decoded at this position.
    ///
    /// There is no fallback variant: a newer protocol revision has to
    /// register the tag before a decoder accepts it.
    #[error("unknown {family} variant `{tag}` at {path}")]
    UnknownVariant {
        family: &'static str,
        tag: String,
        path: DocPath,
    },

    /// A required field is missing, or a value has the wrong shape.
    #[error("field mismatch at {path}: {reason}")]
    FieldMismatch { reason: String, path: DocPath },

    /// The bytes are not a JSON document at all.
    #[error("invalid document: {0}")]
    Syntax(#[source] serde_json::Error),

    /// Serialization failed (turning a Rust value into a document).
    #[error("encode failed: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CodecError {
    /// Builds a [`CodecError::FieldMismatch`] at the current (root) position.
    pub fn mismatch(reason: impl Into<String>) -> Self {
        Self::FieldMismatch {
            reason: reason.into(),
            path: DocPath::root(),
        }
    }

    /// Shorthand for "expected X, found Y" shape errors.
    pub fn expected(expected: &str, found: &serde_json::Value) -> Self {
        Self::mismatch(format!("expected {expected}, found {}", kind_of(found)))
    }

    /// Returns the document path of a decode error, if it has one.
    pub fn path(&self) -> Option<&DocPath> {
        match self {
            Self::MalformedVariant { path, .. }
            | Self::UnknownVariant { path, .. }
            | Self::FieldMismatch { path, .. } => Some(path),
            Self::Syntax(_) | Self::Encode(_) => None,
        }
    }

    /// Marks the error as having happened inside the field `name`.
    pub fn at_field(mut self, name: &str) -> Self {
        if let Some(path) = self.path_mut() {
            path.prepend_field(name);
        }
        self
    }

    /// Marks the error as having happened inside sequence element `index`.
    pub fn at_index(mut self, index: usize) -> Self {
        if let Some(path) = self.path_mut() {
            path.prepend_index(index);
        }
        self
    }

    fn path_mut(&mut self) -> Option<&mut DocPath> {
        match self {
            Self::MalformedVariant { path, .. }
            | Self::UnknownVariant { path, .. }
            | Self::FieldMismatch { path, .. } => Some(path),
            Self::Syntax(_) | Self::Encode(_) => None,
        }
    }
}

/// Human-readable name of a document node's shape, used in error messages.
pub fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
