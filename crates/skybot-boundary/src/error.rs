//! Error types for the boundary layer.

use skybot_protocol::CodecError;

use crate::Call;

/// Errors a boundary call can end with.
///
/// None of these are retried. A transport replies with [`status`] and
/// the error's message, and the match server decides what happens next.
///
/// [`status`]: BoundaryError::status
#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    /// The server speaks a different protocol version.
    /// Raised by `hello` before the rest of the document is read.
    #[error("protocol version mismatch: expected {expected}, got {got}")]
    VersionMismatch { expected: u32, got: u32 },

    /// `prepare` named a deck the bot doesn't offer for that map.
    #[error("deck `{deck}` is not supported on this map")]
    DeckNotSupported { deck: String },

    /// The request body is over the configured size limit.
    #[error("{call} document of {size} bytes exceeds the {limit} byte limit")]
    DocumentTooLarge {
        call: Call,
        size: usize,
        limit: usize,
    },

    /// The request body doesn't match the contract.
    #[error("invalid {call} document: {source}")]
    Decode {
        call: Call,
        #[source]
        source: CodecError,
    },

    /// The bot's answer couldn't be encoded.
    #[error("failed to encode {call} response: {source}")]
    Encode {
        call: Call,
        #[source]
        source: CodecError,
    },
}

impl BoundaryError {
    /// HTTP-style status code for the error.
    ///
    /// Contract violations (bad documents, version or deck mismatch) are
    /// `422`, oversized bodies `413`, and anything on the bot's own side
    /// `500`.
    pub fn status(&self) -> u16 {
        match self {
            Self::VersionMismatch { .. } | Self::DeckNotSupported { .. } | Self::Decode { .. } => {
                422
            }
            Self::DocumentTooLarge { .. } => 413,
            Self::Encode { .. } => 500,
        }
    }

    /// The codec error underneath, for decode and encode failures.
    pub fn codec_error(&self) -> Option<&CodecError> {
        match self {
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
            _ => None,
        }
    }
}
