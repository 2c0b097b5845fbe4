//! Unified error type for skybot.

use skybot_boundary::BoundaryError;
use skybot_protocol::CodecError;

/// Top-level error that wraps the errors of each sub-crate.
///
/// When using the `skybot` meta-crate you deal with this single error type
/// instead of importing errors from each sub-crate. The `#[from]`
/// attributes let `?` convert sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum SkybotError {
    /// A document didn't match the contract, or couldn't be encoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A boundary call was refused.
    #[error(transparent)]
    Boundary(#[from] BoundaryError),
}

impl SkybotError {
    /// HTTP-style status code, for transports replying to a match server.
    pub fn status(&self) -> u16 {
        match self {
            Self::Codec(CodecError::Encode(_)) => 500,
            Self::Codec(_) => 422,
            Self::Boundary(e) => e.status(),
        }
    }
}
