//! Adapter configuration.

use serde::{Deserialize, Serialize};
use skybot_schema::PROTOCOL_VERSION;
use tracing::warn;

/// Configuration for a [`BotAdapter`](crate::BotAdapter).
///
/// The defaults match what a match server expects; tests and replay tools
/// may lower the size limit or pin an older version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Protocol version `hello` must carry.
    pub protocol_version: u32,

    /// Largest request body accepted, checked before parsing.
    /// Late-game tick snapshots run to a few megabytes.
    pub max_document_bytes: usize,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            max_document_bytes: 16 * 1024 * 1024,
        }
    }
}

impl AdapterConfig {
    /// Smallest accepted `max_document_bytes`.
    pub const MIN_DOCUMENT_BYTES: usize = 1024;

    /// Clamp out-of-range values so the config is safe to use.
    ///
    /// Called automatically by [`BotAdapter::with_config`](crate::BotAdapter::with_config).
    /// Rules:
    /// - `max_document_bytes` raised to [`Self::MIN_DOCUMENT_BYTES`].
    /// - A `protocol_version` other than [`PROTOCOL_VERSION`] is kept, with
    ///   a warning: the records in this build describe version
    ///   [`PROTOCOL_VERSION`] only.
    pub fn validated(mut self) -> Self {
        if self.max_document_bytes < Self::MIN_DOCUMENT_BYTES {
            warn!(
                limit = self.max_document_bytes,
                min = Self::MIN_DOCUMENT_BYTES,
                "max_document_bytes below minimum, clamping"
            );
            self.max_document_bytes = Self::MIN_DOCUMENT_BYTES;
        }
        if self.protocol_version != PROTOCOL_VERSION {
            warn!(
                configured = self.protocol_version,
                supported = PROTOCOL_VERSION,
                "adapter configured for a protocol version these records don't describe"
            );
        }
        self
    }
}
