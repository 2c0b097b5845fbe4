//! # Skybot
//!
//! Typed wire contract for real-time-strategy bots.
//!
//! A match server talks to a bot process with four calls per match, each
//! carrying one JSON document. Skybot decodes those documents into typed
//! records (entities, aspects, commands, rejections), hands them to a
//! [`Bot`](prelude::Bot), and encodes the commands it returns.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skybot::prelude::*;
//!
//! struct MyBot;
//!
//! impl Bot for MyBot {
//!     fn name(&self) -> &str { "my-bot" }
//!     fn decks_for_map(&self, _map: &MapInfo) -> Vec<Deck> { Vec::new() }
//!     fn match_start(&mut self, _state: GameStartState) {}
//!     fn tick(&mut self, _state: GameState) -> Vec<Command> { Vec::new() }
//! }
//!
//! let mut adapter = BotAdapter::new(MyBot);
//! // A transport feeds request bodies in and writes the replies back.
//! let reply = adapter.handle(Call::Hello, br#"{"version": 12, "map": {"map": 1}}"#);
//! assert!(reply.is_ok());
//! ```
//!
//! ## Crates
//!
//! - [`protocol`]: variant registry, codec, and schema macros.
//! - [`schema`]: every record and variant family of the contract.
//! - [`boundary`]: the `Bot` trait and the call adapter.

mod error;

pub use error::SkybotError;

pub use skybot_boundary as boundary;
pub use skybot_protocol as protocol;
pub use skybot_schema as schema;

/// Everything a bot author usually needs.
pub mod prelude {
    pub use crate::SkybotError;
    pub use skybot_boundary::{AdapterConfig, Bot, BotAdapter, BoundaryError, Call};
    pub use skybot_protocol::{Codec, CodecError, FromWire, JsonCodec, VariantFamily};
    pub use skybot_schema::{
        AbilityEffect, AiForMap, Aspect, CardId, Command, CreateOrbColor, DECK_SIZE, Deck, Entity,
        EntityId, EntitySpecific, GameStartState, GameState, MapId, MapInfo, MatchPlayer, OrbColor,
        PROTOCOL_VERSION, PlayerCommand, PlayerEntity, Position, Position2D, RejectedCommand,
        RejectionReason, SingleTarget, Upgrade, WalkMode,
    };
    pub use skybot_schema::{aspect, command, rejection, specific};
}
