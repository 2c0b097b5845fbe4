//! Records and variant families of the skybot wire contract.
//!
//! Everything here is declared through the `skybot-protocol` macros, so
//! each record reads and writes itself and each family carries its own
//! closed tag registry. The families, and where they appear:
//!
//! | Family | Position |
//! |--------|----------|
//! | [`Aspect`] | `Entity::aspects`, `PlayerEntity::aspects` |
//! | [`EntitySpecific`] | `Entity::specific` |
//! | [`AbilityEffectSpecific`] | `AbilityEffect::specific` |
//! | [`Command`] | `PlayerCommand::command`, `RejectedCommand::command`, `tick` responses |
//! | [`RejectionReason`] | `RejectedCommand::reason` |
//! | [`SingleTarget`] | spell commands |
//!
//! Payload structs live in their family's module (`aspect::Health`,
//! `command::GroupAttack`, ...) since several tags repeat across families.

pub mod aspect;
pub mod command;
pub mod effect;
mod entity;
mod enums;
mod geometry;
mod ids;
pub mod rejection;
mod setup;
pub mod specific;
mod state;

pub use aspect::Aspect;
pub use command::{Command, PlayerCommand, SingleTarget};
pub use effect::{AbilityEffect, AbilityEffectSpecific};
pub use entity::{Entity, MatchPlayer, Orbs, PlayerEntity};
pub use enums::{CreateOrbColor, OrbColor, Ping, Upgrade, WalkMode};
pub use geometry::{Position, Position2D};
pub use ids::{
    AbilityId, AbilityLine, BuildingId, CardId, EntityId, Job, MapId, ModeId, SpellId, SquadId,
};
pub use rejection::{RejectedCommand, RejectionReason};
pub use setup::{
    AiForMap, CommunityMapInfo, DECK_SIZE, Deck, Hello, MapInfo, PROTOCOL_VERSION, Prepare,
};
pub use specific::EntitySpecific;
pub use state::{GameStartState, GameState, TICKS_PER_SECOND};
