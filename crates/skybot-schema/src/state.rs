//! Match snapshots delivered by `start` and `tick`.

use std::time::Duration;

use skybot_protocol::wire_record;

use crate::{Entity, EntityId, MatchPlayer, PlayerCommand, PlayerEntity, RejectedCommand};

/// Simulation steps per second. One tick is 100 ms.
pub const TICKS_PER_SECOND: u64 = 10;

wire_record! {
    /// Sent once, by `start`.
    pub struct GameStartState {
        /// The player this bot controls.
        pub your_player_id: EntityId,
        pub players: Vec<MatchPlayer>,
        /// Relevant entities on the map. Scenery such as rocks and trees
        /// isn't listed.
        pub entities: Vec<Entity>,
    }
}

wire_record! {
    /// Sent by `tick`, on every tick from the second one onward.
    pub struct GameState {
        /// Ticks since the start of the match.
        pub current_tick: u64,
        /// Commands executed this tick.
        pub commands: Vec<PlayerCommand>,
        pub rejected_commands: Vec<RejectedCommand>,
        pub players: Vec<PlayerEntity>,
        pub entities: Vec<Entity>,
    }
}

impl GameStartState {
    pub fn me(&self) -> Option<&MatchPlayer> {
        self.players
            .iter()
            .find(|p| p.entity.id == self.your_player_id)
    }
}

impl GameState {
    /// Match time at this tick. Saturates for absurd tick counts.
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.current_tick.saturating_mul(1_000 / TICKS_PER_SECOND))
    }

    pub fn player(&self, id: EntityId) -> Option<&PlayerEntity> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Entities owned by `player`.
    pub fn owned_by(&self, player: EntityId) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.is_owned_by(player))
    }

    /// Rejections of commands issued by `player`.
    pub fn rejections_for(&self, player: EntityId) -> impl Iterator<Item = &RejectedCommand> {
        self.rejected_commands
            .iter()
            .filter(move |r| r.player == player)
    }
}
