//! Commands a bot can issue, and the envelope the server echoes them in.

use skybot_protocol::{wire_family, wire_record};

use crate::enums;
use crate::{CreateOrbColor, EntityId, ModeId, Position2D, SpellId, WalkMode};

// ---------------------------------------------------------------------------
// Targets
// ---------------------------------------------------------------------------

wire_record! {
    pub struct SingleEntity {
        pub id: EntityId,
    }
}

wire_record! {
    /// A location on the ground.
    pub struct Location {
        pub xy: Position2D,
    }
}

wire_family! {
    /// Target of a single-target spell: an entity or a point on the ground.
    pub enum SingleTarget in "single target" {
        SingleEntity(SingleEntity),
        Location(Location),
    }
}

// ---------------------------------------------------------------------------
// Card plays
// ---------------------------------------------------------------------------

wire_record! {
    /// Plays a building card.
    pub struct BuildHouse {
        /// Index of the card in the deck. Zero when echoed back for another
        /// player's command.
        pub card_position: u8,
        pub xy: Position2D,
        pub angle: f64,
    }
}

wire_record! {
    /// Plays a single-target spell card.
    pub struct CastSpellGod {
        pub card_position: u8,
        pub target: SingleTarget,
    }
}

wire_record! {
    /// Plays a line-target spell card.
    pub struct CastSpellGodMulti {
        pub card_position: u8,
        pub xy1: Position2D,
        pub xy2: Position2D,
    }
}

wire_record! {
    /// Plays a squad card on the ground.
    pub struct ProduceSquad {
        pub card_position: u8,
        pub xy: Position2D,
    }
}

wire_record! {
    /// Plays a squad card that walks onto a barrier once spawned.
    pub struct ProduceSquadOnBarrier {
        pub card_position: u8,
        /// Where the squad spawns.
        pub xy: Position2D,
        pub barrier_to_mount: EntityId,
    }
}

wire_record! {
    /// Activates a spell or ability of an entity.
    pub struct CastSpellEntity {
        pub entity: EntityId,
        pub spell: SpellId,
        pub target: SingleTarget,
    }
}

// ---------------------------------------------------------------------------
// Barriers and buildings
// ---------------------------------------------------------------------------

wire_record! {
    pub struct BarrierGateToggle {
        pub barrier_id: EntityId,
    }
}

wire_record! {
    /// Same as [`BarrierRepair`] unless inverted.
    pub struct BarrierBuild {
        pub barrier_id: EntityId,
        pub inverted_direction: bool,
    }
}

wire_record! {
    pub struct BarrierRepair {
        pub barrier_id: EntityId,
    }
}

wire_record! {
    pub struct BarrierCancelRepair {
        pub barrier_id: EntityId,
    }
}

wire_record! {
    pub struct RepairBuilding {
        pub building_id: EntityId,
    }
}

wire_record! {
    pub struct CancelRepairBuilding {
        pub building_id: EntityId,
    }
}

// ---------------------------------------------------------------------------
// Squad groups
// ---------------------------------------------------------------------------

wire_record! {
    pub struct GroupAttack {
        pub squads: Vec<EntityId>,
        pub target_entity_id: EntityId,
        pub force_attack: bool,
    }
}

wire_record! {
    pub struct GroupEnterWall {
        pub squads: Vec<EntityId>,
        pub barrier_id: EntityId,
    }
}

wire_record! {
    pub struct GroupExitWall {
        pub squads: Vec<EntityId>,
        pub barrier_id: EntityId,
    }
}

wire_record! {
    pub struct GroupGoto {
        pub squads: Vec<EntityId>,
        pub positions: Vec<Position2D>,
        pub walk_mode: WalkMode,
        pub orientation: f64,
    }
}

wire_record! {
    pub struct GroupHoldPosition {
        pub squads: Vec<EntityId>,
    }
}

wire_record! {
    pub struct GroupStopJob {
        pub squads: Vec<EntityId>,
    }
}

// ---------------------------------------------------------------------------
// Everything else
// ---------------------------------------------------------------------------

wire_record! {
    pub struct ModeChange {
        pub entity_id: EntityId,
        pub new_mode_id: ModeId,
    }
}

wire_record! {
    pub struct PowerSlotBuild {
        pub slot_id: EntityId,
    }
}

wire_record! {
    pub struct TokenSlotBuild {
        pub slot_id: EntityId,
        pub color: CreateOrbColor,
    }
}

wire_record! {
    pub struct Ping {
        pub xy: Position2D,
        pub ping: enums::Ping,
    }
}

wire_record! { pub struct Surrender {} }

wire_record! {
    /// Sends a message to the match host. Useful for debugging a bot.
    pub struct WhisperToMaster {
        pub text: String,
    }
}

wire_family! {
    /// Every command a bot can issue.
    pub enum Command in "command" {
        BuildHouse(BuildHouse),
        CastSpellGod(CastSpellGod),
        CastSpellGodMulti(CastSpellGodMulti),
        ProduceSquad(ProduceSquad),
        ProduceSquadOnBarrier(ProduceSquadOnBarrier),
        CastSpellEntity(CastSpellEntity),
        BarrierGateToggle(BarrierGateToggle),
        BarrierBuild(BarrierBuild),
        BarrierRepair(BarrierRepair),
        BarrierCancelRepair(BarrierCancelRepair),
        RepairBuilding(RepairBuilding),
        CancelRepairBuilding(CancelRepairBuilding),
        GroupAttack(GroupAttack),
        GroupEnterWall(GroupEnterWall),
        GroupExitWall(GroupExitWall),
        GroupGoto(GroupGoto),
        GroupHoldPosition(GroupHoldPosition),
        GroupStopJob(GroupStopJob),
        ModeChange(ModeChange),
        PowerSlotBuild(PowerSlotBuild),
        TokenSlotBuild(TokenSlotBuild),
        Ping(Ping),
        Surrender(Surrender),
        WhisperToMaster(WhisperToMaster),
    }
}

wire_record! {
    /// A command some player issued, executed this tick.
    pub struct PlayerCommand {
        pub player: EntityId,
        pub command: Command,
    }
}

impl Command {
    /// Deck index of the card this command plays, for card-play commands.
    pub fn card_position(&self) -> Option<u8> {
        match self {
            Self::BuildHouse(c) => Some(c.card_position),
            Self::CastSpellGod(c) => Some(c.card_position),
            Self::CastSpellGodMulti(c) => Some(c.card_position),
            Self::ProduceSquad(c) => Some(c.card_position),
            Self::ProduceSquadOnBarrier(c) => Some(c.card_position),
            _ => None,
        }
    }
}
