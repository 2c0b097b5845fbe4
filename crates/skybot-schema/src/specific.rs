//! The entity-specific payload: what kind of thing an entity is.

use skybot_protocol::{wire_family, wire_record};

use crate::{BuildingId, CardId, EntityId, OrbColor, SquadId};

wire_record! { pub struct Projectile {} }

wire_record! {
    /// Spot where a power well can be built.
    pub struct PowerSlot {
        pub res_id: u32,
        pub state: u32,
        pub team: u8,
    }
}

wire_record! {
    /// Spot where a monument (orb) can be built.
    pub struct TokenSlot {
        pub color: OrbColor,
    }
}

wire_record! { pub struct AbilityWorldObject {} }

wire_record! {
    pub struct Squad {
        pub card_id: CardId,
        pub res_squad_id: SquadId,
        pub bound_power: f64,
        pub squad_size: u32,
        /// Entities of the figures in the squad.
        pub figures: Vec<EntityId>,
    }
}

wire_record! {
    /// A single unit of a squad.
    pub struct Figure {
        pub squad_id: EntityId,
        pub current_speed: f64,
        pub rotation_speed: f64,
        pub unit_size: u32,
        pub move_mode: u32,
    }
}

wire_record! {
    pub struct Building {
        pub building_id: BuildingId,
        pub card_id: CardId,
        pub power_cost: f64,
    }
}

wire_record! { pub struct BarrierSet {} }

wire_record! {
    pub struct BarrierModule {
        pub team: u8,
        pub set: EntityId,
        pub state: u32,
        pub slots: u32,
        pub free_slots: u32,
        pub walkable: bool,
    }
}

wire_family! {
    pub enum EntitySpecific in "entity specific" {
        Projectile(Projectile),
        PowerSlot(PowerSlot),
        TokenSlot(TokenSlot),
        AbilityWorldObject(AbilityWorldObject),
        Squad(Squad),
        Figure(Figure),
        Building(Building),
        BarrierSet(BarrierSet),
        BarrierModule(BarrierModule),
    }
}

impl EntitySpecific {
    pub fn as_squad(&self) -> Option<&Squad> {
        match self {
            Self::Squad(squad) => Some(squad),
            _ => None,
        }
    }

    pub fn as_building(&self) -> Option<&Building> {
        match self {
            Self::Building(building) => Some(building),
            _ => None,
        }
    }
}
