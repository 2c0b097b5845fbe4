//! Ability effects active on players and entities.

use skybot_protocol::{wire_family, wire_record};

use crate::{AbilityId, AbilityLine, EntityId};

wire_record! {
    pub struct DamageRadialArea {
        pub progress_current: f64,
        pub progress_delta: f64,
        pub damage_remaining: f64,
    }
}

wire_record! {
    pub struct DamageOverTime {
        pub tick_wait_duration: u32,
        pub ticks_left: u32,
        pub tick_damage: f64,
    }
}

wire_record! {
    pub struct LinkedFire {
        pub linked: bool,
        pub fighting: bool,
        pub fast_cast: u32,
        pub support_cap: u32,
        pub support_production: u32,
    }
}

wire_record! {
    /// Any effect the server doesn't describe in more detail.
    pub struct Other {}
}

wire_family! {
    /// Effect-specific data of an [`AbilityEffect`].
    pub enum AbilityEffectSpecific in "ability effect" {
        DamageRadialArea(DamageRadialArea),
        DamageOverTime(DamageOverTime),
        LinkedFire(LinkedFire),
        Other(Other),
    }
}

wire_record! {
    pub struct AbilityEffect {
        pub id: AbilityId,
        pub line: AbilityLine,
        /// Entity that caused the effect.
        pub source: EntityId,
        pub source_team: u8,
        /// Zero when not provided.
        pub start_tick: u64,
        /// Zero when not provided.
        pub end_tick: u64,
        pub specific: AbilityEffectSpecific,
    }
}

impl AbilityEffect {
    /// Whether the effect is still running at `tick`. An effect without an
    /// end tick runs until the server drops it from the entity.
    pub fn is_active_at(&self, tick: u64) -> bool {
        tick >= self.start_tick && (self.end_tick == 0 || tick < self.end_tick)
    }
}
