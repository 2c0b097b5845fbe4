//! Entity aspects: optional capabilities an entity may carry.
//!
//! Most aspects are markers. Their presence in an entity's `aspects` list is
//! the whole message, and they encode as `{ "Combat": {} }`.

use skybot_protocol::{wire_family, wire_record};

use crate::ModeId;

wire_record! {
    /// Used mostly by power wells.
    pub struct PowerProduction {
        /// How much more power it will produce.
        pub current_power: f64,
        /// Same as `current_power`, before it is built for the first time.
        pub power_capacity: f64,
    }
}

wire_record! {
    pub struct Health {
        /// HP the entity can lose before dying.
        pub current_hp: f64,
        /// Current maximum, including buffs and debuffs.
        pub cap_current_max: f64,
    }
}

wire_record! {
    pub struct ModeChange {
        pub current_mode: ModeId,
        pub all_modes: Vec<ModeId>,
    }
}

wire_record! {
    pub struct BarrierGate {
        pub open: bool,
    }
}

wire_record! {
    /// Present while a building or barrier is under construction.
    pub struct ConstructionData {
        /// Build ticks until finished.
        pub refresh_count_remaining: u32,
        /// Build ticks needed from the start of construction.
        pub refresh_count_total: u32,
        /// Health added on each build tick.
        pub health_per_build_update_trigger: f64,
        pub remaining_health_to_add: f64,
    }
}

wire_record! { pub struct Combat {} }
wire_record! { pub struct Ammunition {} }
wire_record! { pub struct SuperWeaponShadow {} }
wire_record! { pub struct WormMovement {} }
wire_record! { pub struct NpcTag {} }
wire_record! { pub struct PlayerKit {} }
wire_record! { pub struct Loot {} }
wire_record! { pub struct Immunity {} }
wire_record! { pub struct Turret {} }
wire_record! { pub struct Tunnel {} }
wire_record! { pub struct MountBarrier {} }
wire_record! { pub struct SpellMemory {} }
wire_record! { pub struct Portal {} }
wire_record! { pub struct Hate {} }
wire_record! { pub struct Attackable {} }
wire_record! { pub struct SquadRefill {} }
wire_record! { pub struct PortalExit {} }
wire_record! { pub struct SuperWeaponShadowBomb {} }
wire_record! { pub struct RepairBarrierSet {} }
wire_record! { pub struct ConstructionRepair {} }
wire_record! { pub struct Follower {} }
wire_record! { pub struct CollisionBase {} }
wire_record! { pub struct EditorUniqueId {} }
wire_record! { pub struct Roam {} }

wire_family! {
    pub enum Aspect in "aspect" {
        PowerProduction(PowerProduction),
        Health(Health),
        Combat(Combat),
        ModeChange(ModeChange),
        Ammunition(Ammunition),
        SuperWeaponShadow(SuperWeaponShadow),
        WormMovement(WormMovement),
        NPCTag(NpcTag),
        PlayerKit(PlayerKit),
        Loot(Loot),
        Immunity(Immunity),
        Turret(Turret),
        Tunnel(Tunnel),
        MountBarrier(MountBarrier),
        SpellMemory(SpellMemory),
        Portal(Portal),
        Hate(Hate),
        BarrierGate(BarrierGate),
        Attackable(Attackable),
        SquadRefill(SquadRefill),
        PortalExit(PortalExit),
        ConstructionData(ConstructionData),
        SuperWeaponShadowBomb(SuperWeaponShadowBomb),
        RepairBarrierSet(RepairBarrierSet),
        ConstructionRepair(ConstructionRepair),
        Follower(Follower),
        CollisionBase(CollisionBase),
        EditorUniqueID(EditorUniqueId),
        Roam(Roam),
    }
}

/// Finds the first aspect of a list matching `pick`.
///
/// ```rust
/// use skybot_schema::aspect::{self, Aspect};
///
/// let aspects = vec![
///     Aspect::Combat(aspect::Combat {}),
///     Aspect::Health(aspect::Health { current_hp: 40.0, cap_current_max: 80.0 }),
/// ];
/// let health = aspect::find(&aspects, |a| match a {
///     Aspect::Health(h) => Some(h),
///     _ => None,
/// });
/// assert_eq!(health.map(|h| h.current_hp), Some(40.0));
/// ```
pub fn find<'a, T>(
    aspects: &'a [Aspect],
    pick: impl Fn(&'a Aspect) -> Option<&'a T>,
) -> Option<&'a T> {
    aspects.iter().find_map(pick)
}

pub(crate) fn health(aspects: &[Aspect]) -> Option<&Health> {
    find(aspects, |a| match a {
        Aspect::Health(h) => Some(h),
        _ => None,
    })
}

impl Health {
    /// Remaining health as a fraction of the current maximum.
    pub fn ratio(&self) -> f64 {
        if self.cap_current_max <= 0.0 {
            0.0
        } else {
            self.current_hp / self.cap_current_max
        }
    }
}
