//! Closed sets of integer constants used inside records.
//!
//! Unlike the opaque identifiers in [`ids`](crate::ids), these are small and
//! stable, and bots branch on them, so they're real Rust enums. A value
//! outside the listed set fails decoding.

use skybot_protocol::wire_enum;

wire_enum! {
    /// Upgrade level of a card, added to the template id to form a
    /// [`CardId`](crate::CardId).
    pub enum Upgrade: u32 {
        U0 = 0,
        U1 = 1_000_000,
        U2 = 2_000_000,
        U3 = 3_000_000,
    }
}

wire_enum! {
    /// Color of an orb.
    pub enum OrbColor: u8 {
        White = 0,
        Shadow = 1,
        Nature = 2,
        Frost = 3,
        Fire = 4,
        Starting = 5,
        All = 7,
    }
}

wire_enum! {
    /// The orb colors a player can create on a token slot.
    pub enum CreateOrbColor: u8 {
        Shadow = 1,
        Nature = 2,
        Frost = 3,
        Fire = 4,
    }
}

wire_enum! {
    /// How a group of squads moves to its destination.
    pub enum WalkMode: u8 {
        PartialForce = 1,
        Force = 2,
        /// Also called "attack move" or "Q move" by players.
        Normal = 4,
        Crusade = 5,
        Scout = 6,
        Patrol = 7,
    }
}

wire_enum! {
    /// Kind of map ping.
    pub enum Ping: u8 {
        Attention = 0,
        Attack = 1,
        Defend = 2,
        NeedHelp = 4,
        Meet = 5,
    }
}

impl From<CreateOrbColor> for OrbColor {
    fn from(color: CreateOrbColor) -> Self {
        match color {
            CreateOrbColor::Shadow => Self::Shadow,
            CreateOrbColor::Nature => Self::Nature,
            CreateOrbColor::Frost => Self::Frost,
            CreateOrbColor::Fire => Self::Fire,
        }
    }
}
