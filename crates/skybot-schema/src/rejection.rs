//! Why the server refused a command.

use skybot_protocol::{wire_family, wire_record};

use crate::{Command, EntityId};

wire_record! {
    /// Reason given for rejected `BuildHouse`, `ProduceSquad`, and
    /// `ProduceSquadOnBarrier`. `numbers2` mostly holds the ids of the card
    /// conditions that failed.
    pub struct Other {
        pub numbers1: Vec<i64>,
        pub numbers2: Vec<i64>,
        pub numbers3: Vec<i64>,
    }
}

wire_record! {
    /// Not enough power to play the card or activate the ability.
    pub struct NotEnoughPower {
        pub player_power: f64,
        pub required: u32,
    }
}

wire_record! { pub struct SpellDoesNotExist {} }

wire_record! {
    /// The entity is not on the map.
    pub struct EntityDoesNotExist {}
}

wire_record! {
    /// The entity exists, but isn't of the right type.
    pub struct InvalidEntityType {
        pub entity_type: u32,
    }
}

wire_record! {
    /// Reason given for rejected `CastSpellEntity`.
    pub struct CanNotCast {
        pub failed_conditions: Vec<u32>,
    }
}

wire_record! { pub struct EntityNotOwned {} }
wire_record! { pub struct EntityOwnedBySomeoneElse {} }

wire_record! {
    /// The entity has no `ModeChange` aspect.
    pub struct NoModeChange {}
}

wire_record! { pub struct EntityAlreadyInThisMode {} }
wire_record! { pub struct ModeNotExist {} }

wire_record! {
    /// Card index outside `0..20`.
    pub struct InvalidCardIndex {}
}

wire_record! { pub struct InvalidCard {} }

wire_family! {
    pub enum RejectionReason in "rejection reason" {
        Other(Other),
        NotEnoughPower(NotEnoughPower),
        SpellDoesNotExist(SpellDoesNotExist),
        EntityDoesNotExist(EntityDoesNotExist),
        InvalidEntityType(InvalidEntityType),
        CanNotCast(CanNotCast),
        EntityNotOwned(EntityNotOwned),
        EntityOwnedBySomeoneElse(EntityOwnedBySomeoneElse),
        NoModeChange(NoModeChange),
        EntityAlreadyInThisMode(EntityAlreadyInThisMode),
        ModeNotExist(ModeNotExist),
        InvalidCardIndex(InvalidCardIndex),
        InvalidCard(InvalidCard),
    }
}

wire_record! {
    /// A command the server refused. The reason and the command are decoded
    /// independently; nothing checks that they belong together.
    pub struct RejectedCommand {
        pub player: EntityId,
        pub reason: RejectionReason,
        pub command: Command,
    }
}

#[cfg(test)]
mod tests {
    use skybot_protocol::VariantFamily;

    use super::*;

    #[test]
    fn test_rejection_family_is_complete() {
        assert_eq!(RejectionReason::registry().len(), 13);
    }

    #[test]
    fn test_other_reason_tag_is_scoped() {
        use crate::effect;

        // Both families register an `Other` tag.
        let reason = RejectionReason::Other(Other {
            numbers1: vec![],
            numbers2: vec![1, 2],
            numbers3: vec![],
        });
        let specific = effect::AbilityEffectSpecific::Other(effect::Other {});
        assert_eq!(reason.tag(), specific.tag());
    }
}
