//! Identifier newtypes.
//!
//! All of these are plain integers on the wire. The codec treats them as
//! opaque: it never checks that a card, map, or ability line actually
//! exists, it only keeps the different kinds of ids from being mixed up
//! in Rust code.

use skybot_protocol::wire_id;

use crate::Upgrade;

wire_id! {
    /// ID of an entity present in the match, unique within that match.
    ///
    /// The first entity has ID 1, the next 2, and so on. IDs are never reused.
    pub struct EntityId(u32) => "E";
}

wire_id! {
    /// ID of a card resource (template plus upgrade level).
    pub struct CardId(u32) => "C";
}

wire_id! {
    /// ID of a squad resource.
    pub struct SquadId(u32) => "SQ";
}

wire_id! {
    /// ID of a building resource.
    pub struct BuildingId(u32) => "B";
}

wire_id! {
    /// ID of a spell resource.
    pub struct SpellId(u32) => "SP";
}

wire_id! {
    /// ID of an ability resource.
    pub struct AbilityId(u32) => "A";
}

wire_id! {
    /// ID of a mode resource.
    pub struct ModeId(u32) => "M";
}

wire_id! {
    /// Identifier of an official map.
    pub struct MapId(u32) => "MAP";
}

wire_id! {
    /// Code of an ability line (damage over time, aura, portal, ...).
    pub struct AbilityLine(u32) => "L";
}

wire_id! {
    /// What an entity is currently doing (idle, walking, casting, ...).
    pub struct Job(u8) => "J";
}

impl CardId {
    /// Composes a card id from its template id and upgrade level.
    ///
    /// Returns `None` if `template` reaches into the upgrade digits, since
    /// such an id couldn't be split back apart.
    ///
    /// ```rust
    /// use skybot_schema::{CardId, Upgrade};
    ///
    /// assert_eq!(CardId::with_upgrade(1_234, Upgrade::U2), Some(CardId(2_001_234)));
    /// assert_eq!(CardId::with_upgrade(1_000_000, Upgrade::U0), None);
    /// ```
    pub fn with_upgrade(template: u32, upgrade: Upgrade) -> Option<Self> {
        if template >= Upgrade::U1.value() {
            return None;
        }
        template.checked_add(upgrade.value()).map(Self)
    }

    /// The upgrade level encoded in this id.
    pub fn upgrade(self) -> Upgrade {
        Upgrade::ALL
            .iter()
            .rev()
            .copied()
            .find(|u| self.0 >= u.value())
            .unwrap_or(Upgrade::U0)
    }

    /// The card template, with the upgrade level stripped.
    pub fn template(self) -> u32 {
        self.0 - self.upgrade().value()
    }
}

impl Job {
    pub const NO_JOB: Self = Self(0);
    pub const IDLE: Self = Self(1);
    /// Also used for worm movement.
    pub const GO_TO: Self = Self(2);
    pub const CAST: Self = Self(4);
    pub const DIE: Self = Self(6);
    pub const CONSTRUCT: Self = Self(35);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId(42).to_string(), "E-42");
    }

    #[test]
    fn test_card_id_splits_into_template_and_upgrade() {
        let card = CardId::with_upgrade(512, Upgrade::U3).unwrap();
        assert_eq!(card.0, 3_000_512);
        assert_eq!(card.upgrade(), Upgrade::U3);
        assert_eq!(card.template(), 512);
    }

    #[test]
    fn test_card_id_rejects_oversized_template() {
        assert_eq!(CardId::with_upgrade(u32::MAX, Upgrade::U3), None);
        assert_eq!(CardId::with_upgrade(1_000_000, Upgrade::U1), None);
        assert_eq!(
            CardId::with_upgrade(999_999, Upgrade::U3),
            Some(CardId(3_999_999))
        );
    }

    #[test]
    fn test_card_id_without_upgrade() {
        let card = CardId(77);
        assert_eq!(card.upgrade(), Upgrade::U0);
        assert_eq!(card.template(), 77);
    }

    #[test]
    fn test_ids_serialize_as_plain_numbers() {
        assert_eq!(serde_json::to_string(&EntityId(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Job::IDLE).unwrap(), "1");
    }
}
