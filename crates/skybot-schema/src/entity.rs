//! Entities and the players that own them.

use skybot_protocol::wire_record;

use crate::aspect::{self, Aspect, Health};
use crate::{AbilityEffect, Deck, EntityId, EntitySpecific, Job, OrbColor, Position};

wire_record! {
    /// How many monuments of each color a player has.
    pub struct Orbs {
        pub shadow: u32,
        pub nature: u32,
        pub frost: u32,
        pub fire: u32,
        /// Usable as any color; becomes the color of the first orb on the
        /// card it pays for.
        pub starting: u32,
        /// Only usable for colorless orbs on a card.
        pub white: u32,
        /// Usable as any color. Only granted by map scripts.
        pub all: u32,
    }
}

wire_record! {
    /// A player. Technically an entity, but listed apart from the map's
    /// entities with a few player-only fields.
    pub struct PlayerEntity {
        pub id: EntityId,
        pub effects: Vec<AbilityEffect>,
        pub aspects: Vec<Aspect>,
        pub team: u8,
        pub power: f64,
        pub void_power: f64,
        pub population_count: u32,
        pub name: String,
        pub orbs: Orbs,
    }
}

wire_record! {
    pub struct MatchPlayer {
        pub name: String,
        /// Deck the player uses. The server may send it empty.
        pub deck: Deck,
        pub entity: PlayerEntity,
    }
}

wire_record! {
    /// An entity on the map.
    pub struct Entity {
        pub id: EntityId,
        pub effects: Vec<AbilityEffect>,
        pub aspects: Vec<Aspect>,
        pub job: Job,
        pub position: Position,
        /// Player owning this entity, if any.
        pub player_entity_id: Option<EntityId>,
        pub specific: EntitySpecific,
    }
}

impl Orbs {
    /// Number of orbs of `color`. Wildcard orbs aren't counted.
    pub fn count(&self, color: OrbColor) -> u32 {
        match color {
            OrbColor::White => self.white,
            OrbColor::Shadow => self.shadow,
            OrbColor::Nature => self.nature,
            OrbColor::Frost => self.frost,
            OrbColor::Fire => self.fire,
            OrbColor::Starting => self.starting,
            OrbColor::All => self.all,
        }
    }
}

impl PlayerEntity {
    pub fn health(&self) -> Option<&Health> {
        aspect::health(&self.aspects)
    }
}

impl Entity {
    pub fn is_owned_by(&self, player: EntityId) -> bool {
        self.player_entity_id == Some(player)
    }

    pub fn health(&self) -> Option<&Health> {
        aspect::health(&self.aspects)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use skybot_protocol::FromWire;

    use super::*;
    use crate::specific::Projectile;

    fn entity(owner: Option<u32>) -> Entity {
        Entity {
            id: EntityId(9),
            effects: vec![],
            aspects: vec![],
            job: Job::IDLE,
            position: Position {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
            player_entity_id: owner.map(EntityId),
            specific: EntitySpecific::Projectile(Projectile {}),
        }
    }

    #[test]
    fn test_entity_ownership() {
        assert!(entity(Some(1)).is_owned_by(EntityId(1)));
        assert!(!entity(Some(2)).is_owned_by(EntityId(1)));
        assert!(!entity(None).is_owned_by(EntityId(1)));
    }

    #[test]
    fn test_orb_count_by_color() {
        let orbs = Orbs {
            shadow: 1,
            nature: 2,
            frost: 0,
            fire: 3,
            starting: 1,
            white: 0,
            all: 0,
        };
        assert_eq!(orbs.count(OrbColor::Fire), 3);
        assert_eq!(orbs.count(OrbColor::Nature), 2);
    }

    #[test]
    fn test_entity_owner_may_be_absent() {
        let doc = json!({
            "id": 4, "effects": [], "aspects": [], "job": 0,
            "position": { "x": 1.0, "y": 0.0, "z": 2.0 },
            "specific": { "BarrierSet": {} }
        });
        let e = Entity::from_wire(&doc).unwrap();
        assert_eq!(e.player_entity_id, None);
        assert!(e.health().is_none());
    }

    #[test]
    fn test_entity_aspect_error_path() {
        let doc = json!({
            "id": 4, "effects": [], "job": 0,
            "aspects": [{ "Combat": {} }, { "Health": { "current_hp": 5.0 } }],
            "position": { "x": 1.0, "y": 0.0, "z": 2.0 },
            "specific": { "BarrierSet": {} }
        });
        let err = Entity::from_wire(&doc).unwrap_err();
        assert_eq!(
            err.path().unwrap().to_string(),
            "$.aspects[1].Health.cap_current_max"
        );
    }
}
