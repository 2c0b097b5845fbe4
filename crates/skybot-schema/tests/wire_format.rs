//! Wire-format tests for the full record schema.
//!
//! The per-family checks run against every family the contract declares;
//! the snapshot tests use documents shaped like what a match server sends.

use serde_json::{Value, json};
use skybot_protocol::{
    Codec, CodecError, FromWire, JsonCodec, VariantFamily, decode_variant, encode_variant,
    wire::{from_document, to_document},
};
use skybot_schema::command::{BuildHouse, GroupAttack, Surrender};
use skybot_schema::rejection::NotEnoughPower;
use skybot_schema::{
    AbilityEffectSpecific, Aspect, Command, EntityId, EntitySpecific, GameState, Position2D,
    RejectedCommand, RejectionReason, SingleTarget, aspect,
};

// =========================================================================
// Every family
// =========================================================================

/// Structural checks that hold for any family.
fn check_family<F: VariantFamily + std::fmt::Debug>() {
    for doc in [json!({}), json!({ "A": 1, "B": 2 })] {
        let err = decode_variant::<F>(&doc).unwrap_err();
        assert!(
            matches!(err, CodecError::MalformedVariant { family, .. } if family == F::FAMILY),
            "{}: expected MalformedVariant for {doc}, got {err:?}",
            F::FAMILY
        );
    }

    let err = decode_variant::<F>(&json!({ "NotARealTag": {} })).unwrap_err();
    assert!(
        matches!(err, CodecError::UnknownVariant { ref tag, .. } if tag == "NotARealTag"),
        "{}: expected UnknownVariant, got {err:?}",
        F::FAMILY
    );

    // Every registered tag resolves. An empty payload either is the whole
    // variant (markers) or is missing a field, never an unknown tag.
    for tag in F::registry().tags() {
        match decode_variant::<F>(&json!({ *tag: {} })) {
            Ok(value) => {
                assert_eq!(value.tag(), *tag);
                assert_eq!(encode_variant(&value).unwrap(), json!({ *tag: {} }));
            }
            Err(CodecError::FieldMismatch { .. }) => {}
            Err(other) => panic!("{}: tag {tag} failed with {other:?}", F::FAMILY),
        }
    }
}

#[test]
fn test_aspect_family() {
    check_family::<Aspect>();
}

#[test]
fn test_entity_specific_family() {
    check_family::<EntitySpecific>();
}

#[test]
fn test_ability_effect_family() {
    check_family::<AbilityEffectSpecific>();
}

#[test]
fn test_command_family() {
    check_family::<Command>();
}

#[test]
fn test_rejection_reason_family() {
    check_family::<RejectionReason>();
}

#[test]
fn test_single_target_family() {
    check_family::<SingleTarget>();
}

#[test]
fn test_family_sizes() {
    assert_eq!(Aspect::registry().len(), 29);
    assert_eq!(EntitySpecific::registry().len(), 9);
    assert_eq!(AbilityEffectSpecific::registry().len(), 4);
    assert_eq!(Command::registry().len(), 24);
    assert_eq!(RejectionReason::registry().len(), 13);
    assert_eq!(SingleTarget::registry().len(), 2);
}

// =========================================================================
// One populated sample per tag
// =========================================================================

/// Round-trips one sample document per tag. The samples must list every
/// registered tag, in declaration order, so a new variant needs a sample.
fn check_samples<F: VariantFamily + PartialEq + std::fmt::Debug>(samples: &[Value]) {
    let tags: Vec<&str> = samples
        .iter()
        .map(|doc| doc.as_object().unwrap().keys().next().unwrap().as_str())
        .collect();
    assert_eq!(tags, F::registry().tags(), "{}: sample tags", F::FAMILY);

    for doc in samples {
        let value = decode_variant::<F>(doc)
            .unwrap_or_else(|e| panic!("{}: {doc} failed with {e}", F::FAMILY));
        let encoded = encode_variant(&value).unwrap();
        assert_eq!(&encoded, doc, "{}: re-encoded document", F::FAMILY);
        assert_eq!(decode_variant::<F>(&encoded).unwrap(), value);
    }
}

#[test]
fn test_aspect_samples() {
    check_samples::<Aspect>(&[
        json!({ "PowerProduction": { "current_power": 12.5, "power_capacity": 40.0 } }),
        json!({ "Health": { "current_hp": 80.0, "cap_current_max": 100.0 } }),
        json!({ "Combat": {} }),
        json!({ "ModeChange": { "current_mode": 2, "all_modes": [1, 2, 3] } }),
        json!({ "Ammunition": {} }),
        json!({ "SuperWeaponShadow": {} }),
        json!({ "WormMovement": {} }),
        json!({ "NPCTag": {} }),
        json!({ "PlayerKit": {} }),
        json!({ "Loot": {} }),
        json!({ "Immunity": {} }),
        json!({ "Turret": {} }),
        json!({ "Tunnel": {} }),
        json!({ "MountBarrier": {} }),
        json!({ "SpellMemory": {} }),
        json!({ "Portal": {} }),
        json!({ "Hate": {} }),
        json!({ "BarrierGate": { "open": false } }),
        json!({ "Attackable": {} }),
        json!({ "SquadRefill": {} }),
        json!({ "PortalExit": {} }),
        json!({
            "ConstructionData": {
                "refresh_count_remaining": 3,
                "refresh_count_total": 10,
                "health_per_build_update_trigger": 25.5,
                "remaining_health_to_add": 76.5
            }
        }),
        json!({ "SuperWeaponShadowBomb": {} }),
        json!({ "RepairBarrierSet": {} }),
        json!({ "ConstructionRepair": {} }),
        json!({ "Follower": {} }),
        json!({ "CollisionBase": {} }),
        json!({ "EditorUniqueID": {} }),
        json!({ "Roam": {} }),
    ]);
}

#[test]
fn test_entity_specific_samples() {
    check_samples::<EntitySpecific>(&[
        json!({ "Projectile": {} }),
        json!({ "PowerSlot": { "res_id": 9, "state": 1, "team": 2 } }),
        json!({ "TokenSlot": { "color": 7 } }),
        json!({ "AbilityWorldObject": {} }),
        json!({
            "Squad": {
                "card_id": 2_000_512,
                "res_squad_id": 4,
                "bound_power": 75.0,
                "squad_size": 2,
                "figures": [41, 42]
            }
        }),
        json!({
            "Figure": {
                "squad_id": 40,
                "current_speed": 3.25,
                "rotation_speed": 0.5,
                "unit_size": 1,
                "move_mode": 2
            }
        }),
        json!({ "Building": { "building_id": 17, "card_id": 1_000_300, "power_cost": 120.0 } }),
        json!({ "BarrierSet": {} }),
        json!({
            "BarrierModule": {
                "team": 1,
                "set": 60,
                "state": 3,
                "slots": 8,
                "free_slots": 5,
                "walkable": true
            }
        }),
    ]);
}

#[test]
fn test_ability_effect_samples() {
    check_samples::<AbilityEffectSpecific>(&[
        json!({
            "DamageRadialArea": {
                "progress_current": 0.25,
                "progress_delta": 0.05,
                "damage_remaining": 140.0
            }
        }),
        json!({ "DamageOverTime": { "tick_wait_duration": 5, "ticks_left": 12, "tick_damage": 7.5 } }),
        json!({
            "LinkedFire": {
                "linked": false,
                "fighting": true,
                "fast_cast": 1,
                "support_cap": 4,
                "support_production": 2
            }
        }),
        json!({ "Other": {} }),
    ]);
}

#[test]
fn test_command_samples() {
    check_samples::<Command>(&[
        json!({ "BuildHouse": { "card_position": 3, "xy": { "x": 1.5, "y": 2.5 }, "angle": 90.0 } }),
        json!({ "CastSpellGod": { "card_position": 1, "target": { "SingleEntity": { "id": 30 } } } }),
        json!({
            "CastSpellGodMulti": {
                "card_position": 2,
                "xy1": { "x": 10.0, "y": 20.0 },
                "xy2": { "x": 30.0, "y": 40.0 }
            }
        }),
        json!({ "ProduceSquad": { "card_position": 0, "xy": { "x": 5.0, "y": 6.0 } } }),
        json!({
            "ProduceSquadOnBarrier": {
                "card_position": 4,
                "xy": { "x": 7.0, "y": 8.0 },
                "barrier_to_mount": 61
            }
        }),
        json!({
            "CastSpellEntity": {
                "entity": 20,
                "spell": 1400,
                "target": { "Location": { "xy": { "x": -3.5, "y": 9.0 } } }
            }
        }),
        json!({ "BarrierGateToggle": { "barrier_id": 61 } }),
        json!({ "BarrierBuild": { "barrier_id": 61, "inverted_direction": true } }),
        json!({ "BarrierRepair": { "barrier_id": 62 } }),
        json!({ "BarrierCancelRepair": { "barrier_id": 62 } }),
        json!({ "RepairBuilding": { "building_id": 17 } }),
        json!({ "CancelRepairBuilding": { "building_id": 17 } }),
        json!({ "GroupAttack": { "squads": [20, 21], "target_entity_id": 30, "force_attack": true } }),
        json!({ "GroupEnterWall": { "squads": [20], "barrier_id": 61 } }),
        json!({ "GroupExitWall": { "squads": [20], "barrier_id": 61 } }),
        json!({
            "GroupGoto": {
                "squads": [20, 21],
                "positions": [{ "x": 1.0, "y": 2.0 }, { "x": 3.0, "y": 4.0 }],
                "walk_mode": 4,
                "orientation": 0.5
            }
        }),
        json!({ "GroupHoldPosition": { "squads": [22] } }),
        json!({ "GroupStopJob": { "squads": [] } }),
        json!({ "ModeChange": { "entity_id": 20, "new_mode_id": 3 } }),
        json!({ "PowerSlotBuild": { "slot_id": 11 } }),
        json!({ "TokenSlotBuild": { "slot_id": 12, "color": 3 } }),
        json!({ "Ping": { "xy": { "x": 100.0, "y": 200.0 }, "ping": 5 } }),
        json!({ "Surrender": {} }),
        json!({ "WhisperToMaster": { "text": "gg" } }),
    ]);
}

#[test]
fn test_rejection_reason_samples() {
    check_samples::<RejectionReason>(&[
        json!({ "Other": { "numbers1": [-1, 0], "numbers2": [], "numbers3": [7] } }),
        json!({ "NotEnoughPower": { "player_power": 12.5, "required": 50 } }),
        json!({ "SpellDoesNotExist": {} }),
        json!({ "EntityDoesNotExist": {} }),
        json!({ "InvalidEntityType": { "entity_type": 4 } }),
        json!({ "CanNotCast": { "failed_conditions": [7, 8] } }),
        json!({ "EntityNotOwned": {} }),
        json!({ "EntityOwnedBySomeoneElse": {} }),
        json!({ "NoModeChange": {} }),
        json!({ "EntityAlreadyInThisMode": {} }),
        json!({ "ModeNotExist": {} }),
        json!({ "InvalidCardIndex": {} }),
        json!({ "InvalidCard": {} }),
    ]);
}

#[test]
fn test_single_target_samples() {
    check_samples::<SingleTarget>(&[
        json!({ "SingleEntity": { "id": 30 } }),
        json!({ "Location": { "xy": { "x": 0.0, "y": -12.5 } } }),
    ]);
}

// =========================================================================
// Nesting and markers
// =========================================================================

#[test]
fn test_rejected_command_nests_two_families() {
    let doc = json!({
        "player": 2,
        "reason": { "NotEnoughPower": { "player_power": 12.5, "required": 50 } },
        "command": { "BuildHouse": { "card_position": 3, "xy": { "x": 1.0, "y": 2.0 }, "angle": 0.0 } }
    });

    let rejected = RejectedCommand::from_wire(&doc).unwrap();
    assert_eq!(rejected.player, EntityId(2));
    assert_eq!(
        rejected.reason,
        RejectionReason::NotEnoughPower(NotEnoughPower {
            player_power: 12.5,
            required: 50,
        })
    );
    assert_eq!(
        rejected.command,
        Command::BuildHouse(BuildHouse {
            card_position: 3,
            xy: Position2D::new(1.0, 2.0),
            angle: 0.0,
        })
    );

    assert_eq!(to_document(&rejected).unwrap(), doc);
}

#[test]
fn test_reason_and_command_fail_independently() {
    let doc = json!({
        "player": 2,
        "reason": { "InvalidCard": {} },
        "command": { "Teleport": {} }
    });
    let err = RejectedCommand::from_wire(&doc).unwrap_err();
    assert!(matches!(err, CodecError::UnknownVariant { family: "command", .. }));
    assert_eq!(err.path().unwrap().to_string(), "$.command");
}

#[test]
fn test_surrender_marker_round_trip() {
    let cmd = Command::Surrender(Surrender {});
    let doc = encode_variant(&cmd).unwrap();
    assert_eq!(doc, json!({ "Surrender": {} }));
    assert_eq!(decode_variant::<Command>(&doc).unwrap(), cmd);
}

#[test]
fn test_aspect_list_keeps_order() {
    let doc = json!([
        { "Health": { "current_hp": 80.0, "cap_current_max": 100.0 } },
        { "Combat": {} }
    ]);
    let aspects: Vec<Aspect> = from_document(&doc).unwrap();
    assert_eq!(
        aspects,
        vec![
            Aspect::Health(aspect::Health {
                current_hp: 80.0,
                cap_current_max: 100.0,
            }),
            Aspect::Combat(aspect::Combat {}),
        ]
    );
    assert_eq!(to_document(&aspects).unwrap(), doc);
}

#[test]
fn test_extra_payload_fields_are_ignored() {
    let doc = json!({ "BarrierGate": { "open": true, "since_tick": 90 } });
    let aspect: Aspect = decode_variant(&doc).unwrap();
    assert_eq!(aspect, Aspect::BarrierGate(aspect::BarrierGate { open: true }));
}

#[test]
fn test_missing_payload_field_fails() {
    let doc = json!({ "GroupAttack": { "squads": [1], "force_attack": false } });
    let err = decode_variant::<Command>(&doc).unwrap_err();
    assert!(matches!(err, CodecError::FieldMismatch { .. }));
    assert_eq!(
        err.path().unwrap().to_string(),
        "$.GroupAttack.target_entity_id"
    );
}

// =========================================================================
// Snapshots
// =========================================================================

fn tick_document() -> Value {
    json!({
        "current_tick": 42,
        "commands": [
            { "player": 1, "command": { "GroupAttack": { "squads": [20, 21], "target_entity_id": 30, "force_attack": false } } },
            { "player": 2, "command": { "CastSpellGod": { "card_position": 0, "target": { "Location": { "xy": { "x": 5.0, "y": 6.0 } } } } } }
        ],
        "rejected_commands": [
            {
                "player": 1,
                "reason": { "CanNotCast": { "failed_conditions": [7, 8] } },
                "command": { "CastSpellEntity": { "entity": 20, "spell": 1400, "target": { "SingleEntity": { "id": 30 } } } }
            }
        ],
        "players": [
            {
                "id": 1,
                "effects": [],
                "aspects": [],
                "team": 1,
                "power": 55.5,
                "void_power": 0.0,
                "population_count": 8,
                "name": "bot",
                "orbs": { "shadow": 0, "nature": 1, "frost": 0, "fire": 1, "starting": 0, "white": 0, "all": 0 }
            }
        ],
        "entities": [
            {
                "id": 20,
                "effects": [
                    {
                        "id": 400, "line": 12, "source": 31, "source_team": 2,
                        "start_tick": 30, "end_tick": 0,
                        "specific": { "LinkedFire": { "linked": true, "fighting": false, "fast_cast": 0, "support_cap": 3, "support_production": 1 } }
                    }
                ],
                "aspects": [
                    { "Health": { "current_hp": 300.0, "cap_current_max": 450.0 } },
                    { "Combat": {} },
                    { "ModeChange": { "current_mode": 2, "all_modes": [1, 2] } }
                ],
                "job": 2,
                "position": { "x": 100.0, "y": 12.0, "z": 250.0 },
                "player_entity_id": 1,
                "specific": { "Squad": { "card_id": 1000123, "res_squad_id": 77, "bound_power": 60.0, "squad_size": 2, "figures": [22, 23] } }
            },
            {
                "id": 30,
                "effects": [],
                "aspects": [{ "Attackable": {} }],
                "job": 1,
                "position": { "x": 400.0, "y": 10.0, "z": 410.0 },
                "player_entity_id": 2,
                "specific": { "TokenSlot": { "color": 4 } }
            }
        ]
    })
}

#[test]
fn test_tick_snapshot_decodes() {
    let state: GameState = from_document(&tick_document()).unwrap();

    assert_eq!(state.current_tick, 42);
    assert_eq!(state.commands.len(), 2);
    assert_eq!(
        state.commands[0].command,
        Command::GroupAttack(GroupAttack {
            squads: vec![EntityId(20), EntityId(21)],
            target_entity_id: EntityId(30),
            force_attack: false,
        })
    );
    assert_eq!(state.rejections_for(EntityId(1)).count(), 1);

    let squad = state.entity(EntityId(20)).unwrap();
    assert_eq!(squad.aspects.len(), 3);
    assert_eq!(squad.health().map(|h| h.current_hp), Some(300.0));
    assert_eq!(squad.specific.as_squad().map(|s| s.figures.len()), Some(2));
    assert!(matches!(
        squad.effects[0].specific,
        AbilityEffectSpecific::LinkedFire(_)
    ));

    assert_eq!(state.owned_by(EntityId(1)).count(), 1);
    assert_eq!(state.player(EntityId(1)).map(|p| p.power), Some(55.5));
}

#[test]
fn test_tick_snapshot_round_trip() {
    let doc = tick_document();
    let state: GameState = from_document(&doc).unwrap();
    assert_eq!(to_document(&state).unwrap(), doc);
}

#[test]
fn test_snapshot_error_points_into_entities() {
    let mut doc = tick_document();
    doc["entities"][1]["aspects"][0] = json!({ "Attackable": {}, "Combat": {} });

    let err = from_document::<GameState>(&doc).unwrap_err();
    assert!(matches!(err, CodecError::MalformedVariant { family: "aspect", .. }));
    assert_eq!(err.path().unwrap().to_string(), "$.entities[1].aspects[0]");
}

#[test]
fn test_command_list_through_json_codec() {
    let codec = JsonCodec;
    let commands = vec![
        Command::from(Surrender {}),
        Command::GroupAttack(GroupAttack {
            squads: vec![EntityId(4)],
            target_entity_id: EntityId(9),
            force_attack: true,
        }),
    ];
    let bytes = codec.encode(&commands).unwrap();
    let text = std::str::from_utf8(&bytes).unwrap();
    assert!(text.starts_with(r#"[{"Surrender":{}},{"GroupAttack":"#));
    assert_eq!(codec.decode::<Vec<Command>>(&bytes).unwrap(), commands);
}
