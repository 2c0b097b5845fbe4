//! Example bot, plus a replay harness that feeds it recorded documents.
//!
//! ```text
//! cargo run -p example-bot -- <recording-dir>
//! ```
//!
//! The directory holds one document per call, as a match server sent them:
//! `hello.json`, `prepare.json`, `start.json`, and `tick-<n>.json` files.
//! `deck.json` is the deck the bot offers.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use skybot::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Bot
// ---------------------------------------------------------------------------

/// Spawns a squad whenever it can afford one, and sends its whole army at
/// an enemy monument.
#[derive(Debug)]
struct ExampleBot {
    deck: Deck,
    me: EntityId,
    team: u8,
    opponents: Vec<EntityId>,
    start: Position2D,
}

impl ExampleBot {
    /// Power needed before the bot plays its first card.
    const SPAWN_POWER: f64 = 50.0;

    fn new(deck: Deck) -> Self {
        Self {
            deck,
            me: EntityId(0),
            team: 0,
            opponents: Vec::new(),
            start: Position2D::zero(),
        }
    }
}

impl Bot for ExampleBot {
    fn name(&self) -> &str {
        "RustExampleBot"
    }

    fn decks_for_map(&self, _map: &MapInfo) -> Vec<Deck> {
        vec![self.deck.clone()]
    }

    fn match_start(&mut self, state: GameStartState) {
        self.me = state.your_player_id;
        if let Some(me) = state.me() {
            self.team = me.entity.team;
        }
        self.opponents = state
            .players
            .iter()
            .filter(|p| p.entity.team != self.team)
            .map(|p| p.entity.id)
            .collect();

        for entity in state.entities.iter().filter(|e| e.is_owned_by(self.me)) {
            match entity.specific {
                EntitySpecific::PowerSlot(_) => {
                    info!(id = %entity.id, position = ?entity.position, "own power well");
                }
                EntitySpecific::TokenSlot(_) => {
                    info!(id = %entity.id, position = ?entity.position, "own monument");
                    self.start = entity.position.to_2d();
                }
                _ => {}
            }
        }
    }

    fn tick(&mut self, state: GameState) -> Vec<Command> {
        let power = state.player(self.me).map_or(0.0, |p| p.power);
        let army: Vec<EntityId> = state
            .owned_by(self.me)
            .filter(|e| matches!(e.specific, EntitySpecific::Squad(_)))
            .map(|e| e.id)
            .collect();
        let target = state
            .entities
            .iter()
            .filter(|e| matches!(e.specific, EntitySpecific::TokenSlot(_)))
            .filter(|e| e.player_entity_id.is_some_and(|p| self.opponents.contains(&p)))
            .map(|e| e.id)
            .last();

        debug!(tick = state.current_tick, power, army = army.len(), target = ?target, "thinking");

        let mut commands = Vec::new();
        if power >= Self::SPAWN_POWER {
            commands.push(
                command::ProduceSquad {
                    card_position: 0,
                    xy: self.start,
                }
                .into(),
            );
        }
        if let Some(target) = target.filter(|_| !army.is_empty()) {
            commands.push(
                command::GroupAttack {
                    squads: army,
                    target_entity_id: target,
                    force_attack: false,
                }
                .into(),
            );
        }
        commands
    }
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

/// What a replay went through.
#[derive(Debug, Default, PartialEq)]
struct ReplaySummary {
    ticks: usize,
    commands: usize,
}

fn replay(dir: &Path) -> Result<ReplaySummary, Box<dyn Error>> {
    let deck: Deck = JsonCodec.decode(&fs::read(dir.join("deck.json"))?)?;
    let mut adapter = BotAdapter::new(ExampleBot::new(deck));

    for (call, file) in [
        (Call::Hello, "hello.json"),
        (Call::Prepare, "prepare.json"),
        (Call::Start, "start.json"),
    ] {
        let reply = adapter.handle(call, &fs::read(dir.join(file))?)?;
        info!(%call, reply = %String::from_utf8_lossy(&reply), "replayed");
    }

    let mut summary = ReplaySummary::default();
    for (tick, path) in tick_files(dir)? {
        let commands = adapter.tick(&fs::read(&path)?)?;
        info!(tick, commands = ?commands, "replayed");
        summary.ticks += 1;
        summary.commands += commands.len();
    }
    Ok(summary)
}

/// `tick-<n>.json` files of `dir`, in tick order.
fn tick_files(dir: &Path) -> Result<Vec<(u64, PathBuf)>, Box<dyn Error>> {
    let mut ticks = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let tick = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_prefix("tick-"))
            .and_then(|n| n.strip_suffix(".json"))
            .and_then(|n| n.parse::<u64>().ok());
        if let Some(tick) = tick {
            ticks.push((tick, path));
        }
    }
    ticks.sort_unstable_by_key(|(tick, _)| *tick);
    Ok(ticks)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let Some(dir) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: example-bot <recording-dir>");
        std::process::exit(2);
    };

    let summary = replay(&dir)?;
    info!(ticks = summary.ticks, commands = summary.commands, "replay finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn deck_doc() -> Value {
        json!({ "name": "Replay", "cover_card_index": 0, "cards": vec![7; 20] })
    }

    fn deck() -> Deck {
        Deck::from_wire(&deck_doc()).unwrap()
    }

    fn player(id: u32, team: u8, power: f64) -> Value {
        json!({
            "id": id, "effects": [], "aspects": [], "team": team,
            "power": power, "void_power": 0.0, "population_count": 0, "name": format!("p{id}"),
            "orbs": { "shadow": 0, "nature": 0, "frost": 0, "fire": 0, "starting": 1, "white": 0, "all": 0 }
        })
    }

    fn entity(id: u32, owner: u32, specific: Value, x: f64, z: f64) -> Value {
        json!({
            "id": id, "effects": [], "aspects": [], "job": 1,
            "position": { "x": x, "y": 0.0, "z": z },
            "player_entity_id": owner,
            "specific": specific
        })
    }

    fn start_doc() -> Value {
        json!({
            "your_player_id": 1,
            "players": [
                { "name": "me", "deck": deck_doc(), "entity": player(1, 1, 0.0) },
                { "name": "them", "deck": deck_doc(), "entity": player(2, 2, 0.0) }
            ],
            "entities": [
                entity(10, 1, json!({ "TokenSlot": { "color": 5 } }), 30.0, 40.0),
                entity(11, 1, json!({ "PowerSlot": { "res_id": 1, "state": 0, "team": 1 } }), 35.0, 45.0),
                entity(20, 2, json!({ "TokenSlot": { "color": 5 } }), 300.0, 400.0)
            ]
        })
    }

    fn tick_doc(tick: u64, power: f64, with_squad: bool) -> Value {
        let mut entities = vec![entity(20, 2, json!({ "TokenSlot": { "color": 5 } }), 300.0, 400.0)];
        if with_squad {
            entities.push(entity(
                30,
                1,
                json!({ "Squad": { "card_id": 7, "res_squad_id": 1, "bound_power": 50.0, "squad_size": 1, "figures": [31] } }),
                32.0,
                42.0,
            ));
        }
        json!({
            "current_tick": tick,
            "commands": [],
            "rejected_commands": [],
            "players": [player(1, 1, power), player(2, 2, 10.0)],
            "entities": entities
        })
    }

    fn started_bot() -> ExampleBot {
        let mut bot = ExampleBot::new(deck());
        bot.match_start(GameStartState::from_wire(&start_doc()).unwrap());
        bot
    }

    #[test]
    fn test_match_start_finds_team_opponents_and_start() {
        let bot = started_bot();
        assert_eq!(bot.me, EntityId(1));
        assert_eq!(bot.team, 1);
        assert_eq!(bot.opponents, vec![EntityId(2)]);
        assert_eq!(bot.start, Position2D::new(30.0, 40.0));
    }

    #[test]
    fn test_poor_bot_without_army_does_nothing() {
        let mut bot = started_bot();
        let commands = bot.tick(GameState::from_wire(&tick_doc(2, 10.0, false)).unwrap());
        assert!(commands.is_empty());
    }

    #[test]
    fn test_spawns_when_power_allows() {
        let mut bot = started_bot();
        let commands = bot.tick(GameState::from_wire(&tick_doc(2, 50.0, false)).unwrap());
        assert_eq!(
            commands,
            vec![Command::ProduceSquad(command::ProduceSquad {
                card_position: 0,
                xy: Position2D::new(30.0, 40.0),
            })]
        );
    }

    #[test]
    fn test_army_attacks_enemy_monument() {
        let mut bot = started_bot();
        let commands = bot.tick(GameState::from_wire(&tick_doc(3, 0.0, true)).unwrap());
        assert_eq!(
            commands,
            vec![Command::GroupAttack(command::GroupAttack {
                squads: vec![EntityId(30)],
                target_entity_id: EntityId(20),
                force_attack: false,
            })]
        );
    }

    #[test]
    fn test_replay_directory() {
        let dir = std::env::temp_dir().join(format!("skybot-replay-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let write = |name: &str, doc: &Value| {
            fs::write(dir.join(name), serde_json::to_vec(doc).unwrap()).unwrap();
        };
        write("deck.json", &deck_doc());
        write("hello.json", &json!({ "version": 12, "map": { "map": 1 } }));
        write("prepare.json", &json!({ "deck": "Replay", "map_info": { "map": 1 } }));
        write("start.json", &start_doc());
        write("tick-10.json", &tick_doc(10, 60.0, true));
        write("tick-2.json", &tick_doc(2, 0.0, false));
        write("notes.txt", &json!("ignored"));

        let ticks: Vec<u64> = tick_files(&dir).unwrap().into_iter().map(|(t, _)| t).collect();
        assert_eq!(ticks, vec![2, 10]);

        let summary = replay(&dir).unwrap();
        assert_eq!(
            summary,
            ReplaySummary {
                ticks: 2,
                commands: 2,
            }
        );

        fs::remove_dir_all(&dir).unwrap();
    }
}
