//! The `Bot` trait: the one thing a bot author implements.
//!
//! The adapter decodes every request, calls into the bot at the right
//! point of the match, and encodes whatever comes back. A bot never sees
//! bytes or tagged documents, only typed records.

use skybot_schema::{Command, Deck, GameStartState, GameState, MapInfo};

/// A bot that can play matches.
///
/// Calls arrive in match order: [`name`](Bot::name) and
/// [`decks_for_map`](Bot::decks_for_map) during `hello`, then
/// [`prepare`](Bot::prepare), [`match_start`](Bot::match_start), and one
/// [`tick`](Bot::tick) per simulation step.
pub trait Bot: Send + 'static {
    /// Unique name of the bot, shown in the lobby.
    fn name(&self) -> &str;

    /// Decks this bot can play on `map`.
    ///
    /// An empty list tells the server the bot can't play there. Also used
    /// by `prepare` to check that the server picked one of these decks.
    fn decks_for_map(&self, map: &MapInfo) -> Vec<Deck>;

    /// Called once the server has picked `deck`. Default: no-op.
    fn prepare(&mut self, _deck: &Deck, _map: &MapInfo) {}

    /// Called with the initial snapshot, before the first tick.
    fn match_start(&mut self, state: GameStartState);

    /// Called every tick. Returns the commands to issue this tick.
    fn tick(&mut self, state: GameState) -> Vec<Command>;
}
