//! Request/response adapter between a match server and a [`Bot`].
//!
//! Every call follows the same blocking pattern:
//!
//! ```text
//! body bytes ─► size check ─► parse ─► decode record ─► Bot ─► encode reply
//! ```
//!
//! The adapter owns the bot, so there's no process-wide "current bot".
//! Transports that serve calls concurrently wrap the adapter in their own
//! lock; nothing in here blocks or spawns.

use serde::Serialize;
use skybot_protocol::{Codec, CodecError, FromWire, JsonCodec, Value, wire};
use skybot_schema::{AiForMap, Command, GameStartState, GameState, Hello, Prepare};
use tracing::{debug, info, warn};

use crate::{AdapterConfig, Bot, BoundaryError, Call};

/// Drives a [`Bot`] through the boundary calls of a match.
///
/// ## Example
///
/// ```rust
/// use skybot_boundary::{Bot, BotAdapter, Call};
/// use skybot_schema::{Command, Deck, GameStartState, GameState, MapInfo};
///
/// struct Idle;
///
/// impl Bot for Idle {
///     fn name(&self) -> &str { "idle" }
///     fn decks_for_map(&self, _map: &MapInfo) -> Vec<Deck> { Vec::new() }
///     fn match_start(&mut self, _state: GameStartState) {}
///     fn tick(&mut self, _state: GameState) -> Vec<Command> { Vec::new() }
/// }
///
/// let mut adapter = BotAdapter::new(Idle);
/// let reply = adapter
///     .handle(Call::Hello, br#"{"version": 12, "map": {"map": 1}}"#)
///     .unwrap();
/// assert_eq!(reply, br#"{"name":"idle","decks":[]}"#);
/// ```
pub struct BotAdapter<B: Bot, C: Codec = JsonCodec> {
    bot: B,
    codec: C,
    config: AdapterConfig,
}

impl<B: Bot> BotAdapter<B> {
    /// Creates an adapter speaking JSON with the default configuration.
    pub fn new(bot: B) -> Self {
        Self::with_config(bot, AdapterConfig::default())
    }

    /// Creates an adapter speaking JSON with a custom configuration.
    pub fn with_config(bot: B, config: AdapterConfig) -> Self {
        Self::with_codec(bot, JsonCodec, config)
    }
}

impl<B: Bot, C: Codec> BotAdapter<B, C> {
    pub fn with_codec(bot: B, codec: C, config: AdapterConfig) -> Self {
        Self {
            bot,
            codec,
            config: config.validated(),
        }
    }

    pub fn bot(&self) -> &B {
        &self.bot
    }

    pub fn bot_mut(&mut self) -> &mut B {
        &mut self.bot
    }

    pub fn into_inner(self) -> B {
        self.bot
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Byte-level dispatch
    // -----------------------------------------------------------------------

    /// Handles one call end to end: decodes `body`, runs the bot, and
    /// returns the encoded reply.
    ///
    /// `prepare` and `start` have no payload to return and reply `null`.
    ///
    /// # Errors
    /// Any [`BoundaryError`]; the bot is not called when the request is
    /// rejected.
    pub fn handle(&mut self, call: Call, body: &[u8]) -> Result<Vec<u8>, BoundaryError> {
        match call {
            Call::Hello => {
                let reply = self.hello(body)?;
                self.encode(call, &reply)
            }
            Call::Prepare => {
                self.prepare(body)?;
                self.encode(call, &())
            }
            Call::Start => {
                self.start(body)?;
                self.encode(call, &())
            }
            Call::Tick => {
                let commands = self.tick(body)?;
                self.encode(call, &commands)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Typed calls
    // -----------------------------------------------------------------------

    /// Checks the protocol version, then asks the bot for its name and the
    /// decks it can play on the announced map.
    ///
    /// The version is read before the rest of the document, so a server on
    /// another version gets [`BoundaryError::VersionMismatch`] even if its
    /// map record has a different shape.
    pub fn hello(&self, body: &[u8]) -> Result<AiForMap, BoundaryError> {
        let call = Call::Hello;
        let doc = self.parse(call, body)?;
        self.check_version(&doc)?;
        let hello: Hello = decode(call, &doc)?;

        let name = self.bot.name().to_string();
        let decks = self.bot.decks_for_map(&hello.map);
        for deck in decks.iter().filter(|d| !d.is_playable()) {
            warn!(
                bot = %name,
                deck = %deck.name,
                cards = deck.cards.len(),
                "offering a deck the server is likely to refuse"
            );
        }

        info!(
            bot = %name,
            map = %hello.map.map,
            community = hello.map.community_map_details.is_some(),
            decks = decks.len(),
            "hello"
        );
        Ok(AiForMap { name, decks })
    }

    /// Hands the server's deck choice to the bot.
    ///
    /// The deck must be one the bot offers for the map in the request,
    /// otherwise [`BoundaryError::DeckNotSupported`].
    pub fn prepare(&mut self, body: &[u8]) -> Result<(), BoundaryError> {
        let call = Call::Prepare;
        let doc = self.parse(call, body)?;
        let prepare: Prepare = decode(call, &doc)?;

        let Some(deck) = self
            .bot
            .decks_for_map(&prepare.map_info)
            .into_iter()
            .find(|d| d.name == prepare.deck)
        else {
            warn!(deck = %prepare.deck, map = %prepare.map_info.map, "deck not supported on map");
            return Err(BoundaryError::DeckNotSupported { deck: prepare.deck });
        };

        info!(deck = %deck.name, map = %prepare.map_info.map, "prepare");
        self.bot.prepare(&deck, &prepare.map_info);
        Ok(())
    }

    /// Delivers the initial match snapshot.
    pub fn start(&mut self, body: &[u8]) -> Result<(), BoundaryError> {
        let call = Call::Start;
        let doc = self.parse(call, body)?;
        let state: GameStartState = decode(call, &doc)?;

        info!(
            player = %state.your_player_id,
            players = state.players.len(),
            entities = state.entities.len(),
            "match start"
        );
        self.bot.match_start(state);
        Ok(())
    }

    /// Delivers one tick snapshot and returns the bot's commands.
    pub fn tick(&mut self, body: &[u8]) -> Result<Vec<Command>, BoundaryError> {
        let call = Call::Tick;
        let doc = self.parse(call, body)?;
        let state: GameState = decode(call, &doc)?;

        let tick = state.current_tick;
        let rejected = state.rejected_commands.len();
        let commands = self.bot.tick(state);
        debug!(tick, rejected, commands = commands.len(), "tick");
        Ok(commands)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn parse(&self, call: Call, body: &[u8]) -> Result<Value, BoundaryError> {
        let limit = self.config.max_document_bytes;
        if body.len() > limit {
            warn!(%call, size = body.len(), limit, "rejecting oversized document");
            return Err(BoundaryError::DocumentTooLarge {
                call,
                size: body.len(),
                limit,
            });
        }
        self.codec.parse(body).map_err(|e| rejected(call, e))
    }

    fn check_version(&self, doc: &Value) -> Result<(), BoundaryError> {
        let got = match doc {
            Value::Object(fields) => wire::field::<u32>(fields, "version"),
            other => Err(CodecError::expected("mapping", other)),
        }
        .map_err(|e| rejected(Call::Hello, e))?;

        let expected = self.config.protocol_version;
        if got != expected {
            warn!(expected, got, "protocol version mismatch");
            return Err(BoundaryError::VersionMismatch { expected, got });
        }
        Ok(())
    }

    fn encode<T: Serialize>(&self, call: Call, value: &T) -> Result<Vec<u8>, BoundaryError> {
        self.codec
            .encode(value)
            .map_err(|source| BoundaryError::Encode { call, source })
    }
}

impl<B: Bot + std::fmt::Debug, C: Codec + std::fmt::Debug> std::fmt::Debug for BotAdapter<B, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotAdapter")
            .field("bot", &self.bot)
            .field("codec", &self.codec)
            .field("config", &self.config)
            .finish()
    }
}

fn decode<T: FromWire>(call: Call, doc: &Value) -> Result<T, BoundaryError> {
    T::from_wire(doc).map_err(|e| rejected(call, e))
}

fn rejected(call: Call, source: CodecError) -> BoundaryError {
    warn!(%call, error = %source, "rejecting document");
    BoundaryError::Decode { call, source }
}
