//! Records exchanged before the match starts: the handshake and deck
//! selection.

use skybot_protocol::wire_record;

use crate::{CardId, MapId};

/// The only protocol version this contract describes.
///
/// A `hello` carrying any other value is refused before its map is decoded.
pub const PROTOCOL_VERSION: u32 = 12;

/// Number of cards in a playable deck.
pub const DECK_SIZE: usize = 20;

wire_record! {
    /// Details of a community (non-official) map.
    pub struct CommunityMapInfo {
        pub name: String,
        pub crc: u32,
    }
}

wire_record! {
    pub struct MapInfo {
        pub map: MapId,
        /// Only present when the match runs on a community map.
        pub community_map_details: Option<CommunityMapInfo>,
    }
}

wire_record! {
    pub struct Deck {
        /// Shown in the lobby. Must not contain whitespace.
        pub name: String,
        /// Index into `cards` of the card shown as the deck's cover.
        pub cover_card_index: u8,
        pub cards: Vec<CardId>,
    }
}

wire_record! {
    /// A bot's answer to `hello`: its name and the decks it can play on
    /// the announced map.
    pub struct AiForMap {
        pub name: String,
        pub decks: Vec<Deck>,
    }
}

wire_record! {
    /// First call of a match. The bot answers with an [`AiForMap`].
    pub struct Hello {
        pub version: u32,
        pub map: MapInfo,
    }
}

wire_record! {
    /// Tells the bot which of its decks was picked.
    pub struct Prepare {
        pub deck: String,
        pub map_info: MapInfo,
    }
}

impl Deck {
    /// Whether the server would accept this deck in a lobby: a name without
    /// whitespace, exactly [`DECK_SIZE`] cards, and a cover index that
    /// points into them.
    pub fn is_playable(&self) -> bool {
        !self.name.is_empty()
            && !self.name.contains(char::is_whitespace)
            && self.cards.len() == DECK_SIZE
            && usize::from(self.cover_card_index) < self.cards.len()
    }
}

impl AiForMap {
    pub fn deck(&self, name: &str) -> Option<&Deck> {
        self.decks.iter().find(|d| d.name == name)
    }
}
