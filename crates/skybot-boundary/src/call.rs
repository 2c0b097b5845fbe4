//! The four boundary calls a match server makes.

use std::fmt;
use std::str::FromStr;

/// One of the calls a match server makes on a bot, in match order.
///
/// ```text
/// hello → prepare → start → tick, tick, tick, ...
/// ```
///
/// - **Hello**: version check, then the bot names itself and lists the
///   decks it can play on the announced map.
/// - **Prepare**: the server picked one of those decks.
/// - **Start**: the initial match snapshot.
/// - **Tick**: one snapshot per simulation step; the bot answers with the
///   commands it wants executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    Hello,
    Prepare,
    Start,
    Tick,
}

impl Call {
    pub const ALL: [Self; 4] = [Self::Hello, Self::Prepare, Self::Start, Self::Tick];

    /// Route name of the call, as transports expose it (`/hello`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Prepare => "prepare",
            Self::Start => "start",
            Self::Tick => "tick",
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a route that isn't one of the four calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown boundary call `{0}`")]
pub struct UnknownCall(pub String);

impl FromStr for Call {
    type Err = UnknownCall;

    /// Accepts the bare name or the route form (`tick` or `/tick`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix('/').unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|call| call.as_str() == name)
            .ok_or_else(|| UnknownCall(s.to_string()))
    }
}
