use actix::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Message client -> serveur
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "action", content = "data")]
pub enum ClientWsMessage {
    /// Attempt to pair with the connection named by the invite link.
    /// The target travels as a string because the client read it from a
    /// URL path segment; the session actor parses it.
    Ready(String),
    /// A move on one cell of the grid. The server relays the payload
    /// verbatim and never checks it against game rules.
    Play(u8),
    NewGame,
    Ping,
}

// Message serveur -> client
#[derive(Message, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[rtype(result = "()")]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    /// First message on every connection: the identifier the client puts
    /// into its invite link.
    Welcome { id: Uuid },
    /// Both parties are in the room; play is unlocked.
    Start,
    /// The invite target is already paired with someone else.
    RoomFull,
    Play(u8),
    NewGame,
    /// The peer's connection closed; the session is over.
    PlayerLeft,
    Error { message: String },
}

impl ServerWsMessage {
    pub fn welcome(id: Uuid) -> Self {
        Self::Welcome { id }
    }
    pub fn error(message: &str) -> Self {
        Self::Error {
            message: message.to_string(),
        }
    }
}

/// Payload of a relayed event, as accepted from one session and forwarded
/// to its peer. Conversion to the wire enum is 1:1.
#[derive(Clone, Debug, PartialEq)]
pub enum RelayEvent {
    Play(u8),
    NewGame,
}

impl From<RelayEvent> for ServerWsMessage {
    fn from(event: RelayEvent) -> Self {
        match event {
            RelayEvent::Play(cell) => ServerWsMessage::Play(cell),
            RelayEvent::NewGame => ServerWsMessage::NewGame,
        }
    }
}
