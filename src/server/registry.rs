//! Connection registry: which connections exist and who is paired with whom.
//!
//! Pairing state is stored explicitly per connection instead of being
//! inferred from transport-side room metadata. The registry holds no actor
//! addresses and performs no I/O, so every pairing decision is testable
//! without a runtime; only the relay actor mutates it.

use std::collections::HashMap;
use uuid::Uuid;

/// Transport-assigned token naming a connection.
pub type ConnectionId = Uuid;

/// Deterministic session name: inviter identifier followed by joiner
/// identifier, both in simple (hyphen-less) form.
pub type RoomId = String;

/// Explicit per-connection session state.
#[derive(Debug, Clone, PartialEq)]
pub enum PairingState {
    Unpaired,
    Paired { peer: ConnectionId, room: RoomId },
}

/// Result of a `ready` request, decided synchronously by the registry.
/// Only `Paired` mutates state.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinOutcome {
    /// A room formed; both parties must be told to start.
    Paired { room: RoomId },
    /// The target exists but already has a peer; only the requester is told.
    TargetBusy,
    /// The target identifier is not a live connection. Dropped silently.
    UnknownTarget,
    /// A connection asked to pair with itself. Dropped silently.
    SelfTarget,
    /// The requester is already in a room. Dropped silently.
    RequesterBusy,
}

#[derive(Default)]
pub struct ConnectionRegistry {
    connections: HashMap<ConnectionId, PairingState>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: HashMap::new(),
        }
    }

    /// Register a fresh connection. New connections start unpaired.
    pub fn insert(&mut self, id: ConnectionId) {
        self.connections.insert(id, PairingState::Unpaired);
    }

    pub fn contains(&self, id: &ConnectionId) -> bool {
        self.connections.contains_key(id)
    }

    pub fn pairing_state(&self, id: &ConnectionId) -> Option<&PairingState> {
        self.connections.get(id)
    }

    /// A connection can be paired with if it exists and has no peer yet.
    pub fn is_available(&self, id: &ConnectionId) -> bool {
        matches!(self.connections.get(id), Some(PairingState::Unpaired))
    }

    /// The other member of the connection's room, if it has one.
    pub fn peer_of(&self, id: &ConnectionId) -> Option<ConnectionId> {
        match self.connections.get(id) {
            Some(PairingState::Paired { peer, .. }) => Some(*peer),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Room name convention: the invited (target) identifier first, then
    /// the requester's.
    pub fn room_name(target: &ConnectionId, requester: &ConnectionId) -> RoomId {
        format!("{}{}", target.simple(), requester.simple())
    }

    /// Decide a `ready` request from `requester` naming `target`.
    ///
    /// On success both connections move to `Paired` with the same room;
    /// every other outcome leaves the registry untouched.
    pub fn join(&mut self, requester: ConnectionId, target: ConnectionId) -> JoinOutcome {
        if requester == target {
            return JoinOutcome::SelfTarget;
        }
        if !self.contains(&target) {
            return JoinOutcome::UnknownTarget;
        }
        if !self.is_available(&requester) {
            return JoinOutcome::RequesterBusy;
        }
        if !self.is_available(&target) {
            return JoinOutcome::TargetBusy;
        }

        let room = Self::room_name(&target, &requester);
        self.connections.insert(
            target,
            PairingState::Paired {
                peer: requester,
                room: room.clone(),
            },
        );
        self.connections.insert(
            requester,
            PairingState::Paired {
                peer: target,
                room: room.clone(),
            },
        );
        JoinOutcome::Paired { room }
    }

    /// Remove a closing connection. If it was paired, the surviving peer
    /// returns to `Unpaired` and is handed back so the caller can notify
    /// it; its own later relays become orphans and are dropped.
    pub fn disconnect(&mut self, id: &ConnectionId) -> Option<ConnectionId> {
        match self.connections.remove(id) {
            Some(PairingState::Paired { peer, .. }) => {
                if let Some(state) = self.connections.get_mut(&peer) {
                    *state = PairingState::Unpaired;
                    Some(peer)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
