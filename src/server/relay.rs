/// Relay server actor.
///
/// Owns the connection registry and the identifier -> session address map,
/// and is the only writer of both. Pairs connections on `Ready`, forwards
/// in-room events to the peer, and emits the single `PlayerLeft`
/// notification on teardown.
///
/// Ordering: the actor drains its mailbox serially and `do_send` keeps
/// per-sender order, so a peer observes relayed events in exactly the
/// order the relaying connection sent them.
use actix::prelude::*;
use log::{debug, info};
use std::collections::HashMap;

use super::messages::{RelayEvent, ServerWsMessage};
use super::registry::{ConnectionId, ConnectionRegistry, JoinOutcome};
use super::session::ClientSession;

type SessionAddr = Addr<ClientSession>;

/// Outbound messages computed for one inbound event, as
/// (recipient, message) pairs in dispatch order.
type Deliveries = Vec<(ConnectionId, ServerWsMessage)>;

/// Deliveries for a join outcome: one `Start` to each party on success,
/// `RoomFull` to the requester only when the target is occupied, nothing
/// for the silently dropped cases.
fn ready_deliveries(
    requester: ConnectionId,
    target: ConnectionId,
    outcome: &JoinOutcome,
) -> Deliveries {
    match outcome {
        JoinOutcome::Paired { .. } => vec![
            (target, ServerWsMessage::Start),
            (requester, ServerWsMessage::Start),
        ],
        JoinOutcome::TargetBusy => vec![(requester, ServerWsMessage::RoomFull)],
        JoinOutcome::UnknownTarget | JoinOutcome::SelfTarget | JoinOutcome::RequesterBusy => {
            Vec::new()
        }
    }
}

/// Deliveries for an in-session event: the peer gets it verbatim, the
/// sender gets no echo, orphans get dropped.
fn forward_deliveries(peer: Option<ConnectionId>, event: RelayEvent) -> Deliveries {
    match peer {
        Some(peer) => vec![(peer, event.into())],
        None => Vec::new(),
    }
}

/// Deliveries for a teardown: the surviving peer is told exactly once.
fn teardown_deliveries(survivor: Option<ConnectionId>) -> Deliveries {
    match survivor {
        Some(peer) => vec![(peer, ServerWsMessage::PlayerLeft)],
        None => Vec::new(),
    }
}

pub struct RelayServer {
    registry: ConnectionRegistry,
    sessions: HashMap<ConnectionId, SessionAddr>,
}

impl RelayServer {
    pub fn new() -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            sessions: HashMap::new(),
        }
    }

    fn send_to(&self, id: &ConnectionId, msg: ServerWsMessage) {
        if let Some(addr) = self.sessions.get(id) {
            addr.do_send(msg);
        }
    }

    fn dispatch(&self, deliveries: Deliveries) {
        for (id, msg) in deliveries {
            self.send_to(&id, msg);
        }
    }
}

impl Default for RelayServer {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for RelayServer {
    type Context = Context<Self>;
}

/// Message: a WebSocket session came up and registers itself.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub id: ConnectionId,
    pub addr: SessionAddr,
}

/// Message: a connection announced readiness to join `target`.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Ready {
    pub id: ConnectionId,
    pub target: ConnectionId,
}

/// Message: an in-session event to forward to the sender's peer.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Forward {
    pub id: ConnectionId,
    pub event: RelayEvent,
}

/// Message: a connection's underlying link closed.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub id: ConnectionId,
}

impl Handler<Connect> for RelayServer {
    type Result = ();

    /// Registers the connection and tells it its assigned identifier.
    fn handle(&mut self, msg: Connect, _ctx: &mut Self::Context) -> Self::Result {
        self.registry.insert(msg.id);
        self.sessions.insert(msg.id, msg.addr);
        info!("[Relay] Connection {} registered ({} live)", msg.id, self.registry.len());
        self.send_to(&msg.id, ServerWsMessage::welcome(msg.id));
    }
}

impl Handler<Ready> for RelayServer {
    type Result = ();

    /// Tries to pair the requester with its invite target. Exactly one
    /// room forms per successful pairing and each party gets exactly one
    /// `Start`; an occupied target yields `RoomFull` to the requester
    /// only; everything else is dropped without a reply.
    fn handle(&mut self, msg: Ready, _ctx: &mut Self::Context) -> Self::Result {
        let outcome = self.registry.join(msg.id, msg.target);
        match &outcome {
            JoinOutcome::Paired { room } => {
                info!("[Relay] Room {} formed: {} + {}", room, msg.target, msg.id);
            }
            JoinOutcome::TargetBusy => {
                debug!("[Relay] {} asked for occupied target {}", msg.id, msg.target);
            }
            JoinOutcome::UnknownTarget => {
                debug!("[Relay] {} asked for unknown target {}", msg.id, msg.target);
            }
            JoinOutcome::SelfTarget => {
                debug!("[Relay] {} tried to pair with itself", msg.id);
            }
            JoinOutcome::RequesterBusy => {
                debug!("[Relay] {} is already paired, ready ignored", msg.id);
            }
        }
        self.dispatch(ready_deliveries(msg.id, msg.target, &outcome));
    }
}

impl Handler<Forward> for RelayServer {
    type Result = ();

    /// Forwards the event verbatim to the sender's peer. No echo to the
    /// sender, no payload inspection; orphan events (sender unpaired or
    /// peer already gone) are dropped.
    fn handle(&mut self, msg: Forward, _ctx: &mut Self::Context) -> Self::Result {
        let peer = self.registry.peer_of(&msg.id);
        if peer.is_none() {
            debug!("[Relay] Orphan event from {} dropped", msg.id);
        }
        self.dispatch(forward_deliveries(peer, msg.event));
    }
}

impl Handler<Disconnect> for RelayServer {
    type Result = ();

    /// Teardown: notify the surviving peer before forgetting the closing
    /// connection's address. Fire-and-forget, no acknowledgment.
    fn handle(&mut self, msg: Disconnect, _ctx: &mut Self::Context) -> Self::Result {
        let survivor = self.registry.disconnect(&msg.id);
        match survivor {
            Some(peer) => info!("[Relay] Connection {} left, notifying peer {}", msg.id, peer),
            None => debug!("[Relay] Connection {} left unpaired", msg.id),
        }
        self.dispatch(teardown_deliveries(survivor));
        self.sessions.remove(&msg.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn pairing_sends_exactly_one_start_to_each_party() {
        let (requester, target) = (Uuid::new_v4(), Uuid::new_v4());
        let outcome = JoinOutcome::Paired {
            room: String::new(),
        };

        let deliveries = ready_deliveries(requester, target, &outcome);

        assert_eq!(
            deliveries,
            vec![
                (target, ServerWsMessage::Start),
                (requester, ServerWsMessage::Start),
            ]
        );
    }

    #[test]
    fn occupied_target_notifies_the_requester_only() {
        let (requester, target) = (Uuid::new_v4(), Uuid::new_v4());

        let deliveries = ready_deliveries(requester, target, &JoinOutcome::TargetBusy);

        assert_eq!(deliveries, vec![(requester, ServerWsMessage::RoomFull)]);
        assert!(deliveries.iter().all(|(id, _)| *id != target));
    }

    #[test]
    fn dropped_join_outcomes_reply_to_nobody() {
        let (requester, target) = (Uuid::new_v4(), Uuid::new_v4());
        for outcome in [
            JoinOutcome::UnknownTarget,
            JoinOutcome::SelfTarget,
            JoinOutcome::RequesterBusy,
        ] {
            assert!(ready_deliveries(requester, target, &outcome).is_empty());
        }
    }

    #[test]
    fn forwarded_play_reaches_the_peer_with_no_echo() {
        let peer = Uuid::new_v4();

        let deliveries = forward_deliveries(Some(peer), RelayEvent::Play(4));

        assert_eq!(deliveries, vec![(peer, ServerWsMessage::Play(4))]);
    }

    #[test]
    fn consecutive_forwards_keep_their_order() {
        let peer = Uuid::new_v4();

        let mut observed = forward_deliveries(Some(peer), RelayEvent::Play(2));
        observed.extend(forward_deliveries(Some(peer), RelayEvent::Play(5)));

        assert_eq!(
            observed,
            vec![
                (peer, ServerWsMessage::Play(2)),
                (peer, ServerWsMessage::Play(5)),
            ]
        );
    }

    #[test]
    fn orphan_forward_is_dropped() {
        assert!(forward_deliveries(None, RelayEvent::NewGame).is_empty());
    }

    #[test]
    fn teardown_notifies_the_survivor_exactly_once() {
        let survivor = Uuid::new_v4();

        assert_eq!(
            teardown_deliveries(Some(survivor)),
            vec![(survivor, ServerWsMessage::PlayerLeft)]
        );
        assert!(teardown_deliveries(None).is_empty());
    }
}
