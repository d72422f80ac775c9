// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the address of the relay server actor.
//! Used to share state between HTTP/WebSocket handlers and the actor system.

use actix::Addr;
use crate::server::relay::RelayServer;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the relay server actor (pairing, event relay, teardown).
    pub relay_addr: Addr<RelayServer>,
}

impl AppState {
    /// Create a new AppState with the given actor address.
    pub fn new(relay_addr: Addr<RelayServer>) -> Self {
        AppState { relay_addr }
    }
}
