// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the main backend server components, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - The connection registry (who is live, who is paired)
//! - The relay server actor (pairing, event relay, teardown)
//! - Per-connection WebSocket sessions and the wire message contract

pub mod state;
pub mod router;
pub mod registry;
pub mod relay;
pub mod session;
pub mod messages;
pub mod ws_error;
