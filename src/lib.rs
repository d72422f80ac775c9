//! Backend library for a link-invite tic-tac-toe game.
//!
//! The `server` half pairs WebSocket connections into two-party rooms and
//! relays their events; the `game` module is the client-side contract
//! those relayed events drive (board rules, history, phase machine,
//! invite links). Clients consume `game` and `server::messages`; the
//! binary wires `server` to an HTTP listener.

pub mod config;
pub mod game;
pub mod server;

mod tests;
