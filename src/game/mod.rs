//! Client-side game contract.
//!
//! The relay never interprets game content; everything about turn
//! legality, win/draw detection and history lives here, driven by the
//! relay events each side receives.

pub mod board;
pub mod history;
pub mod invite;
pub mod machine;
