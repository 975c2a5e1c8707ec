//! Shared helpers for the backgammon-ai integration tests: logging setup and
//! canned moves and game states.

pub mod fixtures;
pub mod logging;
