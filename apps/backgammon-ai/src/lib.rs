#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Move selection for a backgammon robot player.
//!
//! [`ai`] holds the interchangeable analyzers and their registry,
//! [`services`] binds analyzers to robot players, and [`engine`] talks to an
//! external GNU Backgammon engine as an independent oracle.

pub mod ai;
pub mod config;
pub mod domain;
pub mod engine;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

pub use ai::{AiConfig, AiDifficulty, AiError, AnalyzerRegistry, MoveAnalyzer};
pub use config::{ConfigError, EngineConfig, EngineMode};
pub use domain::{GamePhase, GameState, Move, MoveAnalyzerContext};
pub use engine::{EngineError, EngineInfo, GnubgBridge};
pub use services::{select_move_from_list, BackgammonAi, RobotAiService};

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
