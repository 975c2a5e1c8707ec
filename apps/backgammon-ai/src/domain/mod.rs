//! Domain layer: read-only views of what the rules engine hands the AI.

pub mod game_state;
pub mod moves;

// Re-exports for ergonomics
pub use game_state::{GamePhase, GameState, MoveAnalyzerContext};
pub use moves::{Move, MoveKind, MoveOrigin, MovePosition, MoveTarget};
