//! Game-state snapshot passed in by callers and the per-call analyzer context.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::moves::Move;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Opening,
    Middle,
    Race,
    Bearoff,
}

impl GamePhase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Opening => "opening",
            GamePhase::Middle => "middle",
            GamePhase::Race => "race",
            GamePhase::Bearoff => "bearoff",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GamePhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "opening" => Ok(GamePhase::Opening),
            "middle" => Ok(GamePhase::Middle),
            "race" => Ok(GamePhase::Race),
            "bearoff" => Ok(GamePhase::Bearoff),
            other => Err(format!("unknown game phase '{other}'")),
        }
    }
}

/// What the rules engine knows about the position when a robot must act.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_moves: Option<Vec<Move>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_phase: Option<GamePhase>,
}

impl GameState {
    pub fn with_moves(moves: Vec<Move>) -> Self {
        Self {
            available_moves: Some(moves),
            ..Self::default()
        }
    }

    /// Moves on offer; absent and empty are treated alike.
    pub fn moves(&self) -> &[Move] {
        self.available_moves.as_deref().unwrap_or(&[])
    }

    pub fn has_moves(&self) -> bool {
        !self.moves().is_empty()
    }

    /// Situational hints for analyzers, copied out of this snapshot.
    pub fn analyzer_context(&self) -> MoveAnalyzerContext {
        MoveAnalyzerContext {
            board: self.board.clone(),
            position_id: self.position_id.clone(),
            game_phase: self.game_phase,
            current_player: self.current_player.clone(),
        }
    }
}

/// Optional hints an analyzer may use. Built per call, never retained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveAnalyzerContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_phase: Option<GamePhase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_player: Option<String>,
}

impl MoveAnalyzerContext {
    pub fn for_phase(phase: GamePhase) -> Self {
        Self {
            game_phase: Some(phase),
            ..Self::default()
        }
    }
}
