//! Canned moves and states.

use backgammon_ai::domain::{GamePhase, GameState, Move, MoveTarget};
use serde_json::json;

pub const ROBOT_ID: &str = "robot1";
pub const OPENING_POSITION_ID: &str = "4HPwATDgc/ABMA";

/// Three legal-looking moves for dice 1, 2 and 3: 24/23, 13/11, 8/5.
pub fn mock_moves() -> Vec<Move> {
    vec![
        Move::new("move1", 1)
            .with_player(ROBOT_ID)
            .with_origin(24, 1)
            .with_points(24, MoveTarget::Point(23)),
        Move::new("move2", 2)
            .with_player(ROBOT_ID)
            .with_origin(13, 12)
            .with_points(13, MoveTarget::Point(11)),
        Move::new("move3", 3)
            .with_player(ROBOT_ID)
            .with_origin(8, 17)
            .with_points(8, MoveTarget::Point(5)),
    ]
}

/// Moves whose origins sit at 10, 20 and 5 points from home.
pub fn spread_origin_moves() -> Vec<Move> {
    [("near", 10u8), ("far", 20), ("home", 5)]
        .into_iter()
        .enumerate()
        .map(|(i, (id, clockwise))| {
            Move::new(id, (i + 1) as u8).with_origin(clockwise, 25 - clockwise)
        })
        .collect()
}

pub fn mock_game_state() -> GameState {
    GameState {
        position_id: Some(OPENING_POSITION_ID.to_string()),
        board: Some(json!({ "points": [] })),
        current_player: Some(ROBOT_ID.to_string()),
        available_moves: Some(mock_moves()),
        game_phase: Some(GamePhase::Opening),
    }
}

pub fn state_without_moves() -> GameState {
    GameState {
        available_moves: None,
        ..mock_game_state()
    }
}
