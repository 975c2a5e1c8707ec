//! FurthestFromOff — deterministic positional heuristic.
//!
//! Scores each move by the clockwise distance of its origin, falling back to
//! the die value when the origin is unknown, and plays the highest score.
//! This is a proxy, not a true pip count to bear-off; it is kept that way so
//! robots at the intermediate tier play the same moves they always have.

use super::trait_def::{first_best_index, AiError, MoveAnalyzer};
use crate::domain::{Move, MoveAnalyzerContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct FurthestFromOffMoveAnalyzer;

impl FurthestFromOffMoveAnalyzer {
    pub const NAME: &'static str = "furthest-from-off";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }
}

impl MoveAnalyzer for FurthestFromOffMoveAnalyzer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn select_move<'a>(
        &self,
        moves: &'a [Move],
        _context: Option<&MoveAnalyzerContext>,
    ) -> Result<Option<&'a Move>, AiError> {
        let best = first_best_index(moves.iter().map(|m| f64::from(m.advancement())));
        Ok(best.and_then(|idx| moves.get(idx)))
    }
}
