//! Random move analyzer - picks a legal move uniformly at random.
//!
//! This module provides [`RandomMoveAnalyzer`], the reference implementation of the
//! [`MoveAnalyzer`](super::MoveAnalyzer) trait and the analyzer bound to the beginner tier.
//! It shows the patterns other analyzers follow:
//! - Thread-safe interior mutability using [`std::sync::Mutex`]
//! - Deterministic behavior via optional seeding
//! - Error handling without panics

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, MoveAnalyzer};
use crate::domain::{Move, MoveAnalyzerContext};

/// Analyzer that chooses uniformly among the candidate moves.
///
/// The generator is seeded once, at construction, not per call.
///
/// ```rust,ignore
/// // Non-deterministic (uses system entropy)
/// let analyzer = RandomMoveAnalyzer::new(None);
///
/// // Deterministic (same seed, same sequence of choices)
/// let seeded = RandomMoveAnalyzer::new(Some(12345));
/// ```
pub struct RandomMoveAnalyzer {
    /// `MoveAnalyzer` takes `&self`, so the RNG sits behind a `Mutex`.
    rng: Mutex<StdRng>,
}

impl RandomMoveAnalyzer {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    /// Create a new `RandomMoveAnalyzer`.
    ///
    /// * `Some(seed)` - reproducible choices (tests, replays)
    /// * `None` - OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for RandomMoveAnalyzer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl MoveAnalyzer for RandomMoveAnalyzer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn select_move<'a>(
        &self,
        moves: &'a [Move],
        _context: Option<&MoveAnalyzerContext>,
    ) -> Result<Option<&'a Move>, AiError> {
        if moves.is_empty() {
            return Ok(None);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        Ok(moves.choose(&mut *rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves() -> Vec<Move> {
        vec![Move::new("m1", 1), Move::new("m2", 2), Move::new("m3", 3)]
    }

    #[test]
    fn empty_input_yields_none() {
        let analyzer = RandomMoveAnalyzer::new(Some(1));
        assert_eq!(analyzer.select_move(&[], None), Ok(None));
    }

    #[test]
    fn same_seed_same_choices() {
        let moves = moves();
        let a = RandomMoveAnalyzer::new(Some(42));
        let b = RandomMoveAnalyzer::new(Some(42));

        for _ in 0..20 {
            let pick_a = a.select_move(&moves, None).unwrap().unwrap();
            let pick_b = b.select_move(&moves, None).unwrap().unwrap();
            assert_eq!(pick_a.id, pick_b.id);
        }
    }

    #[test]
    fn every_candidate_gets_picked_eventually() {
        let moves = moves();
        let analyzer = RandomMoveAnalyzer::new(Some(7));
        let mut seen = [false; 3];

        for _ in 0..300 {
            let pick = analyzer.select_move(&moves, None).unwrap().unwrap();
            let idx = moves
                .iter()
                .position(|m| std::ptr::eq(m, pick))
                .expect("pick must be one of the inputs");
            seen[idx] = true;
        }

        assert_eq!(seen, [true, true, true]);
    }
}
