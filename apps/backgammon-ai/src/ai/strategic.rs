//! Strategic — phase-weighted multi-factor scorer.
//!
//! Per-move score:
//!
//! ```text
//! 0.1 * advancement + phase_score(move, phase) + jitter in [0, max_jitter)
//! ```
//!
//! where `advancement` is the origin's clockwise distance (die value when the
//! origin is unknown) and `phase_score` depends on the game phase:
//!
//! | phase   | bonus                                                          |
//! |---------|----------------------------------------------------------------|
//! | opening | +2.0 creates a point, +1.5 brings a builder into play          |
//! | middle  | +1.0 safe, +1.5 attacks a blot                                 |
//! | race    | +0.3 per pip on the die, +1.0 clears a back point              |
//! | bearoff | +3.0 bears a checker off, +1.0 keeps an efficient distribution |
//!
//! No phase in the context scores 0.0. The board-aware conditions need real
//! board state; they are answered by a [`BoardPredicates`] implementation,
//! and the default one returns fixed answers.
//!
//! Determinism:
//! - With `max_jitter == 0.0` the choice is fully deterministic.
//! - Otherwise the jitter comes from a seedable RNG; unseeded analyzers vary
//!   across calls on identical input.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{first_best_index, AiError, MoveAnalyzer};
use crate::domain::{GamePhase, Move, MoveAnalyzerContext};

pub const DEFAULT_JITTER: f64 = 0.5;

const ADVANCEMENT_WEIGHT: f64 = 0.1;
const CREATES_POINT_BONUS: f64 = 2.0;
const BUILDER_BONUS: f64 = 1.5;
const SAFE_BONUS: f64 = 1.0;
const ATTACK_BLOT_BONUS: f64 = 1.5;
const RACE_PIP_WEIGHT: f64 = 0.3;
const CLEARS_BACK_POINT_BONUS: f64 = 1.0;
const BEAR_OFF_BONUS: f64 = 3.0;
const DISTRIBUTION_BONUS: f64 = 1.0;

/// Board-aware conditions consulted by [`StrategicMoveAnalyzer`].
///
/// The provided defaults are placeholders: they ignore the board and return
/// the same answer for every move.
pub trait BoardPredicates: Send + Sync {
    fn creates_point(&self, _mv: &Move, _ctx: Option<&MoveAnalyzerContext>) -> bool {
        false
    }

    fn brings_builder_into_play(&self, _mv: &Move, _ctx: Option<&MoveAnalyzerContext>) -> bool {
        false
    }

    fn is_safe(&self, _mv: &Move, _ctx: Option<&MoveAnalyzerContext>) -> bool {
        true
    }

    fn attacks_blot(&self, _mv: &Move, _ctx: Option<&MoveAnalyzerContext>) -> bool {
        false
    }

    fn clears_back_point(&self, _mv: &Move, _ctx: Option<&MoveAnalyzerContext>) -> bool {
        false
    }

    fn maintains_distribution(&self, _mv: &Move, _ctx: Option<&MoveAnalyzerContext>) -> bool {
        true
    }
}

/// Fixed answers for every predicate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubPredicates;

impl BoardPredicates for StubPredicates {}

pub struct StrategicMoveAnalyzer {
    predicates: Box<dyn BoardPredicates>,
    max_jitter: f64,
    rng: Mutex<StdRng>,
}

impl StrategicMoveAnalyzer {
    pub const NAME: &'static str = "strategic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            predicates: Box::new(StubPredicates),
            max_jitter: DEFAULT_JITTER,
            rng: Mutex::new(rng),
        }
    }

    /// Upper bound of the random term; non-finite or negative values disable it.
    pub fn with_jitter(mut self, max_jitter: f64) -> Self {
        self.max_jitter = if max_jitter.is_finite() && max_jitter > 0.0 {
            max_jitter
        } else {
            0.0
        };
        self
    }

    pub fn with_predicates(mut self, predicates: impl BoardPredicates + 'static) -> Self {
        self.predicates = Box::new(predicates);
        self
    }

    pub fn max_jitter(&self) -> f64 {
        self.max_jitter
    }

    /// Deterministic part of a move's score.
    pub fn base_score(&self, mv: &Move, ctx: Option<&MoveAnalyzerContext>) -> f64 {
        ADVANCEMENT_WEIGHT * f64::from(mv.advancement()) + self.phase_score(mv, ctx)
    }

    fn phase_score(&self, mv: &Move, ctx: Option<&MoveAnalyzerContext>) -> f64 {
        let p = &self.predicates;
        let bonus = |cond: bool, weight: f64| if cond { weight } else { 0.0 };

        match ctx.and_then(|c| c.game_phase) {
            Some(GamePhase::Opening) => {
                bonus(p.creates_point(mv, ctx), CREATES_POINT_BONUS)
                    + bonus(p.brings_builder_into_play(mv, ctx), BUILDER_BONUS)
            }
            Some(GamePhase::Middle) => {
                bonus(p.is_safe(mv, ctx), SAFE_BONUS)
                    + bonus(p.attacks_blot(mv, ctx), ATTACK_BLOT_BONUS)
            }
            Some(GamePhase::Race) => {
                RACE_PIP_WEIGHT * f64::from(mv.die_value)
                    + bonus(p.clears_back_point(mv, ctx), CLEARS_BACK_POINT_BONUS)
            }
            Some(GamePhase::Bearoff) => {
                bonus(mv.is_bear_off(), BEAR_OFF_BONUS)
                    + bonus(p.maintains_distribution(mv, ctx), DISTRIBUTION_BONUS)
            }
            None => 0.0,
        }
    }
}

impl Default for StrategicMoveAnalyzer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl MoveAnalyzer for StrategicMoveAnalyzer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn select_move<'a>(
        &self,
        moves: &'a [Move],
        context: Option<&MoveAnalyzerContext>,
    ) -> Result<Option<&'a Move>, AiError> {
        if moves.is_empty() {
            return Ok(None);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        let scores: Vec<f64> = moves
            .iter()
            .map(|mv| {
                let jitter = if self.max_jitter > 0.0 {
                    rng.random_range(0.0..self.max_jitter)
                } else {
                    0.0
                };
                self.base_score(mv, context) + jitter
            })
            .collect();

        Ok(first_best_index(scores).and_then(|idx| moves.get(idx)))
    }
}
