//! Move analyzer trait definition.

use std::fmt;

use crate::domain::{Move, MoveAnalyzerContext};

/// Errors that can occur during move selection.
///
/// An empty move list is not an error: analyzers answer `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// Analyzer failed to make a decision within timeout
    Timeout,
    /// Analyzer encountered an internal error
    Internal(String),
    /// Analyzer produced a move that was not among the candidates
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Timeout => write!(f, "AI decision timeout"),
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// Trait for move-selection strategies.
///
/// Implementations receive the legal moves produced by the rules engine and
/// must hand back one of them by reference, never a synthesized copy, so that
/// callers can check containment by identity. Analyzers must not depend on a
/// context being present: without one they fall back to the move's own
/// fields (`die_value`, `origin`).
pub trait MoveAnalyzer: Send + Sync {
    /// Name used in logs and registries.
    fn name(&self) -> &'static str;

    /// Choose one of `moves`, or `None` when there is nothing to choose.
    fn select_move<'a>(
        &self,
        moves: &'a [Move],
        context: Option<&MoveAnalyzerContext>,
    ) -> Result<Option<&'a Move>, AiError>;
}

/// Index of the highest-scoring candidate; the earliest one wins ties.
pub(crate) fn first_best_index<I>(scores: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, score) in scores.into_iter().enumerate() {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}
