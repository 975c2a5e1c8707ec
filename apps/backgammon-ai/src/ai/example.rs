//! Template for new analyzers: always plays the first candidate.
//!
//! Copy this file, give the type a stable `NAME`, and add a factory entry in
//! [`registry`](super::registry) to make it selectable from plugin descriptors.

use super::trait_def::{AiError, MoveAnalyzer};
use crate::domain::{Move, MoveAnalyzerContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExamplePluginAnalyzer;

impl ExamplePluginAnalyzer {
    pub const NAME: &'static str = "example";
    pub const VERSION: &'static str = "0.1.0";
}

impl MoveAnalyzer for ExamplePluginAnalyzer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn select_move<'a>(
        &self,
        moves: &'a [Move],
        _context: Option<&MoveAnalyzerContext>,
    ) -> Result<Option<&'a Move>, AiError> {
        Ok(moves.first())
    }
}
