use std::time::Duration;

use thiserror::Error;

/// Failures of the external engine path.
///
/// `Unavailable` is recoverable: callers are expected to fall back to a
/// built-in analyzer.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error("GNU Backgammon is not available.\n\n{instructions}")]
    Unavailable { instructions: String },
    #[error("could not parse best move from engine output")]
    Parse { output: String },
    #[error("engine execution failed: {detail}")]
    Execution { detail: String },
    #[error("engine call timed out after {after:?}")]
    Timeout { after: Duration },
}

impl EngineError {
    pub fn execution(detail: impl Into<String>) -> Self {
        Self::Execution {
            detail: detail.into(),
        }
    }

    pub fn parse(output: impl Into<String>) -> Self {
        Self::Parse {
            output: output.into(),
        }
    }

    /// Whether falling back to a built-in analyzer is the sensible response.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
