//! Best-effort extraction of the top move from `hint` output.
//!
//! The engine prints a ranked table:
//!
//! ```text
//!     1. Cubeful 0-ply    8/4 6/4                      Eq.:  +0.158
//!     2. Cubeful 0-ply    13/9 13/11                   Eq.:  +0.102 ( -0.056)
//! ```
//!
//! Row 1 is taken when present; otherwise a `gnubg moves <move>.` line.

use std::sync::LazyLock;

use regex::Regex;

use super::error::EngineError;

/// Rank-1 row: marker, two label columns, then one or more `from/to` pairs.
fn rank_one_row() -> &'static Regex {
    static RANK_ONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^\s*1\.\s+\S+\s+\S+\s+((?:[a-zA-Z0-9*]+/[a-zA-Z0-9*]+\*?\s*)+)").unwrap()
    });
    &RANK_ONE_REGEX
}

/// Narrated move, as printed after the engine plays.
fn engine_moves_line() -> &'static Regex {
    static ENGINE_MOVES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"(?i)gnubg moves ([\w/* ]+)\.").unwrap()
    });
    &ENGINE_MOVES_REGEX
}

pub fn parse_best_move_from_hint(hint_output: &str) -> Result<String, EngineError> {
    let captured = |re: &Regex| {
        hint_output
            .lines()
            .find_map(|line| re.captures(line))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    };

    captured(rank_one_row())
        .or_else(|| captured(engine_moves_line()))
        .ok_or_else(|| EngineError::parse(hint_output))
}
