//! Robot AI sessions and move decisions.

use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use tracing::{debug, warn};

use crate::ai::{
    create_analyzer, AiConfig, AiDifficulty, AiError, MoveAnalyzer, RandomMoveAnalyzer,
};
use crate::domain::{GameState, Move};

/// One robot's brain: a difficulty tier and the analyzer it binds.
pub struct BackgammonAi {
    difficulty: AiDifficulty,
    analyzer: Box<dyn MoveAnalyzer>,
    config: AiConfig,
}

impl BackgammonAi {
    pub fn new(difficulty: AiDifficulty) -> Self {
        Self::with_config(difficulty, AiConfig::empty())
    }

    /// `config` seeds whichever analyzer the tier binds, now and after
    /// later difficulty changes.
    pub fn with_config(difficulty: AiDifficulty, config: AiConfig) -> Self {
        let analyzer = analyzer_for(difficulty, &config);
        Self {
            difficulty,
            analyzer,
            config,
        }
    }

    pub fn difficulty(&self) -> AiDifficulty {
        self.difficulty
    }

    pub fn analyzer_name(&self) -> &'static str {
        self.analyzer.name()
    }

    /// Switch tier and rebind the matching analyzer.
    pub fn set_difficulty(&mut self, difficulty: AiDifficulty) {
        self.analyzer = analyzer_for(difficulty, &self.config);
        self.difficulty = difficulty;
    }

    /// Pick a move from `state.available_moves`, `None` when there are none.
    pub fn best_move<'a>(&self, state: &'a GameState) -> Result<Option<&'a Move>, AiError> {
        let moves = state.moves();
        if moves.is_empty() {
            return Ok(None);
        }
        let context = state.analyzer_context();
        self.analyzer.select_move(moves, Some(&context))
    }

    pub fn should_make_move(&self, state: &GameState) -> bool {
        state.has_moves()
    }
}

impl Default for BackgammonAi {
    fn default() -> Self {
        Self::new(AiDifficulty::default())
    }
}

fn analyzer_for(difficulty: AiDifficulty, config: &AiConfig) -> Box<dyn MoveAnalyzer> {
    create_analyzer(difficulty.analyzer_name(), config).unwrap_or_else(|| {
        warn!(%difficulty, "No analyzer registered for tier, using random");
        Box::new(RandomMoveAnalyzer::new(config.seed()))
    })
}

/// Session manager holding one [`BackgammonAi`] per robot.
///
/// Owned by whoever runs the robots; each instance keeps its own sessions.
pub struct RobotAiService {
    robots: DashMap<String, Arc<BackgammonAi>>,
    config: AiConfig,
}

impl RobotAiService {
    pub fn new() -> Self {
        Self::with_config(AiConfig::empty())
    }

    /// Every robot created by this service is built from `config`.
    pub fn with_config(config: AiConfig) -> Self {
        Self {
            robots: DashMap::new(),
            config,
        }
    }

    /// Get the robot's AI, creating it at `difficulty` on first request.
    ///
    /// An existing robot is returned as is: `difficulty` is only honoured at
    /// creation. Use [`set_robot_difficulty`](Self::set_robot_difficulty) to
    /// change tiers.
    pub fn get_ai(&self, robot_id: &str, difficulty: AiDifficulty) -> Arc<BackgammonAi> {
        let ai = self
            .robots
            .entry(robot_id.to_string())
            .or_insert_with(|| {
                debug!(robot_id, %difficulty, "Creating robot AI");
                Arc::new(BackgammonAi::with_config(difficulty, self.config.clone()))
            })
            .clone();

        if ai.difficulty() != difficulty {
            debug!(
                robot_id,
                requested = %difficulty,
                bound = %ai.difficulty(),
                "Robot already bound, requested difficulty ignored"
            );
        }
        ai
    }

    /// Rebind `robot_id` at `difficulty`; other robots are untouched.
    pub fn set_robot_difficulty(&self, robot_id: &str, difficulty: AiDifficulty) {
        let ai = Arc::new(BackgammonAi::with_config(difficulty, self.config.clone()));
        let previous = self.robots.insert(robot_id.to_string(), ai);
        debug!(
            robot_id,
            %difficulty,
            previous = ?previous.map(|p| p.difficulty()),
            "Robot difficulty set"
        );
    }

    /// Choose a move for `robot_id`, creating it at the default tier if needed.
    pub fn make_robot_move<'a>(
        &self,
        robot_id: &str,
        state: &'a GameState,
    ) -> Result<Option<&'a Move>, AiError> {
        let ai = self.get_ai(robot_id, AiDifficulty::default());
        let choice = ai.best_move(state)?;
        debug!(
            robot_id,
            analyzer = ai.analyzer_name(),
            candidates = state.moves().len(),
            chosen = ?choice.map(|m| m.id.as_str()),
            "Robot move selected"
        );
        Ok(choice)
    }

    /// True iff the state offers at least one move.
    pub fn should_move(&self, state: &GameState) -> bool {
        state.has_moves()
    }

    /// Forget `robot_id`. Returns whether it was bound.
    pub fn remove_robot(&self, robot_id: &str) -> bool {
        let removed = self.robots.remove(robot_id).is_some();
        debug!(robot_id, removed, "Robot AI removed");
        removed
    }

    pub fn robot_count(&self) -> usize {
        self.robots.len()
    }
}

impl Default for RobotAiService {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide random analyzer, seeded from the OS once on first use.
fn shared_random_analyzer() -> &'static RandomMoveAnalyzer {
    static SHARED_RANDOM: LazyLock<RandomMoveAnalyzer> =
        LazyLock::new(RandomMoveAnalyzer::default);
    &SHARED_RANDOM
}

/// Select with `analyzer`, or with the shared random analyzer when none is given.
pub fn select_move_from_list<'a>(
    moves: &'a [Move],
    analyzer: Option<&dyn MoveAnalyzer>,
) -> Result<Option<&'a Move>, AiError> {
    match analyzer {
        Some(analyzer) => analyzer.select_move(moves, None),
        None => shared_random_analyzer().select_move(moves, None),
    }
}
