//! How to register your analyzer
//!
//! 1) Implement `MoveAnalyzer` for your type in its module.
//! 2) Add a new `AnalyzerFactory` entry to the static list with stable `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed ⇒ same behavior (where applicable).
//!
//! Plugin descriptors and difficulty tiers only ever refer to analyzers by the
//! names listed here.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use super::plugin_loader::{load_analyzers_from_plugins_dir, PluginError};
use super::{
    AiConfig, AiError, ExamplePluginAnalyzer, FurthestFromOffMoveAnalyzer, MoveAnalyzer,
    RandomMoveAnalyzer, StrategicMoveAnalyzer,
};
use crate::domain::{Move, MoveAnalyzerContext};

/// Factory definition for constructing analyzer implementations.
pub struct AnalyzerFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &AiConfig) -> Box<dyn MoveAnalyzer>,
}

static ANALYZER_FACTORIES: &[AnalyzerFactory] = &[
    AnalyzerFactory {
        name: RandomMoveAnalyzer::NAME,
        version: RandomMoveAnalyzer::VERSION,
        make: make_random,
    },
    AnalyzerFactory {
        name: FurthestFromOffMoveAnalyzer::NAME,
        version: FurthestFromOffMoveAnalyzer::VERSION,
        make: make_furthest_from_off,
    },
    AnalyzerFactory {
        name: StrategicMoveAnalyzer::NAME,
        version: StrategicMoveAnalyzer::VERSION,
        make: make_strategic,
    },
    AnalyzerFactory {
        name: ExamplePluginAnalyzer::NAME,
        version: ExamplePluginAnalyzer::VERSION,
        make: make_example,
    },
];

/// Returns the statically registered analyzer factories.
pub fn registered_analyzers() -> &'static [AnalyzerFactory] {
    ANALYZER_FACTORIES
}

/// Finds a registered analyzer factory by its name.
pub fn by_name(name: &str) -> Option<&'static AnalyzerFactory> {
    registered_analyzers()
        .iter()
        .find(|factory| factory.name == name)
}

/// Create an analyzer from its registry name and config.
///
/// Returns None if the name is unrecognized.
pub fn create_analyzer(name: &str, config: &AiConfig) -> Option<Box<dyn MoveAnalyzer>> {
    by_name(name).map(|factory| (factory.make)(config))
}

fn make_random(config: &AiConfig) -> Box<dyn MoveAnalyzer> {
    Box::new(RandomMoveAnalyzer::new(config.seed()))
}

fn make_furthest_from_off(_config: &AiConfig) -> Box<dyn MoveAnalyzer> {
    Box::new(FurthestFromOffMoveAnalyzer::new())
}

fn make_strategic(config: &AiConfig) -> Box<dyn MoveAnalyzer> {
    let analyzer = StrategicMoveAnalyzer::new(config.seed());
    match config.jitter() {
        Some(jitter) => Box::new(analyzer.with_jitter(jitter)),
        None => Box::new(analyzer),
    }
}

fn make_example(_config: &AiConfig) -> Box<dyn MoveAnalyzer> {
    Box::new(ExamplePluginAnalyzer)
}

/// Uniform name → analyzer table.
///
/// Built-ins are registered first; analyzers described in a plugin directory
/// are appended afterwards and take precedence on a name clash.
#[derive(Default)]
pub struct AnalyzerRegistry {
    analyzers: HashMap<String, Arc<dyn MoveAnalyzer>>,
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding one instance of every built-in analyzer.
    pub fn with_builtins(config: &AiConfig) -> Self {
        let mut registry = Self::new();
        for factory in registered_analyzers() {
            registry.insert(factory.name, (factory.make)(config));
        }
        registry
    }

    pub fn insert(&mut self, name: impl Into<String>, analyzer: Box<dyn MoveAnalyzer>) {
        let name = name.into();
        if self.analyzers.contains_key(&name) {
            warn!(analyzer = %name, "Replacing registered analyzer");
        }
        self.analyzers.insert(name, Arc::from(analyzer));
    }

    /// Scan `dir` once and register every plugin found there.
    ///
    /// A directory that cannot be read leaves the registry untouched.
    pub fn extend_from_dir(&mut self, dir: &Path) -> Result<usize, PluginError> {
        let plugins = load_analyzers_from_plugins_dir(dir)?;
        let count = plugins.len();
        for (name, analyzer) in plugins {
            self.insert(name, analyzer);
        }
        debug!(dir = %dir.display(), count, "Plugin analyzers registered");
        Ok(count)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn MoveAnalyzer>> {
        self.analyzers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.analyzers.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.analyzers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }

    /// Run the analyzer registered as `name`.
    pub fn select_move<'a>(
        &self,
        name: &str,
        moves: &'a [Move],
        context: Option<&MoveAnalyzerContext>,
    ) -> Result<Option<&'a Move>, AiError> {
        let analyzer = self
            .analyzers
            .get(name)
            .ok_or_else(|| AiError::Internal(format!("no analyzer registered as '{name}'")))?;
        analyzer.select_move(moves, context)
    }
}
