//! Move analyzer module - handles automated move selection.
//!
//! This module provides:
//! - `MoveAnalyzer` trait for interchangeable selection strategies
//! - Built-in analyzers: random (seedable), furthest-from-off, strategic, example
//! - Difficulty tiers mapped onto the built-ins
//! - A static factory registry plus a name → analyzer table that plugin
//!   descriptors can extend

pub mod config;
mod difficulty;
mod example;
mod furthest_from_off;
pub mod plugin_loader;
mod random;
pub mod registry;
pub mod strategic;
mod trait_def;

pub use config::AiConfig;
pub use difficulty::AiDifficulty;
pub use example::ExamplePluginAnalyzer;
pub use furthest_from_off::FurthestFromOffMoveAnalyzer;
pub use plugin_loader::{load_analyzers_from_plugins_dir, PluginError};
pub use random::RandomMoveAnalyzer;
pub use registry::{create_analyzer, AnalyzerRegistry};
pub use strategic::{BoardPredicates, StrategicMoveAnalyzer, StubPredicates};
pub use trait_def::{AiError, MoveAnalyzer};
