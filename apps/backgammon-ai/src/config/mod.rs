pub mod engine;

pub use engine::{ConfigError, EngineConfig, EngineMode};
