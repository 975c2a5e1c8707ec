//! Analyzer configuration handling.
//!
//! Provides a typed interface for analyzer configuration, extracting standard
//! fields from JSON (plugin descriptors, service settings) while preserving
//! analyzer-specific custom fields.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for move analyzers.
///
/// # Standard Fields
///
/// - `seed`: Optional RNG seed. Analyzers that use randomness (uniform choice,
///   score jitter) seed their generator from it so that selections can be
///   replayed. Without it they draw from OS entropy.
/// - `jitter`: Optional upper bound of the random term the strategic analyzer
///   adds to each score. `0.0` turns the jitter off.
///
/// # Example JSON Config
///
/// ```json
/// {"seed": 12345, "jitter": 0.25, "label": "house robot"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jitter: Option<f64>,

    /// Analyzer-specific configuration not covered by the standard fields.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    /// Create an AiConfig from optional JSON value.
    ///
    /// Malformed input yields an empty config rather than an error.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_else(|_| Self::empty()),
            None => Self::empty(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Jitter bound, if one was configured and is a usable (finite, non-negative) number.
    pub fn jitter(&self) -> Option<f64> {
        self.jitter.filter(|j| j.is_finite() && *j >= 0.0)
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    /// Create an empty configuration (no seed, no custom fields).
    pub fn empty() -> Self {
        Self {
            seed: None,
            jitter: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    /// Create a configuration with just a seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }

    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = Some(jitter);
        self
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}
