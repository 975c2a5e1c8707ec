//! Plugin directory scanning.
//!
//! A plugin is a JSON descriptor, never code. Its `default` entry names one of
//! the compiled-in analyzers from the [`registry`](super::registry) and the
//! configuration to build it with:
//!
//! ```json
//! { "default": { "analyzer": "strategic", "seed": 7, "jitter": 0.25 } }
//! ```
//!
//! The analyzer is registered under the file stem (`houseRobot.json` →
//! `houseRobot`). Descriptors without a `default` entry are skipped quietly;
//! unreadable or invalid ones are skipped with a warning. Only failing to read
//! the directory itself aborts the scan.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::registry::create_analyzer;
use super::{AiConfig, MoveAnalyzer};

pub const PLUGIN_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("failed to read plugin directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Deserialize)]
struct PluginDescriptor {
    default: Option<PluginExport>,
}

#[derive(Debug, Deserialize)]
struct PluginExport {
    analyzer: String,
    #[serde(flatten)]
    config: AiConfig,
}

/// Scan `plugins_dir` once and instantiate every conforming plugin.
pub fn load_analyzers_from_plugins_dir(
    plugins_dir: &Path,
) -> Result<HashMap<String, Box<dyn MoveAnalyzer>>, PluginError> {
    let read_dir_err = |source| PluginError::ReadDir {
        path: plugins_dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(plugins_dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some(PLUGIN_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut analyzers = HashMap::new();
    for path in paths {
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        if let Some(analyzer) = load_plugin(&path) {
            debug!(plugin = %name, analyzer = analyzer.name(), "Loaded plugin analyzer");
            analyzers.insert(name.to_string(), analyzer);
        }
    }

    Ok(analyzers)
}

fn load_plugin(path: &Path) -> Option<Box<dyn MoveAnalyzer>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Skipping unreadable plugin");
            return None;
        }
    };

    let descriptor: PluginDescriptor = match serde_json::from_str(&raw) {
        Ok(descriptor) => descriptor,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Skipping malformed plugin");
            return None;
        }
    };

    let Some(export) = descriptor.default else {
        debug!(path = %path.display(), "Plugin has no default export, skipping");
        return None;
    };

    let analyzer = create_analyzer(&export.analyzer, &export.config);
    if analyzer.is_none() {
        warn!(
            path = %path.display(),
            analyzer = %export.analyzer,
            "Skipping plugin for unknown analyzer"
        );
    }
    analyzer
}
