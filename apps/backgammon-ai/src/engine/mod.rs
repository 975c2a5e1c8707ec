//! External engine bridge (GNU Backgammon).
//!
//! An independent oracle path: nothing in [`crate::ai`] calls it. The bridge
//! asks the engine for its `hint` table on a position, either by running the
//! engine as a subprocess or through an HTTP evaluation service, and parses
//! the top-ranked move out of the text.

mod error;
pub mod locate;
mod parse;
mod process;
mod service;
mod transport;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

pub use error::EngineError;
pub use parse::parse_best_move_from_hint;
pub use process::ProcessTransport;
pub use service::{ServiceTransport, DEFAULT_SERVICE_URL};
pub use transport::{command_script, EngineTransport};

use crate::config::engine::{EngineConfig, EngineMode};

/// Position ID of the standard opening position.
pub const STARTING_POSITION_ID: &str = "4HPwATDgc/ABMA";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const BUILD_INSTRUCTIONS: &str = "\
GNU Backgammon (gnubg) is not available. To build it locally:

1. Install dependencies (macOS with Homebrew):
   brew install autoconf automake libtool pkg-config glib readline sqlite

2. Configure and build (minimal configuration for AI use):
   gnubg-setup configure
   gnubg-setup build

3. Optional - install system-wide with `make install` inside ./gnubg,
   or point GNUBG_PATH at an existing executable.

Alternatively run the evaluation service and set GNUBG_MODE=service.";

/// Snapshot of what the bridge can reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineInfo {
    pub available: bool,
    pub path: Option<PathBuf>,
    pub version: Option<String>,
    pub has_local_build: bool,
}

pub struct GnubgBridge {
    transport: Option<Arc<dyn EngineTransport>>,
    process: Option<Arc<ProcessTransport>>,
    timeout: Duration,
}

impl GnubgBridge {
    /// Build the bridge described by `config`. Finding no executable in
    /// process mode leaves the bridge unavailable rather than failing.
    pub fn discover(config: &EngineConfig) -> Self {
        let bridge = match &config.mode {
            EngineMode::Process => match locate::locate_engine(config.executable.as_deref()) {
                Some(path) => Self::from_executable(path, config.timeout),
                None => Self::unavailable(config.timeout),
            },
            EngineMode::Service { base_url } => Self::service(base_url.clone(), config.timeout),
        };
        info!(
            available = bridge.is_available(),
            transport = ?bridge.transport.as_ref().map(|t| t.describe()),
            "Engine bridge initialized"
        );
        bridge
    }

    pub fn from_executable(path: impl Into<PathBuf>, timeout: Duration) -> Self {
        let process = Arc::new(ProcessTransport::new(path));
        Self {
            transport: Some(process.clone()),
            process: Some(process),
            timeout,
        }
    }

    pub fn service(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self::with_transport(ServiceTransport::new(base_url), timeout)
    }

    /// Bridge over any transport, e.g. a fake in tests.
    pub fn with_transport(transport: impl EngineTransport + 'static, timeout: Duration) -> Self {
        Self {
            transport: Some(Arc::new(transport)),
            process: None,
            timeout,
        }
    }

    pub fn unavailable(timeout: Duration) -> Self {
        Self {
            transport: None,
            process: None,
            timeout,
        }
    }

    pub fn is_available(&self) -> bool {
        self.transport.is_some()
    }

    /// Executable in use, in process mode.
    pub fn executable(&self) -> Option<&Path> {
        self.process.as_deref().map(ProcessTransport::executable)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Raw `hint` text for `position_id`.
    pub async fn hint_output(
        &self,
        position_id: &str,
        timeout: Duration,
    ) -> Result<String, EngineError> {
        let Some(transport) = &self.transport else {
            return Err(EngineError::Unavailable {
                instructions: build_instructions().to_string(),
            });
        };

        debug!(position_id, transport = %transport.describe(), "Asking engine for hint");
        match tokio::time::timeout(timeout, transport.hint(position_id)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(position_id, ?timeout, "Engine hint timed out");
                Err(EngineError::Timeout { after: timeout })
            }
        }
    }

    /// Best move for `position_id` within the bridge's default timeout.
    pub async fn get_best_move(&self, position_id: &str) -> Result<String, EngineError> {
        self.get_best_move_with_timeout(position_id, self.timeout)
            .await
    }

    pub async fn get_best_move_with_timeout(
        &self,
        position_id: &str,
        timeout: Duration,
    ) -> Result<String, EngineError> {
        let output = self.hint_output(position_id, timeout).await?;
        let best = parse_best_move_from_hint(&output)?;
        info!(position_id, best_move = %best, "Best move from engine");
        Ok(best)
    }

    pub async fn best_move_for_starting_position(&self) -> Result<String, EngineError> {
        self.get_best_move(STARTING_POSITION_ID).await
    }

    /// Engine version, in process mode.
    pub async fn version(&self) -> Result<String, EngineError> {
        match &self.process {
            Some(process) => process.version().await,
            None if self.is_available() => Err(EngineError::execution(
                "version is only reported by a local engine executable",
            )),
            None => Err(EngineError::Unavailable {
                instructions: build_instructions().to_string(),
            }),
        }
    }

    pub async fn info(&self) -> EngineInfo {
        let version = if self.process.is_some() {
            Some(
                self.version()
                    .await
                    .unwrap_or_else(|_| "Unknown".to_string()),
            )
        } else {
            None
        };
        EngineInfo {
            available: self.is_available(),
            path: self.executable().map(Path::to_path_buf),
            version,
            has_local_build: has_local_build(),
        }
    }
}

/// Whether `./gnubg/gnubg` exists as a file (executable or not).
pub fn has_local_build() -> bool {
    locate::local_build_path().is_some_and(|path| path.is_file())
}

pub fn build_instructions() -> &'static str {
    BUILD_INSTRUCTIONS
}
