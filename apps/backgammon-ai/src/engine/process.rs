//! Subprocess transport: runs the engine in text mode and pipes a script to it.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use super::error::EngineError;
use super::transport::{command_script, EngineTransport};

pub struct ProcessTransport {
    executable: PathBuf,
    args: Vec<String>,
}

impl ProcessTransport {
    /// `<executable> -t`, the engine's non-interactive text mode.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self::with_args(executable, ["-t"])
    }

    pub fn with_args<I, S>(executable: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            executable: executable.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Trimmed output of `<executable> --version`.
    pub async fn version(&self) -> Result<String, EngineError> {
        let output = Command::new(&self.executable)
            .arg("--version")
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| EngineError::execution(format!("failed to get engine version: {e}")))?;

        if !output.status.success() {
            return Err(EngineError::execution(format!(
                "failed to get engine version: {}",
                output.status
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait]
impl EngineTransport for ProcessTransport {
    async fn hint(&self, position_id: &str) -> Result<String, EngineError> {
        let mut child = Command::new(&self.executable)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                EngineError::execution(format!(
                    "failed to start {}: {e}",
                    self.executable.display()
                ))
            })?;

        // A failed write is reported only when the engine itself exits cleanly.
        let mut write_error = None;
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(command_script(position_id).as_bytes()).await {
                warn!(error = %e, "Failed to send commands to engine");
                write_error = Some(e);
            }
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| EngineError::execution(format!("failed to read engine output: {e}")))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if !output.status.success() {
            let detail = if stderr.is_empty() {
                format!("engine exited with {}", output.status)
            } else {
                stderr.to_string()
            };
            return Err(EngineError::execution(detail));
        }
        if let Some(e) = write_error {
            return Err(EngineError::execution(format!("failed to send commands: {e}")));
        }
        if !stderr.is_empty() {
            warn!(stderr = %stderr, "Engine wrote to stderr");
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(bytes = stdout.len(), "Engine output captured");
        Ok(stdout)
    }

    fn describe(&self) -> String {
        format!("process:{}", self.executable.display())
    }
}
