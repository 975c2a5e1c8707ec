use async_trait::async_trait;

use super::error::EngineError;

/// A way of asking the engine for its `hint` table on a position.
///
/// Implementations return the engine's raw text; parsing happens in the bridge.
#[async_trait]
pub trait EngineTransport: Send + Sync {
    async fn hint(&self, position_id: &str) -> Result<String, EngineError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

/// Commands piped to the engine's text interface.
pub fn command_script(position_id: &str) -> String {
    format!("new game\nset board {position_id}\nhint\nquit\n")
}
