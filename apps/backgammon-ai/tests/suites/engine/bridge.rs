use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use backgammon_ai::engine::{
    build_instructions, EngineError, EngineTransport, GnubgBridge, STARTING_POSITION_ID,
};

/// Records which positions were asked about.
struct RecordingTransport {
    calls: Arc<AtomicUsize>,
    reply: Result<String, EngineError>,
}

#[async_trait]
impl EngineTransport for RecordingTransport {
    async fn hint(&self, position_id: &str) -> Result<String, EngineError> {
        assert_eq!(position_id, STARTING_POSITION_ID);
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }

    fn describe(&self) -> String {
        "recording".into()
    }
}

fn bridge_replying(reply: Result<String, EngineError>) -> (GnubgBridge, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let transport = RecordingTransport {
        calls: Arc::clone(&calls),
        reply,
    };
    (
        GnubgBridge::with_transport(transport, Duration::from_secs(5)),
        calls,
    )
}

#[tokio::test]
async fn starting_position_round_trip() {
    let (bridge, calls) =
        bridge_replying(Ok("    1. Cubeful 0-ply    8/5 6/5     Eq.: +0.2\n".into()));

    let best = bridge.best_move_for_starting_position().await.unwrap();

    assert_eq!(best, "8/5 6/5");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn raw_hint_output_is_passed_through() {
    let (bridge, _) = bridge_replying(Ok("anything at all".into()));

    let raw = bridge
        .hint_output(STARTING_POSITION_ID, Duration::from_secs(1))
        .await
        .unwrap();

    assert_eq!(raw, "anything at all");
}

#[tokio::test]
async fn transport_errors_propagate_unchanged() {
    let (bridge, _) = bridge_replying(Err(EngineError::execution("engine crashed")));

    let err = bridge.get_best_move(STARTING_POSITION_ID).await.unwrap_err();

    assert!(matches!(err, EngineError::Execution { ref detail } if detail == "engine crashed"));
}

#[tokio::test]
async fn unavailable_bridge_reports_instructions_and_info() {
    let bridge = GnubgBridge::unavailable(Duration::from_secs(1));

    let err = bridge.get_best_move(STARTING_POSITION_ID).await.unwrap_err();
    let info = bridge.info().await;

    match err {
        EngineError::Unavailable { instructions } => assert_eq!(instructions, build_instructions()),
        other => panic!("expected Unavailable, got {other:?}"),
    }
    assert!(!info.available);
    assert_eq!(info.path, None);
    assert!(bridge.version().await.unwrap_err().is_unavailable());
}

#[cfg(unix)]
#[tokio::test]
async fn local_executable_reports_version_and_path() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let exe = dir.path().join("gnubg");
    std::fs::write(&exe, "#!/bin/sh\necho 'GNU Backgammon 1.07.001'\n").unwrap();
    std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

    let bridge = GnubgBridge::from_executable(&exe, Duration::from_secs(5));
    let info = bridge.info().await;

    assert!(info.available);
    assert_eq!(info.path.as_deref(), Some(exe.as_path()));
    assert_eq!(info.version.as_deref(), Some("GNU Backgammon 1.07.001"));
}
