#![allow(dead_code)]

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    backgammon_test_support::logging::init();
}

use std::path::PathBuf;

/// `tests/fixtures/<name>` inside this crate.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
