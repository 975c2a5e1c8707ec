use std::fs;

use backgammon_ai::ai::load_analyzers_from_plugins_dir;
use backgammon_ai::ai::PluginError;
use backgammon_test_support::fixtures::mock_moves;

use crate::common::fixture_path;

#[test]
fn conforming_and_non_conforming_descriptors() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("examplePlugin.json"),
        r#"{ "default": { "analyzer": "example" } }"#,
    )
    .unwrap();
    fs::write(dir.path().join("notAPlugin.json"), r#"{ "helpers": [] }"#).unwrap();

    let plugins = load_analyzers_from_plugins_dir(dir.path()).unwrap();

    assert_eq!(plugins.len(), 1);
    assert_eq!(plugins["examplePlugin"].name(), "example");
}

#[test]
fn fixture_directory_registers_by_file_stem() {
    let plugins = load_analyzers_from_plugins_dir(&fixture_path("plugins")).unwrap();

    let mut names: Vec<&str> = plugins.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(names, ["firstPick", "houseRobot"]);
    assert_eq!(plugins["houseRobot"].name(), "strategic");
}

#[test]
fn plugin_analyzers_select_from_the_input() {
    let plugins = load_analyzers_from_plugins_dir(&fixture_path("plugins")).unwrap();
    let moves = mock_moves();

    let first = plugins["firstPick"].select_move(&moves, None).unwrap();

    assert!(std::ptr::eq(first.unwrap(), &moves[0]));
}

#[test]
fn unreadable_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    match load_analyzers_from_plugins_dir(&missing) {
        Err(PluginError::ReadDir { path, .. }) => assert_eq!(path, missing),
        Ok(found) => panic!("expected an error, loaded {} plugins", found.len()),
    }
}
