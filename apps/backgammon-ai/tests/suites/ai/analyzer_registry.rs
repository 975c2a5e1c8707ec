use backgammon_ai::ai::registry::{by_name, create_analyzer};
use backgammon_ai::{AiConfig, AiError, AnalyzerRegistry};
use backgammon_test_support::fixtures::spread_origin_moves;

use crate::common::fixture_path;

#[test]
fn builtins_then_plugins_form_one_table() {
    let mut registry = AnalyzerRegistry::with_builtins(&AiConfig::empty());
    let builtins = registry.len();

    let added = registry.extend_from_dir(&fixture_path("plugins")).unwrap();

    assert_eq!(added, 2);
    assert_eq!(registry.len(), builtins + 2);
    assert!(registry.contains("houseRobot"));
    assert!(registry.contains("furthest-from-off"));
}

#[test]
fn selecting_through_the_registry_matches_direct_use() {
    let registry = AnalyzerRegistry::with_builtins(&AiConfig::empty());
    let moves = spread_origin_moves();

    let via_registry = registry
        .select_move("furthest-from-off", &moves, None)
        .unwrap();
    let direct = create_analyzer("furthest-from-off", &AiConfig::empty())
        .unwrap()
        .select_move(&moves, None)
        .unwrap();

    assert_eq!(via_registry.map(|m| m.id.as_str()), Some("far"));
    assert!(std::ptr::eq(via_registry.unwrap(), direct.unwrap()));
}

#[test]
fn unknown_names() {
    let registry = AnalyzerRegistry::with_builtins(&AiConfig::empty());

    assert!(by_name("gnubg").is_none());
    assert!(create_analyzer("gnubg", &AiConfig::empty()).is_none());
    assert!(matches!(
        registry.select_move("gnubg", &[], None),
        Err(AiError::Internal(_))
    ));
}
