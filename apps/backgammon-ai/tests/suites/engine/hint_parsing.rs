use backgammon_ai::engine::{parse_best_move_from_hint, EngineError};

const HINT_TABLE: &str = "\
Position ID: 4HPwATDgc/ABMA
    1. Cubeful 0-ply    8/4 6/4                      Eq.:  +0.158
       0.544 0.174 0.008 - 0.456 0.124 0.005
    2. Cubeful 0-ply    13/9 13/11                   Eq.:  +0.007 ( -0.151)
";

#[test]
fn rank_one_row_wins() {
    assert_eq!(parse_best_move_from_hint(HINT_TABLE).unwrap(), "8/4 6/4");
}

#[test]
fn engine_moves_sentence_is_the_fallback() {
    let text = "Rolled 31.\ngnubg moves 24/23 13/10.\n";

    assert_eq!(parse_best_move_from_hint(text).unwrap(), "24/23 13/10");
}

#[test]
fn text_without_a_move_is_a_parse_error() {
    let err = parse_best_move_from_hint("GNU Backgammon 1.07\nNo game in progress.\n").unwrap_err();

    assert!(matches!(err, EngineError::Parse { .. }));
}
