use backgammon_ai::ai::{FurthestFromOffMoveAnalyzer, RandomMoveAnalyzer, StrategicMoveAnalyzer};
use backgammon_ai::domain::{GamePhase, Move, MoveAnalyzerContext};
use backgammon_ai::MoveAnalyzer;
use backgammon_test_support::fixtures::{mock_moves, spread_origin_moves};

#[test]
fn furthest_from_off_prefers_the_most_distant_origin() {
    let moves = spread_origin_moves();

    let choice = FurthestFromOffMoveAnalyzer.select_move(&moves, None).unwrap();

    assert!(std::ptr::eq(choice.unwrap(), &moves[1]));
}

#[test]
fn furthest_from_off_falls_back_to_die_value() {
    let moves: Vec<Move> = (1..=3).map(|d| Move::new(format!("d{d}"), d)).collect();

    let choice = FurthestFromOffMoveAnalyzer.select_move(&moves, None).unwrap();

    assert_eq!(choice.unwrap().die_value, 3);
}

#[test]
fn random_covers_every_option_over_many_trials() {
    let moves = mock_moves();
    let analyzer = RandomMoveAnalyzer::new(Some(2024));
    let mut seen = [false; 3];

    for _ in 0..300 {
        let choice = analyzer.select_move(&moves, None).unwrap().unwrap();
        let idx = moves.iter().position(|m| std::ptr::eq(m, choice)).unwrap();
        seen[idx] = true;
    }

    assert_eq!(seen, [true; 3]);
}

#[test]
fn strategic_without_jitter_is_repeatable() {
    let moves = mock_moves();
    let analyzer = StrategicMoveAnalyzer::new(None).with_jitter(0.0);
    let ctx = MoveAnalyzerContext::for_phase(GamePhase::Opening);

    let first = analyzer.select_move(&moves, Some(&ctx)).unwrap().unwrap();
    for _ in 0..20 {
        let again = analyzer.select_move(&moves, Some(&ctx)).unwrap().unwrap();
        assert!(std::ptr::eq(first, again));
    }
}
