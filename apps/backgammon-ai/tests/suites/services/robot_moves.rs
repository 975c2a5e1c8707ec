use backgammon_ai::ai::FurthestFromOffMoveAnalyzer;
use backgammon_ai::{select_move_from_list, GameState, MoveAnalyzer, RobotAiService};
use backgammon_test_support::fixtures::{mock_game_state, mock_moves, state_without_moves};

#[test]
fn no_moves_means_no_choice() {
    let service = RobotAiService::new();

    assert_eq!(service.make_robot_move("r1", &GameState::with_moves(vec![])), Ok(None));
    assert_eq!(service.make_robot_move("r1", &state_without_moves()), Ok(None));
    assert!(!service.should_move(&state_without_moves()));
}

#[test]
fn default_tier_matches_furthest_from_off() {
    let service = RobotAiService::new();
    let state = mock_game_state();

    let robot = service.make_robot_move("r1", &state).unwrap().unwrap();
    let reference = FurthestFromOffMoveAnalyzer
        .select_move(state.moves(), None)
        .unwrap()
        .unwrap();

    assert!(service.should_move(&state));
    assert!(std::ptr::eq(robot, reference));
    assert_eq!(robot.id, "move1");
}

#[test]
fn list_selection_with_and_without_an_analyzer() {
    let moves = mock_moves();

    let defaulted = select_move_from_list(&moves, None).unwrap().unwrap();
    let explicit = select_move_from_list(&moves, Some(&FurthestFromOffMoveAnalyzer))
        .unwrap()
        .unwrap();

    assert!(moves.iter().any(|m| std::ptr::eq(m, defaulted)));
    assert!(std::ptr::eq(explicit, &moves[0]));
    assert_eq!(select_move_from_list(&[], None), Ok(None));
}
