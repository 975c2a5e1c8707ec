use std::sync::Arc;

use backgammon_ai::{AiDifficulty, RobotAiService};

#[test]
fn same_robot_gets_the_same_instance() {
    let service = RobotAiService::new();

    let first = service.get_ai("r1", AiDifficulty::Intermediate);
    let second = service.get_ai("r1", AiDifficulty::Intermediate);

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(service.robot_count(), 1);
}

#[test]
fn distinct_robots_get_distinct_instances() {
    let service = RobotAiService::new();

    let r1 = service.get_ai("r1", AiDifficulty::Intermediate);
    let r2 = service.get_ai("r2", AiDifficulty::Intermediate);

    assert!(!Arc::ptr_eq(&r1, &r2));
}

#[test]
fn removal_forces_a_fresh_instance() {
    let service = RobotAiService::new();
    let before = service.get_ai("r1", AiDifficulty::Beginner);

    assert!(service.remove_robot("r1"));
    assert!(!service.remove_robot("r1"));
    let after = service.get_ai("r1", AiDifficulty::Beginner);

    assert!(!Arc::ptr_eq(&before, &after));
}

#[test]
fn difficulty_change_is_isolated_to_one_robot() {
    let service = RobotAiService::new();
    let r2_before = service.get_ai("r2", AiDifficulty::Intermediate);
    service.get_ai("r1", AiDifficulty::Intermediate);

    service.set_robot_difficulty("r1", AiDifficulty::Advanced);

    assert_eq!(service.get_ai("r1", AiDifficulty::Beginner).analyzer_name(), "strategic");
    let r2_after = service.get_ai("r2", AiDifficulty::Intermediate);
    assert!(Arc::ptr_eq(&r2_before, &r2_after));
    assert_eq!(r2_after.analyzer_name(), "furthest-from-off");
}

#[test]
fn existing_binding_ignores_requested_difficulty() {
    let service = RobotAiService::new();
    service.get_ai("r1", AiDifficulty::Beginner);

    let again = service.get_ai("r1", AiDifficulty::Advanced);

    assert_eq!(again.difficulty(), AiDifficulty::Beginner);
}

#[test]
fn concurrent_first_access_binds_once() {
    let service = Arc::new(RobotAiService::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            std::thread::spawn(move || service.get_ai("shared", AiDifficulty::Advanced))
        })
        .collect();
    let instances: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(instances.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    assert_eq!(service.robot_count(), 1);
}
