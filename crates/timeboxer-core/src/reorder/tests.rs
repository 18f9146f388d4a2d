//! Tests for the reorder module.

use super::*;
use crate::models::{Step, SubTask};

fn create_test_plan() -> Plan {
    let step = |id: &str, title: &str, sub_ids: &[&str]| Step {
        id: id.to_string(),
        title: title.to_string(),
        sub_tasks: sub_ids
            .iter()
            .map(|sub_id| SubTask::new(*sub_id, "work", 10))
            .collect(),
    };
    Plan {
        project_name: "Reorder".to_string(),
        steps: vec![
            step("s1", "A", &["t1", "t2"]),
            step("s2", "B", &["t3"]),
            step("s3", "C", &["t4"]),
        ],
    }
}

fn drag_end(active_id: &str, over_id: Option<&str>) -> DragEnd {
    DragEnd {
        active_id: active_id.to_string(),
        over_id: over_id.map(str::to_string),
    }
}

#[test]
fn test_array_move() {
    let items = ["a", "b", "c", "d"];
    assert_eq!(array_move(&items, 0, 2), vec!["b", "c", "a", "d"]);
    assert_eq!(array_move(&items, 3, 0), vec!["d", "a", "b", "c"]);
    assert_eq!(array_move(&items, 1, 1), vec!["a", "b", "c", "d"]);
    assert_eq!(array_move(&items, 1, 10), vec!["a", "c", "d", "b"]);
    assert_eq!(array_move(&items, 9, 0), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_apply_drag_end_moves_step() {
    let plan = create_test_plan();
    let moved = apply_drag_end(&plan, &drag_end("s2", Some("s1")));
    assert_eq!(moved.step_ids(), vec!["s2", "s1", "s3"]);
    assert_eq!(moved.step("s1"), plan.step("s1"));
}

#[test]
fn test_apply_drag_end_noops() {
    let plan = create_test_plan();

    assert_eq!(apply_drag_end(&plan, &drag_end("s2", None)), plan);
    assert_eq!(apply_drag_end(&plan, &drag_end("s2", Some("s2"))), plan);
    assert_eq!(apply_drag_end(&plan, &drag_end("t1", Some("t2"))), plan);
    assert_eq!(apply_drag_end(&plan, &drag_end("t3", Some("s1"))), plan);
}

#[test]
fn test_pointer_click_never_reorders() {
    let mut engine = ReorderEngine::new();
    engine.pointer_down("s1", Point::new(0.0, 0.0));
    engine.pointer_move(Point::new(3.0, 4.0), Some("s2"));

    assert!(!engine.is_dragging());
    assert_eq!(engine.pointer_up(), None);
    assert_eq!(engine.state(), &DragState::Idle);
}

#[test]
fn test_pointer_drag_activates_past_threshold() {
    let mut engine = ReorderEngine::new();
    engine.pointer_down("s1", Point::new(0.0, 0.0));
    engine.pointer_move(Point::new(0.0, 5.5), Some("s1"));
    assert!(engine.is_dragging());

    engine.pointer_move(Point::new(0.0, 120.0), Some("s3"));
    let end = engine.pointer_up().expect("drag should complete");
    assert_eq!(end, drag_end("s1", Some("s3")));
    assert_eq!(engine.state(), &DragState::Idle);

    let plan = apply_drag_end(&create_test_plan(), &end);
    assert_eq!(plan.step_ids(), vec!["s2", "s3", "s1"]);
}

#[test]
fn test_pointer_drag_off_any_target() {
    let mut engine = ReorderEngine::new();
    engine.pointer_down("s1", Point::new(0.0, 0.0));
    engine.pointer_move(Point::new(50.0, 50.0), None);

    let end = engine.pointer_up().expect("drag should complete");
    assert_eq!(end.over_id, None);
    assert_eq!(apply_drag_end(&create_test_plan(), &end), create_test_plan());
}

#[test]
fn test_second_pointer_down_is_ignored() {
    let mut engine = ReorderEngine::new();
    engine.pointer_down("s1", Point::new(0.0, 0.0));
    engine.pointer_down("s2", Point::new(0.0, 0.0));
    engine.pointer_move(Point::new(10.0, 0.0), Some("s3"));

    assert_eq!(engine.pointer_up(), Some(drag_end("s1", Some("s3"))));
}

#[test]
fn test_keyboard_drag_moves_target_among_steps() {
    let plan = create_test_plan();
    let mut engine = ReorderEngine::new();

    assert_eq!(engine.key("s1", KeyCommand::PickUp, &plan), None);
    assert!(engine.is_dragging());
    engine.key("s1", KeyCommand::Down, &plan);
    engine.key("s1", KeyCommand::Down, &plan);
    // Already at the last step
    engine.key("s1", KeyCommand::Down, &plan);

    // The pointer does not end a keyboard drag
    assert_eq!(engine.pointer_up(), None);
    assert!(engine.is_dragging());

    let end = engine
        .key("s1", KeyCommand::Drop, &plan)
        .expect("drop should complete");
    assert_eq!(end, drag_end("s1", Some("s3")));
    assert_eq!(
        apply_drag_end(&plan, &end).step_ids(),
        vec!["s2", "s3", "s1"]
    );
}

#[test]
fn test_keyboard_drag_up_at_top_stays() {
    let plan = create_test_plan();
    let mut engine = ReorderEngine::new();
    engine.key("s1", KeyCommand::PickUp, &plan);
    engine.key("s1", KeyCommand::Up, &plan);

    let end = engine.key("s1", KeyCommand::Drop, &plan).unwrap();
    assert_eq!(end, drag_end("s1", Some("s1")));
    assert_eq!(apply_drag_end(&plan, &end), plan);
}

#[test]
fn test_keyboard_sub_task_drag_is_ignored() {
    let plan = create_test_plan();
    let mut engine = ReorderEngine::new();
    engine.key("t1", KeyCommand::PickUp, &plan);
    engine.key("t1", KeyCommand::Down, &plan);

    let end = engine.key("t1", KeyCommand::Drop, &plan).unwrap();
    assert_eq!(end, drag_end("t1", Some("t2")));
    assert_eq!(apply_drag_end(&plan, &end), plan);
}

#[test]
fn test_keyboard_cancel() {
    let plan = create_test_plan();
    let mut engine = ReorderEngine::new();
    engine.key("s2", KeyCommand::PickUp, &plan);
    engine.key("s2", KeyCommand::Cancel, &plan);

    assert_eq!(engine.state(), &DragState::Idle);
    assert_eq!(engine.key("s2", KeyCommand::Drop, &plan), None);
}
