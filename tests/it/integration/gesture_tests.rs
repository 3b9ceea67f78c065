//! Move gestures, no-op clicks, blur and listener symmetry.

use crate::helpers::{TestCanvasBuilder, at, click, down, drag, move_to, names, up};
use stageboard::input::ListenerSet;
use stageboard::object::Transformable;
use stageboard::{EventName, SceneObject, Target};

#[test]
fn test_move_is_exact() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_rect(100.0, 100.0, 50.0, 50.0)
        .build();

    let notifications = drag(&mut canvas, at(100.0, 100.0), at(130.0, 90.0));

    let obj = canvas.object(ids[0]).unwrap();
    assert_eq!(obj.placement.left, 130.0);
    assert_eq!(obj.placement.top, 90.0);
    assert!(obj.is_active());
    assert!(!obj.is_moving());
    assert!(notifications.iter().any(|n| n.name == EventName::ObjectModified));
}

#[test]
fn test_move_updates_hit_testing() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_rect(100.0, 100.0, 50.0, 50.0)
        .build();

    drag(&mut canvas, at(100.0, 100.0), at(300.0, 100.0));

    assert_eq!(canvas.find_target(&at(100.0, 100.0), false), None);
    assert_eq!(
        canvas.find_target(&at(300.0, 100.0), false),
        Some(Target::Object(ids[0]))
    );
}

#[test]
fn test_move_accumulates_over_many_events() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_rect(100.0, 100.0, 50.0, 50.0)
        .build();

    down(&mut canvas, at(100.0, 100.0));
    for step in 1..=10 {
        move_to(&mut canvas, at(100.0 + step as f64 * 5.0, 100.0));
    }
    up(&mut canvas, at(150.0, 100.0));

    assert_eq!(canvas.object(ids[0]).unwrap().placement.left, 150.0);
}

#[test]
fn test_click_without_movement_is_not_a_modification() {
    let (mut canvas, _) = TestCanvasBuilder::new()
        .with_rect(100.0, 100.0, 50.0, 50.0)
        .build();

    let notifications = click(&mut canvas, at(100.0, 100.0));
    assert_eq!(
        names(&notifications),
        "object:selected selected mouse:down mousedown mouse:up mouseup"
    );
}

#[test]
fn test_move_back_to_start_is_not_a_modification() {
    let (mut canvas, _) = TestCanvasBuilder::new()
        .with_rect(100.0, 100.0, 50.0, 50.0)
        .build();

    down(&mut canvas, at(100.0, 100.0));
    move_to(&mut canvas, at(140.0, 120.0));
    move_to(&mut canvas, at(100.0, 100.0));
    let notifications = up(&mut canvas, at(100.0, 100.0));

    assert!(!notifications.iter().any(|n| n.name == EventName::ObjectModified));
}

#[test]
fn test_non_selectable_object_starts_drag_select() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_object(SceneObject::rect(100.0, 100.0, 50.0, 50.0).non_selectable())
        .build();

    let notifications = down(&mut canvas, at(100.0, 100.0));
    assert!(canvas.state().is_selecting());
    assert_eq!(names(&notifications), "mouse:down mousedown");
    assert_eq!(notifications[0].target, Some(Target::Object(ids[0])));

    move_to(&mut canvas, at(140.0, 140.0));
    up(&mut canvas, at(140.0, 140.0));

    assert_eq!(canvas.object(ids[0]).unwrap().placement.left, 100.0);
    assert!(canvas.selection().is_empty());
}

#[test]
fn test_listener_symmetry_over_many_gestures() {
    let (mut canvas, _) = TestCanvasBuilder::new()
        .with_rect(100.0, 100.0, 50.0, 50.0)
        .build();
    let resting = ListenerSet::new();

    for i in 0..25 {
        let x = if i % 2 == 0 { 100.0 } else { 500.0 };
        down(&mut canvas, at(x, 100.0));
        move_to(&mut canvas, at(x + 1.0, 101.0));
        up(&mut canvas, at(x + 1.0, 101.0));
        assert_eq!(canvas.listeners(), &resting);
    }
}

#[test]
fn test_down_during_gesture_is_ignored() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_rect(100.0, 100.0, 50.0, 50.0)
        .with_rect(300.0, 100.0, 50.0, 50.0)
        .build();

    down(&mut canvas, at(100.0, 100.0));
    // A second primary down before the up, as with a lost up event
    let notifications = down(&mut canvas, at(300.0, 100.0));
    assert!(notifications.is_empty());
    assert_eq!(canvas.active_object(), Some(ids[0]));

    up(&mut canvas, at(100.0, 100.0));
    assert_eq!(canvas.listeners(), &ListenerSet::new());
}

#[test]
fn test_blur_finishes_gesture() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_rect(100.0, 100.0, 50.0, 50.0)
        .build();

    down(&mut canvas, at(100.0, 100.0));
    move_to(&mut canvas, at(120.0, 100.0));
    let notifications = canvas.on_blur();

    assert_eq!(names(&notifications), "object:modified modified mouse:up mouseup");
    assert!(canvas.state().is_idle());
    assert_eq!(canvas.listeners(), &ListenerSet::new());
    assert_eq!(canvas.object(ids[0]).unwrap().placement.left, 120.0);

    // Nothing in progress any more
    assert!(canvas.on_blur().is_empty());
}

#[test]
fn test_render_triggers() {
    let (mut canvas, _) = TestCanvasBuilder::new()
        .with_rect(100.0, 100.0, 50.0, 50.0)
        .build();
    let before = canvas.surface().full_renders;

    drag(&mut canvas, at(100.0, 100.0), at(110.0, 100.0));
    // down, one transform step, up
    assert_eq!(canvas.surface().full_renders, before + 3);

    // Drag-select repaints the overlay only while moving
    let full = canvas.surface().full_renders;
    down(&mut canvas, at(500.0, 500.0));
    move_to(&mut canvas, at(520.0, 520.0));
    assert_eq!(canvas.surface().top_renders, 1);
    assert_eq!(canvas.surface().full_renders, full + 1);
    assert!(canvas.surface().last_selection_rect.is_some());

    up(&mut canvas, at(520.0, 520.0));
    assert!(canvas.surface().last_selection_rect.is_none());
}
