//! Notification order for whole gestures.

use crate::helpers::{TestCanvasBuilder, at, click, down, drag, move_to, names, up};
use stageboard::Target;

#[test]
fn test_move_gesture_sequence() {
    let (mut canvas, _) = TestCanvasBuilder::new()
        .with_rect(100.0, 100.0, 50.0, 50.0)
        .build();

    let notifications = drag(&mut canvas, at(100.0, 100.0), at(130.0, 90.0));
    insta::assert_snapshot!(
        names(&notifications),
        @"object:selected selected mouse:down mousedown object:moving moving mouse:move mousemove object:modified modified mouse:up mouseup"
    );
}

#[test]
fn test_hover_sequence() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_rect(100.0, 100.0, 50.0, 50.0)
        .build();

    let over = move_to(&mut canvas, at(100.0, 100.0));
    insta::assert_snapshot!(names(&over), @"mouse:move mousemove");
    assert!(over.iter().all(|n| n.target == Some(Target::Object(ids[0]))));

    let away = move_to(&mut canvas, at(10.0, 10.0));
    insta::assert_snapshot!(names(&away), @"mouse:move");
    assert_eq!(away[0].target, None);
}

#[test]
fn test_selection_switch_sequence() {
    let (mut canvas, _) = TestCanvasBuilder::new()
        .with_rect(50.0, 50.0, 20.0, 20.0)
        .with_rect(150.0, 50.0, 20.0, 20.0)
        .build();
    click(&mut canvas, at(50.0, 50.0));

    // Switching objects does not go through a selection clear
    let notifications = click(&mut canvas, at(150.0, 50.0));
    insta::assert_snapshot!(
        names(&notifications),
        @"object:selected selected mouse:down mousedown mouse:up mouseup"
    );
}

#[test]
fn test_drag_select_moves_carry_no_target() {
    let (mut canvas, _) = TestCanvasBuilder::new()
        .with_rect(50.0, 50.0, 20.0, 20.0)
        .build();

    down(&mut canvas, at(0.0, 0.0));
    // Passing over the object mid drag-select
    let notifications = move_to(&mut canvas, at(50.0, 50.0));
    insta::assert_snapshot!(names(&notifications), @"mouse:move");
    assert_eq!(notifications[0].target, None);
    up(&mut canvas, at(50.0, 50.0));
}

#[test]
fn test_pointer_is_attached() {
    let (mut canvas, _) = TestCanvasBuilder::new()
        .with_rect(100.0, 100.0, 50.0, 50.0)
        .build();

    let e = at(100.0, 100.0);
    let notifications = down(&mut canvas, e);
    assert!(notifications.iter().all(|n| n.pointer == Some(e)));
    up(&mut canvas, e);
}
