//! Shift/Ctrl group logic and transforming a selection group.

use std::cell::Cell;
use std::rc::Rc;

use crate::helpers::{TestCanvasBuilder, assert_close, at, click, drag, names};
use stageboard::object::Transformable;
use stageboard::{Canvas, EventName, HeadlessSurface, Target};

/// A at (50, 50), B at (150, 50), C at (250, 50); all 20x20.
fn row() -> (Canvas<HeadlessSurface>, Vec<u64>) {
    TestCanvasBuilder::new()
        .with_rect(50.0, 50.0, 20.0, 20.0)
        .with_rect(150.0, 50.0, 20.0, 20.0)
        .with_rect(250.0, 50.0, 20.0, 20.0)
        .build()
}

#[test]
fn test_shift_click_adds_to_selection() {
    let (mut canvas, ids) = row();
    click(&mut canvas, at(50.0, 50.0));

    let notifications = click(&mut canvas, at(150.0, 50.0).with_shift());
    assert_eq!(canvas.active_target(), Some(Target::Group));
    assert_eq!(canvas.selection(), vec![ids[0], ids[1]]);
    assert!(notifications.iter().any(|n| n.name == EventName::SelectionCreated));

    click(&mut canvas, at(250.0, 50.0).with_ctrl());
    assert_eq!(canvas.selection(), vec![ids[0], ids[1], ids[2]]);
}

#[test]
fn test_shift_click_member_removes_it() {
    let (mut canvas, ids) = row();
    canvas.set_selection(&ids).unwrap();

    click(&mut canvas, at(150.0, 50.0).with_shift());
    assert_eq!(canvas.active_target(), Some(Target::Group));
    assert_eq!(canvas.selection(), vec![ids[0], ids[2]]);
}

#[test]
fn test_group_collapses_to_single_object() {
    let (mut canvas, ids) = row();
    canvas.set_selection(&ids[..2]).unwrap();

    click(&mut canvas, at(50.0, 50.0).with_shift());
    assert!(canvas.active_group().is_none());
    assert_eq!(canvas.active_object(), Some(ids[1]));
    assert!(canvas.object(ids[1]).unwrap().is_active());
}

#[test]
fn test_shift_click_lone_selection_keeps_it() {
    let (mut canvas, ids) = row();
    click(&mut canvas, at(50.0, 50.0));

    let notifications = click(&mut canvas, at(50.0, 50.0).with_shift());
    assert_eq!(canvas.active_object(), Some(ids[0]));
    assert_eq!(names(&notifications), "mouse:down mousedown mouse:up mouseup");
}

#[test]
fn test_plain_click_on_member_keeps_group() {
    let (mut canvas, ids) = row();
    canvas.set_selection(&ids[..2]).unwrap();

    // The group wins the hit test, so a click inside it acts on the group
    let notifications = click(&mut canvas, at(150.0, 50.0));
    assert_eq!(notifications[0].target, Some(Target::Group));
    assert_eq!(canvas.selection(), vec![ids[0], ids[1]]);
}

#[test]
fn test_click_outside_clears_group() {
    let (mut canvas, ids) = row();
    canvas.set_selection(&ids[..2]).unwrap();

    let notifications = click(&mut canvas, at(500.0, 500.0));
    assert_eq!(
        names(&notifications),
        "before:selection:cleared deselected deselected selection:cleared mouse:down mouse:up"
    );
    assert_eq!(canvas.active_target(), None);
}

#[test]
fn test_moving_group_moves_members() {
    let (mut canvas, ids) = row();
    canvas.set_selection(&ids[..2]).unwrap();

    let notifications = drag(&mut canvas, at(50.0, 50.0), at(60.0, 70.0));
    let modified = notifications
        .iter()
        .find(|n| n.name == EventName::ObjectModified)
        .unwrap();
    assert_eq!(modified.target, Some(Target::Group));

    let a = canvas.object(ids[0]).unwrap().placement;
    let b = canvas.object(ids[1]).unwrap().placement;
    assert_eq!((a.left, a.top), (60.0, 70.0));
    assert_eq!((b.left, b.top), (160.0, 70.0));

    // Member caches follow, so hit testing finds them at the new spot
    canvas.deactivate_all();
    assert_eq!(
        canvas.find_target(&at(160.0, 70.0), false),
        Some(Target::Object(ids[1]))
    );
    assert_eq!(canvas.find_target(&at(150.0, 45.0), false), None);
}

#[test]
fn test_rotating_group_rotates_members_about_its_center() {
    let (mut canvas, ids) = row();
    canvas.set_selection(&ids[..2]).unwrap();

    // Group box is 40..160 x 40..60, centered at (100, 50); its rotation
    // handle is 40 above the top edge
    drag(&mut canvas, at(100.0, 0.0), at(150.0, 50.0));

    let group = canvas.active_group().unwrap();
    assert_close(group.angle(), 90.0);

    let a = canvas.object(ids[0]).unwrap().placement;
    assert_close(a.angle, 90.0);
    assert_close(a.left, 100.0);
    assert_close(a.top, 0.0);
    let b = canvas.object(ids[1]).unwrap().placement;
    assert_close(b.left, 100.0);
    assert_close(b.top, 100.0);
}

#[test]
fn test_scaling_group_scales_members() {
    let (mut canvas, ids) = row();
    canvas.set_selection(&ids[..2]).unwrap();

    // Bottom-right corner of the group box
    drag(&mut canvas, at(160.0, 60.0), at(220.0, 70.0));

    let b = canvas.object(ids[1]).unwrap().placement;
    assert_close(b.scale_x, 2.0);
    assert_close(b.scale_y, 2.0);
    // Offset from the group center doubles too
    assert_close(b.left, 200.0);
    assert_close(b.top, 50.0);
}

#[test]
fn test_disabled_selection_ignores_modifiers() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_rect(50.0, 50.0, 20.0, 20.0)
        .with_rect(150.0, 50.0, 20.0, 20.0)
        .without_selection()
        .build();

    click(&mut canvas, at(50.0, 50.0));
    click(&mut canvas, at(150.0, 50.0).with_shift());
    assert!(canvas.active_group().is_none());
    assert_eq!(canvas.active_object(), Some(ids[1]));
}

#[test]
fn test_active_group_wins_over_object_inside_its_box() {
    // C sits between A and B, on top of both
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_rect(50.0, 50.0, 20.0, 20.0)
        .with_rect(150.0, 50.0, 20.0, 20.0)
        .with_rect(100.0, 50.0, 20.0, 20.0)
        .build();
    canvas.set_selection(&ids[..2]).unwrap();

    let p = at(100.0, 50.0);
    assert_eq!(canvas.find_target(&p, false), Some(Target::Group));
    assert_eq!(canvas.find_target(&p, true), Some(Target::Object(ids[2])));
}

#[test]
fn test_group_listener_follows_each_new_group() {
    let (mut canvas, ids) = row();
    let moves = Rc::new(Cell::new(0));
    let sink = Rc::clone(&moves);
    canvas.on_target(Target::Group, EventName::Moving, move |_| sink.set(sink.get() + 1));

    canvas.set_selection(&ids[..2]).unwrap();
    drag(&mut canvas, at(50.0, 50.0), at(50.0, 60.0));
    assert_eq!(moves.get(), 1);

    // A different group, same binding
    canvas.set_selection(&ids[1..]).unwrap();
    drag(&mut canvas, at(150.0, 60.0), at(150.0, 70.0));
    assert_eq!(moves.get(), 2);
}
