//! Unit tests for pointer listener bindings.

use crate::helpers::{TestCanvasBuilder, at, down, move_to, up};
use stageboard::input::{Button, ListenerSet};
use stageboard::{ListenerScope, PointerEventKind};

fn bindings(set: &ListenerSet) -> Vec<(ListenerScope, PointerEventKind)> {
    set.bindings().collect()
}

#[test]
fn test_resting_bindings() {
    let set = ListenerSet::new();
    assert_eq!(
        bindings(&set),
        vec![
            (ListenerScope::Canvas, PointerEventKind::Down),
            (ListenerScope::Canvas, PointerEventKind::Move),
        ]
    );
}

#[test]
fn test_release_restores_exactly() {
    let mut set = ListenerSet::new();
    let before = bindings(&set);

    let sub = set.begin_drag_tracking();
    assert!(set.is_bound(ListenerScope::Document, PointerEventKind::Move));
    assert!(set.is_bound(ListenerScope::Document, PointerEventKind::Up));
    assert!(!set.is_bound(ListenerScope::Canvas, PointerEventKind::Move));

    set.release(sub);
    assert_eq!(bindings(&set), before);
}

#[test]
fn test_gesture_escalates_and_restores() {
    let (mut canvas, _) = TestCanvasBuilder::new()
        .with_rect(100.0, 100.0, 50.0, 50.0)
        .build();
    let resting = bindings(canvas.listeners());

    down(&mut canvas, at(100.0, 100.0));
    assert!(canvas.listeners().is_bound(ListenerScope::Document, PointerEventKind::Up));
    assert!(!canvas.listeners().is_bound(ListenerScope::Canvas, PointerEventKind::Move));

    move_to(&mut canvas, at(110.0, 100.0));
    up(&mut canvas, at(110.0, 100.0));
    assert_eq!(bindings(canvas.listeners()), resting);
}

#[test]
fn test_unbound_scope_is_dropped() {
    let (mut canvas, _) = TestCanvasBuilder::new()
        .with_rect(100.0, 100.0, 50.0, 50.0)
        .build();

    // Nobody listens for document moves or ups at rest
    let e = at(100.0, 100.0);
    assert!(canvas.dispatch(ListenerScope::Document, PointerEventKind::Move, &e).is_empty());
    assert!(canvas.dispatch(ListenerScope::Document, PointerEventKind::Up, &e).is_empty());

    // During a drag the canvas no longer hears moves
    down(&mut canvas, e);
    assert!(
        canvas
            .dispatch(ListenerScope::Canvas, PointerEventKind::Move, &at(120.0, 100.0))
            .is_empty()
    );
    assert_eq!(canvas.object(1).unwrap().placement.left, 100.0);
}

#[test]
fn test_non_primary_buttons_leave_bindings_alone() {
    let (mut canvas, _) = TestCanvasBuilder::new()
        .with_rect(100.0, 100.0, 50.0, 50.0)
        .build();
    let resting = bindings(canvas.listeners());

    let right = at(100.0, 100.0).with_button(Button::Secondary);
    assert!(down(&mut canvas, right).is_empty());
    assert_eq!(bindings(canvas.listeners()), resting);
    assert!(canvas.state().is_idle());
    assert_eq!(canvas.active_object(), None);
}
