//! Which pointer handlers are bound where.
//!
//! At rest the canvas element listens for down and move. While a gesture is
//! in progress, move and up are taken over by the document so the drag keeps
//! tracking when the pointer leaves the canvas. The swap is represented by a
//! [`DragSubscription`] that records exactly what it changed, and releasing
//! it reverses that change.

use super::PointerEventKind;
use std::collections::BTreeSet;
use tracing::trace;

/// Where a handler is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListenerScope {
    /// The canvas element
    Canvas,
    /// The whole document
    Document,
}

/// Handler bindings as `(scope, kind)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerSet {
    bound: BTreeSet<(ListenerScope, PointerEventKind)>,
}

impl Default for ListenerSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ListenerSet {
    /// Resting bindings: canvas down and canvas move.
    pub fn new() -> Self {
        let bound = [
            (ListenerScope::Canvas, PointerEventKind::Down),
            (ListenerScope::Canvas, PointerEventKind::Move),
        ]
        .into_iter()
        .collect();
        Self { bound }
    }

    pub fn is_bound(&self, scope: ListenerScope, kind: PointerEventKind) -> bool {
        self.bound.contains(&(scope, kind))
    }

    pub fn bindings(&self) -> impl Iterator<Item = (ListenerScope, PointerEventKind)> + '_ {
        self.bound.iter().copied()
    }

    /// Move tracking to the document for the duration of a drag.
    pub fn begin_drag_tracking(&mut self) -> DragSubscription {
        let mut added = Vec::new();
        let mut removed = Vec::new();

        for binding in [
            (ListenerScope::Document, PointerEventKind::Move),
            (ListenerScope::Document, PointerEventKind::Up),
        ] {
            if self.bound.insert(binding) {
                added.push(binding);
            }
        }
        let canvas_move = (ListenerScope::Canvas, PointerEventKind::Move);
        if self.bound.remove(&canvas_move) {
            removed.push(canvas_move);
        }

        trace!(?added, ?removed, "Escalated pointer listeners");
        DragSubscription { added, removed }
    }

    /// Undo exactly what `subscription` changed.
    pub fn release(&mut self, subscription: DragSubscription) {
        for binding in &subscription.added {
            self.bound.remove(binding);
        }
        for binding in &subscription.removed {
            self.bound.insert(*binding);
        }
        trace!(?subscription, "Released pointer listeners");
    }
}

/// Proof that drag tracking is active; hand it back to [`ListenerSet::release`].
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct DragSubscription {
    added: Vec<(ListenerScope, PointerEventKind)>,
    removed: Vec<(ListenerScope, PointerEventKind)>,
}
