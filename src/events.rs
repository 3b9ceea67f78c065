//! Outbound notifications.
//!
//! Handlers push [`Notification`]s onto the bus while they run; the canvas
//! drains the queue once the handler returns and delivers each notification
//! to the listeners registered for its name (and, for target-scoped names,
//! its target). Delivery order is emission order.

use crate::input::PointerEvent;
use crate::object::Target;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::trace;

/// Every notification the canvas can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    // Canvas level
    MouseDown,
    MouseMove,
    MouseUp,
    ObjectModified,
    ObjectRotating,
    ObjectScaling,
    ObjectMoving,
    ObjectSelected,
    ObjectAdded,
    ObjectRemoved,
    SelectionCreated,
    BeforeSelectionCleared,
    SelectionCleared,

    // Target scoped
    TargetMouseDown,
    TargetMouseMove,
    TargetMouseUp,
    Modified,
    Rotating,
    Scaling,
    Moving,
    Selected,
    Deselected,
}

impl EventName {
    /// Wire name, e.g. `"object:moving"` or `"moving"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MouseDown => "mouse:down",
            Self::MouseMove => "mouse:move",
            Self::MouseUp => "mouse:up",
            Self::ObjectModified => "object:modified",
            Self::ObjectRotating => "object:rotating",
            Self::ObjectScaling => "object:scaling",
            Self::ObjectMoving => "object:moving",
            Self::ObjectSelected => "object:selected",
            Self::ObjectAdded => "object:added",
            Self::ObjectRemoved => "object:removed",
            Self::SelectionCreated => "selection:created",
            Self::BeforeSelectionCleared => "before:selection:cleared",
            Self::SelectionCleared => "selection:cleared",
            Self::TargetMouseDown => "mousedown",
            Self::TargetMouseMove => "mousemove",
            Self::TargetMouseUp => "mouseup",
            Self::Modified => "modified",
            Self::Rotating => "rotating",
            Self::Scaling => "scaling",
            Self::Moving => "moving",
            Self::Selected => "selected",
            Self::Deselected => "deselected",
        }
    }

    /// Whether the notification is delivered on the target rather than the canvas.
    pub fn is_target_scoped(self) -> bool {
        matches!(
            self,
            Self::TargetMouseDown
                | Self::TargetMouseMove
                | Self::TargetMouseUp
                | Self::Modified
                | Self::Rotating
                | Self::Scaling
                | Self::Moving
                | Self::Selected
                | Self::Deselected
        )
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One emitted notification. `pointer` is the raw event that caused it, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub name: EventName,
    pub target: Option<Target>,
    pub pointer: Option<PointerEvent>,
}

/// Handle returned by registration, used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener = Box<dyn FnMut(&Notification)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    /// Canvas-level name; also sees target-scoped names if registered for them
    Name(EventName),
    /// Target-scoped name on one target only
    Target(Target, EventName),
}

impl Binding {
    fn matches(&self, n: &Notification) -> bool {
        match *self {
            Binding::Name(name) => name == n.name,
            Binding::Target(target, name) => name == n.name && n.target == Some(target),
        }
    }
}

/// Notification queue plus listener registry.
#[derive(Default)]
pub struct EventBus {
    queue: Vec<Notification>,
    listeners: Vec<(ListenerId, Binding, Listener)>,
    next_id: u64,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("queued", &self.queue.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen for `name` regardless of target.
    pub fn on<F>(&mut self, name: EventName, listener: F) -> ListenerId
    where
        F: FnMut(&Notification) + 'static,
    {
        self.register(Binding::Name(name), Box::new(listener))
    }

    /// Listen for `name` on `target` only.
    pub fn on_target<F>(&mut self, target: Target, name: EventName, listener: F) -> ListenerId
    where
        F: FnMut(&Notification) + 'static,
    {
        self.register(Binding::Target(target, name), Box::new(listener))
    }

    fn register(&mut self, binding: Binding, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, binding, listener));
        id
    }

    /// Unregister a listener. Returns whether it was registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _, _)| *lid != id);
        self.listeners.len() != before
    }

    pub(crate) fn emit(
        &mut self,
        name: EventName,
        target: Option<Target>,
        pointer: Option<PointerEvent>,
    ) {
        trace!(event = name.as_str(), ?target, "Queued notification");
        self.queue.push(Notification {
            name,
            target,
            pointer,
        });
    }

    /// Notifications queued but not yet delivered.
    pub fn pending(&self) -> &[Notification] {
        &self.queue
    }

    /// Deliver every queued notification in order and return them.
    pub fn flush(&mut self) -> Vec<Notification> {
        let drained = std::mem::take(&mut self.queue);
        for notification in &drained {
            for (_, binding, listener) in &mut self.listeners {
                if binding.matches(notification) {
                    listener(notification);
                }
            }
        }
        drained
    }
}
