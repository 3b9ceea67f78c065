//! Pointer input handling for the canvas.
//!
//! This module implements the interaction state machine: selecting, drag
//! selecting, and moving, rotating and scaling objects and groups.
//!
//! ## Architecture
//!
//! The controller tracks the current gesture in an explicit state machine
//! (`InteractionState`), so a drag-select and a transform can never run at
//! the same time.
//!
//! ## Modules
//!
//! - `pointer` - Raw pointer events, buttons and modifiers
//! - `state` - Interaction state, transform session and group selector
//! - `coords` - Page / canvas-local / scene coordinate conversion
//! - `listeners` - Handler bindings and drag-time escalation
//! - `mouse_down` - Pointer down (hit test, selection, session start)
//! - `drag` - Pointer move (hover cursor, drag-select, transforms)
//! - `transform` - Rotation and scale math for a session
//! - `mouse_up` - Pointer up (finalize, drag-select result)
//! - `cursor` - Cursor choice from the handle under the pointer

pub mod coords;
mod cursor;
mod drag;
mod listeners;
mod mouse_down;
mod mouse_up;
mod pointer;
mod state;
mod transform;

pub use listeners::{DragSubscription, ListenerScope, ListenerSet};
pub use pointer::{Button, Modifiers, PointerEvent, PointerEventKind};
pub use state::{GroupSelector, InteractionState, ScaleMode, TransformAction, TransformSession};
