//! Raw pointer events as delivered by the host.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// Modifier keys held during the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// Which handler an event is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// A pointer event in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub page_x: f64,
    pub page_y: f64,
    #[serde(default)]
    pub button: Button,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Primary-button event with no modifiers.
    pub fn at(page_x: f64, page_y: f64) -> Self {
        Self { page_x, page_y, ..Default::default() }
    }

    pub fn with_button(mut self, button: Button) -> Self {
        self.button = button;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    #[inline]
    pub fn page(&self) -> Point {
        Point::new(self.page_x, self.page_y)
    }

    #[inline]
    pub fn is_primary(&self) -> bool {
        self.button == Button::Primary
    }

    /// Shift or Ctrl: the keys that extend a selection.
    #[inline]
    pub fn extends_selection(&self) -> bool {
        self.modifiers.shift || self.modifiers.ctrl
    }
}
