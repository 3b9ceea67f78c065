//! Render trigger.
//!
//! The canvas never draws; it asks a [`Surface`] to repaint and hands it a
//! [`Frame`] describing what is on screen. `render_all` repaints the scene,
//! `render_top` only the overlay (the drag-select rectangle).

use crate::config::CanvasConfig;
use crate::geometry::LayoutBox;
use crate::input::GroupSelector;
use crate::object::{SceneObject, SelectionGroup};

/// Drag-select rectangle in canvas-local coordinates, normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&GroupSelector> for SelectionRect {
    fn from(selector: &GroupSelector) -> Self {
        let rect = selector.rect();
        Self {
            left: rect.min_x,
            top: rect.min_y,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Snapshot handed to the surface on every repaint.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Bottom to top
    pub objects: &'a [SceneObject],
    pub active_group: Option<&'a SelectionGroup>,
    pub selection_rect: Option<SelectionRect>,
    pub config: &'a CanvasConfig,
}

/// Host drawing backend.
pub trait Surface {
    fn render_all(&mut self, frame: &Frame<'_>);

    fn render_top(&mut self, frame: &Frame<'_>);

    fn set_cursor(&mut self, cursor: &str);

    /// The canvas element's offset-parent chain, innermost first.
    fn layout_chain(&self) -> Vec<LayoutBox> {
        Vec::new()
    }
}

/// A surface that draws nothing and records what it was asked to do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessSurface {
    pub full_renders: usize,
    pub top_renders: usize,
    pub cursor: String,
    pub layout: Vec<LayoutBox>,
    pub last_selection_rect: Option<SelectionRect>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose canvas sits at these layout boxes.
    pub fn with_layout(layout: Vec<LayoutBox>) -> Self {
        Self { layout, ..Self::default() }
    }
}

impl Surface for HeadlessSurface {
    fn render_all(&mut self, frame: &Frame<'_>) {
        self.full_renders += 1;
        self.last_selection_rect = frame.selection_rect;
    }

    fn render_top(&mut self, frame: &Frame<'_>) {
        self.top_renders += 1;
        self.last_selection_rect = frame.selection_rect;
    }

    fn set_cursor(&mut self, cursor: &str) {
        if self.cursor != cursor {
            self.cursor = cursor.to_string();
        }
    }

    fn layout_chain(&self) -> Vec<LayoutBox> {
        self.layout.clone()
    }
}
