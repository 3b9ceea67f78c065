//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestCanvasBuilder` - Builder pattern for creating headless canvases with objects
//! - Pointer shortcuts (`down`, `move_to`, `up`, `drag`) that route events
//!   through whichever listener scope is bound, like a browser would
//! - `names()` for compact notification assertions

#![allow(dead_code)]

use stageboard::geometry::{LayoutBox, ViewportTransform};
use stageboard::object::ObjectId;
use stageboard::{
    Canvas, CanvasConfig, HeadlessSurface, ListenerScope, Notification, PointerEvent,
    PointerEventKind, SceneObject,
};
use tracing_subscriber::EnvFilter;

/// Route library logs to the test output. Set `RUST_LOG=stageboard=trace` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// TestCanvasBuilder - Builder pattern for creating test canvases
// ============================================================================

/// Builder for creating headless canvases with objects and configuration.
///
/// # Example
/// ```ignore
/// let (mut canvas, ids) = TestCanvasBuilder::new()
///     .with_rect(100.0, 100.0, 50.0, 50.0)
///     .with_rect(200.0, 100.0, 50.0, 50.0)
///     .with_offset(10.0, 20.0)
///     .build();
/// ```
pub struct TestCanvasBuilder {
    objects: Vec<SceneObject>,
    layout: Vec<LayoutBox>,
    config: CanvasConfig,
}

impl Default for TestCanvasBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCanvasBuilder {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            layout: Vec::new(),
            config: CanvasConfig::default(),
        }
    }

    /// Add a center-origin rectangle centered at (`x`, `y`).
    pub fn with_rect(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.objects.push(SceneObject::rect(x, y, width, height));
        self
    }

    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Place the canvas element at (`left`, `top`) on the page.
    pub fn with_offset(mut self, left: f64, top: f64) -> Self {
        self.layout = vec![LayoutBox {
            offset_left: left,
            offset_top: top,
            ..LayoutBox::default()
        }];
        self
    }

    pub fn with_layout(mut self, layout: Vec<LayoutBox>) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_viewport(mut self, viewport: ViewportTransform) -> Self {
        self.config.viewport_transform = viewport;
        self
    }

    pub fn without_selection(mut self) -> Self {
        self.config.selection = false;
        self
    }

    pub fn with_config(mut self, config: CanvasConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the canvas and return it with the ids of the added objects, bottom to top.
    pub fn build(self) -> (Canvas<HeadlessSurface>, Vec<ObjectId>) {
        init_tracing();
        let surface = HeadlessSurface::with_layout(self.layout);
        let mut canvas = Canvas::new(surface, self.config).expect("test config is valid");
        let ids = self.objects.into_iter().map(|obj| canvas.add(obj)).collect();
        (canvas, ids)
    }
}

// ============================================================================
// Pointer shortcuts
// ============================================================================

pub fn at(x: f64, y: f64) -> PointerEvent {
    PointerEvent::at(x, y)
}

/// Pointer down on the canvas element.
pub fn down(canvas: &mut Canvas<HeadlessSurface>, e: PointerEvent) -> Vec<Notification> {
    canvas.dispatch(ListenerScope::Canvas, PointerEventKind::Down, &e)
}

/// Pointer move, delivered to the document during a drag and to the canvas otherwise.
pub fn move_to(canvas: &mut Canvas<HeadlessSurface>, e: PointerEvent) -> Vec<Notification> {
    let scope = if canvas
        .listeners()
        .is_bound(ListenerScope::Document, PointerEventKind::Move)
    {
        ListenerScope::Document
    } else {
        ListenerScope::Canvas
    };
    canvas.dispatch(scope, PointerEventKind::Move, &e)
}

/// Pointer up, which only the document listens for.
pub fn up(canvas: &mut Canvas<HeadlessSurface>, e: PointerEvent) -> Vec<Notification> {
    canvas.dispatch(ListenerScope::Document, PointerEventKind::Up, &e)
}

/// Press at `from`, move to `to` and release there.
pub fn drag(
    canvas: &mut Canvas<HeadlessSurface>,
    from: PointerEvent,
    to: PointerEvent,
) -> Vec<Notification> {
    let mut all = down(canvas, from);
    all.extend(move_to(canvas, to));
    all.extend(up(canvas, to));
    all
}

/// Press and release in place.
pub fn click(canvas: &mut Canvas<HeadlessSurface>, e: PointerEvent) -> Vec<Notification> {
    let mut all = down(canvas, e);
    all.extend(up(canvas, e));
    all
}

/// Notification names joined by spaces, for one-line assertions.
pub fn names(notifications: &[Notification]) -> String {
    notifications
        .iter()
        .map(|n| n.name.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
