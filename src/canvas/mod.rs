//! The interaction controller.
//!
//! [`Canvas`] owns the scene, the selection and the gesture state, and turns
//! pointer events into hit tests, selection changes and transforms. Handlers
//! live in `crate::input`; selection bookkeeping in [`selection`].
//!
//! Every public entry point that reacts to input returns the notifications it
//! produced, after they have been delivered to registered listeners.

mod selection;

use crate::config::CanvasConfig;
use crate::error::{CanvasError, CanvasResult};
use crate::events::{EventBus, EventName, ListenerId, Notification};
use crate::geometry::{element_offset, Offset, Point, ViewportTransform};
use crate::hit_testing::HitTester;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::{
    DragSubscription, InteractionState, ListenerScope, ListenerSet, PointerEvent, PointerEventKind,
};
use crate::object::{ObjectId, Placement, SceneObject, SelectionGroup, Target, Transformable};
use crate::perf::ScopedTimer;
use crate::render::{Frame, SelectionRect, Surface};
use crate::scene::Scene;
use tracing::{debug, trace};

pub struct Canvas<S: Surface> {
    pub(crate) config: CanvasConfig,
    pub(crate) surface: S,
    pub(crate) scene: Scene,
    pub(crate) state: InteractionState,
    pub(crate) active_object: Option<ObjectId>,
    pub(crate) active_group: Option<SelectionGroup>,
    pub(crate) offset: Offset,
    pub(crate) viewport: ViewportTransform,
    pub(crate) inverse_viewport: ViewportTransform,
    /// Scene-space pointer of the previous event, for move deltas
    pub(crate) previous_pointer: Point,
    pub(crate) listeners: ListenerSet,
    pub(crate) drag: Option<DragSubscription>,
    pub(crate) last_event: Option<PointerEvent>,
    pub(crate) events: EventBus,
}

impl<S: Surface> Canvas<S> {
    pub fn new(surface: S, config: CanvasConfig) -> CanvasResult<Self> {
        config.validate()?;
        let viewport = config.viewport_transform;
        let inverse_viewport = viewport
            .invert()
            .ok_or(CanvasError::SingularViewport(viewport.0))?;

        let mut scene = Scene::new();
        scene.set_zoom(viewport.zoom());

        let mut canvas = Self {
            config,
            surface,
            scene,
            state: InteractionState::Idle,
            active_object: None,
            active_group: None,
            offset: Offset::default(),
            viewport,
            inverse_viewport,
            previous_pointer: Point::default(),
            listeners: ListenerSet::new(),
            drag: None,
            last_event: None,
            events: EventBus::new(),
        };
        canvas.calc_offset();
        debug!(
            width = canvas.config.width,
            height = canvas.config.height,
            "Canvas created"
        );
        Ok(canvas)
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Objects bottom to top.
    pub fn objects(&self) -> &[SceneObject] {
        self.scene.objects()
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.scene.get(id)
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn viewport_transform(&self) -> ViewportTransform {
        self.viewport
    }

    pub fn zoom(&self) -> f64 {
        self.scene.zoom()
    }

    // ========================================================================
    // Objects
    // ========================================================================

    /// Add an object on top of the scene.
    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        let id = self.scene.add(object);
        self.events.emit(EventName::ObjectAdded, Some(Target::Object(id)), None);
        self.render_all();
        self.events.flush();
        id
    }

    /// Remove an object, dropping it from the selection.
    pub fn remove(&mut self, id: ObjectId) -> CanvasResult<SceneObject> {
        let removed = self.scene.remove(id).ok_or(CanvasError::UnknownObject(id))?;

        if self.state.target() == Some(Target::Object(id)) {
            self.state.reset();
        }
        if self.active_object == Some(id) {
            self.active_object = None;
        }
        if let Some(group) = self.active_group.take_if(|g| g.contains(id)) {
            if self.state.target() == Some(Target::Group) {
                self.state.reset();
            }
            let remaining = group.member_ids().into_iter().filter(|m| *m != id).collect();
            self.apply_selection(remaining, None);
        }

        self.events.emit(EventName::ObjectRemoved, Some(Target::Object(id)), None);
        self.render_all();
        self.events.flush();
        Ok(removed)
    }

    /// Mutate an object outside a gesture and resynchronize its caches.
    pub fn modify_object<F>(&mut self, id: ObjectId, f: F) -> CanvasResult<()>
    where
        F: FnOnce(&mut SceneObject),
    {
        let object = self.scene.get_mut(id).ok_or(CanvasError::UnknownObject(id))?;
        f(object);
        self.scene.refresh_coords(id);

        // The group's bounds derive from its members; rebuild it around the change
        if let Some(group) = self.active_group.as_ref().filter(|g| g.contains(id)) {
            let ids = group.member_ids();
            self.active_group = self.build_group(&ids);
        }
        self.render_all();
        Ok(())
    }

    /// Replace the viewport matrix. Coordinates are recomputed for the new zoom.
    pub fn set_viewport_transform(&mut self, viewport: ViewportTransform) -> CanvasResult<()> {
        let inverse = viewport
            .invert()
            .ok_or(CanvasError::SingularViewport(viewport.0))?;
        self.viewport = viewport;
        self.inverse_viewport = inverse;
        self.config.viewport_transform = viewport;

        self.scene.set_zoom(viewport.zoom());
        let zoom = self.scene.zoom();
        if let Some(group) = self.active_group.as_mut() {
            group.set_coords(zoom);
        }
        debug!(zoom, "Viewport transform changed");
        self.render_all();
        Ok(())
    }

    // ========================================================================
    // Coordinates
    // ========================================================================

    /// Recompute the canvas's page offset from the surface's layout chain.
    pub fn calc_offset(&mut self) -> Offset {
        self.offset = element_offset(self.surface.layout_chain());
        trace!(left = self.offset.left, top = self.offset.top, "Canvas offset");
        self.offset
    }

    /// The host reports that layout changed.
    pub fn on_resize(&mut self) {
        self.calc_offset();
    }

    pub(crate) fn coordinate_context(&self) -> CoordinateContext<'_> {
        CoordinateContext::new(&self.offset, &self.viewport, &self.inverse_viewport)
    }

    /// Canvas-local pointer position of `e`.
    pub fn get_pointer(&self, e: &PointerEvent) -> Point {
        CoordinateConverter::page_to_canvas(e.page(), &self.coordinate_context())
    }

    /// Scene-space pointer position of `e`.
    pub fn scene_pointer(&self, e: &PointerEvent) -> Point {
        CoordinateConverter::page_to_scene(e.page(), &self.coordinate_context())
    }

    /// Topmost target under the event's pointer.
    pub fn find_target(&self, e: &PointerEvent, skip_group: bool) -> Option<Target> {
        self.hit_tester().find_target(self.scene_pointer(e), skip_group)
    }

    pub(crate) fn hit_tester(&self) -> HitTester<'_> {
        HitTester::new(&self.scene, self.active_group.as_ref())
    }

    // ========================================================================
    // Targets
    // ========================================================================

    pub(crate) fn target_ref(&self, target: Target) -> Option<&dyn Transformable> {
        match target {
            Target::Object(id) => self.scene.get(id).map(|obj| obj as &dyn Transformable),
            Target::Group => self.active_group.as_ref().map(|g| g as &dyn Transformable),
        }
    }

    pub(crate) fn with_target_mut<R>(
        &mut self,
        target: Target,
        f: impl FnOnce(&mut dyn Transformable) -> R,
    ) -> Option<R> {
        match target {
            Target::Object(id) => self.scene.get_mut(id).map(|obj| f(obj)),
            Target::Group => self.active_group.as_mut().map(|g| f(g)),
        }
    }

    pub(crate) fn target_placement(&self, target: Target) -> Option<Placement> {
        self.target_ref(target).map(|t| *t.placement())
    }

    pub(crate) fn is_selectable(&self, target: Target) -> bool {
        match target {
            Target::Object(id) => self.scene.get(id).is_some_and(|obj| obj.selectable),
            Target::Group => self.active_group.is_some(),
        }
    }

    /// Recompute the cache of whatever a transform just mutated.
    ///
    /// For the group this also carries its transform over to the members.
    pub(crate) fn refresh_target_coords(&mut self, target: Target) {
        match target {
            Target::Object(id) => {
                self.scene.refresh_coords(id);
            }
            Target::Group => {
                let zoom = self.scene.zoom();
                if let Some(group) = self.active_group.as_mut() {
                    group.set_coords(zoom);
                }
                if let Some(group) = self.active_group.as_ref() {
                    group.sync_members(&mut self.scene);
                    group.set_member_coords(&mut self.scene);
                }
            }
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Ask the surface for a full repaint.
    pub fn render_all(&mut self) {
        let frame = Frame {
            objects: self.scene.objects(),
            active_group: self.active_group.as_ref(),
            selection_rect: self.state.selector().map(SelectionRect::from),
            config: &self.config,
        };
        self.surface.render_all(&frame);
    }

    /// Ask the surface to repaint the overlay only.
    pub fn render_top(&mut self) {
        let frame = Frame {
            objects: self.scene.objects(),
            active_group: self.active_group.as_ref(),
            selection_rect: self.state.selector().map(SelectionRect::from),
            config: &self.config,
        };
        self.surface.render_top(&frame);
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    pub fn on<F>(&mut self, name: EventName, listener: F) -> ListenerId
    where
        F: FnMut(&Notification) + 'static,
    {
        self.events.on(name, listener)
    }

    /// Listen for `name` on `target` only.
    ///
    /// `Target::Group` names whichever selection group is active when the
    /// notification fires. Groups are rebuilt on every selection change, so a
    /// group listener stays bound across them until removed with [`Self::off`].
    pub fn on_target<F>(&mut self, target: Target, name: EventName, listener: F) -> ListenerId
    where
        F: FnMut(&Notification) + 'static,
    {
        self.events.on_target(target, name, listener)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    /// Queue a canvas-level notification and, when there is a target, its target-scoped twin.
    pub(crate) fn emit_pair(
        &mut self,
        canvas_event: EventName,
        target_event: EventName,
        target: Option<Target>,
        e: &PointerEvent,
    ) {
        self.events.emit(canvas_event, target, Some(*e));
        if target.is_some() {
            self.events.emit(target_event, target, Some(*e));
        }
    }

    // ========================================================================
    // Pointer entry points
    // ========================================================================

    /// Route an event delivered on `scope`. Events on an unbound scope are dropped.
    pub fn dispatch(
        &mut self,
        scope: ListenerScope,
        kind: PointerEventKind,
        e: &PointerEvent,
    ) -> Vec<Notification> {
        if !self.listeners.is_bound(scope, kind) {
            trace!(?scope, ?kind, "No handler bound, event dropped");
            return Vec::new();
        }
        let _timer = ScopedTimer::for_pointer_event("canvas::dispatch");
        match kind {
            PointerEventKind::Down => self.on_mouse_down(e),
            PointerEventKind::Move => self.on_mouse_move(e),
            PointerEventKind::Up => self.on_mouse_up(e),
        }
    }

    pub fn on_mouse_down(&mut self, e: &PointerEvent) -> Vec<Notification> {
        self.last_event = Some(*e);
        self.handle_mouse_down(e);
        if e.is_primary() && self.drag.is_none() {
            self.drag = Some(self.listeners.begin_drag_tracking());
        }
        self.events.flush()
    }

    pub fn on_mouse_move(&mut self, e: &PointerEvent) -> Vec<Notification> {
        self.last_event = Some(*e);
        self.handle_mouse_move(e);
        self.events.flush()
    }

    pub fn on_mouse_up(&mut self, e: &PointerEvent) -> Vec<Notification> {
        if !e.is_primary() {
            trace!(button = ?e.button, "Ignoring non-primary pointer up");
            return Vec::new();
        }
        self.last_event = Some(*e);
        self.handle_mouse_up(e);
        if let Some(subscription) = self.drag.take() {
            self.listeners.release(subscription);
        }
        self.events.flush()
    }

    /// The window lost focus mid-gesture: finish the gesture at the last known pointer.
    pub fn on_blur(&mut self) -> Vec<Notification> {
        let Some(subscription) = self.drag.take() else {
            return Vec::new();
        };
        let e = self.last_event.unwrap_or_default();
        debug!(state = ?self.state, "Blur during gesture, finishing it");
        self.handle_mouse_up(&e);
        self.listeners.release(subscription);
        self.events.flush()
    }
}
