//! Stageboard: the interaction core of a 2D scene editor.
//!
//! A [`Canvas`](canvas::Canvas) owns an ordered scene of objects and turns
//! raw pointer events into hit tests, selection changes and transforms
//! (move, rotate, scale) of single objects or a multi-object group. Drawing
//! is delegated to a host [`Surface`](render::Surface).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `geometry` | Points, boxes, quads, viewport matrix, element offset |
//! | `object` | Scene objects, placement, control handles, selection group |
//! | `scene` | Z-ordered object list with its spatial index |
//! | `spatial_index` | R-tree over cached bounding boxes |
//! | `hit_testing` | Target under a point, objects in a rectangle |
//! | `canvas` | The interaction controller and selection bookkeeping |
//! | `input` | Pointer events, gesture state machine, handlers, listener bindings |
//! | `events` | Notification queue and listener registry |
//! | `render` | Surface trait and a headless implementation |
//! | `config` | Canvas configuration |
//! | `error` | Error type and result alias |
//! | `constants` | Defaults, cursors, numeric limits |
//! | `perf` | Scoped timing for hot paths |

pub mod canvas;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod geometry;
pub mod hit_testing;
pub mod input;
pub mod object;
pub mod perf;
pub mod render;
pub mod scene;
pub mod spatial_index;

pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use error::{CanvasError, CanvasResult};
pub use events::{EventName, Notification};
pub use input::{ListenerScope, PointerEvent, PointerEventKind};
pub use object::{ObjectId, SceneObject, Target};
pub use render::{HeadlessSurface, Surface};
