//! Taiji renders and animates yin-yang symbols on a 2D arc-fill surface.
//!
//! Each symbol is a [`Taiji`] created through a [`Registry`]. It owns its geometry, angle and
//! direction plus an optional rotation task driven by a [`TimerHost`]:
//!
//! - Build the six arc fills of a symbol with [`symbol_fills`]
//! - Paint them on any [`DrawSurface`] (e.g. [`PixmapSurface`] or [`RecordingSurface`])
//! - Spin instances independently on an [`EventLoop`]
//! - Render a JSON [`Scene`] to frames with [`render_scene`] and [`render_scene_frames`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod geometry;
mod instance;
mod registry;
mod scene;
mod scheduler;
mod surface;

pub use crate::foundation::core::{BezPath, Direction, Point, SurfaceSize, Tone, Vec2};
pub use crate::foundation::error::{Axis, Notice, TaijiError, TaijiResult};
pub use crate::foundation::math::{ROTATION_STEP_RAD, wrap_angle};

pub use crate::geometry::arc::{append_arc, arc_fill_path, canvas_sweep, point_on_circle};
pub use crate::geometry::symbol::{
    ArcFill, SYMBOL_FILL_COUNT, clear_fill, eye_radius, lobe_centers, symbol_fills,
};

pub use crate::instance::{Placement, Taiji};
pub use crate::registry::Registry;

pub use crate::scheduler::event_loop::EventLoop;
pub use crate::scheduler::timer::{
    DEFAULT_INTERVAL_MS, IntervalId, RotationTask, TickFn, TimerHost, normalize_interval_ms,
};

pub use crate::scene::model::{CanvasDef, Scene, TaijiDef};
pub use crate::scene::render::{
    FrameSink, InMemorySink, PngDirSink, render_scene, render_scene_frames,
};

pub use crate::surface::frame::FrameRGBA;
pub use crate::surface::pixmap::PixmapSurface;
pub use crate::surface::recording::{RecordingSurface, SurfaceCall};
pub use crate::surface::{DrawSurface, paint_fill};
