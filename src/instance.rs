use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::foundation::core::{Direction, Point, SurfaceSize};
use crate::foundation::error::{Axis, Notice, TaijiError, TaijiResult};
use crate::foundation::math::{ROTATION_STEP_RAD, wrap_angle};
use crate::geometry::symbol::{clear_fill, symbol_fills};
use crate::scheduler::timer::{RotationTask, TimerHost, normalize_interval_ms};
use crate::surface::{DrawSurface, paint_fill};

/// Radius and center resolved from optional construction arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Resolved radius, always positive.
    pub radius: f64,
    /// Resolved center.
    pub center: Point,
    /// Corrections the caller should hear about.
    pub notices: Vec<Notice>,
}

impl Placement {
    /// Apply defaults and range checks.
    ///
    /// - A missing, zero, negative or non-finite radius becomes a quarter of the surface width.
    /// - A missing or non-finite coordinate becomes the surface center on that axis.
    /// - A coordinate whose integer part lies outside `[-radius, extent + radius]` is reset to the
    ///   surface center and reported as [`Notice::PositionOutOfRange`].
    pub fn resolve(
        size: SurfaceSize,
        radius: Option<f64>,
        x: Option<f64>,
        y: Option<f64>,
    ) -> Self {
        let default_center = size.center();

        let radius = match radius {
            Some(r) if r.is_finite() && r > 0.0 => r,
            requested => {
                let r = size.width / 4.0;
                if requested.is_some() {
                    tracing::debug!(?requested, radius = r, "invalid radius replaced by default");
                }
                r
            }
        };

        let mut notices = Vec::new();
        let x = resolve_axis(Axis::X, x, default_center.x, size.width, radius, &mut notices);
        let y = resolve_axis(Axis::Y, y, default_center.y, size.height, radius, &mut notices);

        Self {
            radius,
            center: Point::new(x, y),
            notices,
        }
    }
}

fn resolve_axis(
    axis: Axis,
    requested: Option<f64>,
    default: f64,
    extent: f64,
    radius: f64,
    notices: &mut Vec<Notice>,
) -> f64 {
    let Some(v) = requested.filter(|v| v.is_finite()) else {
        if requested.is_some() {
            tracing::debug!(%axis, ?requested, "invalid position replaced by default");
        }
        return default;
    };

    let whole = v.trunc();
    if whole < -radius || whole > extent + radius {
        let notice = Notice::PositionOutOfRange {
            axis,
            requested: v,
            reset_to: default,
        };
        tracing::warn!(%notice, "taiji position out of range");
        notices.push(notice);
        return default;
    }
    v
}

struct TaijiState<S> {
    radius: f64,
    center: Point,
    angle: f64,
    direction: Direction,
    surface: Option<S>,
    timer: Rc<dyn TimerHost>,
    rotation: Option<RotationTask>,
    notices: Vec<Notice>,
}

impl<S: DrawSurface> TaijiState<S> {
    fn surface_mut(&mut self) -> TaijiResult<&mut S> {
        self.surface.as_mut().ok_or(TaijiError::Disposed)
    }

    fn clear_draw(&mut self) -> TaijiResult<()> {
        let fill = clear_fill(self.center, self.radius);
        paint_fill(self.surface_mut()?, &fill)
    }

    fn draw(&mut self) -> TaijiResult<()> {
        let fills = symbol_fills(self.center, self.radius, self.angle);
        let surface = self.surface_mut()?;
        for fill in &fills {
            paint_fill(surface, fill)?;
        }
        Ok(())
    }

    fn advance_angle(&mut self) {
        self.angle = wrap_angle(self.angle + self.direction.sign() * ROTATION_STEP_RAD);
    }

    fn step(&mut self) -> TaijiResult<()> {
        if self.surface.is_none() {
            return Err(TaijiError::Disposed);
        }
        self.advance_angle();
        self.clear_draw()?;
        self.draw()
    }
}

/// Handle to one spinning symbol.
///
/// Handles are cheap to clone and all clones refer to the same instance. The instance lives on a
/// single thread; rotation ticks are delivered by the [`TimerHost`] it was created with.
pub struct Taiji<S: DrawSurface + 'static> {
    inner: Rc<RefCell<TaijiState<S>>>,
}

impl<S: DrawSurface + 'static> Clone for Taiji<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: DrawSurface + 'static> std::fmt::Debug for Taiji<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let st = self.inner.borrow();
        f.debug_struct("Taiji")
            .field("radius", &st.radius)
            .field("center", &st.center)
            .field("angle", &st.angle)
            .field("direction", &st.direction)
            .field("rotation", &st.rotation)
            .field("disposed", &st.surface.is_none())
            .finish()
    }
}

impl<S: DrawSurface + 'static> Taiji<S> {
    /// Construct an instance bound to `surface`.
    ///
    /// Fails with [`TaijiError::MissingSurface`] when `surface` is `None` or reports an undrawable
    /// size. Parameter corrections are applied per [`Placement::resolve`].
    pub(crate) fn new(
        radius: Option<f64>,
        surface: Option<S>,
        x: Option<f64>,
        y: Option<f64>,
        timer: Rc<dyn TimerHost>,
    ) -> TaijiResult<Self> {
        let Some(surface) = surface else {
            return Err(TaijiError::missing_surface("no surface was provided"));
        };
        let size = surface.size();
        if !size.is_drawable() {
            return Err(TaijiError::missing_surface(format!(
                "surface size {}x{} is not drawable",
                size.width, size.height
            )));
        }

        let placement = Placement::resolve(size, radius, x, y);
        tracing::debug!(
            radius = placement.radius,
            x = placement.center.x,
            y = placement.center.y,
            "taiji created"
        );

        Ok(Self {
            inner: Rc::new(RefCell::new(TaijiState {
                radius: placement.radius,
                center: placement.center,
                angle: 0.0,
                direction: Direction::Clockwise,
                surface: Some(surface),
                timer,
                rotation: None,
                notices: placement.notices,
            })),
        })
    }

    /// Symbol radius.
    pub fn radius(&self) -> f64 {
        self.inner.borrow().radius
    }

    /// Symbol center.
    pub fn center(&self) -> Point {
        self.inner.borrow().center
    }

    /// Current rotation in radians, within `[-2π, 2π]`.
    pub fn angle(&self) -> f64 {
        self.inner.borrow().angle
    }

    /// Current spin direction.
    pub fn direction(&self) -> Direction {
        self.inner.borrow().direction
    }

    /// Validation notices raised at construction.
    pub fn notices(&self) -> Vec<Notice> {
        self.inner.borrow().notices.clone()
    }

    /// Return `true` while a rotation task is installed.
    pub fn is_rotating(&self) -> bool {
        self.inner.borrow().rotation.is_some()
    }

    /// Tick period of the active rotation.
    pub fn interval_ms(&self) -> Option<u64> {
        self.inner
            .borrow()
            .rotation
            .as_ref()
            .map(RotationTask::period_ms)
    }

    /// Return `true` once [`Taiji::dispose`] has run.
    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().surface.is_none()
    }

    /// Return `true` when both handles refer to the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Change the spin direction. Takes effect on the next tick.
    pub fn set_direction(&self, direction: Direction) {
        self.inner.borrow_mut().direction = direction;
    }

    /// Shorthand for [`Taiji::set_direction`] with a clockwise flag.
    pub fn set_clockwise(&self, clockwise: bool) {
        self.set_direction(Direction::from_clockwise(clockwise));
    }

    /// Paint the symbol at the current angle.
    pub fn draw(&self) -> TaijiResult<()> {
        self.inner.borrow_mut().draw()
    }

    /// Erase the symbol's disc with the background color.
    pub fn clear_draw(&self) -> TaijiResult<()> {
        self.inner.borrow_mut().clear_draw()
    }

    /// Run one tick synchronously: advance the angle, clear, draw.
    pub fn step(&self) -> TaijiResult<()> {
        self.inner.borrow_mut().step()
    }

    /// Start rotating with a tick every `interval_ms` (30 ms when `None` or invalid).
    ///
    /// An active rotation is cancelled first, so at most one task exists per instance. Has no
    /// effect on a disposed instance.
    pub fn start_rotation(&self, interval_ms: Option<f64>) {
        let period_ms = normalize_interval_ms(interval_ms);

        let previous = {
            let mut st = self.inner.borrow_mut();
            if st.surface.is_none() {
                tracing::debug!("start_rotation ignored on disposed taiji");
                return;
            }
            st.rotation.take()
        };
        drop(previous);

        let weak = Rc::downgrade(&self.inner);
        let timer = self.inner.borrow().timer.clone();
        let task = RotationTask::start(timer, period_ms, Box::new(move || tick(&weak)));
        tracing::debug!(interval = ?task.id(), period_ms, "taiji rotation started");
        self.inner.borrow_mut().rotation = Some(task);
    }

    /// Cancel the active rotation, if any. The instance stays usable.
    pub fn stop_rotation(&self) {
        let task = self.inner.borrow_mut().rotation.take();
        if let Some(task) = task {
            tracing::debug!(interval = ?task.id(), "taiji rotation stopped");
            task.cancel();
        }
    }

    /// Cancel any rotation and release the surface. The instance becomes inert.
    ///
    /// Calling this more than once has no further effect.
    pub fn dispose(&self) {
        let (task, surface) = {
            let mut st = self.inner.borrow_mut();
            (st.rotation.take(), st.surface.take())
        };
        if surface.is_some() {
            tracing::debug!("taiji disposed");
        }
        drop(task);
        drop(surface);
    }
}

fn tick<S: DrawSurface>(weak: &Weak<RefCell<TaijiState<S>>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let Ok(mut st) = inner.try_borrow_mut() else {
        tracing::warn!("taiji tick skipped: instance busy");
        return;
    };
    if st.surface.is_none() {
        return;
    }
    if let Err(err) = st.step() {
        tracing::warn!(%err, "taiji tick failed to redraw");
    }
}

#[cfg(test)]
#[path = "../tests/unit/instance.rs"]
mod tests;
