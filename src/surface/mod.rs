use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::core::{Point, SurfaceSize, Tone};
use crate::foundation::error::TaijiResult;
use crate::geometry::symbol::ArcFill;

pub(crate) mod composite;
pub(crate) mod frame;
pub(crate) mod pixmap;
pub(crate) mod recording;

/// Minimal vector path-fill API a host surface must provide.
///
/// This is the subset of a 2D canvas context the engine paints with. Calls arrive in
/// `begin_path`, `arc`, `set_fill`, `fill` order for every primitive.
pub trait DrawSurface {
    /// Logical size of the surface; used for default radius and center.
    fn size(&self) -> SurfaceSize;

    /// Start a new, empty path.
    fn begin_path(&mut self);

    /// Add an arc to the current path, sweeping from `start_angle` to `end_angle` in the
    /// direction of increasing angle.
    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> TaijiResult<()>;

    /// Set the color used by subsequent fills.
    fn set_fill(&mut self, tone: Tone);

    /// Fill the current path with the current color.
    fn fill(&mut self) -> TaijiResult<()>;
}

/// A canvas shared by several instances.
impl<S: DrawSurface + ?Sized> DrawSurface for Rc<RefCell<S>> {
    fn size(&self) -> SurfaceSize {
        self.borrow().size()
    }

    fn begin_path(&mut self) {
        self.borrow_mut().begin_path();
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> TaijiResult<()> {
        self.borrow_mut().arc(center, radius, start_angle, end_angle)
    }

    fn set_fill(&mut self, tone: Tone) {
        self.borrow_mut().set_fill(tone);
    }

    fn fill(&mut self) -> TaijiResult<()> {
        self.borrow_mut().fill()
    }
}

impl<S: DrawSurface + ?Sized> DrawSurface for Box<S> {
    fn size(&self) -> SurfaceSize {
        (**self).size()
    }

    fn begin_path(&mut self) {
        (**self).begin_path();
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> TaijiResult<()> {
        (**self).arc(center, radius, start_angle, end_angle)
    }

    fn set_fill(&mut self, tone: Tone) {
        (**self).set_fill(tone);
    }

    fn fill(&mut self) -> TaijiResult<()> {
        (**self).fill()
    }
}

/// Paint one primitive.
pub fn paint_fill<S: DrawSurface + ?Sized>(surface: &mut S, fill: &ArcFill) -> TaijiResult<()> {
    surface.begin_path();
    surface.arc(fill.center, fill.radius, fill.start_angle, fill.end_angle)?;
    surface.set_fill(fill.tone);
    surface.fill()
}

#[cfg(test)]
#[path = "../../tests/unit/surface/shared.rs"]
mod tests;
