use crate::foundation::core::{BezPath, Point, SurfaceSize, Tone};
use crate::foundation::error::{TaijiError, TaijiResult};
use crate::geometry::arc::append_arc;
use crate::surface::DrawSurface;
use crate::surface::composite::{fill_solid, over_in_place};
use crate::surface::frame::FrameRGBA;

/// CPU raster surface powered by `vello_cpu`.
///
/// Fills are batched into a render context and composited onto a retained pixmap when the frame
/// is read back (or when [`PixmapSurface::flush`] is called), so the pixmap always reflects every
/// fill in painter's order.
pub struct PixmapSurface {
    width: u16,
    height: u16,
    base: vello_cpu::Pixmap,
    ctx: vello_cpu::RenderContext,
    pending: usize,
    path: BezPath,
    tone: Tone,
}

impl std::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pending", &self.pending)
            .field("tone", &self.tone)
            .finish_non_exhaustive()
    }
}

impl PixmapSurface {
    /// Create a surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Tone) -> TaijiResult<Self> {
        let width: u16 = width
            .try_into()
            .map_err(|_| TaijiError::surface("surface width exceeds u16"))?;
        let height: u16 = height
            .try_into()
            .map_err(|_| TaijiError::surface("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(TaijiError::surface("surface must be at least 1x1"));
        }

        let mut base = vello_cpu::Pixmap::new(width, height);
        fill_solid(base.data_as_u8_slice_mut(), background.rgba8());

        Ok(Self {
            width,
            height,
            base,
            ctx: vello_cpu::RenderContext::new(width, height),
            pending: 0,
            path: BezPath::new(),
            tone: Tone::Black,
        })
    }

    /// Pixel width.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Pixel height.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Composite every pending fill onto the retained pixmap.
    pub fn flush(&mut self) -> TaijiResult<()> {
        if self.pending == 0 {
            return Ok(());
        }

        let mut ctx = std::mem::replace(
            &mut self.ctx,
            vello_cpu::RenderContext::new(self.width, self.height),
        );
        ctx.flush();
        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut layer);
        over_in_place(self.base.data_as_u8_slice_mut(), layer.data_as_u8_slice())?;

        tracing::trace!(fills = self.pending, "pixmap surface flushed");
        self.pending = 0;
        Ok(())
    }

    /// Flush and read back the current contents.
    pub fn frame(&mut self) -> TaijiResult<FrameRGBA> {
        self.flush()?;
        Ok(FrameRGBA {
            width: self.width(),
            height: self.height(),
            data: self.base.data_as_u8_slice().to_vec(),
        })
    }
}

impl DrawSurface for PixmapSurface {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(f64::from(self.width), f64::from(self.height))
    }

    fn begin_path(&mut self) {
        self.path = BezPath::new();
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> TaijiResult<()> {
        if radius < 0.0 {
            return Err(TaijiError::surface(format!(
                "arc radius must be non-negative, got {radius}"
            )));
        }
        // Non-finite arguments are ignored, matching the canvas API.
        if ![center.x, center.y, radius, start_angle, end_angle]
            .iter()
            .all(|v| v.is_finite())
        {
            return Ok(());
        }
        append_arc(&mut self.path, center, radius, start_angle, end_angle);
        Ok(())
    }

    fn set_fill(&mut self, tone: Tone) {
        self.tone = tone;
    }

    fn fill(&mut self) -> TaijiResult<()> {
        if self.path.elements().is_empty() {
            return Ok(());
        }
        let [r, g, b, a] = self.tone.rgba8();
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        self.ctx.fill_path(&bezpath_to_cpu(&self.path));
        self.pending += 1;
        Ok(())
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    if !matches!(path.elements().last(), Some(PathEl::ClosePath)) {
        out.close_path();
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/surface/pixmap.rs"]
mod tests;
