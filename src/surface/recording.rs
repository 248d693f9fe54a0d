use crate::foundation::core::{Point, SurfaceSize, Tone};
use crate::foundation::error::TaijiResult;
use crate::geometry::symbol::ArcFill;
use crate::surface::DrawSurface;

/// One call received by a [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceCall {
    /// `begin_path()`
    BeginPath,
    /// `arc(center, radius, start, end)`
    Arc {
        /// Arc center.
        center: Point,
        /// Arc radius.
        radius: f64,
        /// Start angle.
        start_angle: f64,
        /// End angle.
        end_angle: f64,
    },
    /// `set_fill(tone)`
    SetFill(Tone),
    /// `fill()`
    Fill,
}

/// Surface that records calls instead of rasterizing them.
///
/// Useful for tests and for headless hosts that forward calls to another drawing API.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: SurfaceSize,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// Create an empty recording surface of the given logical size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: SurfaceSize::new(width, height),
            calls: Vec::new(),
        }
    }

    /// Borrow the recorded calls in arrival order.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the log empty.
    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    /// Reconstruct the primitives that were filled.
    ///
    /// Each `fill()` yields the most recent arc of the current path, painted with the fill color in
    /// effect at that point. Fills of a path without an arc are skipped.
    pub fn fills(&self) -> Vec<ArcFill> {
        let mut out = Vec::new();
        let mut tone = Tone::Black;
        let mut arc: Option<(Point, f64, f64, f64)> = None;
        for call in &self.calls {
            match *call {
                SurfaceCall::BeginPath => arc = None,
                SurfaceCall::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                } => arc = Some((center, radius, start_angle, end_angle)),
                SurfaceCall::SetFill(t) => tone = t,
                SurfaceCall::Fill => {
                    if let Some((center, radius, start_angle, end_angle)) = arc {
                        out.push(ArcFill {
                            center,
                            radius,
                            start_angle,
                            end_angle,
                            tone,
                        });
                    }
                }
            }
        }
        out
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn begin_path(&mut self) {
        self.calls.push(SurfaceCall::BeginPath);
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> TaijiResult<()> {
        self.calls.push(SurfaceCall::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
        Ok(())
    }

    fn set_fill(&mut self, tone: Tone) {
        self.calls.push(SurfaceCall::SetFill(tone));
    }

    fn fill(&mut self) -> TaijiResult<()> {
        self.calls.push(SurfaceCall::Fill);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/recording.rs"]
mod tests;
