pub use kurbo::{BezPath, Point, Vec2};

/// Logical size of a drawing surface, in the surface's own units (CSS pixels for a browser canvas).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl SurfaceSize {
    /// Create a size from width and height.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Return `true` when both dimensions are finite and strictly positive.
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Center point of the surface.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The two fill colors of the symbol. White doubles as the background color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Tone {
    /// `#ffffff`
    White,
    /// `#000000`
    Black,
}

impl Tone {
    /// Color used by `clear_draw` to erase a previous frame.
    pub const BACKGROUND: Tone = Tone::White;

    /// Opaque straight-alpha RGBA8 value.
    pub fn rgba8(self) -> [u8; 4] {
        match self {
            Self::White => [255, 255, 255, 255],
            Self::Black => [0, 0, 0, 255],
        }
    }

    /// CSS color string, as a browser canvas `fillStyle` would take it.
    pub fn css(self) -> &'static str {
        match self {
            Self::White => "#ffffff",
            Self::Black => "#000000",
        }
    }
}

/// Spin direction. Clockwise means increasing angle in a y-down coordinate system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// Angle grows every tick.
    #[default]
    Clockwise,
    /// Angle shrinks every tick.
    CounterClockwise,
}

impl Direction {
    /// Map a clockwise flag onto a direction.
    pub fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }

    /// Sign applied to the per-tick angle step.
    pub fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
