use std::f64::consts::{PI, TAU};

use crate::foundation::core::{Point, Tone, Vec2};

/// One `begin_path` / `arc` / `fill` primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcFill {
    /// Arc center.
    pub center: Point,
    /// Arc radius.
    pub radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Fill color.
    pub tone: Tone,
}

/// Number of fills that make up one symbol.
pub const SYMBOL_FILL_COUNT: usize = 6;

/// Centers of the two inner lobes at `angle`: `(white side, black side)`.
///
/// They sit half a radius from the symbol center along the rotation axis.
pub fn lobe_centers(center: Point, radius: f64, angle: f64) -> (Point, Point) {
    let offset = Vec2::from_angle(angle) * (radius / 2.0);
    (center + offset, center - offset)
}

/// Radius of the two eye dots.
pub fn eye_radius(radius: f64) -> f64 {
    radius / 5.0
}

/// Build the fills for a symbol of `radius` around `center`, rotated by `angle`, in paint order.
///
/// Later fills occlude earlier ones. The inner lobes are painted as full circles rather than half
/// circles; a half circle leaves a hairline seam along the shared edge once rasterized.
pub fn symbol_fills(center: Point, radius: f64, angle: f64) -> [ArcFill; SYMBOL_FILL_COUNT] {
    let half = radius / 2.0;
    let eye = eye_radius(radius);
    let (white_lobe, black_lobe) = lobe_centers(center, radius, angle);

    [
        ArcFill {
            center,
            radius,
            start_angle: angle,
            end_angle: angle + PI,
            tone: Tone::White,
        },
        ArcFill {
            center,
            radius,
            start_angle: angle + PI,
            end_angle: angle + TAU,
            tone: Tone::Black,
        },
        ArcFill {
            center: white_lobe,
            radius: half,
            start_angle: angle,
            end_angle: angle + TAU,
            tone: Tone::White,
        },
        ArcFill {
            center: black_lobe,
            radius: half,
            start_angle: angle,
            end_angle: angle + TAU,
            tone: Tone::Black,
        },
        ArcFill {
            center: white_lobe,
            radius: eye,
            start_angle: angle,
            end_angle: angle + TAU,
            tone: Tone::Black,
        },
        ArcFill {
            center: black_lobe,
            radius: eye,
            start_angle: angle,
            end_angle: angle + TAU,
            tone: Tone::White,
        },
    ]
}

/// Full background disc that erases the previous frame of a symbol.
pub fn clear_fill(center: Point, radius: f64) -> ArcFill {
    ArcFill {
        center,
        radius,
        start_angle: 0.0,
        end_angle: TAU,
        tone: Tone::BACKGROUND,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/symbol.rs"]
mod tests;
