use std::f64::consts::TAU;

use kurbo::Arc;

use crate::foundation::core::{BezPath, Point, Vec2};

/// Flattening tolerance used when turning arcs into cubic segments.
pub(crate) const ARC_TOLERANCE: f64 = 0.1;

/// Sweep of a 2D-canvas `arc(start, end)` call drawn in the default (non-anticlockwise) direction.
///
/// A span of at least one full turn draws the whole circle; anything shorter is reduced modulo a
/// turn into `[0, 2π)`.
pub fn canvas_sweep(start_angle: f64, end_angle: f64) -> f64 {
    let span = end_angle - start_angle;
    if !span.is_finite() {
        return 0.0;
    }
    if span >= TAU {
        return TAU;
    }
    span.rem_euclid(TAU)
}

/// Point on the circle of `radius` around `center` at `angle`.
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::from_angle(angle) * radius
}

/// Append a canvas-style arc to `path`.
///
/// Like the canvas API, an arc added to a non-empty path is joined to the previous point with a
/// straight line; on an empty path it starts a new subpath.
pub fn append_arc(path: &mut BezPath, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
    let sweep = canvas_sweep(start_angle, end_angle);
    let start = point_on_circle(center, radius, start_angle);
    if path.elements().is_empty() {
        path.move_to(start);
    } else {
        path.line_to(start);
    }

    let arc = Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle,
        sweep_angle: sweep,
        x_rotation: 0.0,
    };
    path.extend(arc.append_iter(ARC_TOLERANCE));
}

/// Closed path filled by `begin_path(); arc(..); fill()`.
pub fn arc_fill_path(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> BezPath {
    let mut path = BezPath::new();
    append_arc(&mut path, center, radius, start_angle, end_angle);
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/arc.rs"]
mod tests;
