use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn close_pt(a: Point, b: Point) -> bool {
    close(a.x, b.x) && close(a.y, b.y)
}

#[test]
fn paint_order_and_tones_are_fixed() {
    let fills = symbol_fills(Point::new(50.0, 50.0), 40.0, 0.3);
    let tones: Vec<Tone> = fills.iter().map(|f| f.tone).collect();
    assert_eq!(
        tones,
        vec![
            Tone::White,
            Tone::Black,
            Tone::White,
            Tone::Black,
            Tone::Black,
            Tone::White
        ]
    );
    let radii: Vec<f64> = fills.iter().map(|f| f.radius).collect();
    assert_eq!(radii, vec![40.0, 40.0, 20.0, 20.0, 8.0, 8.0]);
}

#[test]
fn outer_halves_split_at_angle() {
    let theta = 1.25;
    let fills = symbol_fills(Point::ORIGIN, 10.0, theta);
    assert!(close(fills[0].start_angle, theta));
    assert!(close(fills[0].end_angle, theta + PI));
    assert!(close(fills[1].start_angle, theta + PI));
    assert!(close(fills[1].end_angle, theta + TAU));
    assert_eq!(fills[0].center, Point::ORIGIN);
    assert_eq!(fills[1].center, Point::ORIGIN);
}

#[test]
fn inner_circles_span_full_turn() {
    let fills = symbol_fills(Point::ORIGIN, 10.0, -2.0);
    for f in &fills[2..] {
        assert!(close(f.end_angle - f.start_angle, TAU));
    }
}

#[test]
fn eye_centers_follow_rotation_axis() {
    let c = Point::new(120.0, 80.0);
    let r = 60.0;
    for theta in [0.0, 0.7, PI / 2.0, 3.0, -1.1] {
        let fills = symbol_fills(c, r, theta);
        let expect_white = Point::new(
            c.x + r / 2.0 * theta.cos(),
            c.y + r / 2.0 * theta.sin(),
        );
        let expect_black = Point::new(
            c.x - r / 2.0 * theta.cos(),
            c.y - r / 2.0 * theta.sin(),
        );
        assert!(close_pt(fills[2].center, expect_white));
        assert!(close_pt(fills[3].center, expect_black));
        // Eyes share the lobe centers with swapped tones.
        assert!(close_pt(fills[4].center, expect_white));
        assert!(close_pt(fills[5].center, expect_black));
        assert!(close(fills[4].radius, r / 5.0));
        assert!(close(fills[5].radius, r / 5.0));
    }
}

#[test]
fn lobes_are_symmetric_about_center() {
    let c = Point::new(3.0, 4.0);
    let (w, b) = lobe_centers(c, 8.0, 0.9);
    assert!(close_pt(w.midpoint(b), c));
    assert!(close((w - b).hypot(), 8.0));
}

#[test]
fn clear_fill_covers_symbol_with_background() {
    let f = clear_fill(Point::new(10.0, 10.0), 5.0);
    assert_eq!(f.tone, Tone::White);
    assert_eq!(f.radius, 5.0);
    assert!(close(f.end_angle - f.start_angle, TAU));
}
