use super::*;
use crate::surface::recording::RecordingSurface;

#[test]
fn shared_surface_forwards_to_inner() {
    let canvas = Rc::new(RefCell::new(RecordingSurface::new(64.0, 32.0)));
    let mut a = canvas.clone();
    let mut b = canvas.clone();
    assert_eq!(a.size(), SurfaceSize::new(64.0, 32.0));

    let fill = ArcFill {
        center: Point::new(8.0, 8.0),
        radius: 4.0,
        start_angle: 0.0,
        end_angle: 1.0,
        tone: Tone::White,
    };
    paint_fill(&mut a, &fill).unwrap();
    paint_fill(&mut b, &ArcFill { tone: Tone::Black, ..fill }).unwrap();

    let fills = canvas.borrow().fills();
    assert_eq!(fills.len(), 2);
    assert_eq!(fills[0].tone, Tone::White);
    assert_eq!(fills[1].tone, Tone::Black);
}

#[test]
fn boxed_surface_forwards_to_inner() {
    let mut boxed: Box<dyn DrawSurface> = Box::new(RecordingSurface::new(10.0, 20.0));
    assert_eq!(boxed.size().height, 20.0);
    boxed.begin_path();
    boxed.arc(Point::ORIGIN, 1.0, 0.0, 1.0).unwrap();
    boxed.set_fill(Tone::Black);
    boxed.fill().unwrap();
}
