use super::*;
use crate::foundation::error::TaijiError;
use crate::scheduler::event_loop::EventLoop;
use crate::surface::recording::RecordingSurface;
use std::cell::RefCell;

type Canvas = Rc<RefCell<RecordingSurface>>;

fn setup() -> (Rc<EventLoop>, Canvas, Registry<Canvas>) {
    let lp = Rc::new(EventLoop::new());
    let canvas = Rc::new(RefCell::new(RecordingSurface::new(100.0, 100.0)));
    let registry = Registry::new(lp.clone());
    (lp, canvas, registry)
}

#[test]
fn create_tracks_instances_in_order() {
    let (_lp, canvas, mut reg) = setup();
    assert!(reg.is_empty());
    let a = reg
        .create_instance(Some(10.0), Some(canvas.clone()), None, None)
        .unwrap();
    let b = reg
        .create_instance(Some(20.0), Some(canvas.clone()), None, None)
        .unwrap();
    assert_eq!(reg.len(), 2);
    assert!(reg.instances()[0].ptr_eq(&a));
    assert!(reg.instances()[1].ptr_eq(&b));
}

#[test]
fn failed_creation_registers_nothing() {
    let (_lp, _canvas, mut reg) = setup();
    let res = reg.create_instance(Some(10.0), None, Some(1.0), Some(1.0));
    assert!(matches!(res, Err(TaijiError::MissingSurface(_))));
    assert!(reg.is_empty());
}

#[test]
fn dispose_all_stops_everything_and_empties() {
    let (lp, canvas, mut reg) = setup();
    let a = reg
        .create_instance(None, Some(canvas.clone()), None, None)
        .unwrap();
    let b = reg
        .create_instance(None, Some(canvas.clone()), Some(10.0), Some(10.0))
        .unwrap();
    a.start_rotation(None);
    b.start_rotation(Some(7.0));
    assert_eq!(lp.active_intervals(), 2);

    // Already-disposed members are fine.
    a.dispose();
    reg.dispose_all();

    assert!(reg.is_empty());
    assert!(a.is_disposed());
    assert!(b.is_disposed());
    assert_eq!(lp.active_intervals(), 0);
    assert_eq!(Rc::strong_count(&canvas), 1);
}

#[test]
fn dispose_all_on_empty_registry_is_a_no_op() {
    let (_lp, _canvas, mut reg) = setup();
    reg.dispose_all();
    reg.dispose_all();
    assert!(reg.is_empty());
}

#[test]
fn registry_is_reusable_after_dispose_all() {
    let (_lp, canvas, mut reg) = setup();
    reg.create_instance(None, Some(canvas.clone()), None, None)
        .unwrap();
    reg.dispose_all();
    let c = reg
        .create_instance(None, Some(canvas.clone()), None, None)
        .unwrap();
    assert_eq!(reg.len(), 1);
    assert!(!c.is_disposed());
}

#[test]
fn dropping_registry_disposes_outstanding_handles() {
    let (lp, canvas, mut reg) = setup();
    let a = reg
        .create_instance(None, Some(canvas.clone()), None, None)
        .unwrap();
    a.start_rotation(None);
    drop(reg);
    assert!(a.is_disposed());
    assert_eq!(lp.active_intervals(), 0);
}

#[test]
fn out_of_range_notice_reaches_caller() {
    let (_lp, canvas, mut reg) = setup();
    let t = reg
        .create_instance(Some(100.0), Some(canvas.clone()), Some(500.0), Some(50.0))
        .unwrap();
    assert_eq!(t.center().x, 50.0);
    assert_eq!(t.notices().len(), 1);
    assert_eq!(reg.len(), 1);
}
