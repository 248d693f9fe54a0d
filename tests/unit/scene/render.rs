use super::*;
use crate::scene::model::{CanvasDef, TaijiDef};

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

fn one_symbol(def: TaijiDef) -> Scene {
    Scene {
        canvas: CanvasDef {
            width: 100,
            height: 100,
        },
        taijis: vec![TaijiDef {
            radius: Some(40.0),
            ..def
        }],
    }
}

#[test]
fn empty_scene_is_background() {
    let scene = Scene {
        canvas: CanvasDef {
            width: 12,
            height: 6,
        },
        taijis: vec![],
    };
    let frame = render_scene(&scene, 500).unwrap();
    assert_eq!((frame.width, frame.height), (12, 6));
    assert!(frame.data.chunks_exact(4).all(|px| px == WHITE));
}

#[test]
fn initial_frame_shows_symbol_at_zero_angle() {
    let frame = render_scene(&one_symbol(TaijiDef::default()), 0).unwrap();
    assert_eq!(frame.pixel(50, 85), Some(WHITE));
    assert_eq!(frame.pixel(50, 15), Some(BLACK));
    assert_eq!(frame.pixel(70, 50), Some(BLACK));
    assert_eq!(frame.pixel(30, 50), Some(WHITE));
    assert_eq!(frame.pixel(2, 2), Some(WHITE));
}

#[test]
fn clockwise_quarter_turn_moves_white_half_left() {
    // 180 ticks of half a degree.
    let scene = one_symbol(TaijiDef {
        interval_ms: Some(1.0),
        ..TaijiDef::default()
    });
    let frame = render_scene(&scene, 180).unwrap();
    assert_eq!(frame.pixel(15, 50), Some(WHITE));
    assert_eq!(frame.pixel(85, 50), Some(BLACK));
    // White lobe now below center with its black eye.
    assert_eq!(frame.pixel(50, 70), Some(BLACK));
    assert_eq!(frame.pixel(50, 30), Some(WHITE));
}

#[test]
fn counter_clockwise_quarter_turn_mirrors() {
    let scene = one_symbol(TaijiDef {
        interval_ms: Some(1.0),
        clockwise: false,
        ..TaijiDef::default()
    });
    let frame = render_scene(&scene, 180).unwrap();
    assert_eq!(frame.pixel(85, 50), Some(WHITE));
    assert_eq!(frame.pixel(15, 50), Some(BLACK));
    assert_eq!(frame.pixel(50, 30), Some(BLACK));
    assert_eq!(frame.pixel(50, 70), Some(WHITE));
}

#[test]
fn non_rotating_symbol_is_static() {
    let scene = one_symbol(TaijiDef {
        rotating: false,
        ..TaijiDef::default()
    });
    let a = render_scene(&scene, 0).unwrap();
    let b = render_scene(&scene, 3_000).unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn rendering_is_deterministic() {
    let scene = one_symbol(TaijiDef::default());
    let a = render_scene(&scene, 275).unwrap();
    let b = render_scene(&scene, 275).unwrap();
    assert_eq!(a, b);
}

#[test]
fn frames_cover_range_inclusive() {
    let scene = one_symbol(TaijiDef::default());
    let mut sink = InMemorySink::default();
    let n = render_scene_frames(&scene, 90, 30, &mut sink).unwrap();
    assert_eq!(n, 4);
    let times: Vec<u64> = sink.frames.iter().map(|(t, _)| *t).collect();
    assert_eq!(times, vec![0, 30, 60, 90]);
}

#[test]
fn frames_match_single_renders() {
    let scene = one_symbol(TaijiDef {
        interval_ms: Some(10.0),
        ..TaijiDef::default()
    });
    let mut sink = InMemorySink::default();
    render_scene_frames(&scene, 40, 20, &mut sink).unwrap();
    for (t, frame) in &sink.frames {
        assert_eq!(frame, &render_scene(&scene, *t).unwrap(), "t={t}");
    }
}

#[test]
fn zero_step_is_rejected() {
    let scene = one_symbol(TaijiDef::default());
    let mut sink = InMemorySink::default();
    let err = render_scene_frames(&scene, 100, 0, &mut sink).unwrap_err();
    assert!(matches!(err, TaijiError::Validation(_)));
    assert!(sink.frames.is_empty());
}

#[test]
fn invalid_canvas_is_rejected_before_rendering() {
    let mut scene = one_symbol(TaijiDef::default());
    scene.canvas.height = 0;
    assert!(matches!(
        render_scene(&scene, 0),
        Err(TaijiError::Validation(_))
    ));
}

#[test]
fn png_dir_sink_writes_named_files() {
    let dir = std::env::temp_dir().join(format!(
        "taiji_png_dir_sink_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let scene = Scene {
        canvas: CanvasDef {
            width: 16,
            height: 16,
        },
        taijis: vec![TaijiDef::default()],
    };
    let mut sink = PngDirSink::new(&dir);
    let n = render_scene_frames(&scene, 60, 30, &mut sink).unwrap();
    assert_eq!(n, 3);
    assert_eq!(sink.written().len(), 3);
    assert!(dir.join("frame_000000.png").exists());
    assert!(dir.join("frame_000060.png").exists());
    assert_eq!(sink.dir(), dir.as_path());
    let _ = std::fs::remove_dir_all(&dir);
}
