use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::foundation::core::Tone;
use crate::foundation::error::{TaijiError, TaijiResult};
use crate::registry::Registry;
use crate::scene::model::Scene;
use crate::scheduler::event_loop::EventLoop;
use crate::surface::frame::FrameRGBA;
use crate::surface::pixmap::PixmapSurface;

/// Consumer of rendered frames.
pub trait FrameSink {
    /// Receive the frame captured at `elapsed_ms` on the scene clock.
    fn push_frame(&mut self, elapsed_ms: u64, frame: &FrameRGBA) -> TaijiResult<()>;
}

/// Keeps every frame in memory.
#[derive(Debug, Default)]
pub struct InMemorySink {
    /// Captured `(elapsed_ms, frame)` pairs in capture order.
    pub frames: Vec<(u64, FrameRGBA)>,
}

impl FrameSink for InMemorySink {
    fn push_frame(&mut self, elapsed_ms: u64, frame: &FrameRGBA) -> TaijiResult<()> {
        self.frames.push((elapsed_ms, frame.clone()));
        Ok(())
    }
}

/// Writes each frame as `frame_<elapsed_ms>.png` into a directory.
#[derive(Debug)]
pub struct PngDirSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngDirSink {
    /// Sink writing into `dir`; the directory is created on the first frame.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngDirSink {
    fn push_frame(&mut self, elapsed_ms: u64, frame: &FrameRGBA) -> TaijiResult<()> {
        let path = self.dir.join(format!("frame_{elapsed_ms:06}.png"));
        frame.write_png(&path)?;
        self.written.push(path);
        Ok(())
    }
}

type SharedPixmap = Rc<RefCell<PixmapSurface>>;

struct SceneRun {
    event_loop: Rc<EventLoop>,
    canvas: SharedPixmap,
    registry: Registry<SharedPixmap>,
}

impl SceneRun {
    fn start(scene: &Scene) -> TaijiResult<Self> {
        scene.validate()?;

        let event_loop = Rc::new(EventLoop::new());
        let canvas = Rc::new(RefCell::new(PixmapSurface::new(
            scene.canvas.width,
            scene.canvas.height,
            Tone::BACKGROUND,
        )?));
        let mut registry = Registry::new(event_loop.clone());

        for (idx, def) in scene.taijis.iter().enumerate() {
            let taiji = registry.create_instance(def.radius, Some(canvas.clone()), def.x, def.y)?;
            for notice in taiji.notices() {
                tracing::info!(taiji = idx, %notice, "scene placement corrected");
            }
            taiji.set_clockwise(def.clockwise);
            taiji.clear_draw()?;
            taiji.draw()?;
            if def.rotating {
                taiji.start_rotation(def.interval_ms);
            }
        }

        Ok(Self {
            event_loop,
            canvas,
            registry,
        })
    }

    fn advance_to(&self, elapsed_ms: u64) -> usize {
        let now = self.event_loop.now_ms();
        if elapsed_ms <= now {
            return 0;
        }
        self.event_loop.advance(elapsed_ms - now)
    }

    fn capture(&self) -> TaijiResult<FrameRGBA> {
        self.canvas.borrow_mut().frame()
    }

    fn finish(mut self) {
        self.registry.dispose_all();
    }
}

/// Render the scene as it looks `elapsed_ms` after every symbol was drawn and started.
pub fn render_scene(scene: &Scene, elapsed_ms: u64) -> TaijiResult<FrameRGBA> {
    let run = SceneRun::start(scene)?;
    let ticks = run.advance_to(elapsed_ms);
    tracing::debug!(elapsed_ms, ticks, "scene advanced");
    let frame = run.capture()?;
    run.finish();
    Ok(frame)
}

/// Render frames at `0, step_ms, 2 * step_ms, ..` up to and including `total_ms`.
///
/// Returns the number of frames pushed to `sink`.
#[tracing::instrument(skip(scene, sink), fields(taijis = scene.taijis.len()))]
pub fn render_scene_frames(
    scene: &Scene,
    total_ms: u64,
    step_ms: u64,
    sink: &mut dyn FrameSink,
) -> TaijiResult<usize> {
    if step_ms == 0 {
        return Err(TaijiError::validation("frame step must be > 0 ms"));
    }

    let run = SceneRun::start(scene)?;
    let mut count = 0usize;
    let mut elapsed_ms = 0u64;
    loop {
        run.advance_to(elapsed_ms);
        let frame = run.capture()?;
        sink.push_frame(elapsed_ms, &frame)?;
        count += 1;

        match elapsed_ms.checked_add(step_ms) {
            Some(next) if next <= total_ms => elapsed_ms = next,
            _ => break,
        }
    }
    run.finish();

    tracing::debug!(count, "scene frames rendered");
    Ok(count)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/render.rs"]
mod tests;
