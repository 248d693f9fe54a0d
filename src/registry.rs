use std::rc::Rc;

use crate::foundation::error::TaijiResult;
use crate::instance::Taiji;
use crate::scheduler::timer::TimerHost;
use crate::surface::DrawSurface;

/// Factory and owner of every live [`Taiji`].
///
/// Create one per host page or scene and tear it down with [`Registry::dispose_all`]; dropping
/// the registry does the same.
pub struct Registry<S: DrawSurface + 'static> {
    timer: Rc<dyn TimerHost>,
    instances: Vec<Taiji<S>>,
}

impl<S: DrawSurface + 'static> Registry<S> {
    /// Create an empty registry whose instances rotate on `timer`.
    pub fn new(timer: Rc<dyn TimerHost>) -> Self {
        Self {
            timer,
            instances: Vec::new(),
        }
    }

    /// Construct an instance and track it.
    ///
    /// On failure nothing is registered and the construction error is returned.
    pub fn create_instance(
        &mut self,
        radius: Option<f64>,
        surface: Option<S>,
        x: Option<f64>,
        y: Option<f64>,
    ) -> TaijiResult<Taiji<S>> {
        let taiji = Taiji::new(radius, surface, x, y, self.timer.clone())?;
        self.instances.push(taiji.clone());
        Ok(taiji)
    }

    /// Dispose every tracked instance and forget them.
    pub fn dispose_all(&mut self) {
        let count = self.instances.len();
        for taiji in self.instances.drain(..) {
            taiji.dispose();
        }
        if count > 0 {
            tracing::debug!(count, "registry disposed all taijis");
        }
    }

    /// Number of tracked instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Return `true` when nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Tracked instances in creation order.
    pub fn instances(&self) -> &[Taiji<S>] {
        &self.instances
    }
}

impl<S: DrawSurface + 'static> Drop for Registry<S> {
    fn drop(&mut self) {
        self.dispose_all();
    }
}

impl<S: DrawSurface + 'static> std::fmt::Debug for Registry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("instances", &self.instances)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../tests/unit/registry.rs"]
mod tests;
