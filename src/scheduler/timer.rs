use std::fmt;
use std::rc::Rc;

/// Tick period used when no valid interval is requested, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 30;

/// Identifier of a periodic callback registered with a [`TimerHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntervalId(pub u64);

/// Callback run on every firing of an interval.
pub type TickFn = Box<dyn FnMut()>;

/// Host timer facility, the equivalent of `setInterval` / `clearInterval`.
///
/// Implementations dispatch callbacks cooperatively on a single thread: a callback never runs
/// while another one is running, and a cleared interval never fires again, even when it is
/// cleared from inside a callback.
pub trait TimerHost {
    /// Register `tick` to run every `period_ms` milliseconds.
    fn set_interval(&self, period_ms: u64, tick: TickFn) -> IntervalId;

    /// Cancel an interval. Returns `false` if it was not registered.
    fn clear_interval(&self, id: IntervalId) -> bool;
}

/// Resolve a requested tick period.
///
/// Missing, non-finite, or sub-millisecond requests fall back to [`DEFAULT_INTERVAL_MS`];
/// fractional milliseconds are truncated.
pub fn normalize_interval_ms(requested: Option<f64>) -> u64 {
    match requested {
        Some(ms) if ms.is_finite() && ms.trunc() >= 1.0 => ms.trunc() as u64,
        _ => DEFAULT_INTERVAL_MS,
    }
}

/// Handle to one instance's periodic rotation.
///
/// Dropping the handle cancels the interval; there is no way to leak a running task past its
/// owner.
pub struct RotationTask {
    host: Rc<dyn TimerHost>,
    id: IntervalId,
    period_ms: u64,
}

impl RotationTask {
    pub(crate) fn start(host: Rc<dyn TimerHost>, period_ms: u64, tick: TickFn) -> Self {
        let id = host.set_interval(period_ms, tick);
        Self {
            host,
            id,
            period_ms,
        }
    }

    /// Interval identifier assigned by the host.
    pub fn id(&self) -> IntervalId {
        self.id
    }

    /// Tick period in milliseconds.
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Cancel the task now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for RotationTask {
    fn drop(&mut self) {
        self.host.clear_interval(self.id);
    }
}

impl fmt::Debug for RotationTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotationTask")
            .field("id", &self.id)
            .field("period_ms", &self.period_ms)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scheduler/timer.rs"]
mod tests;
