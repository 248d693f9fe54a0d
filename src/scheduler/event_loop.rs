use std::cell::RefCell;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::scheduler::timer::{IntervalId, TickFn, TimerHost};

struct Interval {
    period_ms: u64,
    next_due_ms: u64,
    // `None` while the callback is running.
    tick: Option<TickFn>,
}

#[derive(Default)]
struct LoopState {
    now_ms: u64,
    next_id: u64,
    intervals: BTreeMap<IntervalId, Interval>,
}

/// Deterministic single-threaded timer loop over a virtual millisecond clock.
///
/// Intervals fire in `(due time, registration order)` order. Callbacks run with no internal borrow
/// held, so they may register or clear intervals (including their own) freely.
#[derive(Default)]
pub struct EventLoop {
    state: RefCell<LoopState>,
}

impl std::fmt::Debug for EventLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.state.borrow();
        f.debug_struct("EventLoop")
            .field("now_ms", &s.now_ms)
            .field("intervals", &s.intervals.len())
            .finish()
    }
}

impl EventLoop {
    /// Create a loop at virtual time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Number of registered intervals.
    pub fn active_intervals(&self) -> usize {
        self.state.borrow().intervals.len()
    }

    /// Return `true` while `id` is registered.
    pub fn is_active(&self, id: IntervalId) -> bool {
        self.state.borrow().intervals.contains_key(&id)
    }

    /// Earliest pending deadline, if any interval is registered.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.state
            .borrow()
            .intervals
            .values()
            .map(|iv| iv.next_due_ms)
            .min()
    }

    /// Advance virtual time by `ms`, running every callback that falls due. Returns the number of
    /// callbacks run.
    pub fn advance(&self, ms: u64) -> usize {
        let target = self.now_ms().saturating_add(ms);
        let mut fired = 0usize;

        while let Some((id, due, mut tick)) = self.take_next_due(target) {
            tick();
            fired += 1;

            let cancelled = {
                let mut s = self.state.borrow_mut();
                match s.intervals.get_mut(&id) {
                    Some(iv) => {
                        iv.next_due_ms = due.saturating_add(iv.period_ms);
                        iv.tick = Some(tick);
                        None
                    }
                    None => Some(tick),
                }
            };
            // Cleared while running; release the callback outside the borrow.
            drop(cancelled);
        }

        self.state.borrow_mut().now_ms = target;
        fired
    }

    /// Run for `duration` of wall-clock time, sleeping between deadlines. Virtual time tracks the
    /// elapsed milliseconds. Returns the number of callbacks run.
    pub fn run_for(&self, duration: Duration) -> usize {
        let started = Instant::now();
        let origin_ms = self.now_ms();
        let total_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        let end_ms = origin_ms.saturating_add(total_ms);
        let mut fired = 0usize;

        loop {
            let now = self.now_ms();
            if now >= end_ms {
                break;
            }
            let next = self.next_due_ms().map_or(end_ms, |d| d.clamp(now, end_ms));
            let deadline = started + Duration::from_millis(next - origin_ms);
            if let Some(wait) = deadline.checked_duration_since(Instant::now()) {
                std::thread::sleep(wait);
            }
            fired += self.advance(next - now);
        }
        fired
    }

    fn take_next_due(&self, target: u64) -> Option<(IntervalId, u64, TickFn)> {
        let mut s = self.state.borrow_mut();
        let (id, due) = s
            .intervals
            .iter()
            .filter(|(_, iv)| iv.tick.is_some() && iv.next_due_ms <= target)
            .min_by_key(|(id, iv)| (iv.next_due_ms, **id))
            .map(|(id, iv)| (*id, iv.next_due_ms))?;
        s.now_ms = s.now_ms.max(due);
        let tick = s.intervals.get_mut(&id)?.tick.take()?;
        Some((id, due, tick))
    }
}

impl TimerHost for EventLoop {
    fn set_interval(&self, period_ms: u64, tick: TickFn) -> IntervalId {
        let mut s = self.state.borrow_mut();
        let id = IntervalId(s.next_id);
        s.next_id += 1;
        let period_ms = period_ms.max(1);
        let next_due_ms = s.now_ms.saturating_add(period_ms);
        s.intervals.insert(
            id,
            Interval {
                period_ms,
                next_due_ms,
                tick: Some(tick),
            },
        );
        id
    }

    fn clear_interval(&self, id: IntervalId) -> bool {
        let removed = self.state.borrow_mut().intervals.remove(&id);
        removed.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scheduler/event_loop.rs"]
mod tests;
