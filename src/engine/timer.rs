// Single-shot step timer driven by the caller's clock

use std::time::{Duration, Instant};

/// Schedules at most one pending step at a time.
///
/// The timer never spawns threads or sleeps. The owner passes the current
/// instant in, and [`StepTimer::fire_if_due`] runs the tick once the deadline
/// has passed. The deadline is cleared before the tick runs, so a tick can
/// never fire twice and re-arming is always an explicit `schedule` call.
#[derive(Debug, Clone)]
pub struct StepTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl StepTimer {
    pub fn new(delay: Duration) -> Self {
        StepTimer {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the delay. A pending tick is re-armed with the new delay.
    pub fn set_delay(&mut self, delay: Duration, now: Instant) {
        self.delay = delay;
        if self.deadline.is_some() {
            self.deadline = Some(now + delay);
        }
    }

    /// Arm one tick `delay` from `now` when `should_run`, otherwise cancel
    /// any pending tick. Re-arming replaces the previous deadline.
    pub fn schedule(&mut self, should_run: bool, now: Instant) {
        self.deadline = should_run.then(|| now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Run `on_tick` if the pending deadline has passed. Returns whether it ran.
    pub fn fire_if_due(&mut self, now: Instant, on_tick: impl FnOnce()) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                on_tick();
                true
            }
            _ => false,
        }
    }

    /// Time left before the pending tick, `None` when nothing is armed
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
