use crate::consts::FIXED_STEP_BACKLOG_WARN;
use log::warn;
use std::time::{Duration, Instant};

/// Frame timer on top of the monotonic clock.
///
/// Every [`tick`](Timer::tick) measures the time since the previous one and feeds it into an
/// accumulator, which [`fixed_delta_time_step`](Timer::fixed_delta_time_step) drains in
/// fixed-size steps.
#[derive(Debug, Clone)]
pub struct Timer {
    start: Instant,
    last: Instant,
    delta: Duration,
    accumulated: Duration,
    fixed_delta: Duration,
}

impl Timer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            delta: Duration::ZERO,
            accumulated: Duration::ZERO,
            fixed_delta: Duration::ZERO,
        }
    }

    pub fn with_fixed_delta_time(fixed_delta: Duration) -> Self {
        Self {
            fixed_delta,
            ..Self::new()
        }
    }

    /// Marks the start of a new frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.saturating_duration_since(self.last);
        self.last = now;
        self.advance(delta);
    }

    /// Feeds an explicit frame duration, as [`tick`](Timer::tick) does with the measured one.
    pub fn advance(&mut self, delta: Duration) {
        self.delta = delta;
        self.accumulated = self.accumulated.saturating_add(delta);

        if !self.fixed_delta.is_zero()
            && self
                .fixed_delta
                .checked_mul(FIXED_STEP_BACKLOG_WARN)
                .is_some_and(|backlog| self.accumulated > backlog)
        {
            warn!(
                "[TIMER] fixed step backlog of {:.3}s ({} steps of {:.3}s)",
                self.accumulated.as_secs_f32(),
                self.accumulated.as_nanos() / self.fixed_delta.as_nanos(),
                self.fixed_delta.as_secs_f32()
            );
        }
    }

    /// Seconds between the last two ticks
    pub fn delta_time(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Seconds since the timer was created
    pub fn total_time(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Negative, NaN or overflowing `seconds` disable the fixed step (zero delta).
    pub fn set_fixed_delta_time(&mut self, seconds: f32) {
        self.fixed_delta = Duration::try_from_secs_f32(seconds).unwrap_or_else(|_| {
            warn!("[TIMER] invalid fixed delta time {}s, fixed steps disabled", seconds);
            Duration::ZERO
        });
    }

    pub fn fixed_delta_time(&self) -> f32 {
        self.fixed_delta.as_secs_f32()
    }

    /// Consumes one fixed step from the accumulator, returns `false` if less than a step is left.
    ///
    /// Call in a loop after every [`tick`](Timer::tick) to run the simulation at a fixed rate.
    /// Always `false` while no fixed delta is set.
    pub fn fixed_delta_time_step(&mut self) -> bool {
        match !self.fixed_delta.is_zero() && self.accumulated >= self.fixed_delta {
            true => {
                self.accumulated -= self.fixed_delta;
                true
            }
            false => false,
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
