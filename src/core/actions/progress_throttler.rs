use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::core::data::progress_sample::ProgressSample;

pub const DEFAULT_THROTTLE_INTERVAL: Duration = Duration::from_millis(50);

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> Instant + Send + Sync,
{
    #[inline]
    fn now(&self) -> Instant {
        self()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThrottleState {
    pub last_emit: Option<Instant>,
}

/// Rate-limits progress reports to roughly one per `interval`.
///
/// First and final steps, zero progress and warnings are never dropped. The
/// state sits behind a mutex because encoders may report from worker threads.
/// Use one throttler per save; timing state must not leak between saves.
#[derive(Debug)]
pub struct ProgressThrottler<C: Clock = MonotonicClock> {
    clock: C,
    interval: Duration,
    state: Mutex<ThrottleState>,
}

impl ProgressThrottler<MonotonicClock> {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self::with_clock(interval, MonotonicClock)
    }
}

impl Default for ProgressThrottler<MonotonicClock> {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_INTERVAL)
    }
}

impl<C: Clock> ProgressThrottler<C> {
    #[must_use]
    pub fn with_clock(interval: Duration, clock: C) -> Self {
        Self {
            clock,
            interval,
            state: Mutex::new(ThrottleState::default()),
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` when the sample should be forwarded downstream.
    pub fn on_progress(&self, sample: &ProgressSample) -> bool {
        let now = self.clock.now();
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(last_emit) = state.last_emit {
            let elapsed = now.saturating_duration_since(last_emit);

            if elapsed < self.interval && sample.is_intermediate() && !sample.warning {
                return false;
            }
        }

        state.last_emit = Some(now);
        true
    }

    #[must_use]
    pub fn state(&self) -> ThrottleState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn reset(&self) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = ThrottleState::default();
    }
}
