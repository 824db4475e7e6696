//! Scheduler module - fixed-step gravity driven by frame callbacks
//!
//! The host calls [`Scheduler::on_frame`] once per rendered frame with the
//! current time. Elapsed time accumulates until it reaches the gravity
//! interval, then exactly one tick fires and the accumulator starts over.
//! There is no catch-up: a long frame still yields a single tick.

use std::cell::Cell;
use std::time::Instant;

use log::debug;

/// Millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock backed by [`Instant`], counted from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for tests and replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scheduler {
    running: bool,
    last_frame_ms: u64,
    accumulator_ms: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin accumulating from `now_ms`. No-op while already running.
    pub fn start(&mut self, now_ms: u64) {
        if self.running {
            return;
        }
        debug!("scheduler started at {now_ms}ms");
        self.running = true;
        self.last_frame_ms = now_ms;
        self.accumulator_ms = 0;
    }

    /// Suspend. Time until the next `start` is never counted.
    pub fn stop(&mut self) {
        if self.running {
            debug!("scheduler stopped");
        }
        self.running = false;
        self.accumulator_ms = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn accumulated_ms(&self) -> u64 {
        self.accumulator_ms
    }

    /// Account for one frame. Returns true when a tick is due.
    pub fn on_frame(&mut self, now_ms: u64, interval_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        let delta = now_ms.saturating_sub(self.last_frame_ms);
        self.last_frame_ms = now_ms;
        self.accumulator_ms = self.accumulator_ms.saturating_add(delta);

        if self.accumulator_ms >= interval_ms {
            self.accumulator_ms = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_once_interval_is_reached() {
        let mut s = Scheduler::new();
        s.start(0);
        assert!(!s.on_frame(16, 50));
        assert!(!s.on_frame(32, 50));
        assert!(s.on_frame(64, 50));
        assert_eq!(s.accumulated_ms(), 0);
    }

    #[test]
    fn long_frame_fires_a_single_tick() {
        let mut s = Scheduler::new();
        s.start(100);
        assert!(s.on_frame(1100, 100));
        // The surplus 900ms is discarded.
        assert!(!s.on_frame(1116, 100));
    }

    #[test]
    fn stopped_scheduler_ignores_frames() {
        let mut s = Scheduler::new();
        assert!(!s.on_frame(5000, 10));

        s.start(0);
        s.on_frame(40, 100);
        s.stop();
        assert!(!s.is_running());
        assert!(!s.on_frame(10_000, 100));

        // Restart re-anchors: the paused span does not count.
        s.start(20_000);
        assert!(!s.on_frame(20_050, 100));
        assert!(s.on_frame(20_100, 100));
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(10);
        clock.advance(5);
        assert_eq!(clock.now_ms(), 15);
        clock.set(3);
        assert_eq!(clock.now_ms(), 3);
    }
}
