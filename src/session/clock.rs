use std::time::Instant;

use crate::orb::transition::FRAME_STEP_MS;

/// Host frame clock driving an orb.
///
/// Each call to `next_tick` represents one host frame callback and yields the logical
/// milliseconds to advance, or `None` once the clock has stopped.
pub trait FrameClock {
    /// Wait for (or synthesize) the next tick.
    fn next_tick(&mut self) -> Option<f64>;
}

/// Yields a fixed logical step for a bounded number of ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedStepClock {
    step_ms: f64,
    remaining: u64,
}

impl FixedStepClock {
    /// `ticks` ticks of `step_ms` each.
    pub fn new(step_ms: f64, ticks: u64) -> Self {
        Self {
            step_ms,
            remaining: ticks,
        }
    }

    /// `ticks` ticks of the standard 16 ms step.
    pub fn standard(ticks: u64) -> Self {
        Self::new(FRAME_STEP_MS, ticks)
    }

    /// Ticks left before the clock stops.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl FrameClock for FixedStepClock {
    fn next_tick(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.step_ms)
    }
}

/// Yields the measured wall-clock time between consecutive ticks.
///
/// The first tick reports `first_step_ms` since there is no previous callback to measure from.
#[derive(Clone, Debug)]
pub struct WallClock {
    last: Option<Instant>,
    first_step_ms: f64,
    remaining: u64,
}

impl WallClock {
    /// A clock producing `ticks` measured ticks.
    pub fn new(ticks: u64) -> Self {
        Self {
            last: None,
            first_step_ms: FRAME_STEP_MS,
            remaining: ticks,
        }
    }
}

impl FrameClock for WallClock {
    fn next_tick(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let now = Instant::now();
        let dt = match self.last {
            Some(prev) => now.duration_since(prev).as_secs_f64() * 1000.0,
            None => self.first_step_ms,
        };
        self.last = Some(now);
        Some(dt)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/clock.rs"]
mod tests;
