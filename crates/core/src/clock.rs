//! Timing - fixed-step tick gating and frame deltas
//!
//! Logic runs on [`SimulationClock`] ticks; rendering reads
//! [`SimulationClock::elapsed_fraction`] every frame. The two never feed back
//! into each other: the fraction is only used to interpolate.

use std::time::Duration;

use crate::types::{BASE_TICK_MS, MIN_TICK_MS, RAMP_EVERY, RAMP_STEP_MS};

/// Accumulates frame time and reports when a logic tick is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationClock {
    since_last_tick: Duration,
    interval: Duration,
}

impl SimulationClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            since_last_tick: Duration::ZERO,
            interval,
        }
    }

    /// Add one frame's worth of time. Returns true when a tick is due.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.since_last_tick = self.since_last_tick.saturating_add(dt);
        self.is_due()
    }

    pub fn is_due(&self) -> bool {
        self.since_last_tick >= self.interval
    }

    /// Start the next interval. Time past the deadline is dropped, so a slow
    /// frame never causes a burst of catch-up ticks.
    pub fn reset(&mut self) {
        self.since_last_tick = Duration::ZERO;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn since_last_tick(&self) -> Duration {
        self.since_last_tick
    }

    /// Progress towards the next tick in `[0, 1]`, for interpolation only.
    pub fn elapsed_fraction(&self) -> f32 {
        if self.interval.is_zero() {
            return 1.0;
        }
        let t = self.since_last_tick.as_secs_f32() / self.interval.as_secs_f32();
        t.clamp(0.0, 1.0)
    }
}

/// Step function from snake length to tick interval.
///
/// `interval = max(floor, base - step * ((len - 1) / every))`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedRamp {
    pub base: Duration,
    pub step: Duration,
    pub every: usize,
    pub floor: Duration,
}

impl Default for SpeedRamp {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(BASE_TICK_MS),
            step: Duration::from_millis(RAMP_STEP_MS),
            every: RAMP_EVERY,
            floor: Duration::from_millis(MIN_TICK_MS),
        }
    }
}

impl SpeedRamp {
    pub fn interval_for(&self, len: usize) -> Duration {
        let milestones = len.saturating_sub(1) / self.every.max(1);
        let cut = self.step.saturating_mul(milestones.min(u32::MAX as usize) as u32);
        self.base.saturating_sub(cut).max(self.floor)
    }
}

/// Turns monotonically increasing float-seconds readings into frame deltas.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous reading. The first reading, and any reading that
    /// goes backwards, yields zero.
    pub fn advance(&mut self, now_secs: f64) -> Duration {
        let dt = match self.last {
            Some(last) if now_secs > last => Duration::from_secs_f64(now_secs - last),
            _ => Duration::ZERO,
        };
        if self.last.map_or(true, |last| now_secs > last) {
            self.last = Some(now_secs);
        }
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_tick_due_only_after_full_interval() {
        let mut clock = SimulationClock::new(ms(100));
        assert!(!clock.advance(ms(60)));
        assert!(!clock.advance(ms(39)));
        assert!(clock.advance(ms(1)));
    }

    #[test]
    fn test_reset_discards_overshoot() {
        let mut clock = SimulationClock::new(ms(100));
        assert!(clock.advance(ms(250)));
        clock.reset();
        assert_eq!(clock.since_last_tick(), Duration::ZERO);
        assert!(!clock.is_due());
    }

    #[test]
    fn test_elapsed_fraction_is_clamped() {
        let mut clock = SimulationClock::new(ms(200));
        assert_eq!(clock.elapsed_fraction(), 0.0);
        clock.advance(ms(50));
        assert!((clock.elapsed_fraction() - 0.25).abs() < 1e-6);
        clock.advance(ms(500));
        assert_eq!(clock.elapsed_fraction(), 1.0);
    }

    #[test]
    fn test_ramp_steps_down_per_milestone() {
        let ramp = SpeedRamp::default();
        assert_eq!(ramp.interval_for(1), ms(200));
        assert_eq!(ramp.interval_for(2), ms(200));
        assert_eq!(ramp.interval_for(5), ms(200));
        assert_eq!(ramp.interval_for(6), ms(190));
        assert_eq!(ramp.interval_for(11), ms(180));
    }

    #[test]
    fn test_ramp_respects_floor() {
        let ramp = SpeedRamp::default();
        assert_eq!(ramp.interval_for(10_000), ms(60));
        assert_eq!(ramp.interval_for(usize::MAX), ms(60));
    }

    #[test]
    fn test_frame_clock_deltas() {
        let mut fc = FrameClock::new();
        assert_eq!(fc.advance(10.0), Duration::ZERO);
        let dt = fc.advance(10.25);
        assert!((dt.as_secs_f64() - 0.25).abs() < 1e-9);
        // Backwards readings do not move the clock.
        assert_eq!(fc.advance(9.0), Duration::ZERO);
        let dt = fc.advance(10.5);
        assert!((dt.as_secs_f64() - 0.25).abs() < 1e-9);
    }
}
