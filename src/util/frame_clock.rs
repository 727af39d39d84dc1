//! Fixed-rate logical frame scheduling.
//!
//! The host window delivers redraw callbacks as fast as it likes; the
//! animation advances at a fixed logical rate. [`FrameClock`] accepts or
//! declines each callback using accumulated-time throttling: on
//! acceptance the marker advances by whole intervals and the remainder
//! carries to the next callback, so the logical rate never drifts.

use web_time::{Duration, Instant};

/// Gates host callbacks down to a fixed logical frame rate.
pub struct FrameClock {
    /// Minimum duration between accepted frames.
    interval: Duration,
    /// Marker for the last accepted frame, advanced by whole intervals.
    last_tick: Instant,
    /// Smoothed accepted-frame rate using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock targeting `ticks_per_second` logical frames,
    /// anchored at `now`. A zero rate is clamped to one tick per second.
    #[must_use]
    pub fn new(ticks_per_second: u32, now: Instant) -> Self {
        let rate = ticks_per_second.max(1);
        Self {
            interval: Duration::from_secs_f64(1.0 / f64::from(rate)),
            last_tick: now,
            smoothed_fps: rate as f32,
            smoothing: 0.05,
        }
    }

    /// Decide whether a logical frame fires for the callback at `now`.
    ///
    /// On acceptance the marker advances to `now` minus the remainder of
    /// `elapsed / interval`, so the carried remainder stays below one
    /// interval and no logical time is lost between callbacks. Declined
    /// callbacks leave the marker untouched.
    pub fn should_tick(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed < self.interval {
            return false;
        }

        let carry = elapsed.as_nanos() % self.interval.as_nanos();
        self.last_tick = now - Duration::from_nanos(carry as u64);

        let gap = elapsed.as_secs_f32();
        if gap > 0.0 {
            let instant_fps = 1.0 / gap;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        true
    }

    /// Remainder currently carried toward the next logical frame.
    #[must_use]
    pub fn carried(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_tick)
    }

    /// Target interval between logical frames.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Smoothed accepted-frame rate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tick_before_first_interval() {
        let start = Instant::now();
        let mut clock = FrameClock::new(30, start);
        assert!(!clock.should_tick(start + Duration::from_millis(10)));
        assert!(!clock.should_tick(start + Duration::from_millis(30)));
        assert!(clock.should_tick(start + Duration::from_millis(34)));
    }

    #[test]
    fn dense_callbacks_yield_target_rate() {
        // Callbacks every 5 ms over 2 s against a 30 Hz clock: the
        // accepted count must land within one frame of floor(D / interval).
        let start = Instant::now();
        let mut clock = FrameClock::new(30, start);
        let mut accepted = 0u32;
        for step in 1..=400u64 {
            if clock.should_tick(start + Duration::from_millis(step * 5)) {
                accepted += 1;
            }
        }
        assert!((59..=61).contains(&accepted), "accepted {accepted} frames");
    }

    #[test]
    fn carried_remainder_stays_below_interval() {
        let start = Instant::now();
        let mut clock = FrameClock::new(30, start);
        for step in 1..=400u64 {
            let now = start + Duration::from_millis(step * 7);
            let _ = clock.should_tick(now);
            assert!(clock.carried(now) < clock.interval());
        }
    }

    #[test]
    fn sparse_callbacks_fire_once_each() {
        // One callback per 100 ms against 30 Hz: each accepts exactly one
        // logical frame and drops the surplus past one interval.
        let start = Instant::now();
        let mut clock = FrameClock::new(30, start);
        for step in 1..=10u64 {
            let now = start + Duration::from_millis(step * 100);
            assert!(clock.should_tick(now));
            assert!(clock.carried(now) < clock.interval());
        }
    }

    #[test]
    fn zero_rate_clamps() {
        let start = Instant::now();
        let mut clock = FrameClock::new(0, start);
        assert_eq!(clock.interval(), Duration::from_secs(1));
    }
}
