// src/player/clock.rs
//! Simulated playback clock.

use std::time::Duration;

/// Advances a simulated elapsed time in fixed ticks, looping at the track end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackClock {
    /// Total track length
    duration: Duration,
    /// Amount added on every tick
    tick: Duration,
}

impl PlaybackClock {
    pub fn new(duration: Duration, tick: Duration) -> Self {
        Self { duration, tick }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Elapsed time after one tick. Reaching or passing the end loops back to zero.
    pub fn advance(&self, elapsed: Duration) -> Duration {
        let next = elapsed.saturating_add(self.tick);
        if next >= self.duration {
            Duration::ZERO
        } else {
            next
        }
    }

    /// Fraction of the track played, clamped to `[0, 1]`.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// Format a duration as `m:ss`, flooring to whole seconds.
pub fn format_time(time: Duration) -> String {
    let secs = time.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> PlaybackClock {
        PlaybackClock::new(Duration::from_secs(225), Duration::from_millis(250))
    }

    #[test]
    fn advance_adds_one_tick() {
        let c = clock();
        assert_eq!(c.advance(Duration::ZERO), Duration::from_millis(250));
        assert_eq!(c.advance(Duration::from_secs(10)), Duration::from_millis(10_250));
    }

    #[test]
    fn advance_loops_at_track_end() {
        let c = clock();
        let last = Duration::from_millis(224_750);
        assert_eq!(c.advance(last), Duration::ZERO);
        // A clock whose tick overshoots the end also loops.
        let odd = PlaybackClock::new(Duration::from_millis(600), Duration::from_millis(250));
        assert_eq!(odd.advance(Duration::from_millis(500)), Duration::ZERO);
    }

    #[test]
    fn elapsed_never_reaches_duration() {
        let c = clock();
        let mut elapsed = Duration::ZERO;
        for _ in 0..2_000 {
            elapsed = c.advance(elapsed);
            assert!(elapsed < c.duration());
        }
    }

    #[test]
    fn progress_is_clamped() {
        let c = clock();
        assert_eq!(c.progress(Duration::ZERO), 0.0);
        assert!((c.progress(Duration::from_secs(1)) - 1.0 / 225.0).abs() < 1e-9);
        assert_eq!(c.progress(Duration::from_secs(500)), 1.0);

        let empty = PlaybackClock::new(Duration::ZERO, Duration::from_millis(250));
        assert_eq!(empty.progress(Duration::from_secs(3)), 0.0);
    }

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(Duration::ZERO), "0:00");
        assert_eq!(format_time(Duration::from_millis(65_900)), "1:05");
        assert_eq!(format_time(Duration::from_secs(225)), "3:45");
        assert_eq!(format_time(Duration::from_secs(3_600)), "60:00");
    }
}
