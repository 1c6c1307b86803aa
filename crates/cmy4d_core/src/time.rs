//! Frame timestamps

use std::f32::consts::TAU;

/// Connector wobble period in milliseconds
pub const WOBBLE_PERIOD_MS: u64 = 2000;

/// Wall-clock time of a frame, in milliseconds since the animation started
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrameTime {
    pub millis: u64,
}

impl FrameTime {
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Build from a `Duration` since the animation started
    pub fn from_duration(elapsed: std::time::Duration) -> Self {
        Self { millis: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX) }
    }

    /// Time in seconds, the argument of every pulse and trigger sine
    #[inline]
    pub fn seconds(&self) -> f64 {
        self.millis as f64 * 0.001
    }

    /// Position within the wobble period mapped to `[0, 2π)`
    pub fn w_phase(&self) -> f32 {
        (self.millis % WOBBLE_PERIOD_MS) as f32 / WOBBLE_PERIOD_MS as f32 * TAU
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds() {
        assert_eq!(FrameTime::from_millis(1500).seconds(), 1.5);
    }

    #[test]
    fn test_phase_wraps_every_period() {
        let a = FrameTime::from_millis(250).w_phase();
        let b = FrameTime::from_millis(250 + WOBBLE_PERIOD_MS * 7).w_phase();
        assert_eq!(a, b);
        assert_eq!(FrameTime::from_millis(0).w_phase(), 0.0);
    }

    #[test]
    fn test_phase_range() {
        for ms in (0..5000).step_by(37) {
            let phase = FrameTime::from_millis(ms).w_phase();
            assert!((0.0..TAU).contains(&phase), "phase {} at {}ms", phase, ms);
        }
    }

    #[test]
    fn test_from_duration() {
        let t = FrameTime::from_duration(std::time::Duration::from_secs_f64(2.25));
        assert_eq!(t.millis, 2250);
    }

    #[test]
    fn test_from_duration_saturates() {
        let t = FrameTime::from_duration(std::time::Duration::MAX);
        assert_eq!(t.millis, u64::MAX);
    }
}
