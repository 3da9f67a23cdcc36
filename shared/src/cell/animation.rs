//! Edit-mode indent transition
//!
//! The presenter records a transition whenever the indent is toggled with
//! animation. The host's animation driver samples it with the time elapsed
//! since the toggle until it reports finished.

use std::time::Duration;

/// Ease-in-out smoothing curve mapping progress in `[0, 1]` to `[0, 1]`
pub fn ease_in_out(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// A content-offset change animated over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndentTransition {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
}

impl IndentTransition {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    /// Build a transition from a duration in seconds
    ///
    /// Negative or non-finite durations collapse to an instant change.
    pub fn with_secs(from: f32, to: f32, secs: f64) -> Self {
        let duration = Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO);
        Self::new(from, to, duration)
    }

    /// Linear progress in `[0, 1]` after `elapsed`
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Content offset after `elapsed`
    pub fn offset_at(&self, elapsed: Duration) -> f32 {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out(progress)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_in_out(7.0), 1.0);
    }

    #[test]
    fn test_transition_endpoints() {
        let transition = IndentTransition::with_secs(0.0, 44.0, 0.2);
        assert_eq!(transition.offset_at(Duration::ZERO), 0.0);
        assert_eq!(transition.offset_at(Duration::from_millis(200)), 44.0);
        assert_eq!(transition.offset_at(Duration::from_secs(5)), 44.0);
        assert!(!transition.is_finished(Duration::from_millis(100)));
        assert!(transition.is_finished(Duration::from_millis(200)));
    }

    #[test]
    fn test_configured_duration_is_exact() {
        let transition = IndentTransition::with_secs(0.0, 44.0, 0.2);
        assert_eq!(transition.duration, Duration::from_millis(200));

        let end = Duration::from_millis(200);
        assert_eq!(transition.offset_at(end), transition.to);
        assert!(transition.is_finished(end));
        assert!(!transition.is_finished(Duration::from_millis(199)));
    }

    #[test]
    fn test_transition_is_monotonic() {
        let forward = IndentTransition::with_secs(0.0, 44.0, 0.2);
        let backward = IndentTransition::with_secs(44.0, 0.0, 0.2);

        let mut last_forward = forward.offset_at(Duration::ZERO);
        let mut last_backward = backward.offset_at(Duration::ZERO);
        for ms in 1..=200 {
            let elapsed = Duration::from_millis(ms);
            let f = forward.offset_at(elapsed);
            let b = backward.offset_at(elapsed);
            assert!(f >= last_forward);
            assert!(b <= last_backward);
            last_forward = f;
            last_backward = b;
        }
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let transition = IndentTransition::with_secs(0.0, 44.0, -1.0);
        assert_eq!(transition.duration, Duration::ZERO);
        assert_eq!(transition.offset_at(Duration::ZERO), 44.0);
        assert!(transition.is_finished(Duration::ZERO));
    }
}
