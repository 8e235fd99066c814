//! Frame delta computation

use crate::consts::FRAME_RATE;

/// Upper bound for one frame delta, so a stall cannot teleport the run
pub const MAX_FRAME_DT: f32 = 0.25;

/// Turns monotonic timestamps (seconds) into per-frame deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous call. The first call reports one nominal frame.
    pub fn delta(&mut self, now: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => (now - last) as f32,
            None => 1.0 / FRAME_RATE as f32,
        };
        self.last_time = Some(now);
        dt.clamp(0.0, MAX_FRAME_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_nominal() {
        let mut clock = FrameClock::new();
        assert!((clock.delta(100.0) - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_delta_between_calls() {
        let mut clock = FrameClock::new();
        clock.delta(1.0);
        assert!((clock.delta(1.5) - 0.25).abs() < 1e-6);
        assert!((clock.delta(1.6) - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_stall_and_backwards_clamped() {
        let mut clock = FrameClock::new();
        clock.delta(1.0);
        assert_eq!(clock.delta(10.0), MAX_FRAME_DT);
        assert_eq!(clock.delta(9.0), 0.0);
    }
}
