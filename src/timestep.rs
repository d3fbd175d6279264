//! Fixed-timestep accumulation
//!
//! Converts variable wall-clock frame time into a whole number of fixed
//! simulation steps. The simulation itself never sees wall-clock time, so
//! gameplay stays deterministic regardless of frame rate.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Accumulates frame time and hands out pending fixed steps
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedTimestep {
    /// Accumulator at the canonical 60 Hz step
    pub fn new() -> Self {
        Self::with_step(SIM_DT)
    }

    pub fn with_step(step: f32) -> Self {
        assert!(step > 0.0, "step duration must be positive");
        Self {
            step,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Fixed step duration in seconds
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add a frame's elapsed time and return how many whole steps are due
    ///
    /// Capped at [`MAX_SUBSTEPS`]; when the cap is hit the remaining debt is
    /// dropped so a long stall cannot snowball into a catch-up spiral.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == self.max_substeps {
            self.accumulator = 0.0;
        }
        steps
    }

    /// Drop any pending time (round boundaries, resume from pause)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_steps_only() {
        let mut clock = FixedTimestep::with_step(0.01);
        assert_eq!(clock.advance(0.035), 3);
        // Remainder carries over to the next frame
        assert_eq!(clock.advance(0.005), 1);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_substep_cap_drops_debt() {
        let mut clock = FixedTimestep::with_step(0.01);
        assert_eq!(clock.advance(1.0), MAX_SUBSTEPS);
        // Debt was dropped, not carried
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_reset_clears_pending_time() {
        let mut clock = FixedTimestep::with_step(0.01);
        clock.advance(0.009);
        clock.reset();
        assert_eq!(clock.advance(0.002), 0);
    }

    #[test]
    fn test_negative_frame_time_ignored() {
        let mut clock = FixedTimestep::with_step(0.01);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(0.01), 1);
    }

    #[test]
    #[should_panic]
    fn test_zero_step_rejected() {
        let _ = FixedTimestep::with_step(0.0);
    }
}
