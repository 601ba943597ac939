//! Fixed timestep accumulator
//!
//! Converts variable frame times into a whole number of simulation ticks.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};

#[derive(Debug, Clone)]
pub struct FixedStep {
    dt: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Feed one frame's elapsed time, returning how many ticks to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < MAX_SUBSTEPS {
            self.accumulator -= self.dt;
            steps += 1;
        }

        // Drop backlog we could not catch up on (spiral of death)
        if self.accumulator >= self.dt {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator %= self.dt;
        }

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_ticks() {
        let mut clock = FixedStep::new(0.125);
        assert_eq!(clock.advance(0.25), 2);
        assert_eq!(clock.advance(0.0625), 0);
        assert_eq!(clock.advance(0.0625), 1);
    }

    #[test]
    fn test_large_frame_is_capped() {
        let mut clock = FixedStep::new(0.03125);
        // Clamped to MAX_FRAME_DT, then capped at MAX_SUBSTEPS
        assert_eq!(clock.advance(10.0), MAX_SUBSTEPS);
        // Backlog was dropped, not carried forward
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_negative_frame_ignored() {
        let mut clock = FixedStep::new(0.125);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(0.125), 1);
    }
}
