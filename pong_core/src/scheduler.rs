//! Fixed-step tick source
//!
//! Turns whatever elapsed time the host's timer reports into a whole number
//! of simulation ticks. The host decides how time is measured (animation
//! frames, an interval timer, a test loop); this only keeps the accumulator.

use crate::params::Params;

#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    running: bool,
    accumulator: f32,
    step_dt: f32,
    max_frame_dt: f32,
}

impl FixedStep {
    pub fn new(step_dt: f32, max_frame_dt: f32) -> Self {
        Self {
            running: false,
            accumulator: 0.0,
            step_dt,
            max_frame_dt,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
        self.accumulator = 0.0;
    }

    /// Stop ticking and drop any partial step
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn step_dt(&self) -> f32 {
        self.step_dt
    }

    /// Number of whole ticks due after `elapsed` seconds
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if !self.running || elapsed.is_nan() || elapsed <= 0.0 {
            return 0;
        }

        // Clamp dt to prevent large catch-up bursts
        self.accumulator += elapsed.min(self.max_frame_dt);

        let mut ticks = 0;
        while self.accumulator >= self.step_dt {
            self.accumulator -= self.step_dt;
            ticks += 1;
        }
        ticks
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(Params::FIXED_DT, Params::MAX_FRAME_DT)
    }
}
