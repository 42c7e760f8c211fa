//! Linear step controller for the multi-step claim form

use serde::Serialize;

/// Tracks which page of an N-step form is showing.
///
/// `current_step` is always in `0..total_steps`. Moving past either end is a
/// no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepController {
    current_step: usize,
    total_steps: usize,
}

impl StepController {
    /// Start on the first step. A form needs at least one step, so 0 is treated as 1.
    pub fn new(total_steps: usize) -> Self {
        Self {
            current_step: 0,
            total_steps: total_steps.max(1),
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Advance one step. Returns `true` if the step changed.
    pub fn next(&mut self) -> bool {
        if self.current_step < self.total_steps - 1 {
            self.current_step += 1;
            log::debug!("Claim form step {}/{}", self.current_step + 1, self.total_steps);
            true
        } else {
            false
        }
    }

    /// Go back one step. Returns `true` if the step changed.
    pub fn previous(&mut self) -> bool {
        if self.current_step > 0 {
            self.current_step -= 1;
            log::debug!("Claim form step {}/{}", self.current_step + 1, self.total_steps);
            true
        } else {
            false
        }
    }

    pub fn is_first(&self) -> bool {
        self.current_step == 0
    }

    /// On the last step the external submit handler takes over
    pub fn is_last(&self) -> bool {
        self.current_step == self.total_steps - 1
    }

    /// Share of the form reached, counting the current step: (current + 1) / total × 100
    pub fn progress_percent(&self) -> f64 {
        ((self.current_step + 1) as f64 / self.total_steps as f64) * 100.0
    }
}
