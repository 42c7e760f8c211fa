//! Claim form navigation and claim status tracking

mod steps;
mod status;

pub use steps::StepController;
pub use status::{status_progress, ClaimStatus};
