//! Claim lifecycle status shown on the dashboard claim cards

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClaimStatus {
    Submitted,
    UnderReview,
    Approved,
    Settled,
}

impl ClaimStatus {
    pub fn from_form(value: &str) -> Option<Self> {
        match value {
            "submitted" => Some(ClaimStatus::Submitted),
            "under-review" => Some(ClaimStatus::UnderReview),
            "approved" => Some(ClaimStatus::Approved),
            "settled" => Some(ClaimStatus::Settled),
            _ => None,
        }
    }

    /// Progress bar width in percent
    pub fn progress_percent(&self) -> u8 {
        match self {
            ClaimStatus::Submitted => 25,
            ClaimStatus::UnderReview => 50,
            ClaimStatus::Approved => 75,
            ClaimStatus::Settled => 100,
        }
    }
}

/// Progress for a raw status attribute; unknown statuses show an empty bar
pub fn status_progress(value: &str) -> u8 {
    ClaimStatus::from_form(value).map_or(0, |s| s.progress_percent())
}
