//! Renewal reminder urgency

use chrono::NaiveDate;
use serde::Serialize;

/// Days-left threshold at or below which a renewal is urgent
pub const URGENT_DAYS: i64 = 7;
/// Days-left threshold at or below which a renewal is due soon
pub const SOON_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenewalUrgency {
    Urgent,
    Soon,
    Ok,
}

impl RenewalUrgency {
    /// Overdue renewals (negative days) count as urgent
    pub fn from_days_left(days_left: i64) -> Self {
        if days_left <= URGENT_DAYS {
            RenewalUrgency::Urgent
        } else if days_left <= SOON_DAYS {
            RenewalUrgency::Soon
        } else {
            RenewalUrgency::Ok
        }
    }

    pub fn from_dates(renewal: NaiveDate, today: NaiveDate) -> Self {
        Self::from_days_left(days_left(renewal, today))
    }
}

pub fn days_left(renewal: NaiveDate, today: NaiveDate) -> i64 {
    (renewal - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(RenewalUrgency::from_days_left(-2), RenewalUrgency::Urgent);
        assert_eq!(RenewalUrgency::from_days_left(7), RenewalUrgency::Urgent);
        assert_eq!(RenewalUrgency::from_days_left(8), RenewalUrgency::Soon);
        assert_eq!(RenewalUrgency::from_days_left(30), RenewalUrgency::Soon);
        assert_eq!(RenewalUrgency::from_days_left(31), RenewalUrgency::Ok);
    }

    #[test]
    fn test_from_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();
        let renewal = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(days_left(renewal, today), 7);
        assert_eq!(RenewalUrgency::from_dates(renewal, today), RenewalUrgency::Urgent);

        let later = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(RenewalUrgency::from_dates(later, today), RenewalUrgency::Ok);
    }
}
