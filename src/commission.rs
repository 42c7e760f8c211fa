//! Dealer commission calculator
//!
//! commission = policies sold × average premium × rate% / 100

use crate::format::format_usd;
use crate::input::{float_or_zero, int_or_zero, non_negative};
use serde::Serialize;

/// Parsed commission calculator form
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CommissionInputs {
    pub policies_sold: u64,
    pub avg_premium: f64,
    /// Commission rate in percent (5.0 = 5%)
    pub commission_rate: f64,
}

impl CommissionInputs {
    pub fn new(policies_sold: u64, avg_premium: f64, commission_rate: f64) -> Self {
        Self {
            policies_sold,
            avg_premium: non_negative(avg_premium),
            commission_rate: if commission_rate.is_finite() { commission_rate } else { 0.0 },
        }
    }

    /// Parse raw form values. Missing or non-numeric fields count as 0;
    /// negative policy counts and premiums are clamped to 0.
    pub fn from_form(policies_sold: &str, avg_premium: &str, commission_rate: &str) -> Self {
        let policies = int_or_zero(policies_sold).max(0) as u64;
        Self::new(policies, float_or_zero(avg_premium), float_or_zero(commission_rate))
    }

    /// Products too large to represent come out as 0
    pub fn commission(&self) -> f64 {
        let commission = (self.policies_sold as f64 * self.avg_premium * self.commission_rate) / 100.0;
        if commission.is_finite() { commission } else { 0.0 }
    }

    pub fn display(&self) -> String {
        format_usd(self.commission())
    }
}

/// Total commission earned for the given inputs
pub fn compute_commission(inputs: &CommissionInputs) -> f64 {
    let commission = inputs.commission();
    log::debug!(
        "Commission: {} policies × {:.2} at {}% = {:.2}",
        inputs.policies_sold, inputs.avg_premium, inputs.commission_rate, commission
    );
    commission
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_commission() {
        assert_eq!(compute_commission(&CommissionInputs::new(10, 500.0, 5.0)), 250.0);
        assert_eq!(compute_commission(&CommissionInputs::new(0, 500.0, 5.0)), 0.0);
    }

    #[test]
    fn test_fractional_rate() {
        let inputs = CommissionInputs::from_form("12", "1250.50", "7.5");
        assert_relative_eq!(compute_commission(&inputs), 1125.45, epsilon = 1e-9);
        assert_eq!(inputs.display(), "$1,125.45");
    }

    #[test]
    fn test_missing_inputs_are_zero() {
        assert_eq!(compute_commission(&CommissionInputs::from_form("", "500", "5")), 0.0);
        assert_eq!(compute_commission(&CommissionInputs::from_form("10", "n/a", "5")), 0.0);
        assert_eq!(compute_commission(&CommissionInputs::from_form("10", "500", "")), 0.0);
    }

    #[test]
    fn test_overflowing_product_is_zero() {
        let inputs = CommissionInputs::from_form("10", "1e300", "1e10");
        assert_eq!(compute_commission(&inputs), 0.0);
        assert_eq!(inputs.display(), "$0.00");
    }

    #[test]
    fn test_policies_truncate_and_clamp() {
        let inputs = CommissionInputs::from_form("10.9", "500", "5");
        assert_eq!(inputs.policies_sold, 10);

        let negative = CommissionInputs::from_form("-3", "-500", "5");
        assert_eq!(negative.policies_sold, 0);
        assert_eq!(negative.avg_premium, 0.0);
    }
}
