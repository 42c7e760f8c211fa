//! Plan cards and billing-cycle pricing
//!
//! Yearly billing charges ten months for a year of cover.

use crate::input::int_or_zero;
use serde::{Deserialize, Serialize};

/// Months charged for a year of cover on yearly billing
pub const YEARLY_BILLED_MONTHS: i64 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    /// The billing toggle is a checkbox: checked means yearly
    pub fn from_toggle(checked: bool) -> Self {
        if checked { BillingCycle::Yearly } else { BillingCycle::Monthly }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub monthly_price: i64,
}

impl Plan {
    pub fn new(name: impl Into<String>, monthly_price: i64) -> Self {
        Self {
            name: name.into(),
            monthly_price,
        }
    }

    /// Build from a card's name and its raw monthly price attribute
    pub fn from_form(name: impl Into<String>, monthly_price: &str) -> Self {
        Self::new(name, int_or_zero(monthly_price))
    }

    pub fn price(&self, cycle: BillingCycle) -> i64 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.monthly_price.saturating_mul(YEARLY_BILLED_MONTHS),
        }
    }
}

/// Owns the plan cards, which one is selected, and the billing toggle.
/// At most one plan is selected at a time.
#[derive(Debug, Clone, Default)]
pub struct PlanSelector {
    plans: Vec<Plan>,
    selected: Option<usize>,
    billing: BillingCycle,
}

impl PlanSelector {
    pub fn new(plans: Vec<Plan>) -> Self {
        Self {
            plans,
            selected: None,
            billing: BillingCycle::Monthly,
        }
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Select the plan at `index`, replacing any previous selection.
    /// Returns `false` and leaves the selection alone if the index is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.plans.len() {
            log::warn!("Plan index {} out of range ({} plans)", index, self.plans.len());
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn selected(&self) -> Option<&Plan> {
        self.selected.and_then(|i| self.plans.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn billing(&self) -> BillingCycle {
        self.billing
    }

    pub fn set_billing(&mut self, billing: BillingCycle) {
        self.billing = billing;
    }

    /// Displayed price of every card under the current billing cycle
    pub fn prices(&self) -> Vec<i64> {
        self.plans.iter().map(|p| p.price(self.billing)).collect()
    }
}
