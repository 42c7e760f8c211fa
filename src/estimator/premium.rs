//! Premium estimate from the cost estimator form

use super::catalog::{Addon, CoverageType, VehicleType};
use super::rates::RateCard;
use crate::format::format_whole;
use crate::input::{int_or_zero, non_negative};
use serde::Serialize;
use std::collections::BTreeSet;

/// Parsed estimator form. `None` means the select held a value we don't price.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PremiumInputs {
    pub vehicle_type: Option<VehicleType>,
    /// Vehicle value in whole currency units, never negative
    pub vehicle_value: f64,
    pub coverage_type: Option<CoverageType>,
    pub addons: BTreeSet<Addon>,
}

impl PremiumInputs {
    pub fn new(
        vehicle_type: Option<VehicleType>,
        vehicle_value: f64,
        coverage_type: Option<CoverageType>,
        addons: impl IntoIterator<Item = Addon>,
    ) -> Self {
        Self {
            vehicle_type,
            vehicle_value: non_negative(vehicle_value),
            coverage_type,
            addons: addons.into_iter().collect(),
        }
    }

    /// Build inputs from raw form values.
    ///
    /// The vehicle value keeps only its leading integer; non-numeric or
    /// negative values become 0. Unrecognised add-ons are dropped.
    pub fn from_form<I, S>(vehicle_type: &str, vehicle_value: &str, coverage_type: &str, addons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vehicle = VehicleType::from_form(vehicle_type);
        if vehicle.is_none() {
            log::warn!("Unknown vehicle type '{}', using fallback multiplier", vehicle_type);
        }
        let coverage = CoverageType::from_form(coverage_type);
        if coverage.is_none() {
            log::warn!("Unknown coverage type '{}', using fallback rate", coverage_type);
        }

        let selected = addons.into_iter().filter_map(|raw| {
            let raw = raw.as_ref();
            let addon = Addon::from_form(raw);
            if addon.is_none() {
                log::warn!("Ignoring unknown add-on '{}'", raw);
            }
            addon
        });

        Self::new(vehicle, int_or_zero(vehicle_value) as f64, coverage, selected)
    }
}

/// Surcharge contributed by one selected add-on
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddonCharge {
    pub addon: Addon,
    pub amount: f64,
}

/// Result of an estimate with its breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PremiumQuote {
    /// value / 1000 × coverage rate × vehicle multiplier
    pub base: f64,
    pub addon_charges: Vec<AddonCharge>,
    /// Unrounded base plus surcharges
    pub total: f64,
}

impl PremiumQuote {
    /// Total rounded to the nearest whole currency unit
    pub fn rounded(&self) -> i64 {
        self.total.round() as i64
    }

    /// Display string, e.g. `$3,725`
    pub fn display(&self) -> String {
        format_whole(self.total)
    }
}

/// Prices estimator inputs against a rate card
#[derive(Debug, Clone, Default)]
pub struct PremiumEstimator {
    rates: RateCard,
}

impl PremiumEstimator {
    pub fn new(rates: RateCard) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateCard {
        &self.rates
    }

    pub fn estimate(&self, inputs: &PremiumInputs) -> PremiumQuote {
        let value = non_negative(inputs.vehicle_value);
        let rate = self.rates.coverage_rate(inputs.coverage_type);
        let multiplier = self.rates.vehicle_multiplier(inputs.vehicle_type);

        let base = (value / 1000.0) * rate * multiplier;

        let addon_charges: Vec<AddonCharge> = inputs
            .addons
            .iter()
            .map(|&addon| AddonCharge {
                addon,
                amount: self.rates.surcharge(addon).amount(value),
            })
            .collect();

        let total = base + addon_charges.iter().map(|c| c.amount).sum::<f64>();

        log::debug!(
            "Premium estimate: value={} rate={} multiplier={} addons={} total={:.2}",
            value, rate, multiplier, addon_charges.len(), total
        );

        PremiumQuote { base, addon_charges, total }
    }
}

/// Estimate against the built-in rate card
pub fn estimate_premium(inputs: &PremiumInputs) -> PremiumQuote {
    PremiumEstimator::default().estimate(inputs)
}
