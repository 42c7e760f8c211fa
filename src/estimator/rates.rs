//! Rate card: vehicle multipliers, coverage rates and add-on surcharges
//!
//! The built-in card matches the figures on the public site. A JSON file can
//! override any subset of fields; omitted fields keep their defaults.

use super::catalog::{Addon, CoverageType, Surcharge, VehicleType};
use crate::error::{BrokerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Multiplier applied to the base premium per vehicle category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleMultipliers {
    #[serde(default = "default_car")]
    pub car: f64,
    #[serde(default = "default_bike")]
    pub bike: f64,
    #[serde(default = "default_commercial")]
    pub commercial: f64,
    /// Used when the vehicle type is missing or unrecognised
    #[serde(default = "default_car")]
    pub fallback: f64,
}

/// Premium per 1000 of vehicle value for each coverage level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageRates {
    #[serde(default = "default_basic")]
    pub basic: f64,
    #[serde(default = "default_premium")]
    pub premium: f64,
    #[serde(default = "default_comprehensive")]
    pub comprehensive: f64,
    /// Used when the coverage type is missing or unrecognised
    #[serde(default = "default_basic")]
    pub fallback: f64,
}

/// Add-on surcharges. Roadside, engine and consumables are flat amounts;
/// zero depreciation is a fraction of vehicle value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonCharges {
    #[serde(default = "default_roadside")]
    pub roadside: f64,
    #[serde(default = "default_zerodep_rate")]
    pub zerodep_rate: f64,
    #[serde(default = "default_engine")]
    pub engine: f64,
    #[serde(default = "default_consumables")]
    pub consumables: f64,
}

fn default_car() -> f64 { 1.0 }
fn default_bike() -> f64 { 0.6 }
fn default_commercial() -> f64 { 1.5 }
fn default_basic() -> f64 { 25.0 }
fn default_premium() -> f64 { 40.0 }
fn default_comprehensive() -> f64 { 60.0 }
fn default_roadside() -> f64 { 50.0 }
fn default_zerodep_rate() -> f64 { 0.02 }
fn default_engine() -> f64 { 75.0 }
fn default_consumables() -> f64 { 25.0 }

impl Default for VehicleMultipliers {
    fn default() -> Self {
        Self {
            car: 1.0,
            bike: 0.6,
            commercial: 1.5,
            fallback: 1.0,
        }
    }
}

impl Default for CoverageRates {
    fn default() -> Self {
        Self {
            basic: 25.0,
            premium: 40.0,
            comprehensive: 60.0,
            fallback: 25.0,
        }
    }
}

impl Default for AddonCharges {
    fn default() -> Self {
        Self {
            roadside: 50.0,      // $50 flat
            zerodep_rate: 0.02,  // 2% of vehicle value
            engine: 75.0,        // $75 flat
            consumables: 25.0,   // $25 flat
        }
    }
}

/// Combined pricing tables used by the estimator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    #[serde(default)]
    pub vehicles: VehicleMultipliers,
    #[serde(default)]
    pub coverage: CoverageRates,
    #[serde(default)]
    pub addons: AddonCharges,
}

impl RateCard {
    /// Load a rate card from a JSON file
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| BrokerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let card = Self::from_json_str(&text)?;
        log::info!("Loaded rate card from {}", path.display());
        Ok(card)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Multiplier for a vehicle type; `None` uses the fallback
    pub fn vehicle_multiplier(&self, vehicle: Option<VehicleType>) -> f64 {
        match vehicle {
            Some(VehicleType::Car) => self.vehicles.car,
            Some(VehicleType::Bike) => self.vehicles.bike,
            Some(VehicleType::Commercial) => self.vehicles.commercial,
            None => self.vehicles.fallback,
        }
    }

    /// Rate per 1000 of value for a coverage type; `None` uses the fallback
    pub fn coverage_rate(&self, coverage: Option<CoverageType>) -> f64 {
        match coverage {
            Some(CoverageType::Basic) => self.coverage.basic,
            Some(CoverageType::Premium) => self.coverage.premium,
            Some(CoverageType::Comprehensive) => self.coverage.comprehensive,
            None => self.coverage.fallback,
        }
    }

    pub fn surcharge(&self, addon: Addon) -> Surcharge {
        match addon {
            Addon::Roadside => Surcharge::Flat(self.addons.roadside),
            Addon::ZeroDep => Surcharge::ValueProportional(self.addons.zerodep_rate),
            Addon::Engine => Surcharge::Flat(self.addons.engine),
            Addon::Consumables => Surcharge::Flat(self.addons.consumables),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_card() {
        let card = RateCard::default();

        assert_eq!(card.vehicle_multiplier(Some(VehicleType::Car)), 1.0);
        assert_eq!(card.vehicle_multiplier(Some(VehicleType::Bike)), 0.6);
        assert_eq!(card.vehicle_multiplier(Some(VehicleType::Commercial)), 1.5);
        assert_eq!(card.vehicle_multiplier(None), 1.0);

        assert_eq!(card.coverage_rate(Some(CoverageType::Basic)), 25.0);
        assert_eq!(card.coverage_rate(Some(CoverageType::Premium)), 40.0);
        assert_eq!(card.coverage_rate(Some(CoverageType::Comprehensive)), 60.0);
        assert_eq!(card.coverage_rate(None), 25.0);

        assert_eq!(card.surcharge(Addon::Roadside), Surcharge::Flat(50.0));
        assert_eq!(card.surcharge(Addon::ZeroDep), Surcharge::ValueProportional(0.02));
        assert_eq!(card.surcharge(Addon::Engine), Surcharge::Flat(75.0));
        assert_eq!(card.surcharge(Addon::Consumables), Surcharge::Flat(25.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let card = RateCard::from_json_str(r#"{ "coverage": { "premium": 45 }, "addons": { "engine": 90 } }"#)
            .expect("Failed to parse");

        assert_eq!(card.coverage.premium, 45.0);
        assert_eq!(card.coverage.basic, 25.0);
        assert_eq!(card.coverage.fallback, 25.0);
        assert_eq!(card.addons.engine, 90.0);
        assert_eq!(card.addons.roadside, 50.0);
        assert_eq!(card.vehicles, VehicleMultipliers::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        let card = RateCard::from_json_str("{}").expect("Failed to parse");
        assert_eq!(card, RateCard::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = RateCard::from_json_str("{ \"vehicles\": 3 }").unwrap_err();
        assert!(matches!(err, BrokerError::RateCard(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = RateCard::from_json_path("/nonexistent/rates.json").unwrap_err();
        assert!(matches!(err, BrokerError::Io { .. }));
    }
}
