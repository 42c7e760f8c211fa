//! Vehicle, coverage and add-on categories offered by the estimator form

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle category from the estimator's vehicle-type select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Bike,
    Commercial,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [VehicleType::Car, VehicleType::Bike, VehicleType::Commercial];

    /// Match a form value exactly. Anything else is an unknown vehicle.
    pub fn from_form(value: &str) -> Option<Self> {
        match value {
            "car" => Some(VehicleType::Car),
            "bike" => Some(VehicleType::Bike),
            "commercial" => Some(VehicleType::Commercial),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Bike => "bike",
            VehicleType::Commercial => "commercial",
        }
    }
}

/// Coverage level; each is priced per 1000 of vehicle value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageType {
    Basic,
    Premium,
    Comprehensive,
}

impl CoverageType {
    pub const ALL: [CoverageType; 3] = [CoverageType::Basic, CoverageType::Premium, CoverageType::Comprehensive];

    pub fn from_form(value: &str) -> Option<Self> {
        match value {
            "basic" => Some(CoverageType::Basic),
            "premium" => Some(CoverageType::Premium),
            "comprehensive" => Some(CoverageType::Comprehensive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageType::Basic => "basic",
            CoverageType::Premium => "premium",
            CoverageType::Comprehensive => "comprehensive",
        }
    }
}

/// Optional coverage extra ticked on the estimator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Addon {
    Roadside,
    #[serde(rename = "zerodep")]
    ZeroDep,
    Engine,
    Consumables,
}

impl Addon {
    pub const ALL: [Addon; 4] = [Addon::Roadside, Addon::ZeroDep, Addon::Engine, Addon::Consumables];

    pub fn from_form(value: &str) -> Option<Self> {
        match value {
            "roadside" => Some(Addon::Roadside),
            "zerodep" => Some(Addon::ZeroDep),
            "engine" => Some(Addon::Engine),
            "consumables" => Some(Addon::Consumables),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Addon::Roadside => "roadside",
            Addon::ZeroDep => "zerodep",
            Addon::Engine => "engine",
            Addon::Consumables => "consumables",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CoverageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Addon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an add-on adds to the premium
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surcharge {
    /// Fixed amount regardless of vehicle value
    Flat(f64),
    /// Fraction of the vehicle value (0.02 = 2%)
    ValueProportional(f64),
}

impl Surcharge {
    pub fn amount(&self, vehicle_value: f64) -> f64 {
        match *self {
            Surcharge::Flat(amount) => amount,
            Surcharge::ValueProportional(rate) => vehicle_value * rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_values_round_trip() {
        for v in VehicleType::ALL {
            assert_eq!(VehicleType::from_form(v.as_str()), Some(v));
        }
        for c in CoverageType::ALL {
            assert_eq!(CoverageType::from_form(c.as_str()), Some(c));
        }
        for a in Addon::ALL {
            assert_eq!(Addon::from_form(a.as_str()), Some(a));
        }
    }

    #[test]
    fn test_unknown_form_values() {
        assert_eq!(VehicleType::from_form("Car"), None);
        assert_eq!(VehicleType::from_form("truck"), None);
        assert_eq!(CoverageType::from_form(""), None);
        assert_eq!(Addon::from_form("sunroof"), None);
    }

    #[test]
    fn test_surcharge_amount() {
        assert_eq!(Surcharge::Flat(50.0).amount(1_000_000.0), 50.0);
        assert_eq!(Surcharge::ValueProportional(0.02).amount(50_000.0), 1000.0);
    }
}
