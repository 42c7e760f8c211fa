//! Broker Quote - calculation core for a vehicle insurance brokerage site
//!
//! This library provides:
//! - Premium estimates from vehicle type, value, coverage and add-ons
//! - Dealer commission calculation
//! - Multi-step claim form controller and claim status progress
//! - Plan selection with billing-cycle pricing
//! - Dashboard mock data, renewal urgency and lead tables
//! - Required-field validation and currency formatting
//!
//! Everything here is pure: a presentation adapter feeds in raw form values
//! and renders whatever comes back.

pub mod input;
pub mod estimator;
pub mod commission;
pub mod claims;
pub mod plans;
pub mod dashboard;
pub mod validation;
pub mod format;
pub mod error;

// Re-export commonly used types
pub use estimator::{estimate_premium, Addon, CoverageType, PremiumEstimator, PremiumInputs, PremiumQuote, RateCard, VehicleType};
pub use commission::{compute_commission, CommissionInputs};
pub use claims::{ClaimStatus, StepController};
pub use plans::{BillingCycle, Plan, PlanSelector};
pub use error::{BrokerError, Result};
