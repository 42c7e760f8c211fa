//! Premium estimator: categories, rate card, estimates and batch quoting

mod catalog;
mod rates;
mod premium;
pub mod batch;

pub use catalog::{Addon, CoverageType, Surcharge, VehicleType};
pub use rates::{AddonCharges, CoverageRates, RateCard, VehicleMultipliers};
pub use premium::{estimate_premium, AddonCharge, PremiumEstimator, PremiumInputs, PremiumQuote};
pub use batch::{quote_batch, read_requests, write_quotes, QuoteRequest, QuoteRow};
