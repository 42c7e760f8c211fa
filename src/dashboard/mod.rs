//! Customer dashboard and dealer portal data

mod renewals;
mod charts;
mod leads;

pub use renewals::{days_left, RenewalUrgency, SOON_DAYS, URGENT_DAYS};
pub use charts::{claims_overview, monthly_performance, ClaimSlice, MonthlyPoint};
pub use leads::{load_leads_from_reader, sample_leads, Lead, LeadStatus};
