//! Batch quoting from CSV
//!
//! Each row holds the raw form values of one estimator submission:
//! `vehicle_type,vehicle_value,coverage_type,addons` with add-ons separated by
//! `;`. Rows are priced in parallel and written back in input order.

use super::premium::{PremiumEstimator, PremiumInputs};
use crate::error::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// One raw estimator submission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub vehicle_type: String,
    #[serde(default)]
    pub vehicle_value: String,
    #[serde(default)]
    pub coverage_type: String,
    #[serde(default)]
    pub addons: String,
}

impl QuoteRequest {
    pub fn to_inputs(&self) -> PremiumInputs {
        let addons = self
            .addons
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty());
        PremiumInputs::from_form(&self.vehicle_type, &self.vehicle_value, &self.coverage_type, addons)
    }
}

/// Priced row written to the output CSV
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRow {
    pub vehicle_type: String,
    pub vehicle_value: i64,
    pub coverage_type: String,
    pub addons: String,
    pub premium: i64,
}

/// Read quote requests from any CSV source with a header row
pub fn read_requests<R: Read>(reader: R) -> Result<Vec<QuoteRequest>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut requests = Vec::new();
    for record in rdr.deserialize() {
        requests.push(record?);
    }
    Ok(requests)
}

/// Price every request in parallel, preserving order
pub fn quote_batch(estimator: &PremiumEstimator, requests: &[QuoteRequest]) -> Vec<QuoteRow> {
    requests
        .par_iter()
        .map(|request| {
            let inputs = request.to_inputs();
            let quote = estimator.estimate(&inputs);
            QuoteRow {
                vehicle_type: request.vehicle_type.clone(),
                vehicle_value: inputs.vehicle_value as i64,
                coverage_type: request.coverage_type.clone(),
                addons: inputs.addons.iter().map(|a| a.as_str()).collect::<Vec<_>>().join(";"),
                premium: quote.rounded(),
            }
        })
        .collect()
}

pub fn write_quotes<W: Write>(writer: W, rows: &[QuoteRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
