//! Dealer lead table

use crate::error::{BrokerError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Read;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    #[serde(untagged)]
    Other(String),
}

impl LeadStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "New" => LeadStatus::New,
            "Contacted" => LeadStatus::Contacted,
            "Qualified" => LeadStatus::Qualified,
            other => LeadStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    pub id: u32,
    pub name: String,
    pub status: LeadStatus,
    /// Display value as shown in the table, e.g. `$2,500`
    pub value: String,
    pub date: NaiveDate,
}

/// Row as it appears in a leads CSV
#[derive(Debug, Deserialize)]
struct LeadRecord {
    id: u32,
    name: String,
    status: String,
    value: String,
    date: String,
}

impl TryFrom<LeadRecord> for Lead {
    type Error = BrokerError;

    fn try_from(record: LeadRecord) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").map_err(|source| BrokerError::Date {
            value: record.date.clone(),
            source,
        })?;
        Ok(Lead {
            id: record.id,
            name: record.name,
            status: LeadStatus::parse(&record.status),
            value: record.value,
            date,
        })
    }
}

/// Load leads from a CSV source with header `id,name,status,value,date`
pub fn load_leads_from_reader<R: Read>(reader: R) -> Result<Vec<Lead>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut leads = Vec::new();
    for record in rdr.deserialize::<LeadRecord>() {
        leads.push(Lead::try_from(record?)?);
    }
    log::debug!("Loaded {} leads", leads.len());
    Ok(leads)
}

const SAMPLE_LEADS: &str = "\
id,name,status,value,date
1,John Doe,New,\"$2,500\",2024-01-15
2,Jane Smith,Contacted,\"$3,200\",2024-01-14
3,Bob Johnson,Qualified,\"$1,800\",2024-01-13
";

/// Sample leads shown on the dealer portal
pub fn sample_leads() -> Result<Vec<Lead>> {
    load_leads_from_reader(SAMPLE_LEADS.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_leads() {
        let leads = sample_leads().expect("Failed to load");
        assert_eq!(leads.len(), 3);
        assert_eq!(leads[0].name, "John Doe");
        assert_eq!(leads[0].value, "$2,500");
        assert_eq!(leads[1].status, LeadStatus::Contacted);
        assert_eq!(leads[2].date, NaiveDate::from_ymd_opt(2024, 1, 13).unwrap());
    }

    #[test]
    fn test_unknown_status_kept() {
        let csv = "id,name,status,value,date\n9,Ann Lee,Lost,$0,2024-02-01\n";
        let leads = load_leads_from_reader(csv.as_bytes()).expect("Failed to load");
        assert_eq!(leads[0].status, LeadStatus::Other("Lost".to_string()));
        assert_eq!(leads[0].status.as_str(), "Lost");
    }

    #[test]
    fn test_bad_date() {
        let csv = "id,name,status,value,date\n9,Ann Lee,New,$0,01/02/2024\n";
        let err = load_leads_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, BrokerError::Date { .. }));
    }
}
