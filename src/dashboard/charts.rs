//! Static series behind the dashboard charts

use serde::Serialize;

/// One slice of the claims overview pie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimSlice {
    pub name: &'static str,
    pub value: u32,
}

/// One point of the monthly performance line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub month: &'static str,
    pub claims_settled: u32,
}

pub fn claims_overview() -> Vec<ClaimSlice> {
    vec![
        ClaimSlice { name: "Settled", value: 12 },
        ClaimSlice { name: "In Progress", value: 8 },
        ClaimSlice { name: "Pending", value: 3 },
    ]
}

pub fn monthly_performance() -> Vec<MonthlyPoint> {
    [("Jan", 8), ("Feb", 12), ("Mar", 15), ("Apr", 10), ("May", 18), ("Jun", 22)]
        .into_iter()
        .map(|(month, claims_settled)| MonthlyPoint { month, claims_settled })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_overview_total() {
        let total: u32 = claims_overview().iter().map(|s| s.value).sum();
        assert_eq!(total, 23);
    }

    #[test]
    fn test_monthly_performance() {
        let series = monthly_performance();
        assert_eq!(series.len(), 6);
        assert_eq!(series[0], MonthlyPoint { month: "Jan", claims_settled: 8 });
        assert_eq!(series[5].claims_settled, 22);
    }
}
