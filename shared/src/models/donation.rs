//! Donations and their analytics

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money;
use crate::types::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DonationCause {
    General,
    Food,
    Education,
    Medical,
    PanditHouse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: String,
    pub donor_name: String,
    pub cause: DonationCause,
    /// Amount in rupees
    pub amount: f64,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationCreate {
    pub donor_name: String,
    pub cause: DonationCause,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationAnalytics {
    pub total: f64,
    /// Distinct donor names
    pub donors: usize,
    /// Mean amount per donation
    pub average: f64,
    pub count: usize,
    pub by_cause: BTreeMap<DonationCause, f64>,
}

impl DonationAnalytics {
    pub fn from_donations(donations: &[Donation]) -> Self {
        let total = money::sum(donations.iter().map(|d| d.amount));
        let donors = donations
            .iter()
            .map(|d| d.donor_name.trim().to_lowercase())
            .collect::<HashSet<_>>()
            .len();
        let count = donations.len();
        let average = if count == 0 {
            Decimal::ZERO
        } else {
            total / Decimal::from(count)
        };
        let mut by_cause: BTreeMap<DonationCause, Decimal> = BTreeMap::new();
        for d in donations {
            *by_cause.entry(d.cause).or_default() += money::to_decimal(d.amount);
        }
        Self {
            total: money::to_f64(total),
            donors,
            // two decimals, as shown on the analytics card
            average: money::to_f64(average),
            count,
            by_cause: by_cause
                .into_iter()
                .map(|(cause, sum)| (cause, money::to_f64(sum)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donation(name: &str, cause: DonationCause, amount: f64) -> Donation {
        Donation {
            id: name.to_string(),
            donor_name: name.to_string(),
            cause,
            amount,
            timestamp: 0,
        }
    }

    #[test]
    fn test_empty_analytics() {
        let a = DonationAnalytics::from_donations(&[]);
        assert_eq!(a.total, 0.0);
        assert_eq!(a.donors, 0);
        assert_eq!(a.average, 0.0);
    }

    #[test]
    fn test_analytics_counts_distinct_donors() {
        let a = DonationAnalytics::from_donations(&[
            donation("Rajesh", DonationCause::Food, 100.0),
            donation("rajesh ", DonationCause::Food, 200.0),
            donation("Priya", DonationCause::Medical, 301.0),
        ]);
        assert_eq!(a.total, 601.0);
        assert_eq!(a.donors, 2);
        assert_eq!(a.count, 3);
        assert_eq!(a.average, 200.33);
        assert_eq!(a.by_cause[&DonationCause::Food], 300.0);
    }

    #[test]
    fn test_fractional_amounts_sum_exactly() {
        let a = DonationAnalytics::from_donations(&[
            donation("Anita", DonationCause::Food, 0.1),
            donation("Vikram", DonationCause::Food, 0.2),
            donation("Meera", DonationCause::Education, 100.05),
        ]);
        assert_eq!(a.total, 100.35);
        assert_eq!(a.by_cause[&DonationCause::Food], 0.3);
        assert_eq!(a.by_cause[&DonationCause::Education], 100.05);
        assert_eq!(a.average, 33.45);
    }

    #[test]
    fn test_cause_wire_name() {
        assert_eq!(
            serde_json::to_string(&DonationCause::PanditHouse).unwrap(),
            "\"panditHouse\""
        );
    }
}
