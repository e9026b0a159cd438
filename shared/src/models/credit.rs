//! Cancellation Credit Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Credit lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditStatus {
    #[default]
    Active,
    /// Consumed as the entrada of a later contract (single-use)
    Redeemed,
    Expired,
}

/// Time-boxed, non-cash credit issued on cancellation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreditRecord {
    pub id: String,
    pub amount: f64,
    /// Client the cancelled trip belonged to
    pub client_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    pub issued_at: NaiveDate,
    pub expires_at: NaiveDate,
    pub status: CreditStatus,
}

impl CreditRecord {
    /// Status with lazy expiry applied: an active credit past `expires_at`
    /// reads as expired regardless of what is stored.
    pub fn status_as_of(&self, today: NaiveDate) -> CreditStatus {
        if self.status == CreditStatus::Active && today > self.expires_at {
            CreditStatus::Expired
        } else {
            self.status
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_of_lazy_expiry() {
        let credit = CreditRecord {
            id: "c1".to_string(),
            amount: 800.0,
            client_name: "Ana".to_string(),
            destination: None,
            issued_at: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            expires_at: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            status: CreditStatus::Active,
        };

        let before = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
        let after = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
        assert_eq!(credit.status_as_of(before), CreditStatus::Active);
        assert_eq!(credit.status_as_of(after), CreditStatus::Expired);
    }

    #[test]
    fn test_status_as_of_redeemed_stays_redeemed() {
        let credit = CreditRecord {
            id: "c1".to_string(),
            amount: 800.0,
            client_name: "Ana".to_string(),
            destination: None,
            issued_at: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            expires_at: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            status: CreditStatus::Redeemed,
        };

        let after = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        assert_eq!(credit.status_as_of(after), CreditStatus::Redeemed);
    }
}
