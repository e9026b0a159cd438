//! Receipt Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What a receipt settles
///
/// Legacy records carry no role; reconciliation then falls back to
/// value-matching against the entrada amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReceiptRole {
    DownPayment,
    Installment,
    General,
}

/// Payment capture record
///
/// Never mutated, only superseded: a wrong receipt is cancelled and a new
/// one issued.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptRecord {
    pub amount: f64,
    pub payment_date: NaiveDate,
    /// Parcela index (1-based) this receipt settles, when tied to one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcela_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ReceiptRole>,
    #[serde(default)]
    pub cancelled: bool,
}

impl ReceiptRecord {
    /// Legacy record: no role tag and not tied to a parcela
    pub fn is_untagged(&self) -> bool {
        self.parcela_id.is_none() && self.role.is_none()
    }
}
