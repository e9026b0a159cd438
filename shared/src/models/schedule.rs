//! Installment Schedule Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parcela status derived by reconciliation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstallmentStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

/// One parcela of the amortization schedule
///
/// Entries are either persisted at contract finalization or computed
/// virtually on demand; the two representations are numerically identical
/// for the same inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstallmentScheduleEntry {
    /// 1-based position in the schedule
    pub index: u32,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: InstallmentStatus,
    /// No installment count was configured yet; `amount` is the full
    /// remainder and the numeric schedule is still to be defined
    #[serde(default)]
    pub amount_to_be_defined: bool,
}

/// Aggregate payment state for one contract
///
/// Field names are fixed: downstream UI listing and PDF generation consume
/// this exact shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummary {
    /// Post-discount billable total
    pub total_travel_amount: f64,
    pub total_paid: f64,
    pub outstanding_balance: f64,
    pub down_payment_amount: f64,
    /// Whether the entrada has been settled (cash receipt or redeemed credit)
    pub entrada_paid: bool,
    /// Parcelas not yet paid
    pub remaining_installments: u32,
    /// Base per-parcela amount, zero while the schedule is to be defined
    pub installment_amount: f64,
    pub parcelas: Vec<InstallmentScheduleEntry>,
}
