//! Balance reconciliation
//!
//! Folds recorded receipts into a schedule (persisted or virtual) to
//! produce per-parcela status and the authoritative outstanding balance.
//! Recomputing from the same inputs always yields the same result; no
//! receipt is ever double-counted.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use shared::error::EngineResult;
use shared::models::{
    BalanceSummary, ClientPaymentConfig, InstallmentScheduleEntry, InstallmentStatus,
    PaymentMethod, ReceiptRecord, ReceiptRole,
};

use crate::money::{money_eq, to_decimal, to_f64, validate_config, validate_receipt};
use crate::pricing::{compute_gross_price, resolve_discount};
use crate::schedule::{DownPaymentAllocation, discounted_total, generate_schedule};

/// Reconciliation result for one contract
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// Money that actually arrived (entrada, general payments, parcela payments)
    pub total_paid: f64,
    /// Still owed; clamped to zero on overpayment
    pub outstanding_balance: f64,
    /// Whether the entrada has been settled
    pub entrada_paid: bool,
    /// Schedule entries with reconciled statuses
    pub entries: Vec<InstallmentScheduleEntry>,
}

/// Find the receipt settling the entrada, if any
///
/// An explicit `DOWN_PAYMENT` role wins; for legacy untagged records the
/// first general receipt exactly matching the entrada amount is taken. At
/// most one receipt is consumed this way. A credit-funded entrada has no
/// cash settlement, so no fallback applies.
fn entrada_receipt_index(
    receipts: &[ReceiptRecord],
    allocation: &DownPaymentAllocation,
) -> Option<usize> {
    if let Some(i) = receipts
        .iter()
        .position(|r| !r.cancelled && r.role == Some(ReceiptRole::DownPayment))
    {
        return Some(i);
    }

    if allocation.excluded_from_owed || to_decimal(allocation.amount) <= Decimal::ZERO {
        return None;
    }

    receipts
        .iter()
        .position(|r| !r.cancelled && r.is_untagged() && money_eq(r.amount, allocation.amount))
}

/// Reconcile a schedule against recorded receipts
///
/// `discounted_total` is the post-discount billable total the schedule was
/// derived from. The down-payment settlement receipt is identified and not
/// double-counted on top of the allocation amount.
pub fn reconcile(
    schedule: &[InstallmentScheduleEntry],
    receipts: &[ReceiptRecord],
    allocation: &DownPaymentAllocation,
    discounted_total: f64,
    today: NaiveDate,
) -> Reconciliation {
    let entrada_receipt = entrada_receipt_index(receipts, allocation);

    // The entrada counts once: as the allocation amount when cash-funded,
    // never when funded from a credit (no cash arrived).
    let mut total_paid = Decimal::ZERO;
    if !allocation.excluded_from_owed {
        total_paid += to_decimal(allocation.amount);
    }
    for (i, receipt) in receipts.iter().enumerate() {
        if receipt.cancelled || entrada_receipt == Some(i) {
            continue;
        }
        total_paid += to_decimal(receipt.amount);
    }

    let entries: Vec<InstallmentScheduleEntry> = schedule
        .iter()
        .map(|entry| {
            let settled = receipts
                .iter()
                .any(|r| !r.cancelled && r.parcela_id == Some(entry.index));

            let status = if entry.amount_to_be_defined {
                InstallmentStatus::Pending
            } else if settled {
                InstallmentStatus::Paid
            } else if entry.due_date.is_some_and(|d| d < today) {
                InstallmentStatus::Overdue
            } else {
                InstallmentStatus::Pending
            };

            InstallmentScheduleEntry {
                status,
                ..entry.clone()
            }
        })
        .collect();

    let entrada_due = to_decimal(allocation.amount) > Decimal::ZERO;
    let entrada_paid =
        !entrada_due || allocation.excluded_from_owed || entrada_receipt.is_some();

    // A credit-funded entrada never shows up in total_paid (no cash
    // arrived) but the client no longer owes it either
    let mut owed = to_decimal(discounted_total);
    if allocation.excluded_from_owed {
        owed -= to_decimal(allocation.amount);
    }
    let outstanding = (owed - total_paid).max(Decimal::ZERO);

    Reconciliation {
        total_paid: to_f64(total_paid),
        outstanding_balance: to_f64(outstanding),
        entrada_paid,
        entries,
    }
}

/// Build the balance summary consumed by UI listing and PDF generation
///
/// Runs composition → discount → schedule → reconciliation from the raw
/// payment configuration. This read path never mutates the credit ledger:
/// a credit-funded entrada is taken as excluded-from-paid without being
/// re-redeemed, so re-rendering a summary can never consume a credit.
pub fn build_balance_summary(
    config: &ClientPaymentConfig,
    receipts: &[ReceiptRecord],
    today: NaiveDate,
) -> EngineResult<BalanceSummary> {
    validate_config(config)?;
    for receipt in receipts {
        validate_receipt(receipt)?;
    }

    let gross = compute_gross_price(&config.to_travel_price())?;
    let resolution = resolve_discount(gross.billable, &config.to_discount_spec());

    let allocation = DownPaymentAllocation {
        amount: config.down_payment_amount,
        method: config.down_payment_method,
        excluded_from_owed: config.down_payment_method == PaymentMethod::PriorTripCredit,
    };

    let total = discounted_total(gross.billable, resolution.amount);
    let schedule = generate_schedule(
        gross.billable,
        resolution.amount,
        &allocation,
        config.installments_count,
        config.first_due_date,
    );

    let reconciliation = reconcile(&schedule, receipts, &allocation, total, today);

    let installment_amount = reconciliation
        .entries
        .first()
        .filter(|e| !e.amount_to_be_defined)
        .map(|e| e.amount)
        .unwrap_or(0.0);
    let remaining_installments = reconciliation
        .entries
        .iter()
        .filter(|e| !e.amount_to_be_defined && e.status != InstallmentStatus::Paid)
        .count() as u32;

    Ok(BalanceSummary {
        total_travel_amount: total,
        total_paid: reconciliation.total_paid,
        outstanding_balance: reconciliation.outstanding_balance,
        down_payment_amount: allocation.amount,
        entrada_paid: reconciliation.entrada_paid,
        remaining_installments,
        installment_amount,
        parcelas: reconciliation.entries,
    })
}
