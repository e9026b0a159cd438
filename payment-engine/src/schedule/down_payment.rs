//! Entrada allocation
//!
//! Determines the effective entrada amount and its funding semantics. A
//! prior-trip credit funds the entrada without cash arriving, so the amount
//! still reduces the remaining-to-schedule balance but must not count
//! toward total paid in reconciliation.

use chrono::NaiveDate;
use shared::error::CreditError;
use shared::models::{CreditStatus, DownPayment, PaymentMethod};

use crate::credit::CreditStore;
use crate::money::to_decimal;

/// Allocated entrada with its funding semantics
#[derive(Debug, Clone, PartialEq)]
pub struct DownPaymentAllocation {
    /// Amount that reduces the remaining-to-schedule balance
    pub amount: f64,
    pub method: PaymentMethod,
    /// True when funded from a prior-trip credit: no cash arrived, so the
    /// amount is excluded from total-paid aggregation
    pub excluded_from_owed: bool,
}

impl DownPaymentAllocation {
    /// Cash-funded entrada (any method except prior-trip credit)
    pub fn cash(amount: f64, method: PaymentMethod) -> Self {
        Self {
            amount,
            method,
            excluded_from_owed: false,
        }
    }
}

/// Allocate the entrada at contract finalization
///
/// For ordinary methods this is a pure pass-through. For
/// `PRIOR_TRIP_CREDIT` the referenced credit is checked and redeemed
/// (single-use, full redemption); every failure blocks the booking.
pub fn allocate_down_payment(
    down_payment: &DownPayment,
    ledger: &dyn CreditStore,
    today: NaiveDate,
) -> Result<DownPaymentAllocation, CreditError> {
    let requested = down_payment.amount;
    if down_payment.method != PaymentMethod::PriorTripCredit {
        return Ok(DownPaymentAllocation::cash(requested, down_payment.method));
    }

    // An absent reference falls through as an unknown id
    let id = down_payment.credit_ref.as_deref().unwrap_or_default();
    let credit = ledger.get(id, today)?;

    match credit.status_as_of(today) {
        CreditStatus::Expired => return Err(CreditError::Expired(id.to_string())),
        CreditStatus::Redeemed => return Err(CreditError::AlreadyRedeemed(id.to_string())),
        CreditStatus::Active => {}
    }

    // The credit amount is immutable, so checking it before the redeem
    // compare-and-set cannot race with another booking.
    if to_decimal(credit.amount) < to_decimal(requested) {
        return Err(CreditError::Insufficient {
            id: id.to_string(),
            available: credit.amount,
            requested,
        });
    }

    ledger.redeem(id, today)?;

    Ok(DownPaymentAllocation {
        amount: requested,
        method: down_payment.method,
        excluded_from_owed: true,
    })
}
