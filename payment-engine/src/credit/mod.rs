//! Cancellation credit issuance and ledger
//!
//! A cancelled trip converts its paid total into a time-boxed, non-cash
//! credit redeemable as the entrada of a later contract. Redemption is
//! single-use and at-most-once; expiry is evaluated lazily on read.

mod ledger;

pub use ledger::*;

use chrono::{Days, NaiveDate};
use rust_decimal::prelude::*;
use shared::models::{CreditRecord, CreditStatus};
use uuid::Uuid;

use crate::money::{round2, to_decimal, to_f64};

/// Cancellations at least this many days before departure convert in full
const PENALTY_FREE_DAYS: i64 = 15;
/// Penalty rate applied to late cancellations
const LATE_CANCEL_PENALTY: f64 = 0.20;
/// Credits are redeemable for 90 days from issuance
const VALIDITY_DAYS: u64 = 90;

/// Penalty rate and resulting credit for a prospective cancellation
#[derive(Debug, Clone, PartialEq)]
pub struct CancellationQuote {
    /// 0.0 for early cancellations, 0.20 otherwise
    pub penalty_rate: f64,
    pub credit_amount: f64,
}

/// Quote the credit a cancellation would produce without issuing it
pub fn cancellation_quote(total_paid: f64, days_before_departure: i64) -> CancellationQuote {
    let penalty_rate = if days_before_departure >= PENALTY_FREE_DAYS {
        0.0
    } else {
        LATE_CANCEL_PENALTY
    };

    let amount = round2(to_decimal(total_paid) * (Decimal::ONE - to_decimal(penalty_rate)));
    CancellationQuote {
        penalty_rate,
        credit_amount: to_f64(amount),
    }
}

/// Convert the paid total of a cancelled trip into an active credit
///
/// The caller is expected to insert the returned record into a
/// [`CreditStore`] so it becomes redeemable.
pub fn issue_credit_on_cancellation(
    total_paid: f64,
    days_before_departure: i64,
    client_name: impl Into<String>,
    destination: Option<String>,
    issued_at: NaiveDate,
) -> CreditRecord {
    let quote = cancellation_quote(total_paid, days_before_departure);

    let expires_at = issued_at
        .checked_add_days(Days::new(VALIDITY_DAYS))
        // SAFETY: issued_at is a real calendar date; +90 days cannot leave chrono's range
        .expect("credit expiry date within calendar range");

    tracing::debug!(
        amount = quote.credit_amount,
        penalty_rate = quote.penalty_rate,
        %expires_at,
        "Issuing cancellation credit"
    );

    CreditRecord {
        id: Uuid::new_v4().to_string(),
        amount: quote.credit_amount,
        client_name: client_name.into(),
        destination,
        issued_at,
        expires_at,
        status: CreditStatus::Active,
    }
}
