//! Installment schedule generation
//!
//! Divides the post-discount, post-entrada remainder into equal parcelas.
//! The last parcela absorbs the rounding remainder so the sum is exact to
//! the cent. Deterministic pure function: identical inputs always produce
//! an identical schedule.

use chrono::{Months, NaiveDate};
use rust_decimal::prelude::*;
use shared::models::{InstallmentScheduleEntry, InstallmentStatus};

use crate::money::{round2, to_decimal, to_f64};

use super::DownPaymentAllocation;

/// Post-discount billable total
pub fn discounted_total(gross: f64, discount: f64) -> f64 {
    to_f64((to_decimal(gross) - to_decimal(discount)).max(Decimal::ZERO))
}

/// Generate the parcela schedule for one contract
///
/// With no installment count configured yet, the whole remainder is
/// returned as a single entry flagged `amount_to_be_defined` — a normal
/// editing state, not an error. Due dates step monthly from
/// `first_due_date` when given.
pub fn generate_schedule(
    gross: f64,
    discount: f64,
    allocation: &DownPaymentAllocation,
    count: u32,
    first_due_date: Option<NaiveDate>,
) -> Vec<InstallmentScheduleEntry> {
    let total = to_decimal(discounted_total(gross, discount));
    let remaining = (total - to_decimal(allocation.amount)).max(Decimal::ZERO);

    if count == 0 {
        return vec![InstallmentScheduleEntry {
            index: 1,
            amount: to_f64(remaining),
            due_date: first_due_date,
            status: InstallmentStatus::Pending,
            amount_to_be_defined: true,
        }];
    }

    let base = round2(remaining / Decimal::from(count));
    let mut distributed = Decimal::ZERO;
    let mut entries = Vec::with_capacity(count as usize);

    for i in 0..count {
        // Last parcela absorbs the rounding remainder
        let amount = if i == count - 1 {
            remaining - distributed
        } else {
            base
        };
        distributed += amount;

        let due_date = first_due_date.and_then(|d| d.checked_add_months(Months::new(i)));

        entries.push(InstallmentScheduleEntry {
            index: i + 1,
            amount: to_f64(amount),
            due_date,
            status: InstallmentStatus::Pending,
            amount_to_be_defined: false,
        });
    }

    entries
}
