//! Credit store
//!
//! `CreditStore` is the seam the persistence layer implements. The
//! in-memory implementation here carries the at-most-once redemption
//! semantics the engine requires: the status compare-and-set runs under the
//! map's per-entry guard, so two concurrent bookings cannot both redeem the
//! same credit.

use chrono::NaiveDate;
use dashmap::DashMap;
use shared::error::CreditError;
use shared::models::{CreditRecord, CreditStatus};

/// Storage seam for cancellation credits
pub trait CreditStore: Send + Sync {
    /// Fetch a credit with lazy expiry applied: a credit past `expires_at`
    /// reads as `Expired` regardless of stored status.
    fn get(&self, id: &str, today: NaiveDate) -> Result<CreditRecord, CreditError>;

    /// Insert or replace a credit
    fn insert(&self, credit: CreditRecord);

    /// Flip an active credit to `Redeemed` (single-use, full redemption)
    ///
    /// At-most-once: of two concurrent attempts exactly one succeeds, the
    /// other fails with `CreditAlreadyRedeemed`.
    fn redeem(&self, id: &str, today: NaiveDate) -> Result<CreditRecord, CreditError>;
}

/// DashMap-backed in-memory credit ledger
#[derive(Default)]
pub struct MemoryCreditLedger {
    credits: DashMap<String, CreditRecord>,
}

impl MemoryCreditLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk lazy expiry for listing paths; readers get lazy expiry through
    /// [`CreditStore::get`] without it.
    pub fn expire_overdue(&self, today: NaiveDate) {
        for mut entry in self.credits.iter_mut() {
            if entry.status == CreditStatus::Active && today > entry.expires_at {
                entry.status = CreditStatus::Expired;
            }
        }
    }
}

impl CreditStore for MemoryCreditLedger {
    fn get(&self, id: &str, today: NaiveDate) -> Result<CreditRecord, CreditError> {
        let entry = self
            .credits
            .get(id)
            .ok_or_else(|| CreditError::NotFound(id.to_string()))?;

        let mut record = entry.value().clone();
        record.status = record.status_as_of(today);
        Ok(record)
    }

    fn insert(&self, credit: CreditRecord) {
        self.credits.insert(credit.id.clone(), credit);
    }

    fn redeem(&self, id: &str, today: NaiveDate) -> Result<CreditRecord, CreditError> {
        // The entry guard holds the shard lock for the whole check-and-set,
        // so two concurrent redemptions cannot both observe ACTIVE.
        let mut entry = self
            .credits
            .get_mut(id)
            .ok_or_else(|| CreditError::NotFound(id.to_string()))?;

        if entry.status == CreditStatus::Active && today > entry.expires_at {
            entry.status = CreditStatus::Expired;
        }

        match entry.status {
            CreditStatus::Active => {
                entry.status = CreditStatus::Redeemed;
                tracing::debug!(credit_id = %entry.id, amount = entry.amount, "Credit redeemed");
                Ok(entry.value().clone())
            }
            CreditStatus::Redeemed => Err(CreditError::AlreadyRedeemed(id.to_string())),
            CreditStatus::Expired => Err(CreditError::Expired(id.to_string())),
        }
    }
}
