//! Payment & installment reconciliation engine
//!
//! Pure calculation core for travel-contract payments: gross price
//! composition, discount resolution, entrada allocation, parcela schedule
//! generation, receipt reconciliation, and the cancellation credit ledger.
//!
//! # Module structure
//!
//! ```text
//! payment-engine/src/
//! ├── money/      # Decimal arithmetic, rounding, boundary validation
//! ├── pricing/    # gross price composition + discount resolution
//! ├── schedule/   # entrada allocation + parcela generation
//! ├── reconcile/  # receipt reconciliation + balance summary
//! └── credit/     # cancellation credit issuance and ledger
//! ```
//!
//! Everything except the credit ledger is a deterministic pure transform:
//! no I/O, no clock access ("today" is always a parameter), safe to call
//! from any number of concurrent callers.

pub mod credit;
pub mod money;
pub mod pricing;
pub mod reconcile;
pub mod schedule;

// Re-export public types
pub use credit::{
    CancellationQuote, CreditStore, MemoryCreditLedger, cancellation_quote,
    issue_credit_on_cancellation,
};
pub use pricing::{
    ApprovalStatusProvider, DiscountResolution, GrossPrice, StoredApproval, compute_gross_price,
    resolve_discount, resolve_discount_with,
};
pub use reconcile::{Reconciliation, build_balance_summary, reconcile};
pub use schedule::{DownPaymentAllocation, allocate_down_payment, generate_schedule};
