//! Payment Method Model

use serde::{Deserialize, Serialize};

/// Payment method for the entrada and for receipts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Pix,
    CardCredit,
    CardDebit,
    BankCredit,
    Boleto,
    Link,
    /// Funded from a prior-trip cancellation credit; no cash changes hands
    PriorTripCredit,
}

/// Recorded entrada for one contract
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownPayment {
    pub amount: f64,
    pub method: PaymentMethod,
    /// Redeemed credit id when `method` is `PRIOR_TRIP_CREDIT`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_ref: Option<String>,
}
