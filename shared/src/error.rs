//! Error types for the payment engine
//!
//! Calculation errors (`EngineError`) are local and recoverable; ledger
//! errors (`CreditError`) are fatal for the redemption call and must block
//! the dependent booking action.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the pure calculation layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Malformed or out-of-range monetary input
    #[error("validation error: {0}")]
    Validation(String),
}

/// Non-fatal configuration anomalies
///
/// These never abort a computation; the affected component resolves to a
/// safe default (zero effect) and carries the warning for the caller to
/// surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigurationWarning {
    /// Custom discount selected without a value
    MissingCustomDiscountValue,
}

/// Errors from the credit ledger
///
/// All of these must be surfaced to the caller; a booking must not proceed
/// against a credit that failed to redeem.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CreditError {
    #[error("credit not found: {0}")]
    NotFound(String),

    #[error("credit expired: {0}")]
    Expired(String),

    #[error("credit {id} is insufficient: {available} available, {requested} requested")]
    Insufficient {
        id: String,
        available: f64,
        requested: f64,
    },

    #[error("credit already redeemed: {0}")]
    AlreadyRedeemed(String),
}

/// Result type alias for calculation functions
pub type EngineResult<T> = std::result::Result<T, EngineError>;
