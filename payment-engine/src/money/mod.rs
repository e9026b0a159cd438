//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to
//! `f64` for storage/serialization. Monetary input crosses the boundary
//! exactly once, through the validators here.

use rust_decimal::prelude::*;
use shared::error::{EngineError, EngineResult};
use shared::models::{ClientPaymentConfig, DiscountUnit, PaymentMethod, ReceiptRecord};

/// Rounding strategy for monetary values (2 decimal places, half-up)
pub(crate) const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed monetary amount (R$1,000,000)
const MAX_AMOUNT: f64 = 1_000_000.0;
/// Maximum allowed parcela count
const MAX_INSTALLMENTS: u32 = 120;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> EngineResult<()> {
    if !value.is_finite() {
        return Err(EngineError::Validation(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate a monetary amount: finite, non-negative, within bounds
pub(crate) fn require_amount(value: f64, field_name: &str) -> EngineResult<()> {
    require_finite(value, field_name)?;
    if value < 0.0 {
        return Err(EngineError::Validation(format!(
            "{} must be non-negative, got {}",
            field_name, value
        )));
    }
    if value > MAX_AMOUNT {
        return Err(EngineError::Validation(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field_name, MAX_AMOUNT, value
        )));
    }
    Ok(())
}

/// Validate a ClientPaymentConfig before any calculation
///
/// This is the single boundary check: the pure calculators downstream may
/// assume well-formed input. Incomplete configuration (no price yet, no
/// installment count) is a normal editing state and passes validation.
pub fn validate_config(config: &ClientPaymentConfig) -> EngineResult<()> {
    require_amount(config.travel_price, "travel_price")?;
    for (i, companion) in config.companions.iter().enumerate() {
        require_amount(*companion, &format!("companions[{}]", i))?;
    }

    if let Some(value) = config.discount_value {
        require_finite(value, "discount_value")?;
        if value < 0.0 {
            return Err(EngineError::Validation(format!(
                "discount_value must be non-negative, got {}",
                value
            )));
        }
        if config.discount_unit == DiscountUnit::Percentage && value > 100.0 {
            return Err(EngineError::Validation(format!(
                "discount_value must be between 0 and 100 percent, got {}",
                value
            )));
        }
    }

    if let Some(max) = config.approved_max_percent {
        require_finite(max, "approved_max_percent")?;
        if !(0.0..=100.0).contains(&max) {
            return Err(EngineError::Validation(format!(
                "approved_max_percent must be between 0 and 100, got {}",
                max
            )));
        }
    }

    require_amount(config.down_payment_amount, "down_payment_amount")?;
    if config.down_payment_method == PaymentMethod::PriorTripCredit
        && config.used_credit_id.is_none()
    {
        return Err(EngineError::Validation(
            "used_credit_id is required when the entrada is funded from a prior-trip credit"
                .to_string(),
        ));
    }

    if config.installments_count > MAX_INSTALLMENTS {
        return Err(EngineError::Validation(format!(
            "installments_count exceeds maximum allowed ({}), got {}",
            MAX_INSTALLMENTS, config.installments_count
        )));
    }

    Ok(())
}

/// Validate a ReceiptRecord before reconciliation
pub fn validate_receipt(receipt: &ReceiptRecord) -> EngineResult<()> {
    require_finite(receipt.amount, "receipt amount")?;
    if receipt.amount <= 0.0 {
        return Err(EngineError::Validation(format!(
            "receipt amount must be positive, got {}",
            receipt.amount
        )));
    }
    if receipt.amount > MAX_AMOUNT {
        return Err(EngineError::Validation(format!(
            "receipt amount exceeds maximum allowed ({}), got {}",
            MAX_AMOUNT, receipt.amount
        )));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated via `require_finite()` at the
/// boundary. If NaN/Infinity somehow reaches here, logs an error and
/// returns ZERO to avoid silent data corruption in financial calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round2(value)
        .to_f64()
        // SAFETY: Decimal rounded to 2dp with max input ≤ 1_000_000 (validated at boundary)
        // is always within f64 representable range (~1.8e308)
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Round to 2 decimal places, half-up
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum receipt amounts with precise arithmetic, skipping cancelled receipts
pub fn sum_receipts(receipts: &[ReceiptRecord]) -> Decimal {
    receipts
        .iter()
        .filter(|r| !r.cancelled)
        .map(|r| to_decimal(r.amount))
        .sum()
}

/// Check if payment is sufficient (with small tolerance for edge cases)
///
/// Returns true if paid >= required - 0.01
pub fn is_payment_sufficient(paid: f64, required: f64) -> bool {
    let paid_dec = to_decimal(paid);
    let required_dec = to_decimal(required);
    paid_dec >= required_dec - MONEY_TOLERANCE
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}
