//! Gross price composition
//!
//! Sums base and companion prices. On a brinde booking the base price is
//! reported separately as a zero-revenue line while companions still bill.

use rust_decimal::prelude::*;
use shared::error::EngineResult;
use shared::models::TravelPrice;

use crate::money::{require_amount, to_decimal, to_f64};

/// Composed gross price for one contract
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrossPrice {
    /// Billable total: companions always, base unless the booking is a gift
    pub billable: f64,
    /// Waived base price on gift bookings, zero otherwise
    pub gift_value: f64,
}

/// Compute the gross travel price
///
/// A missing base price deserializes as zero and is accepted (the contract
/// is still being edited); negative prices are rejected.
pub fn compute_gross_price(price: &TravelPrice) -> EngineResult<GrossPrice> {
    require_amount(price.base_price, "base_price")?;
    for (i, companion) in price.companions.iter().enumerate() {
        require_amount(*companion, &format!("companions[{}]", i))?;
    }

    let base = to_decimal(price.base_price);
    let companions: Decimal = price.companions.iter().map(|c| to_decimal(*c)).sum();

    let (billable, gift_value) = if price.is_gift {
        (companions, base)
    } else {
        (base + companions, Decimal::ZERO)
    };

    Ok(GrossPrice {
        billable: to_f64(billable),
        gift_value: to_f64(gift_value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::EngineError;

    #[test]
    fn test_base_plus_companions() {
        let price = TravelPrice {
            base_price: 1200.0,
            companions: vec![800.0, 500.0],
            is_gift: false,
        };

        let gross = compute_gross_price(&price).unwrap();
        assert_eq!(gross.billable, 2500.0);
        assert_eq!(gross.gift_value, 0.0);
    }

    #[test]
    fn test_gift_waives_base_but_bills_companions() {
        let price = TravelPrice {
            base_price: 1200.0,
            companions: vec![800.0, 500.0],
            is_gift: true,
        };

        let gross = compute_gross_price(&price).unwrap();
        assert_eq!(gross.billable, 1300.0);
        assert_eq!(gross.gift_value, 1200.0);
    }

    #[test]
    fn test_missing_base_price_treated_as_zero() {
        let price = TravelPrice {
            companions: vec![450.50],
            ..Default::default()
        };

        let gross = compute_gross_price(&price).unwrap();
        assert_eq!(gross.billable, 450.50);
    }

    #[test]
    fn test_negative_price_rejected() {
        let price = TravelPrice {
            base_price: -100.0,
            ..Default::default()
        };

        assert!(matches!(
            compute_gross_price(&price),
            Err(EngineError::Validation(_))
        ));
    }

    #[test]
    fn test_precision_on_companion_sum() {
        // Three companions at a price that breaks f64 addition
        let price = TravelPrice {
            base_price: 0.0,
            companions: vec![0.1, 0.2, 0.3],
            is_gift: false,
        };

        let gross = compute_gross_price(&price).unwrap();
        assert_eq!(gross.billable, 0.6);
    }
}
