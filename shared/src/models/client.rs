//! Client Payment Configuration Model
//!
//! The boundary value object assembled by the intake forms. Validated once
//! by the engine; the pure calculators then work from well-formed input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::discount::{ApprovalStatus, DiscountKind, DiscountSpec, DiscountUnit};
use super::payment::{DownPayment, PaymentMethod};

/// Price lines for one contract
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TravelPrice {
    /// Base traveler price; zero while the contract is still being edited
    #[serde(default)]
    pub base_price: f64,
    /// One price per companion
    #[serde(default)]
    pub companions: Vec<f64>,
    /// Brinde: the base price is waived, companions still bill
    #[serde(default)]
    pub is_gift: bool,
}

/// Full payment configuration for one client contract
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ClientPaymentConfig {
    #[serde(default)]
    pub travel_price: f64,
    #[serde(default)]
    pub companions: Vec<f64>,
    #[serde(default)]
    pub is_gift: bool,

    #[serde(default)]
    pub discount_type: DiscountKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<f64>,
    #[serde(default)]
    pub discount_unit: DiscountUnit,
    #[serde(default)]
    pub discount_approval_status: ApprovalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_max_percent: Option<f64>,

    #[serde(default)]
    pub down_payment_amount: f64,
    #[serde(default)]
    pub down_payment_method: PaymentMethod,
    /// Credit redeemed as the entrada, when the method is `PRIOR_TRIP_CREDIT`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_credit_id: Option<String>,

    /// Number of parcelas after the entrada; zero = not yet defined
    #[serde(default)]
    pub installments_count: u32,
    /// Due date of the first parcela; later ones step monthly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_due_date: Option<NaiveDate>,
}

impl ClientPaymentConfig {
    pub fn to_travel_price(&self) -> TravelPrice {
        TravelPrice {
            base_price: self.travel_price,
            companions: self.companions.clone(),
            is_gift: self.is_gift,
        }
    }

    pub fn to_discount_spec(&self) -> DiscountSpec {
        DiscountSpec {
            kind: self.discount_type,
            custom_value: self.discount_value,
            custom_unit: self.discount_unit,
            approval: self.discount_approval_status,
            approved_max_percent: self.approved_max_percent,
        }
    }

    pub fn to_down_payment(&self) -> DownPayment {
        DownPayment {
            amount: self.down_payment_amount,
            method: self.down_payment_method,
            credit_ref: self.used_credit_id.clone(),
        }
    }
}
