//! Discount Model

use serde::{Deserialize, Serialize};

/// Discount selector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    /// No discount
    #[default]
    None,
    /// Fixed 3% tier
    Tier3Pct,
    /// Fixed 5% tier
    Tier5Pct,
    /// Negotiated value, subject to the approval gate
    Custom,
}

/// Unit of a custom discount value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountUnit {
    #[default]
    Percentage,
    Fixed,
}

/// Approval state of a custom discount
///
/// Mutated by the external approval workflow; consumed read-only here.
/// While `Pending` or `Rejected` the discount resolves to zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    /// No approval requested (tier discounts, small custom discounts)
    #[default]
    None,
    Pending,
    Approved,
    Rejected,
}

/// Negotiated discount for one contract
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DiscountSpec {
    pub kind: DiscountKind,
    /// Value for `Custom` discounts (percent or fixed amount per `custom_unit`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_value: Option<f64>,
    #[serde(default)]
    pub custom_unit: DiscountUnit,
    #[serde(default)]
    pub approval: ApprovalStatus,
    /// Cap for approved percentage discounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_max_percent: Option<f64>,
}
