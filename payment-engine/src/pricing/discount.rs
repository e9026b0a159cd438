//! Discount resolution
//!
//! Converts the discount selector plus its approval gate into a single
//! amount applied to the gross price. A custom discount is inert until
//! approved; pending/rejected states resolve to zero.

use rust_decimal::prelude::*;
use shared::error::ConfigurationWarning;
use shared::models::{ApprovalStatus, DiscountKind, DiscountSpec, DiscountUnit};

use crate::money::{round2, to_decimal, to_f64};

/// Tier percentages offered without approval
const TIER_3_PERCENT: f64 = 3.0;
const TIER_5_PERCENT: f64 = 5.0;

/// Live approval state for custom discounts
///
/// The approval workflow runs outside the engine (real-time notification to
/// a manager); this capability lets the resolver query current state instead
/// of trusting a possibly stale stored snapshot. The engine holds no
/// subscription state.
pub trait ApprovalStatusProvider {
    fn approval_status(&self, spec: &DiscountSpec) -> ApprovalStatus;
}

/// Default provider: the status recorded on the spec itself
pub struct StoredApproval;

impl ApprovalStatusProvider for StoredApproval {
    fn approval_status(&self, spec: &DiscountSpec) -> ApprovalStatus {
        spec.approval
    }
}

/// Resolved discount amount with any non-fatal configuration warning
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscountResolution {
    pub amount: f64,
    pub warning: Option<ConfigurationWarning>,
}

/// Resolve the discount using the approval status stored on the spec
pub fn resolve_discount(gross: f64, spec: &DiscountSpec) -> DiscountResolution {
    resolve_discount_with(gross, spec, &StoredApproval)
}

/// Resolve the discount, querying `provider` for the live approval status
///
/// Guarantees: the resolved amount is never negative and never exceeds
/// `gross`.
pub fn resolve_discount_with(
    gross: f64,
    spec: &DiscountSpec,
    provider: &dyn ApprovalStatusProvider,
) -> DiscountResolution {
    let gross_dec = to_decimal(gross);
    let mut warning = None;

    let amount = match spec.kind {
        DiscountKind::None => Decimal::ZERO,
        DiscountKind::Tier3Pct => percent_of(gross_dec, to_decimal(TIER_3_PERCENT)),
        DiscountKind::Tier5Pct => percent_of(gross_dec, to_decimal(TIER_5_PERCENT)),
        DiscountKind::Custom => {
            if provider.approval_status(spec) != ApprovalStatus::Approved {
                Decimal::ZERO
            } else {
                match spec.custom_value {
                    None => {
                        tracing::warn!(
                            "Custom discount selected without a value, resolving to zero"
                        );
                        warning = Some(ConfigurationWarning::MissingCustomDiscountValue);
                        Decimal::ZERO
                    }
                    Some(value) => match spec.custom_unit {
                        DiscountUnit::Percentage => {
                            let mut percent = to_decimal(value);
                            if let Some(max) = spec.approved_max_percent {
                                percent = percent.min(to_decimal(max));
                            }
                            percent_of(gross_dec, percent)
                        }
                        // Approved fixed amounts are not capped by the percent limit
                        DiscountUnit::Fixed => to_decimal(value),
                    },
                }
            }
        }
    };

    let clamped = amount.max(Decimal::ZERO).min(gross_dec.max(Decimal::ZERO));
    DiscountResolution {
        amount: to_f64(clamped),
        warning,
    }
}

fn percent_of(base: Decimal, percent: Decimal) -> Decimal {
    round2(base * percent / Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_spec(kind: DiscountKind) -> DiscountSpec {
        DiscountSpec {
            kind,
            ..Default::default()
        }
    }

    fn make_custom(value: f64, unit: DiscountUnit, approval: ApprovalStatus) -> DiscountSpec {
        DiscountSpec {
            kind: DiscountKind::Custom,
            custom_value: Some(value),
            custom_unit: unit,
            approval,
            approved_max_percent: None,
        }
    }

    #[test]
    fn test_no_discount() {
        let resolution = resolve_discount(2500.0, &make_spec(DiscountKind::None));
        assert_eq!(resolution.amount, 0.0);
        assert!(resolution.warning.is_none());
    }

    #[test]
    fn test_tier_percentages() {
        assert_eq!(
            resolve_discount(2500.0, &make_spec(DiscountKind::Tier3Pct)).amount,
            75.0
        );
        assert_eq!(
            resolve_discount(2500.0, &make_spec(DiscountKind::Tier5Pct)).amount,
            125.0
        );
    }

    #[test]
    fn test_custom_pending_is_inert() {
        let spec = make_custom(10.0, DiscountUnit::Percentage, ApprovalStatus::Pending);
        assert_eq!(resolve_discount(1000.0, &spec).amount, 0.0);
    }

    #[test]
    fn test_custom_rejected_is_inert() {
        let spec = make_custom(50.0, DiscountUnit::Fixed, ApprovalStatus::Rejected);
        assert_eq!(resolve_discount(1000.0, &spec).amount, 0.0);
    }

    #[test]
    fn test_custom_approved_percentage() {
        let spec = make_custom(10.0, DiscountUnit::Percentage, ApprovalStatus::Approved);
        assert_eq!(resolve_discount(1000.0, &spec).amount, 100.0);
    }

    #[test]
    fn test_custom_percentage_capped_at_approved_max() {
        let mut spec = make_custom(15.0, DiscountUnit::Percentage, ApprovalStatus::Approved);
        spec.approved_max_percent = Some(10.0);
        assert_eq!(resolve_discount(1000.0, &spec).amount, 100.0);
    }

    #[test]
    fn test_custom_fixed_not_capped_by_percent_limit() {
        let mut spec = make_custom(300.0, DiscountUnit::Fixed, ApprovalStatus::Approved);
        spec.approved_max_percent = Some(10.0);
        assert_eq!(resolve_discount(1000.0, &spec).amount, 300.0);
    }

    #[test]
    fn test_custom_without_value_warns_and_resolves_to_zero() {
        let spec = DiscountSpec {
            kind: DiscountKind::Custom,
            custom_value: None,
            approval: ApprovalStatus::Approved,
            ..Default::default()
        };

        let resolution = resolve_discount(1000.0, &spec);
        assert_eq!(resolution.amount, 0.0);
        assert_eq!(
            resolution.warning,
            Some(ConfigurationWarning::MissingCustomDiscountValue)
        );
    }

    #[test]
    fn test_discount_never_exceeds_gross() {
        let spec = make_custom(500.0, DiscountUnit::Fixed, ApprovalStatus::Approved);
        assert_eq!(resolve_discount(200.0, &spec).amount, 200.0);
    }

    #[test]
    fn test_live_provider_overrides_stored_status() {
        struct AlwaysApproved;
        impl ApprovalStatusProvider for AlwaysApproved {
            fn approval_status(&self, _spec: &DiscountSpec) -> ApprovalStatus {
                ApprovalStatus::Approved
            }
        }

        let spec = make_custom(10.0, DiscountUnit::Percentage, ApprovalStatus::Pending);
        let resolution = resolve_discount_with(1000.0, &spec, &AlwaysApproved);
        assert_eq!(resolution.amount, 100.0);
    }

    // ========== Precision tests ==========

    #[test]
    fn test_precision_tier_on_odd_gross() {
        // 3% of R$1234.56 = R$37.0368 → R$37.04
        let resolution = resolve_discount(1234.56, &make_spec(DiscountKind::Tier3Pct));
        assert_eq!(resolution.amount, 37.04);
    }
}
