use rust_decimal::Decimal;
use serde::Serialize;

use crate::features::signup::models::{Plan, SignupSubmission};
use crate::shared::constants::{
    additional_tv_monthly_fee, additional_tv_one_time_fee, connection_fee,
};

/// One-time amount due when the signup is placed: the connection fee plus
/// the one-time fee per additional TV. Unconditional on the selected plan;
/// the plan's own monthly price is displayed separately and never added
/// here.
pub fn connection_total(additional_tv_count: u8) -> Decimal {
    connection_fee() + additional_tv_one_time(additional_tv_count)
}

/// One-time subtotal for the additional TVs alone.
pub fn additional_tv_one_time(additional_tv_count: u8) -> Decimal {
    Decimal::from(additional_tv_count) * additional_tv_one_time_fee()
}

/// Recurring monthly surcharge for the additional TVs. Display-only: shown
/// in option labels, never part of any computed total.
pub fn additional_tv_monthly(additional_tv_count: u8) -> Decimal {
    Decimal::from(additional_tv_count) * additional_tv_monthly_fee()
}

/// The request summary box: present once a plan has been selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceSummary {
    pub plan: Plan,
    /// Recurring plan price, displayed alongside the one-time charges.
    pub plan_monthly_price: Decimal,
    pub connection_fee: Decimal,
    pub additional_tv_count: u8,
    pub additional_tv_one_time: Decimal,
    /// Display-only monthly surcharge for the additional TVs.
    pub additional_tv_monthly: Decimal,
    /// Total due now: connection fee + one-time TV fees.
    pub total_due: Decimal,
}

impl PriceSummary {
    pub fn for_submission(submission: &SignupSubmission) -> Option<Self> {
        submission.plan.map(|plan| Self {
            plan,
            plan_monthly_price: plan.monthly_price(),
            connection_fee: connection_fee(),
            additional_tv_count: submission.additional_tv_count,
            additional_tv_one_time: additional_tv_one_time(submission.additional_tv_count),
            additional_tv_monthly: additional_tv_monthly(submission.additional_tv_count),
            total_due: connection_total(submission.additional_tv_count),
        })
    }
}
