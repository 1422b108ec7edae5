// Closed-form retirement and budget calculators.
pub mod budget;
pub mod forward;
pub mod inverse;

pub use budget::compute_budget;
pub use forward::compute_forward_projection;
pub use inverse::compute_required_contribution;

use crate::config::Durations;
use crate::error::EngineError;
use crate::models::ValidatedParameters;
use shared::models::{BudgetResult, FutureValueRow, ProjectionResult, RequiredContributionRow};

#[derive(Debug, Clone, PartialEq)]
pub enum CalculationOutcome {
    Projection(ProjectionResult<FutureValueRow>),
    RequiredContribution(ProjectionResult<RequiredContributionRow>),
    Budget(BudgetResult),
}

/// Runs the calculator matching the validated input.
pub fn calculate(params: &ValidatedParameters, durations: &Durations) -> Result<CalculationOutcome, EngineError> {
    match params {
        ValidatedParameters::Forward(p) => compute_forward_projection(p, durations).map(CalculationOutcome::Projection),
        ValidatedParameters::Inverse(p) => {
            compute_required_contribution(p, durations).map(CalculationOutcome::RequiredContribution)
        }
        ValidatedParameters::Budget(p) => Ok(CalculationOutcome::Budget(compute_budget(p))),
    }
}

/// Effective monthly rate equivalent to `annual_rate` percent compounded monthly:
/// (1 + annual_rate/100)^(1/12) - 1.
pub fn monthly_rate(annual_rate: f64) -> Result<f64, EngineError> {
    let rate = (1.0 + annual_rate / 100.0).powf(1.0 / 12.0) - 1.0;
    if rate == 0.0 {
        tracing::error!(annual_rate, "Monthly rate underflowed to zero");
        return Err(EngineError::DivisionByZero { quantity: "monthly rate" });
    }
    Ok(rate)
}

/// (1 + r)^n for `years` worth of monthly periods.
pub(crate) fn growth_factor(monthly_rate: f64, years: u32) -> f64 {
    let months = f64::from(years) * 12.0;
    (1.0 + monthly_rate).powf(months)
}

/// ((1 + r)^n - 1) / r, given the growth factor (1 + r)^n.
pub(crate) fn annuity_factor(monthly_rate: f64, growth: f64) -> Result<f64, EngineError> {
    if monthly_rate == 0.0 {
        return Err(EngineError::DivisionByZero { quantity: "monthly rate" });
    }
    let factor = (growth - 1.0) / monthly_rate;
    if factor == 0.0 {
        tracing::error!(monthly_rate, growth, "Annuity factor is zero");
        return Err(EngineError::DivisionByZero { quantity: "annuity factor" });
    }
    Ok(factor)
}

pub(crate) fn ensure_finite(value: f64, quantity: &'static str, years: u32) -> Result<f64, EngineError> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::error!(quantity, years, value, "Non-finite calculation result");
        Err(EngineError::NonFiniteResult { quantity, years })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    pub fn assert_rel_eq(actual: f64, expected: f64, tolerance: f64) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance * scale,
            "{} differs from {} by more than {} relative",
            actual,
            expected,
            tolerance
        );
    }
}
