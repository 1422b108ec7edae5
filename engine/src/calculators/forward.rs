// Future value of a lump sum plus level monthly savings, and the passive income it supports.
use super::{annuity_factor, ensure_finite, growth_factor, monthly_rate};
use crate::config::Durations;
use crate::error::EngineError;
use crate::models::ForwardParameters;
use shared::models::{FutureValueRow, Money, ProjectionResult};

/// FV = PV*(1+r)^n + PMT*((1+r)^n - 1)/r, and income = FV * (SWR/100/12), per duration.
pub fn compute_forward_projection(
    params: &ForwardParameters,
    durations: &Durations,
) -> Result<ProjectionResult<FutureValueRow>, EngineError> {
    let rate = monthly_rate(params.annual_rate())?;
    let income_share = (params.safe_withdrawal_rate() / 100.0) / 12.0;

    let rows = durations
        .iter()
        .map(|years| -> Result<FutureValueRow, EngineError> {
            let growth = growth_factor(rate, years);
            let future_value = params.initial_investment() * growth
                + params.monthly_savings() * annuity_factor(rate, growth)?;
            let future_value = ensure_finite(future_value, "future value", years)?;
            let monthly_income = ensure_finite(future_value * income_share, "monthly income", years)?;

            Ok(FutureValueRow {
                years,
                future_value: Money::new(future_value),
                monthly_income: Money::new(monthly_income),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(rows = rows.len(), monthly_rate = rate, "Computed forward projection");
    Ok(ProjectionResult { rows })
}
