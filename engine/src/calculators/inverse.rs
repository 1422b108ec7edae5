// Monthly contribution needed to reach a target passive income.
use super::{annuity_factor, ensure_finite, growth_factor, monthly_rate};
use crate::config::Durations;
use crate::error::EngineError;
use crate::models::InverseParameters;
use shared::models::{Money, ProjectionResult, RequiredContribution, RequiredContributionRow};

/// Balance that yields `target_income` per month at `safe_withdrawal_rate` percent a year.
pub fn required_balance(target_income: f64, safe_withdrawal_rate: f64) -> f64 {
    target_income * 1200.0 / safe_withdrawal_rate
}

/// PMT = (R - PV*(1+r)^n) / (((1+r)^n - 1)/r), per duration.
/// A negative PMT means the initial investment alone reaches R.
pub fn compute_required_contribution(
    params: &InverseParameters,
    durations: &Durations,
) -> Result<ProjectionResult<RequiredContributionRow>, EngineError> {
    let rate = monthly_rate(params.annual_rate())?;
    let target_balance = required_balance(params.target_income(), params.safe_withdrawal_rate());

    let rows = durations
        .iter()
        .map(|years| -> Result<RequiredContributionRow, EngineError> {
            let growth = growth_factor(rate, years);
            let compounded_initial = params.initial_investment() * growth;
            let factor = annuity_factor(rate, growth)?;
            let payment = ensure_finite((target_balance - compounded_initial) / factor, "required contribution", years)?;

            let required_investment = if payment < 0.0 {
                RequiredContribution::AlreadyMet
            } else {
                RequiredContribution::Contribution(Money::new(payment))
            };
            Ok(RequiredContributionRow { years, required_investment })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(rows = rows.len(), target_balance, "Computed required contributions");
    Ok(ProjectionResult { rows })
}
