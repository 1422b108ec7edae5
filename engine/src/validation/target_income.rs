// Target-income calculator: desired monthly income -> required monthly investment.
use super::{finish, optional_amount, positive_amount, rate, Rejection, DEFAULT_SAFE_WITHDRAWAL_RATE};
use crate::error::ValidationError;
use crate::models::{InverseParameters, Validated};
use shared::models::{CalculatorVariant, Field, RawInputSet};

pub fn validate_target_income(raw: &RawInputSet) -> Result<Validated<InverseParameters>, Rejection> {
    finish(raw, CalculatorVariant::TargetIncome, check(raw))
}

fn check(raw: &RawInputSet) -> Result<InverseParameters, ValidationError> {
    let annual_rate = rate(raw, Field::AnnualRate, None)?;
    let target_income = positive_amount(raw, Field::TargetIncome, ValidationError::InvalidTarget)?;
    let safe_withdrawal_rate = rate(raw, Field::SafeWithdrawalRate, Some(DEFAULT_SAFE_WITHDRAWAL_RATE))?;
    let initial_investment = optional_amount(raw, Field::InitialInvestment)?;

    Ok(InverseParameters::new(target_income, initial_investment, annual_rate, safe_withdrawal_rate))
}
