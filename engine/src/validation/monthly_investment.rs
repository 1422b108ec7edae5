// Monthly-investment calculator: savings + lump sum -> future value and income.
use super::{finish, optional_amount, rate, Rejection, DEFAULT_SAFE_WITHDRAWAL_RATE};
use crate::error::ValidationError;
use crate::models::{ForwardParameters, Validated};
use shared::models::{CalculatorVariant, Field, RawInputSet};

pub fn validate_monthly_investment(raw: &RawInputSet) -> Result<Validated<ForwardParameters>, Rejection> {
    finish(raw, CalculatorVariant::MonthlyInvestment, check(raw))
}

fn check(raw: &RawInputSet) -> Result<ForwardParameters, ValidationError> {
    let annual_rate = rate(raw, Field::AnnualRate, None)?;
    let safe_withdrawal_rate = rate(raw, Field::SafeWithdrawalRate, Some(DEFAULT_SAFE_WITHDRAWAL_RATE))?;
    let monthly_savings = optional_amount(raw, Field::MonthlySavings)?;
    let initial_investment = optional_amount(raw, Field::InitialInvestment)?;

    if monthly_savings <= 0.0 && initial_investment <= 0.0 {
        return Err(ValidationError::NoContribution);
    }

    Ok(ForwardParameters::new(monthly_savings, initial_investment, annual_rate, safe_withdrawal_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(monthly: &str, initial: &str, rate: &str, swr: &str) -> RawInputSet {
        RawInputSet::new()
            .with("monthly_savings", monthly)
            .with("initial_investment", initial)
            .with("annual_rate", rate)
            .with("safe_withdrawal_rate", swr)
    }

    #[test]
    fn test_accepts_default_form() {
        let validated = validate_monthly_investment(&form("3.000,00", "10.000,00", "6,00", "4,00")).unwrap();
        let p = validated.parameters;
        assert_eq!(p.monthly_savings(), 3000.0);
        assert_eq!(p.initial_investment(), 10000.0);
        assert_eq!(p.annual_rate(), 6.0);
        assert_eq!(p.safe_withdrawal_rate(), 4.0);
        assert_eq!(validated.echo.get(Field::MonthlySavings), "3.000,00");
    }

    #[test]
    fn test_blank_safe_withdrawal_rate_defaults_to_four() {
        let validated = validate_monthly_investment(&form("100", "", "5", "")).unwrap();
        assert_eq!(validated.parameters.safe_withdrawal_rate(), 4.0);
        assert_eq!(validated.parameters.initial_investment(), 0.0);
        assert_eq!(validated.echo.get(Field::InitialInvestment), "10.000,00");
    }

    #[test]
    fn test_missing_fields_read_as_blank() {
        let raw = RawInputSet::new().with("annual_rate", "6").with("initial_investment", "1.000");
        let validated = validate_monthly_investment(&raw).unwrap();
        assert_eq!(validated.parameters.monthly_savings(), 0.0);
        assert_eq!(validated.parameters.initial_investment(), 1000.0);
    }

    #[test]
    fn test_blank_annual_rate_is_invalid() {
        let err = validate_monthly_investment(&form("100", "100", "", "4")).unwrap_err();
        assert_eq!(err.error, ValidationError::InvalidRate { field: Field::AnnualRate });
        assert_eq!(err.echo.get(Field::AnnualRate), "6,00");
    }

    #[test]
    fn test_safe_withdrawal_rate_must_be_positive() {
        for swr in ["0", "-4", "four"] {
            let err = validate_monthly_investment(&form("100", "100", "6", swr)).unwrap_err();
            assert_eq!(err.error, ValidationError::InvalidRate { field: Field::SafeWithdrawalRate });
        }
    }

    #[test]
    fn test_needs_some_contribution() {
        for (monthly, initial) in [("", ""), ("0", "0,00"), ("-100", "0")] {
            let err = validate_monthly_investment(&form(monthly, initial, "6", "4")).unwrap_err();
            assert_eq!(err.error, ValidationError::NoContribution);
        }
    }

    #[test]
    fn test_one_positive_contribution_is_enough() {
        assert!(validate_monthly_investment(&form("0", "5.000", "6", "4")).is_ok());
        assert!(validate_monthly_investment(&form("250", "0", "6", "4")).is_ok());
    }

    #[test]
    fn test_unparseable_contribution_is_invalid_amount() {
        let err = validate_monthly_investment(&form("lots", "10.000", "6", "4")).unwrap_err();
        assert_eq!(err.error, ValidationError::InvalidAmount { field: Field::MonthlySavings });
        assert_eq!(err.echo.get(Field::MonthlySavings), "lots");
    }

    #[test]
    fn test_rate_errors_take_priority() {
        let err = validate_monthly_investment(&form("", "", "6", "0")).unwrap_err();
        assert_eq!(err.error, ValidationError::InvalidRate { field: Field::SafeWithdrawalRate });
    }
}
