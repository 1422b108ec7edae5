// Form validation: raw strings in, validated parameters (or a categorized
// error) out, always together with the normalized echo of the submitted values.
pub mod budget;
pub mod monthly_investment;
pub mod target_income;

pub use budget::validate_budget;
pub use monthly_investment::validate_monthly_investment;
pub use target_income::validate_target_income;

use crate::error::ValidationError;
use crate::models::{Validated, ValidatedParameters};
use shared::models::{CalculatorVariant, Field, RawInputSet};
use shared::utils::brazilian_format::parse_decimal;
use thiserror::Error;

/// Safe withdrawal rate (percent) assumed when the field is left blank.
pub const DEFAULT_SAFE_WITHDRAWAL_RATE: f64 = 4.0;

/// Rejected input and the form values to echo back for correction.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{error}")]
pub struct Rejection {
    pub error: ValidationError,
    pub echo: RawInputSet,
}

pub fn validate(raw: &RawInputSet, variant: CalculatorVariant) -> Result<Validated<ValidatedParameters>, Rejection> {
    match variant {
        CalculatorVariant::MonthlyInvestment => {
            validate_monthly_investment(raw).map(|v| v.map(ValidatedParameters::Forward))
        }
        CalculatorVariant::TargetIncome => validate_target_income(raw).map(|v| v.map(ValidatedParameters::Inverse)),
        CalculatorVariant::Budget => validate_budget(raw).map(|v| v.map(ValidatedParameters::Budget)),
    }
}

// Attaches the echo to the outcome of a variant's checks.
fn finish<P>(
    raw: &RawInputSet,
    variant: CalculatorVariant,
    checked: Result<P, ValidationError>,
) -> Result<Validated<P>, Rejection> {
    let echo = raw.normalized(variant);
    match checked {
        Ok(parameters) => Ok(Validated { parameters, echo }),
        Err(error) => {
            tracing::warn!(?variant, fields = ?error.fields(), %error, "Rejected calculator input");
            Err(Rejection { error, echo })
        }
    }
}

// A rate must parse and be strictly positive. Blank uses `default` when the
// field has one and is otherwise invalid.
fn rate(raw: &RawInputSet, field: Field, default: Option<f64>) -> Result<f64, ValidationError> {
    let value = raw.get(field);
    let parsed = match (value.is_empty(), default) {
        (true, Some(default)) => Ok(default),
        (true, None) => return Err(ValidationError::InvalidRate { field }),
        (false, _) => parse_decimal(value),
    };
    match parsed {
        Ok(rate) if rate > 0.0 => Ok(rate),
        _ => Err(ValidationError::InvalidRate { field }),
    }
}

// A mandatory amount: blank parses to 0.0, which fails the check like garbage does.
fn positive_amount(raw: &RawInputSet, field: Field, error: ValidationError) -> Result<f64, ValidationError> {
    match parse_decimal(raw.get(field)) {
        Ok(amount) if amount > 0.0 => Ok(amount),
        _ => Err(error),
    }
}

// An optional amount: blank is 0.0, anything else must be a number.
fn optional_amount(raw: &RawInputSet, field: Field) -> Result<f64, ValidationError> {
    parse_decimal(raw.get(field)).map_err(|_| ValidationError::InvalidAmount { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward_form(monthly: &str, initial: &str, rate: &str, swr: &str) -> RawInputSet {
        RawInputSet::new()
            .with("monthly_savings", monthly)
            .with("initial_investment", initial)
            .with("annual_rate", rate)
            .with("safe_withdrawal_rate", swr)
    }

    #[test]
    fn test_dispatches_on_variant() {
        let raw = forward_form("3.000,00", "10.000,00", "6,00", "4,00");
        let validated = validate(&raw, CalculatorVariant::MonthlyInvestment).unwrap();
        assert_eq!(validated.parameters.variant(), CalculatorVariant::MonthlyInvestment);

        let raw = RawInputSet::new().with("target_income", "7.000,00").with("annual_rate", "6");
        let validated = validate(&raw, CalculatorVariant::TargetIncome).unwrap();
        assert_eq!(validated.parameters.variant(), CalculatorVariant::TargetIncome);

        let raw = RawInputSet::new().with("salary", "5.000");
        let validated = validate(&raw, CalculatorVariant::Budget).unwrap();
        assert_eq!(validated.parameters.variant(), CalculatorVariant::Budget);
    }

    #[test]
    fn test_non_positive_annual_rate_always_rejected() {
        let rates = ["0", "0,00", "-1", "-6,5", "", "abc"];
        let others = [
            ("3.000,00", "10.000,00", "4,00"),
            ("", "", ""),
            ("xyz", "-5", "0"),
        ];
        for rate in rates {
            for (monthly, initial, swr) in others {
                let raw = forward_form(monthly, initial, rate, swr);
                let rejection = validate(&raw, CalculatorVariant::MonthlyInvestment).unwrap_err();
                assert_eq!(rejection.error, ValidationError::InvalidRate { field: Field::AnnualRate });

                for target in ["7.000,00", "", "-1", "seven"] {
                    let raw = raw.clone().with("target_income", target);
                    let rejection = validate(&raw, CalculatorVariant::TargetIncome).unwrap_err();
                    assert_eq!(rejection.error, ValidationError::InvalidRate { field: Field::AnnualRate });
                }
            }
        }
    }

    #[test]
    fn test_rejection_carries_echo() {
        let raw = forward_form("", " 500 ", "0", "");
        let rejection = validate(&raw, CalculatorVariant::MonthlyInvestment).unwrap_err();
        assert_eq!(rejection.echo.get(Field::MonthlySavings), "3.000,00");
        assert_eq!(rejection.echo.get(Field::InitialInvestment), "500");
        assert_eq!(rejection.echo.get(Field::AnnualRate), "0");
        assert_eq!(rejection.echo.get(Field::SafeWithdrawalRate), "4,00");
        assert_eq!(rejection.to_string(), "Please enter a valid Annual Return Rate greater than 0.");
    }

    #[test]
    fn test_rate_helper_defaults_only_when_blank() {
        let raw = RawInputSet::new().with("safe_withdrawal_rate", "");
        assert_eq!(rate(&raw, Field::SafeWithdrawalRate, Some(4.0)), Ok(4.0));
        let raw = RawInputSet::new().with("safe_withdrawal_rate", "nope");
        assert_eq!(
            rate(&raw, Field::SafeWithdrawalRate, Some(4.0)),
            Err(ValidationError::InvalidRate { field: Field::SafeWithdrawalRate })
        );
    }

    #[test]
    fn test_optional_amount_distinguishes_blank_from_garbage() {
        let raw = RawInputSet::new().with("initial_investment", "");
        assert_eq!(optional_amount(&raw, Field::InitialInvestment), Ok(0.0));
        let raw = RawInputSet::new().with("initial_investment", "ten");
        assert_eq!(
            optional_amount(&raw, Field::InitialInvestment),
            Err(ValidationError::InvalidAmount { field: Field::InitialInvestment })
        );
    }
}
