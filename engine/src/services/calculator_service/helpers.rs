// Shared request flow for the handlers and conversions between domain records and gRPC messages.
use crate::calculators::{calculate, CalculationOutcome};
use crate::config::Durations;
use crate::error::{EngineError, ValidationError};
use crate::services::{ProtoFutureValueRow as GrpcFutureValueRow, ProtoRequiredContributionRow as GrpcContributionRow};
use crate::validation::{validate, Rejection};
use shared::models::{CalculatorVariant, FutureValueRow, RawInputSet, RequiredContribution, RequiredContributionRow};
use std::collections::HashMap;
use tonic::Status;

/// What came of one calculator request. Every arm carries the form values to echo.
#[derive(Debug)]
pub enum Evaluation {
    Rejected(Rejection),
    Failed { error: EngineError, echo: RawInputSet },
    Computed { outcome: CalculationOutcome, echo: RawInputSet },
}

pub fn evaluate(raw: &RawInputSet, variant: CalculatorVariant, durations: &Durations) -> Evaluation {
    let validated = match validate(raw, variant) {
        Ok(v) => v,
        Err(rejection) => return Evaluation::Rejected(rejection),
    };
    match calculate(&validated.parameters, durations) {
        Ok(outcome) => Evaluation::Computed { outcome, echo: validated.echo },
        Err(error) => {
            tracing::error!(?variant, error_detail = %error, "Calculation failed (handler)");
            Evaluation::Failed { error, echo: validated.echo }
        }
    }
}

// The calculators always answer with the outcome matching the validated variant.
pub fn unexpected_outcome(variant: CalculatorVariant, outcome: &CalculationOutcome) -> Status {
    let err_msg = format!("Logic error: {:?} request produced {:?}", variant, outcome);
    tracing::error!("{}", err_msg);
    Status::internal(err_msg)
}

pub fn raw_inputs(fields: HashMap<String, String>) -> RawInputSet {
    fields.into_iter().collect()
}

pub fn echo_map(echo: &RawInputSet) -> HashMap<String, String> {
    echo.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

pub fn error_fields(error: &ValidationError) -> Vec<String> {
    error.fields().iter().map(|f| f.key().to_string()).collect()
}

pub fn to_grpc_future_value_row(row: &FutureValueRow) -> GrpcFutureValueRow {
    GrpcFutureValueRow {
        years: row.years,
        future_value: row.future_value.amount(),
        future_value_display: row.future_value.formatted(),
        monthly_income: row.monthly_income.amount(),
        monthly_income_display: row.monthly_income.formatted(),
    }
}

pub fn to_grpc_contribution_row(row: &RequiredContributionRow) -> GrpcContributionRow {
    let (already_met, amount) = match row.required_investment {
        RequiredContribution::Contribution(money) => (false, money.amount()),
        RequiredContribution::AlreadyMet => (true, 0.0),
    };
    GrpcContributionRow {
        years: row.years,
        already_met,
        required_investment: amount,
        required_investment_display: row.required_investment.to_string(),
    }
}
