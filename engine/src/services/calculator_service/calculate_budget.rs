// Handler for the CalculateBudget RPC
use std::sync::Arc;
use tonic::{Response, Status};

use super::helpers::{echo_map, error_fields, evaluate, raw_inputs, unexpected_outcome, Evaluation};
use crate::calculators::CalculationOutcome;
use crate::config::EngineSettings;
use crate::services::{BudgetResponse, CalculatorRequest};
use shared::models::{BudgetOutcome, CalculatorVariant};

pub async fn handle_calculate_budget(
    req_payload: CalculatorRequest,
    settings: Arc<EngineSettings>,
) -> Result<Response<BudgetResponse>, Status> {
    let variant = CalculatorVariant::Budget;
    let raw = raw_inputs(req_payload.fields);
    let durations = settings.durations_for(req_payload.reduced_horizon);

    let response = match evaluate(&raw, variant, durations) {
        Evaluation::Rejected(rejection) => BudgetResponse {
            success: false,
            message: rejection.error.to_string(),
            error_fields: error_fields(&rejection.error),
            echo: echo_map(&rejection.echo),
            ..Default::default()
        },
        Evaluation::Failed { error, echo } => BudgetResponse {
            success: false,
            message: error.user_message(),
            echo: echo_map(&echo),
            ..Default::default()
        },
        Evaluation::Computed { outcome: CalculationOutcome::Budget(result), echo } => {
            let (deficit, amount, message) = match result.outcome {
                BudgetOutcome::Surplus(money) => (false, money, format!("You save {} per month", money)),
                BudgetOutcome::Deficit(money) => (true, money, format!("You overspend {} per month", money)),
            };
            BudgetResponse {
                success: true,
                message,
                error_fields: Vec::new(),
                echo: echo_map(&echo),
                salary: result.salary.amount(),
                total_expenses: result.total_expenses.amount(),
                deficit,
                amount: amount.amount(),
                amount_display: amount.formatted(),
            }
        }
        Evaluation::Computed { outcome, .. } => return Err(unexpected_outcome(variant, &outcome)),
    };
    Ok(Response::new(response))
}
