// Handler for the RequiredContribution RPC
use std::sync::Arc;
use tonic::{Response, Status};

use super::helpers::{echo_map, error_fields, evaluate, raw_inputs, to_grpc_contribution_row, unexpected_outcome, Evaluation};
use crate::calculators::CalculationOutcome;
use crate::config::EngineSettings;
use crate::services::{CalculatorRequest, RequiredContributionResponse};
use shared::models::CalculatorVariant;

pub async fn handle_required_contribution(
    req_payload: CalculatorRequest,
    settings: Arc<EngineSettings>,
) -> Result<Response<RequiredContributionResponse>, Status> {
    let variant = CalculatorVariant::TargetIncome;
    let raw = raw_inputs(req_payload.fields);
    let durations = settings.durations_for(req_payload.reduced_horizon);

    let response = match evaluate(&raw, variant, durations) {
        Evaluation::Rejected(rejection) => RequiredContributionResponse {
            success: false,
            message: rejection.error.to_string(),
            error_fields: error_fields(&rejection.error),
            echo: echo_map(&rejection.echo),
            rows: Vec::new(),
        },
        Evaluation::Failed { error, echo } => RequiredContributionResponse {
            success: false,
            message: error.user_message(),
            error_fields: Vec::new(),
            echo: echo_map(&echo),
            rows: Vec::new(),
        },
        Evaluation::Computed { outcome: CalculationOutcome::RequiredContribution(result), echo } => {
            RequiredContributionResponse {
                success: true,
                message: format!("Computed required contributions for {} horizons", result.len()),
                error_fields: Vec::new(),
                echo: echo_map(&echo),
                rows: result.iter().map(to_grpc_contribution_row).collect(),
            }
        }
        Evaluation::Computed { outcome, .. } => return Err(unexpected_outcome(variant, &outcome)),
    };
    Ok(Response::new(response))
}
