// engine/src/services/calculator_service/mod.rs
// The FinanceCalculator gRPC service: one handler module per RPC.
use super::{
    BudgetResponse, CalculatorRequest, FinanceCalculator, FutureValueResponse, RequiredContributionResponse,
};
use crate::config::EngineSettings;
use std::sync::Arc;
use tonic::{Request, Response, Status};

pub mod calculate_budget;
pub mod helpers;
pub mod project_future_value;
pub mod required_contribution;

pub struct MyFinanceCalculator {
    settings: Arc<EngineSettings>,
}

impl MyFinanceCalculator {
    pub fn new(settings: Arc<EngineSettings>) -> Self {
        MyFinanceCalculator { settings }
    }
}

#[tonic::async_trait]
impl FinanceCalculator for MyFinanceCalculator {
    async fn project_future_value(
        &self,
        request: Request<CalculatorRequest>,
    ) -> Result<Response<FutureValueResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            fields = req_payload.fields.len(),
            reduced_horizon = req_payload.reduced_horizon,
            "Received ProjectFutureValue request, dispatching to handler."
        );
        project_future_value::handle_project_future_value(req_payload, self.settings.clone()).await
    }

    async fn required_contribution(
        &self,
        request: Request<CalculatorRequest>,
    ) -> Result<Response<RequiredContributionResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(
            fields = req_payload.fields.len(),
            reduced_horizon = req_payload.reduced_horizon,
            "Received RequiredContribution request, dispatching to handler."
        );
        required_contribution::handle_required_contribution(req_payload, self.settings.clone()).await
    }

    async fn calculate_budget(&self, request: Request<CalculatorRequest>) -> Result<Response<BudgetResponse>, Status> {
        let req_payload = request.into_inner();
        tracing::info!(fields = req_payload.fields.len(), "Received CalculateBudget request, dispatching to handler.");
        calculate_budget::handle_calculate_budget(req_payload, self.settings.clone()).await
    }
}
