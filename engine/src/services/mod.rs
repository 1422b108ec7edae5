// gRPC delivery layer for the calculators.
pub mod calculator_service;

pub mod generated {
    tonic::include_proto!("calculator");
}

pub use calculator_service::MyFinanceCalculator;
pub use generated::finance_calculator_server::{FinanceCalculator, FinanceCalculatorServer};
pub use generated::{
    BudgetResponse, CalculatorRequest, FutureValueResponse, FutureValueRow as ProtoFutureValueRow,
    RequiredContributionResponse, RequiredContributionRow as ProtoRequiredContributionRow,
};
