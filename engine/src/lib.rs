// Engine library root: validation, calculators and the gRPC service around them.

pub mod calculators;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod validation;

pub use calculators::{
    calculate, compute_budget, compute_forward_projection, compute_required_contribution, CalculationOutcome,
};
pub use error::{EngineError, ValidationError};
pub use validation::{validate, Rejection};
