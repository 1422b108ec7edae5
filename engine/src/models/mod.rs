// Engine-side models. Result and input records shared with callers live in `shared::models`.
pub mod parameters;

pub use parameters::{
    BudgetParameters, ForwardParameters, InverseParameters, Validated, ValidatedParameters,
};
