pub mod models;
pub mod utils;

// Data models and the localized number format shared by the engine and its callers.
pub use models::{
    BudgetOutcome, BudgetResult, CalculatorVariant, ExpenseCategory, Field, FutureValueRow, Money,
    ProjectionResult, RawInputSet, RequiredContribution, RequiredContributionRow,
};
pub use utils::brazilian_format::{format_currency, parse_decimal, ParseFailure};
