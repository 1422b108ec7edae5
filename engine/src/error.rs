use shared::models::Field;
use thiserror::Error;

/// Rejected form input. The Display text is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid {} greater than 0.", .field.label())]
    InvalidRate { field: Field },

    #[error("Please enter a valid Target Future Monthly Retirement Passive Income greater than 0.")]
    InvalidTarget,

    #[error("Please provide a value for either Monthly Savings or Initial Investment.")]
    NoContribution,

    #[error("Please enter a valid Salary greater than 0.")]
    InvalidSalary,

    // A non-mandatory amount that is present but not a number.
    #[error("Please enter a valid number for {}.", .field.label())]
    InvalidAmount { field: Field },
}

impl ValidationError {
    /// The field(s) at fault.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            ValidationError::InvalidRate { field } | ValidationError::InvalidAmount { field } => vec![*field],
            ValidationError::InvalidTarget => vec![Field::TargetIncome],
            ValidationError::NoContribution => vec![Field::MonthlySavings, Field::InitialInvestment],
            ValidationError::InvalidSalary => vec![Field::Salary],
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Configuration parse error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Division by zero while computing the {quantity}")]
    DivisionByZero { quantity: &'static str },

    #[error("Calculation produced a non-finite {quantity} at {years} years")]
    NonFiniteResult { quantity: &'static str, years: u32 },
}

impl EngineError {
    /// Message for the person filling in the form. Calculation failures do not
    /// blame a field; they ask the user to try again.
    pub fn user_message(&self) -> String {
        match self {
            EngineError::DivisionByZero { .. } => {
                "An error occurred during calculation (division by zero).".to_string()
            }
            EngineError::NonFiniteResult { .. } => "An error occurred during calculation.".to_string(),
            other => other.to_string(),
        }
    }
}
