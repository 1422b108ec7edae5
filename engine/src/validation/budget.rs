// Budget calculator: salary minus expense categories.
use super::{finish, positive_amount, Rejection};
use crate::error::ValidationError;
use crate::models::{BudgetParameters, Validated};
use shared::models::{CalculatorVariant, ExpenseCategory, Field, RawInputSet};
use shared::utils::brazilian_format::parse_decimal;
use std::collections::BTreeMap;

pub fn validate_budget(raw: &RawInputSet) -> Result<Validated<BudgetParameters>, Rejection> {
    finish(raw, CalculatorVariant::Budget, check(raw))
}

fn check(raw: &RawInputSet) -> Result<BudgetParameters, ValidationError> {
    let salary = positive_amount(raw, Field::Salary, ValidationError::InvalidSalary)?;

    let mut expenses = BTreeMap::new();
    let mut total = 0.0;
    for category in ExpenseCategory::ALL {
        let field = Field::Expense(category);
        let amount = match parse_decimal(raw.get(field)) {
            Ok(amount) => amount,
            Err(e) => {
                // Expenses are optional; an unreadable one counts as not given.
                tracing::warn!(field = %field, error = %e, "Ignoring unparseable expense");
                0.0
            }
        };
        // The running total and the savings it leaves must stay finite.
        total += amount;
        if !total.is_finite() || !(salary - total).is_finite() {
            return Err(ValidationError::InvalidAmount { field });
        }
        expenses.insert(category, amount);
    }

    Ok(BudgetParameters::new(salary, expenses))
}
