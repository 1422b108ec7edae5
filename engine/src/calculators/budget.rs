// Salary minus expenses.
use crate::models::BudgetParameters;
use shared::models::{BudgetOutcome, BudgetResult, Money};

pub fn compute_budget(params: &BudgetParameters) -> BudgetResult {
    let total_expenses = params.total_expenses();
    let savings = params.salary() - total_expenses;
    let outcome = if savings < 0.0 {
        BudgetOutcome::Deficit(Money::new(-savings))
    } else {
        BudgetOutcome::Surplus(Money::new(savings))
    };
    tracing::debug!(salary = params.salary(), total_expenses, savings, "Computed budget");

    BudgetResult {
        salary: Money::new(params.salary()),
        total_expenses: Money::new(total_expenses),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ExpenseCategory;
    use std::collections::BTreeMap;

    fn params(salary: f64, expenses: &[(ExpenseCategory, f64)]) -> BudgetParameters {
        BudgetParameters::new(salary, expenses.iter().copied().collect::<BTreeMap<_, _>>())
    }

    #[test]
    fn test_surplus() {
        let result = compute_budget(&params(5000.0, &[(ExpenseCategory::Housing, 1000.0), (ExpenseCategory::Food, 500.0)]));
        assert_eq!(result.outcome, BudgetOutcome::Surplus(Money::new(3500.0)));
        assert_eq!(result.total_expenses.amount(), 1500.0);
        match result.outcome {
            BudgetOutcome::Surplus(money) => assert_eq!(money.to_string(), "3.500,00"),
            other => panic!("expected surplus, got {:?}", other),
        }
    }

    #[test]
    fn test_deficit_is_positive_amount() {
        let result = compute_budget(&params(1000.0, &[(ExpenseCategory::Housing, 2000.0)]));
        assert_eq!(result.outcome, BudgetOutcome::Deficit(Money::new(1000.0)));
        match result.outcome {
            BudgetOutcome::Deficit(money) => assert_eq!(money.to_string(), "1.000,00"),
            other => panic!("expected deficit, got {:?}", other),
        }
    }

    #[test]
    fn test_break_even_is_surplus() {
        let result = compute_budget(&params(1000.0, &[(ExpenseCategory::Other, 1000.0)]));
        assert_eq!(result.outcome, BudgetOutcome::Surplus(Money::new(0.0)));
    }

    #[test]
    fn test_no_expenses() {
        let result = compute_budget(&params(2500.0, &[]));
        assert_eq!(result.total_expenses.amount(), 0.0);
        assert_eq!(result.outcome, BudgetOutcome::Surplus(Money::new(2500.0)));
    }
}
