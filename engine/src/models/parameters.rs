// Validated calculator inputs. Constructors are crate-private: the only way
// to obtain these outside the engine is through `crate::validation`.
use shared::models::{CalculatorVariant, ExpenseCategory, RawInputSet};
use std::collections::BTreeMap;

/// Inputs of the monthly-investment calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardParameters {
    monthly_savings: f64,
    initial_investment: f64,
    annual_rate: f64,
    safe_withdrawal_rate: f64,
}

impl ForwardParameters {
    pub(crate) fn new(monthly_savings: f64, initial_investment: f64, annual_rate: f64, safe_withdrawal_rate: f64) -> Self {
        Self { monthly_savings, initial_investment, annual_rate, safe_withdrawal_rate }
    }

    pub fn monthly_savings(&self) -> f64 {
        self.monthly_savings
    }

    pub fn initial_investment(&self) -> f64 {
        self.initial_investment
    }

    /// Percent per year, e.g. 6.0.
    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    /// Percent per year, e.g. 4.0.
    pub fn safe_withdrawal_rate(&self) -> f64 {
        self.safe_withdrawal_rate
    }
}

/// Inputs of the target-income calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct InverseParameters {
    target_income: f64,
    initial_investment: f64,
    annual_rate: f64,
    safe_withdrawal_rate: f64,
}

impl InverseParameters {
    pub(crate) fn new(target_income: f64, initial_investment: f64, annual_rate: f64, safe_withdrawal_rate: f64) -> Self {
        Self { target_income, initial_investment, annual_rate, safe_withdrawal_rate }
    }

    /// Desired passive income per month.
    pub fn target_income(&self) -> f64 {
        self.target_income
    }

    pub fn initial_investment(&self) -> f64 {
        self.initial_investment
    }

    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    pub fn safe_withdrawal_rate(&self) -> f64 {
        self.safe_withdrawal_rate
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetParameters {
    salary: f64,
    expenses: BTreeMap<ExpenseCategory, f64>,
}

impl BudgetParameters {
    pub(crate) fn new(salary: f64, expenses: BTreeMap<ExpenseCategory, f64>) -> Self {
        Self { salary, expenses }
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// 0.0 for categories that were left blank.
    pub fn expense(&self, category: ExpenseCategory) -> f64 {
        self.expenses.get(&category).copied().unwrap_or(0.0)
    }

    pub fn total_expenses(&self) -> f64 {
        self.expenses.values().sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedParameters {
    Forward(ForwardParameters),
    Inverse(InverseParameters),
    Budget(BudgetParameters),
}

impl ValidatedParameters {
    pub fn variant(&self) -> CalculatorVariant {
        match self {
            ValidatedParameters::Forward(_) => CalculatorVariant::MonthlyInvestment,
            ValidatedParameters::Inverse(_) => CalculatorVariant::TargetIncome,
            ValidatedParameters::Budget(_) => CalculatorVariant::Budget,
        }
    }
}

/// Accepted input together with the form values to echo back.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated<P> {
    pub parameters: P,
    pub echo: RawInputSet,
}

impl<P> Validated<P> {
    pub fn map<Q>(self, f: impl FnOnce(P) -> Q) -> Validated<Q> {
        Validated { parameters: f(self.parameters), echo: self.echo }
    }
}
