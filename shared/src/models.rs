use crate::utils::brazilian_format::format_currency;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Housing,
    Utilities,
    Food,
    Transportation,
    Insurance,
    Healthcare,
    DebtPayments,
    Entertainment,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 9] = [
        ExpenseCategory::Housing,
        ExpenseCategory::Utilities,
        ExpenseCategory::Food,
        ExpenseCategory::Transportation,
        ExpenseCategory::Insurance,
        ExpenseCategory::Healthcare,
        ExpenseCategory::DebtPayments,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Other,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "housing",
            ExpenseCategory::Utilities => "utilities",
            ExpenseCategory::Food => "food",
            ExpenseCategory::Transportation => "transportation",
            ExpenseCategory::Insurance => "insurance",
            ExpenseCategory::Healthcare => "healthcare",
            ExpenseCategory::DebtPayments => "debt_payments",
            ExpenseCategory::Entertainment => "entertainment",
            ExpenseCategory::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Insurance => "Insurance",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::DebtPayments => "Debt Payments",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Other => "Other Expenses",
        }
    }
}

/// A named form field of one of the calculators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    MonthlySavings,
    InitialInvestment,
    AnnualRate,
    SafeWithdrawalRate,
    TargetIncome,
    Salary,
    Expense(ExpenseCategory),
}

impl Field {
    /// Form key as submitted by the caller.
    pub fn key(self) -> &'static str {
        match self {
            Field::MonthlySavings => "monthly_savings",
            Field::InitialInvestment => "initial_investment",
            Field::AnnualRate => "annual_rate",
            Field::SafeWithdrawalRate => "safe_withdrawal_rate",
            Field::TargetIncome => "target_income",
            Field::Salary => "salary",
            Field::Expense(category) => category.key(),
        }
    }

    /// Human-readable name used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::MonthlySavings => "Monthly Savings",
            Field::InitialInvestment => "Initial Investment",
            Field::AnnualRate => "Annual Return Rate",
            Field::SafeWithdrawalRate => "Safe Withdrawal Rate",
            Field::TargetIncome => "Target Future Monthly Retirement Passive Income",
            Field::Salary => "Salary",
            Field::Expense(category) => category.label(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorVariant {
    /// User sets the monthly investment; projects future value and income.
    MonthlyInvestment,
    /// User sets the target monthly income; solves for the monthly investment.
    TargetIncome,
    Budget,
}

impl CalculatorVariant {
    pub fn fields(self) -> Vec<Field> {
        match self {
            CalculatorVariant::MonthlyInvestment => vec![
                Field::MonthlySavings,
                Field::InitialInvestment,
                Field::AnnualRate,
                Field::SafeWithdrawalRate,
            ],
            CalculatorVariant::TargetIncome => vec![
                Field::TargetIncome,
                Field::InitialInvestment,
                Field::AnnualRate,
                Field::SafeWithdrawalRate,
            ],
            CalculatorVariant::Budget => std::iter::once(Field::Salary)
                .chain(ExpenseCategory::ALL.iter().map(|c| Field::Expense(*c)))
                .collect(),
        }
    }

    /// Value shown back in the form when the field was submitted empty.
    pub fn display_default(self, field: Field) -> Option<&'static str> {
        match (self, field) {
            (CalculatorVariant::Budget, _) => None,
            (_, Field::MonthlySavings) => Some("3.000,00"),
            (_, Field::InitialInvestment) => Some("10.000,00"),
            (_, Field::AnnualRate) => Some("6,00"),
            (_, Field::SafeWithdrawalRate) => Some("4,00"),
            (_, Field::TargetIncome) => Some("7.000,00"),
            _ => None,
        }
    }
}

/// Raw form strings as submitted, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputSet {
    fields: BTreeMap<String, String>,
}

impl RawInputSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Trimmed value of `field`; a missing key reads as "".
    pub fn get(&self, field: Field) -> &str {
        self.fields.get(field.key()).map(|v| v.trim()).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The strings to echo back for re-display: every field of `variant`,
    /// trimmed, with empty values replaced by the variant's display default.
    pub fn normalized(&self, variant: CalculatorVariant) -> RawInputSet {
        let mut echo = RawInputSet::new();
        for field in variant.fields() {
            let value = self.get(field);
            let shown = match variant.display_default(field) {
                Some(default) if value.is_empty() => default,
                _ => value,
            };
            echo.insert(field.key(), shown);
        }
        echo
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawInputSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = RawInputSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

/// A monetary amount. The localized rendering is derived from the amount on demand.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Money {
    amount: f64,
}

impl Money {
    pub fn new(amount: f64) -> Self {
        Money { amount }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn formatted(&self) -> String {
        format_currency(self.amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Money", 2)?;
        state.serialize_field("amount", &self.amount)?;
        state.serialize_field("formatted", &self.formatted())?;
        state.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FutureValueRow {
    pub years: u32,
    pub future_value: Money,
    pub monthly_income: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "amount", rename_all = "snake_case")]
pub enum RequiredContribution {
    Contribution(Money),
    /// The initial investment alone already reaches the target.
    AlreadyMet,
}

impl RequiredContribution {
    pub const ALREADY_MET_MESSAGE: &'static str = "Already retired! (No additional investment needed)";
}

impl fmt::Display for RequiredContribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredContribution::Contribution(money) => money.fmt(f),
            RequiredContribution::AlreadyMet => f.write_str(Self::ALREADY_MET_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RequiredContributionRow {
    pub years: u32,
    pub required_investment: RequiredContribution,
}

/// One row per configured duration, ascending by years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult<R> {
    pub rows: Vec<R>,
}

impl<R> ProjectionResult<R> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }
}

impl<R> IntoIterator for ProjectionResult<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "amount", rename_all = "snake_case")]
pub enum BudgetOutcome {
    Surplus(Money),
    /// Holds the shortfall as a positive amount.
    Deficit(Money),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetResult {
    pub salary: Money,
    pub total_expenses: Money,
    pub outcome: BudgetOutcome,
}
