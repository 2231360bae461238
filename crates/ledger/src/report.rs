//! Reporting helpers over the expense history.

use std::collections::HashMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tandem_core::ValueObject;
use tandem_expenses::{Category, Expense};

/// Aggregates for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub total_amount: Decimal,
    pub by_category: HashMap<Category, Decimal>,
    pub expense_count: usize,
}

impl ValueObject for MonthlySummary {}

/// Total spent per category over the given expenses.
///
/// Categories with no expenses are absent from the map.
pub fn category_totals(expenses: &[Expense]) -> HashMap<Category, Decimal> {
    let mut totals: HashMap<Category, Decimal> = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.category()).or_insert(Decimal::ZERO) += expense.amount();
    }
    totals
}

/// Aggregate the expenses dated within one calendar month.
pub fn monthly_summary(expenses: &[Expense], year: i32, month: u32) -> MonthlySummary {
    let in_month: Vec<&Expense> = expenses
        .iter()
        .filter(|e| e.date().year() == year && e.date().month() == month)
        .collect();

    let total_amount = in_month.iter().map(|e| e.amount()).sum();
    let mut by_category: HashMap<Category, Decimal> = HashMap::new();
    for expense in &in_month {
        *by_category.entry(expense.category()).or_insert(Decimal::ZERO) += expense.amount();
    }

    MonthlySummary {
        total_amount,
        by_category,
        expense_count: in_month.len(),
    }
}
