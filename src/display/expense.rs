//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Expense, Money};
use crate::services::RecordedExpense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Expense")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
}

/// Format expenses as a table
pub fn format_expense_table(expenses: &[Expense], symbol: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        date: e.date.format(date_format).to_string(),
        description: e.description.clone(),
        amount: e.amount.format_with_symbol(symbol),
        category: e.category.clone(),
    });

    let total = expenses.iter().map(|e| e.amount).sum::<Money>();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!(
        "{}\n{} expense(s), total {}",
        table,
        expenses.len(),
        total.format_with_symbol(symbol)
    )
}

/// One-line confirmation after recording an expense
pub fn format_recorded_expense(recorded: &RecordedExpense, symbol: &str) -> String {
    let mut output = format!(
        "Recorded '{}' for {} in {}.",
        recorded.expense.description,
        recorded.expense.amount.format_with_symbol(symbol),
        recorded.expense.category
    );

    if let Some(budget) = &recorded.budget {
        output.push_str(&format!(
            "\n{} budget: {} spent, {} remaining.",
            budget.category,
            budget.current_expenses.format_with_symbol(symbol),
            budget.remaining_budget.format_with_symbol(symbol)
        ));
        if budget.is_overspent() {
            output.push_str("\nWarning: this budget is overspent.");
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Budget;
    use chrono::NaiveDate;

    fn electric_bill() -> Expense {
        Expense::new(
            "Electric bill",
            Money::from_cents(4550),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            "Utilities",
        )
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "£", "%d/%m/%Y"), "No expenses recorded.");
    }

    #[test]
    fn test_table_contents() {
        let output = format_expense_table(&[electric_bill()], "£", "%d/%m/%Y");
        assert!(output.contains("Electric bill"));
        assert!(output.contains("£45.50"));
        assert!(output.contains("01/03/2025"));
        assert!(output.contains("1 expense(s), total £45.50"));
    }

    #[test]
    fn test_recorded_expense_with_overspent_budget() {
        let recorded = RecordedExpense {
            expense: electric_bill(),
            budget: Some(Budget::new("Utilities", Money::from_cents(4000), Money::from_cents(4550))),
        };
        let output = format_recorded_expense(&recorded, "£");
        assert!(output.contains("-£5.50 remaining"));
        assert!(output.contains("overspent"));
    }
}
